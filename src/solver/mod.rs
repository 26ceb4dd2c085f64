//! Guessing algorithms
//!
//! Entropy scoring, decision tree construction, the guess-or-ask policy, and
//! the interactive session that ties them together.

pub mod builder;
pub mod entropy;
pub mod policy;
pub mod session;

pub use builder::{build_full_tree, build_tree};
pub use policy::should_guess;
pub use session::{
    AnswerSource, DEFAULT_BUDGET, GameOutcome, GameSession, Query, SessionConfig, SessionError,
    is_affirmative,
};
