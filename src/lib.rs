//! Twenty Questions
//!
//! An object-guessing game driven by information theory: a decision tree is
//! built over a table of binary features, and an adaptive policy decides at
//! every step whether to keep asking tree questions or to start guessing
//! candidates outright, all within a fixed interaction budget.
//!
//! # Quick Start
//!
//! ```rust
//! use twenty_questions::core::Dataset;
//! use twenty_questions::datasets::FRUITS;
//! use twenty_questions::solver::{GameSession, SessionConfig};
//!
//! let dataset = Dataset::parse(FRUITS).unwrap();
//! let session = GameSession::new(&dataset, SessionConfig::default()).unwrap();
//! assert_eq!(session.budget(), 20);
//! ```

// Core domain types
pub mod core;

// Guessing algorithms and the game session
pub mod solver;

// Embedded object tables and file loading
pub mod datasets;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
