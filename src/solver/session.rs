//! Interactive game session
//!
//! Drives one play-through: walks the decision tree, asks an answer source
//! yes/no questions, and switches to direct guessing when the policy says to.
//! The tree is built once per session over the full table and is never
//! re-planned; a policy override drops to linear enumeration of whatever
//! candidates are in scope at that moment.

use super::builder::build_full_tree;
use super::policy::should_guess;
use crate::core::{Dataset, TreeNode};
use std::fmt;
use std::io;

/// Default number of question/guess interactions allowed per game
pub const DEFAULT_BUDGET: usize = 20;

/// Per-session configuration
///
/// The budget counts every interaction, questions and guesses alike, and
/// is injectable so tests can exercise tiny budgets.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub budget: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(budget: usize) -> Self {
        Self { budget }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET)
    }
}

/// One exchange with the answer source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// Ask whether the hidden object has a feature
    Feature(&'a str),
    /// Ask whether the hidden object is a specific one
    Guess(&'a str),
}

impl Query<'_> {
    /// The prompt text presented for this query
    ///
    /// # Examples
    /// ```
    /// use twenty_questions::solver::Query;
    ///
    /// assert_eq!(Query::Feature("red").prompt(), "red? (yes/no)");
    /// assert_eq!(Query::Guess("apple").prompt(), "Is it a apple? (yes/no)");
    /// ```
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::Feature(feature) => format!("{feature}? (yes/no)"),
            Self::Guess(object) => format!("Is it a {object}? (yes/no)"),
        }
    }
}

/// Source of answers to queries
///
/// Each call is one blocking request/response exchange. The console
/// implementation lives with the play command; simulations answer from the
/// dataset itself.
pub trait AnswerSource {
    /// Present a query and return the raw response text
    ///
    /// # Errors
    /// Returns an I/O error when the underlying exchange fails.
    fn ask(&mut self, query: Query<'_>) -> io::Result<String>;
}

/// Whether a response counts as "yes"
///
/// Only a case-insensitive exact `yes` is affirmative; anything else,
/// including empty or malformed input, reads as negative.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

/// How a finished game ended
///
/// Budget exhaustion and a wrong guess are expected terminal results, not
/// faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// A guess was answered affirmatively
    Identified { object: String, interactions: usize },
    /// The only possible guess was rejected; no further guessing happens
    WrongSingleGuess { object: String, interactions: usize },
    /// Every candidate was guessed and none accepted
    CandidatesExhausted { interactions: usize },
    /// The budget ran out between guesses
    GuessBudgetExhausted { interactions: usize },
    /// The budget ran out while still traversing the tree
    QuestionBudgetExhausted { interactions: usize },
}

impl GameOutcome {
    /// Whether the hidden object was identified
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Identified { .. })
    }

    /// Interactions consumed by the game
    #[must_use]
    pub const fn interactions(&self) -> usize {
        match self {
            Self::Identified { interactions, .. }
            | Self::WrongSingleGuess { interactions, .. }
            | Self::CandidatesExhausted { interactions }
            | Self::GuessBudgetExhausted { interactions }
            | Self::QuestionBudgetExhausted { interactions } => *interactions,
        }
    }
}

/// Error type for session setup and play
#[derive(Debug)]
pub enum SessionError {
    /// The dataset has no objects; there is nothing to play
    EmptyDataset,
    /// The answer source failed mid-exchange
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => write!(f, "dataset has no objects to play with"),
            Self::Io(err) => write!(f, "answer source failed: {err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// One play-through of the guessing game
///
/// Owns the decision tree built from the dataset at construction time. The
/// dataset itself is borrowed and immutable; a fresh session rebuilds its
/// tree from the untouched table.
pub struct GameSession<'a> {
    dataset: &'a Dataset,
    tree: Option<TreeNode>,
    budget: usize,
}

impl<'a> GameSession<'a> {
    /// Create a session and build its tree
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyDataset`] for a table with zero objects;
    /// an empty game is rejected before play rather than silently produced.
    pub fn new(dataset: &'a Dataset, config: SessionConfig) -> Result<Self, SessionError> {
        if dataset.is_empty() {
            return Err(SessionError::EmptyDataset);
        }

        Ok(Self {
            dataset,
            tree: build_full_tree(dataset),
            budget: config.budget,
        })
    }

    /// The interaction budget for this session
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// The decision tree built for this session
    #[must_use]
    pub const fn tree(&self) -> Option<&TreeNode> {
        self.tree.as_ref()
    }

    /// Play one game against the given answer source
    ///
    /// Walks the tree from the root. At each step the session either asks the
    /// current node's feature question or, at a leaf or on a policy override,
    /// guesses candidates directly. Every exchange consumes one unit of
    /// budget regardless of the answer.
    ///
    /// # Errors
    /// Returns an error only when the answer source itself fails; every game
    /// shape ends in a [`GameOutcome`].
    pub fn play<A: AnswerSource>(&self, answers: &mut A) -> Result<GameOutcome, SessionError> {
        let mut asked = 0usize;
        let mut remaining = self.dataset.sorted_object_names();
        let mut features: Vec<String> = self.dataset.features().to_vec();
        let mut node: Option<&TreeNode> = self.tree.as_ref();

        while asked < self.budget {
            match node {
                Some(TreeNode::Question { feature, yes, no })
                    if !should_guess(self.dataset, &remaining, &features, self.budget - asked) =>
                {
                    let reply = answers.ask(Query::Feature(feature))?;
                    asked += 1;

                    let affirmative = is_affirmative(&reply);
                    features.retain(|f| f != feature);
                    remaining.retain(|object| {
                        self.dataset.has_feature(object, feature) == affirmative
                    });
                    node = if affirmative {
                        yes.as_deref()
                    } else {
                        no.as_deref()
                    };
                }
                current => {
                    // Guess phase: the leaf's stored list, or the sorted
                    // remaining candidates when the tree has nothing here.
                    let names = match current {
                        Some(TreeNode::Leaf { objects }) => objects.clone(),
                        _ => remaining.clone(),
                    };
                    return self.guess(&names, asked, answers);
                }
            }
        }

        Ok(GameOutcome::QuestionBudgetExhausted {
            interactions: asked,
        })
    }

    /// Enumerate candidate guesses until a yes, the list ends, or the budget does
    fn guess<A: AnswerSource>(
        &self,
        names: &[String],
        mut asked: usize,
        answers: &mut A,
    ) -> Result<GameOutcome, SessionError> {
        // A lone candidate is a single committed guess: a no ends the game
        // even with budget to spare.
        if let [name] = names {
            let reply = answers.ask(Query::Guess(name))?;
            asked += 1;

            return Ok(if is_affirmative(&reply) {
                GameOutcome::Identified {
                    object: name.clone(),
                    interactions: asked,
                }
            } else {
                GameOutcome::WrongSingleGuess {
                    object: name.clone(),
                    interactions: asked,
                }
            });
        }

        for name in names {
            if asked >= self.budget {
                return Ok(GameOutcome::GuessBudgetExhausted {
                    interactions: asked,
                });
            }

            let reply = answers.ask(Query::Guess(name))?;
            asked += 1;

            if is_affirmative(&reply) {
                return Ok(GameOutcome::Identified {
                    object: name.clone(),
                    interactions: asked,
                });
            }
        }

        Ok(GameOutcome::CandidatesExhausted {
            interactions: asked,
        })
    }
}
