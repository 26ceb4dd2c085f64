//! Core domain types
//!
//! The object/feature table and the decision tree nodes built over it.
//! Everything here is pure data with no I/O.

mod dataset;
mod tree;

pub use dataset::{Dataset, DatasetError};
pub use tree::TreeNode;
