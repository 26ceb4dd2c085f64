//! Dataset analysis command
//!
//! Reports how each feature divides the full object set and the shape of the
//! tree that would be built for a game.

use crate::core::Dataset;
use crate::solver::build_full_tree;
use crate::solver::entropy::{split_balance, split_counts};

/// Split statistics for one feature
pub struct FeatureScore {
    pub feature: String,
    pub yes_count: usize,
    pub no_count: usize,
    pub score: f64,
}

/// Result of analyzing a dataset
pub struct AnalysisResult {
    pub object_count: usize,
    pub feature_count: usize,
    /// Per-feature scores in declaration order
    pub scores: Vec<FeatureScore>,
    pub tree_depth: usize,
    pub tree_nodes: usize,
    pub leaf_count: usize,
    pub largest_leaf: usize,
}

/// Analyze feature quality and tree shape for a dataset
///
/// # Errors
/// Returns an error for a dataset with no objects.
pub fn analyze_dataset(dataset: &Dataset) -> Result<AnalysisResult, String> {
    let Some(tree) = build_full_tree(dataset) else {
        return Err("Dataset has no objects to analyze".to_string());
    };

    let objects = dataset.sorted_object_names();

    let scores = dataset
        .features()
        .iter()
        .map(|feature| {
            let (yes_count, no_count) = split_counts(dataset, &objects, feature);
            FeatureScore {
                feature: feature.clone(),
                yes_count,
                no_count,
                score: split_balance(dataset, &objects, feature),
            }
        })
        .collect();

    let leaves = tree.leaves();

    Ok(AnalysisResult {
        object_count: dataset.object_count(),
        feature_count: dataset.features().len(),
        scores,
        tree_depth: tree.depth(),
        tree_nodes: tree.node_count(),
        leaf_count: leaves.len(),
        largest_leaf: leaves.iter().map(|leaf| leaf.len()).max().unwrap_or(0),
    })
}
