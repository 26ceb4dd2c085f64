//! Shannon entropy scoring for binary splits
//!
//! Scores how evenly a feature divides a candidate object set. This drives
//! feature selection during tree construction.

use crate::core::Dataset;

/// Two-outcome Shannon entropy of a yes/no split
///
/// Returns 0 when the split is empty or one-sided, 1.0 for a perfectly even
/// split, and is symmetric in its arguments.
///
/// # Formula
/// H = -p·log₂(p) - (1-p)·log₂(1-p) with p = yes / (yes + no)
///
/// # Examples
/// ```
/// use twenty_questions::solver::entropy::entropy;
///
/// assert!((entropy(2, 2) - 1.0).abs() < f64::EPSILON);
/// assert!((entropy(0, 7) - 0.0).abs() < f64::EPSILON);
/// assert!(entropy(3, 1) < 1.0);
/// ```
#[must_use]
pub fn entropy(yes_count: usize, no_count: usize) -> f64 {
    let total = yes_count + no_count;
    if total == 0 || yes_count == 0 || no_count == 0 {
        return 0.0;
    }

    let p_yes = yes_count as f64 / total as f64;
    let p_no = no_count as f64 / total as f64;
    -p_yes * p_yes.log2() - p_no * p_no.log2()
}

/// Count how a feature splits a candidate set
///
/// Returns `(yes_count, no_count)` over the given objects.
#[must_use]
pub fn split_counts(dataset: &Dataset, objects: &[String], feature: &str) -> (usize, usize) {
    let yes = objects
        .iter()
        .filter(|object| dataset.has_feature(object, feature))
        .count();
    (yes, objects.len() - yes)
}

/// Split-balance score of a feature over a candidate set
///
/// The score of a feature is the entropy of the yes/no split *sizes* it
/// induces. Each branch is treated as internally homogeneous, so no branch
/// impurity term is subtracted: the criterion rewards balanced splits, not
/// canonical information gain. Tree shapes and tie-breaks are pinned to this
/// rule; swapping in textbook information gain changes both.
///
/// Bounded in `[0, 1]`, maximal for an even split, zero for a one-sided one.
#[must_use]
pub fn split_balance(dataset: &Dataset, objects: &[String], feature: &str) -> f64 {
    let (yes, no) = split_counts(dataset, objects, feature);
    entropy(yes, no)
}

/// Select the feature with the highest split-balance score
///
/// Ties are broken by earliest position in the given feature slice, which
/// callers keep in original declaration order. Returns `None` when the
/// feature slice is empty.
#[must_use]
pub fn select_feature<'a>(
    dataset: &Dataset,
    objects: &[String],
    features: &'a [String],
) -> Option<(&'a str, f64)> {
    let mut best: Option<(&'a str, f64)> = None;

    for feature in features {
        let score = split_balance(dataset, objects, feature);
        // Strict comparison keeps the earliest feature on ties.
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((feature.as_str(), score)),
        }
    }

    best
}
