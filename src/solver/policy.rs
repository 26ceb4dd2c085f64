//! Guess-or-ask policy
//!
//! Decides, before every step of a game, whether to keep traversing the
//! decision tree or drop to enumerating the remaining candidates directly.

use super::entropy::split_counts;
use crate::core::Dataset;

/// Whether to abandon tree questions in favor of direct guessing
///
/// Rules, in order, first match wins:
/// 1. One candidate left: guess it.
/// 2. No features left to split on: nothing else to ask.
/// 3. The budget cannot cover the information-theoretic minimum of
///    log₂(candidates) further questions even in the best case.
/// 4. The best remaining question (by the larger of its smaller split sides)
///    eliminates less than half the candidates, and the budget is large
///    enough to simply enumerate them one by one.
/// 5. Otherwise keep asking tree questions.
#[must_use]
pub fn should_guess(
    dataset: &Dataset,
    remaining_objects: &[String],
    remaining_features: &[String],
    questions_left: usize,
) -> bool {
    if remaining_objects.len() == 1 {
        return true;
    }

    if remaining_features.is_empty() {
        return true;
    }

    if (questions_left as f64) < (remaining_objects.len() as f64).log2() {
        return true;
    }

    let best_split = remaining_features
        .iter()
        .map(|feature| {
            let (yes, no) = split_counts(dataset, remaining_objects, feature);
            yes.min(no)
        })
        .max()
        .unwrap_or(0);

    if best_split as f64 > remaining_objects.len() as f64 / 2.0
        && remaining_objects.len() <= questions_left
    {
        return true;
    }

    false
}
