//! Game simulation command
//!
//! Plays a full game automatically: a truthful oracle answers every question
//! and guess for a chosen target object, and the exchange is recorded.

use crate::core::Dataset;
use crate::solver::{AnswerSource, GameOutcome, GameSession, Query, SessionConfig};
use std::io;

/// Configuration for simulating a game
pub struct SimulateConfig {
    pub target: String,
    pub budget: usize,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(target: String, budget: usize) -> Self {
        Self { target, budget }
    }
}

/// One recorded exchange in a simulated game
#[derive(Debug, Clone)]
pub struct SimulateStep {
    pub prompt: String,
    pub answer: String,
}

/// Result of a simulated game
pub struct SimulateResult {
    pub target: String,
    pub outcome: GameOutcome,
    pub steps: Vec<SimulateStep>,
    pub budget: usize,
}

/// Answers queries truthfully for a known target object
///
/// Feature questions are answered from the dataset row of the target; a
/// guess is affirmed only for the target itself. Every exchange is logged.
pub struct OracleSource<'a> {
    dataset: &'a Dataset,
    target: &'a str,
    pub log: Vec<SimulateStep>,
}

impl<'a> OracleSource<'a> {
    #[must_use]
    pub const fn new(dataset: &'a Dataset, target: &'a str) -> Self {
        Self {
            dataset,
            target,
            log: Vec::new(),
        }
    }
}

impl AnswerSource for OracleSource<'_> {
    fn ask(&mut self, query: Query<'_>) -> io::Result<String> {
        let affirmative = match query {
            Query::Feature(feature) => self.dataset.has_feature(self.target, feature),
            Query::Guess(object) => object == self.target,
        };
        let answer = if affirmative { "yes" } else { "no" };

        self.log.push(SimulateStep {
            prompt: query.prompt(),
            answer: answer.to_string(),
        });

        Ok(answer.to_string())
    }
}

/// Simulate one full game for a target object
///
/// # Errors
/// Returns an error if the target is not in the dataset or the dataset has
/// no objects.
pub fn simulate_game(
    dataset: &Dataset,
    config: &SimulateConfig,
) -> Result<SimulateResult, String> {
    if !dataset.contains_object(&config.target) {
        return Err(format!("Object '{}' is not in the dataset", config.target));
    }

    let session =
        GameSession::new(dataset, SessionConfig::new(config.budget)).map_err(|e| e.to_string())?;

    let mut oracle = OracleSource::new(dataset, &config.target);
    let outcome = session.play(&mut oracle).map_err(|e| e.to_string())?;

    Ok(SimulateResult {
        target: config.target.clone(),
        outcome,
        steps: oracle.log,
        budget: config.budget,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::FRUITS;
    use crate::solver::{DEFAULT_BUDGET, is_affirmative};

    fn fruits() -> Dataset {
        Dataset::parse(FRUITS).unwrap()
    }

    #[test]
    fn simulate_identifies_every_fruit() {
        let dataset = fruits();

        for target in dataset.sorted_object_names() {
            let config = SimulateConfig::new(target.clone(), DEFAULT_BUDGET);
            let result = simulate_game(&dataset, &config).unwrap();

            assert!(result.outcome.is_success(), "failed to identify {target}");
            assert!(result.outcome.interactions() <= DEFAULT_BUDGET);
        }
    }

    #[test]
    fn simulate_records_every_exchange() {
        let dataset = fruits();
        let config = SimulateConfig::new("lemon".to_string(), DEFAULT_BUDGET);

        let result = simulate_game(&dataset, &config).unwrap();

        assert_eq!(result.steps.len(), result.outcome.interactions());
        // lemon is not red, so the first recorded answer is a no
        assert_eq!(result.steps[0].prompt, "red? (yes/no)");
        assert_eq!(result.steps[0].answer, "no");
        // the last exchange is the accepted guess
        assert_eq!(
            result.steps.last().unwrap().prompt,
            "Is it a lemon? (yes/no)"
        );
        assert_eq!(result.steps.last().unwrap().answer, "yes");
    }

    #[test]
    fn simulate_unknown_target_is_an_error() {
        let dataset = fruits();
        let config = SimulateConfig::new("durian".to_string(), DEFAULT_BUDGET);

        assert!(simulate_game(&dataset, &config).is_err());
    }

    #[test]
    fn simulate_with_starved_budget_fails_cleanly() {
        let dataset = fruits();
        let config = SimulateConfig::new("tomato".to_string(), 1);

        let result = simulate_game(&dataset, &config).unwrap();

        assert!(!result.outcome.is_success());
        assert!(result.outcome.interactions() <= 1);
    }

    #[test]
    fn oracle_affirms_only_the_target() {
        let dataset = fruits();
        let mut oracle = OracleSource::new(&dataset, "apple");

        assert!(is_affirmative(
            &oracle.ask(Query::Guess("apple")).unwrap()
        ));
        assert!(!is_affirmative(
            &oracle.ask(Query::Guess("banana")).unwrap()
        ));
        assert!(is_affirmative(
            &oracle.ask(Query::Feature("red")).unwrap()
        ));
        assert!(!is_affirmative(
            &oracle.ask(Query::Feature("spiky")).unwrap()
        ));
        assert_eq!(oracle.log.len(), 4);
    }
}
