//! Benchmark command
//!
//! Plays every object (or a random sample) as the hidden target and collects
//! outcome statistics. Games are independent, so they run in parallel.

use super::simulate::OracleSource;
use crate::core::Dataset;
use crate::solver::{GameOutcome, GameSession, SessionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_interactions: f64,
    pub min_interactions: usize,
    pub max_interactions: usize,
    /// Interactions-to-success histogram
    pub distribution: HashMap<usize, usize>,
    /// Solved targets that needed the most interactions
    pub hardest: Vec<(String, usize)>,
    /// Targets the session failed to identify
    pub failed_objects: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run a benchmark over the dataset
///
/// Every object is played once as the hidden target against a truthful
/// oracle. `sample` limits the run to that many randomly chosen targets.
///
/// # Errors
/// Returns an error for a dataset with no objects.
pub fn run_benchmark(
    dataset: &Dataset,
    budget: usize,
    sample: Option<usize>,
) -> Result<BenchmarkResult, String> {
    let session =
        GameSession::new(dataset, SessionConfig::new(budget)).map_err(|e| e.to_string())?;

    let mut targets = dataset.sorted_object_names();
    if let Some(count) = sample {
        if count < targets.len() {
            targets = targets
                .choose_multiple(&mut rand::rng(), count)
                .cloned()
                .collect();
            targets.sort_unstable();
        }
    }

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let played: Result<Vec<(String, GameOutcome)>, String> = targets
        .par_iter()
        .map(|target| {
            let mut oracle = OracleSource::new(dataset, target);
            let outcome = session.play(&mut oracle).map_err(|e| e.to_string())?;
            pb.inc(1);
            Ok((target.clone(), outcome))
        })
        .collect();
    let played = played?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    Ok(summarize(played, duration))
}

fn summarize(played: Vec<(String, GameOutcome)>, duration: Duration) -> BenchmarkResult {
    let total_games = played.len();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved_runs: Vec<(String, usize)> = Vec::new();
    let mut failed_objects: Vec<String> = Vec::new();

    for (target, outcome) in played {
        if outcome.is_success() {
            *distribution.entry(outcome.interactions()).or_insert(0) += 1;
            solved_runs.push((target, outcome.interactions()));
        } else {
            failed_objects.push(target);
        }
    }

    let solved = solved_runs.len();
    let total_interactions: usize = solved_runs.iter().map(|(_, n)| n).sum();
    let average_interactions = if solved > 0 {
        total_interactions as f64 / solved as f64
    } else {
        0.0
    };
    let min_interactions = solved_runs.iter().map(|(_, n)| *n).min().unwrap_or(0);
    let max_interactions = solved_runs.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut hardest = solved_runs;
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(5);

    BenchmarkResult {
        total_games,
        solved,
        failed: total_games - solved,
        average_interactions,
        min_interactions,
        max_interactions,
        distribution,
        hardest,
        failed_objects,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}
