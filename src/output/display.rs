//! Display functions for game and command results

use super::formatters::score_bar;
use crate::commands::{AnalysisResult, BenchmarkResult, SimulateResult};
use crate::solver::GameOutcome;
use colored::Colorize;

/// Print the closing line(s) for a finished game
pub fn print_outcome(outcome: &GameOutcome, budget: usize) {
    match outcome {
        GameOutcome::Identified { .. } => {
            println!("\n{}", "I guessed it!".bright_green().bold());
        }
        GameOutcome::WrongSingleGuess { .. } => {
            println!(
                "\n{}",
                "I couldn't guess your object correctly.".yellow()
            );
            if outcome.interactions() >= budget {
                println!("I've reached my limit of {budget} questions!");
            }
        }
        GameOutcome::CandidatesExhausted { .. } => {
            println!(
                "\n{}",
                format!("I couldn't guess your object within {budget} questions.").yellow()
            );
        }
        GameOutcome::GuessBudgetExhausted { .. } => {
            println!(
                "\n{}",
                format!("I've reached my limit of {budget} questions!").yellow()
            );
        }
        GameOutcome::QuestionBudgetExhausted { .. } => {
            println!(
                "\n{}",
                format!(
                    "I've reached my limit of {budget} questions and couldn't guess your object!"
                )
                .yellow()
            );
        }
    }
}

/// Print a simulated game's transcript and outcome
pub fn print_simulate_result(result: &SimulateResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Simulating: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for (i, step) in result.steps.iter().enumerate() {
            let answer = if step.answer == "yes" {
                step.answer.green()
            } else {
                step.answer.red()
            };
            println!("  {}. {} {answer}", i + 1, step.prompt);
        }
        println!();
    }

    let interactions = result.outcome.interactions();
    if result.outcome.is_success() {
        println!(
            "{} in {} of {} interactions",
            "Identified".bright_green().bold(),
            interactions,
            result.budget
        );
    } else {
        println!(
            "{} after {} of {} interactions",
            "Not identified".red().bold(),
            interactions,
            result.budget
        );
    }
}

/// Print per-feature split scores and tree shape statistics
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Dataset: {} objects, {} features",
        result.object_count, result.feature_count
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n{}", "Feature split balance".bright_cyan().bold());
    for score in &result.scores {
        println!(
            "  {:<28} {} {:.3}  ({} yes / {} no)",
            score.feature,
            score_bar(score.score, 20),
            score.score,
            score.yes_count,
            score.no_count
        );
    }

    println!("\n{}", "Decision tree".bright_cyan().bold());
    println!("  Depth:        {}", result.tree_depth);
    println!("  Nodes:        {}", result.tree_nodes);
    println!("  Leaves:       {}", result.leaf_count);
    if result.largest_leaf > 1 {
        println!(
            "  Largest leaf: {} {}",
            result.largest_leaf,
            "(some objects are indistinguishable)".yellow()
        );
    } else {
        println!("  Largest leaf: {}", result.largest_leaf);
    }
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult, budget: usize) {
    println!("\n{}", "═".repeat(60));
    println!(" Benchmark Results ");
    println!("{}", "═".repeat(60));

    println!("\n{}", "Overall".bright_cyan().bold());
    println!("  Games played:        {}", result.total_games);
    println!(
        "  Identified:          {} {}",
        result.solved,
        format!(
            "({:.1}%)",
            result.solved as f64 / result.total_games as f64 * 100.0
        )
        .green()
    );
    if result.failed > 0 {
        println!(
            "  Failed:              {} {}",
            result.failed,
            format!(
                "({:.1}%)",
                result.failed as f64 / result.total_games as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average interactions: {}",
        format!("{:.2}", result.average_interactions)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Range:               {}–{} (budget {budget})",
        result.min_interactions, result.max_interactions
    );
    println!(
        "  Throughput:          {:.0} games/s ({:.2}s total)",
        result.games_per_second,
        result.duration.as_secs_f64()
    );

    println!("\n{}", "Interaction distribution".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for interactions in 1..=result.max_interactions {
        if let Some(&count) = result.distribution.get(&interactions) {
            let bar_len = (count * 30 / max_count).max(1);
            println!(
                "  {interactions:>2} interactions: {} {count}",
                "█".repeat(bar_len).green()
            );
        }
    }

    if !result.hardest.is_empty() {
        println!("\n{}", "Hardest targets".bright_cyan().bold());
        for (target, interactions) in &result.hardest {
            println!("  {target} ({interactions} interactions)");
        }
    }

    if !result.failed_objects.is_empty() {
        println!("\n{}", "Not identified".red().bold());
        for target in &result.failed_objects {
            println!("  {target}");
        }
    }
}
