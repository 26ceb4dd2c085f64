//! Twenty Questions - CLI
//!
//! Interactive 20-questions object guesser with simulation, analysis and
//! benchmark modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use twenty_questions::{
    commands::{SimulateConfig, analyze_dataset, run_benchmark, run_play, simulate_game},
    core::Dataset,
    datasets::loader::load_named,
    output::{print_analysis_result, print_benchmark_result, print_simulate_result},
    solver::DEFAULT_BUDGET,
};

#[derive(Parser)]
#[command(
    name = "twenty_questions",
    about = "20-questions object guesser using entropy-driven decision trees",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dataset: 'animals' (default), 'fruits', or path to a table file
    #[arg(short = 'd', long, global = true, default_value = "animals")]
    dataset: String,

    /// Maximum question/guess interactions per game
    #[arg(short = 'b', long, global = true, default_value_t = DEFAULT_BUDGET)]
    budget: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default): think of an object, the program guesses
    Play,

    /// Play a full game automatically for a known target object
    Simulate {
        /// The target object to identify
        object: String,

        /// Show the full question/guess transcript
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show per-feature split scores and tree shape for the dataset
    Analyze,

    /// Play every object as the hidden target and report statistics
    Benchmark {
        /// Limit the run to this many randomly sampled targets
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dataset = load_named(&cli.dataset)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&dataset, cli.budget).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { object, verbose } => {
            run_simulate_command(&dataset, object, verbose, cli.budget)
        }
        Commands::Analyze => run_analyze_command(&dataset),
        Commands::Benchmark { count } => run_benchmark_command(&dataset, cli.budget, count),
    }
}

fn run_simulate_command(
    dataset: &Dataset,
    object: String,
    verbose: bool,
    budget: usize,
) -> Result<()> {
    let config = SimulateConfig::new(object, budget);
    let result = simulate_game(dataset, &config).map_err(|e| anyhow::anyhow!(e))?;

    print_simulate_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(dataset: &Dataset) -> Result<()> {
    let result = analyze_dataset(dataset).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(dataset: &Dataset, budget: usize, count: Option<usize>) -> Result<()> {
    if let Some(count) = count {
        println!("Benchmarking {count} random targets...");
    } else {
        println!("Benchmarking all {} targets...", dataset.object_count());
    }

    let result = run_benchmark(dataset, budget, count).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result, budget);
    Ok(())
}
