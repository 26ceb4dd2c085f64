//! Interactive play command
//!
//! Console game loop: the program asks, a human answers over stdin.

use crate::core::Dataset;
use crate::output::print_outcome;
use crate::solver::{AnswerSource, GameSession, Query, SessionConfig, is_affirmative};
use colored::Colorize;
use std::io::{self, Write};

/// Answer source backed by stdin/stdout
///
/// Prints each prompt and reads one trimmed line in response.
struct ConsoleSource;

impl AnswerSource for ConsoleSource {
    fn ask(&mut self, query: Query<'_>) -> io::Result<String> {
        print!("{} ", query.prompt());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

/// Run the interactive console game
///
/// Plays sessions against the same dataset until the player declines to go
/// again. Each session rebuilds its tree from the untouched table.
///
/// # Errors
///
/// Returns an error if the dataset has no objects or an I/O error interrupts
/// an exchange.
pub fn run_play(dataset: &Dataset, budget: usize) -> Result<(), String> {
    println!("\n{}", "═".repeat(62).cyan());
    println!("  Twenty Questions: think of an object, I'll guess it");
    println!("{}\n", "═".repeat(62).cyan());
    println!(
        "Dataset: {} objects, {} features. I get {budget} questions and guesses in total.",
        dataset.object_count(),
        dataset.features().len()
    );

    loop {
        println!("\nThink of an object within the dataset, and I'll try to guess it!\n");

        let session = GameSession::new(dataset, SessionConfig::new(budget))
            .map_err(|e| e.to_string())?;
        let outcome = session.play(&mut ConsoleSource).map_err(|e| e.to_string())?;

        print_outcome(&outcome, budget);

        if !is_affirmative(&get_user_input("Play again? (yes/no)")?) {
            println!("\nThanks for playing!\n");
            return Ok(());
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
