//! Object tables for the guessing game
//!
//! Embedded default tables plus a file loader.

mod embedded;
pub mod loader;

pub use embedded::{ANIMAL_COUNT, ANIMALS, FRUIT_COUNT, FRUITS};
