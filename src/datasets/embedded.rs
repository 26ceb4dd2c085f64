//! Embedded object tables
//!
//! Default datasets compiled into the binary so the game runs with no files
//! on disk.

/// Default game table: 18 animals over 12 binary features
pub const ANIMALS: &str = include_str!("../../data/animals.csv");

/// Number of objects in [`ANIMALS`]
pub const ANIMAL_COUNT: usize = 18;

/// Tiny demonstration table: 4 fruits over 3 binary features
///
/// Small enough to trace by hand; used throughout docs and tests.
pub const FRUITS: &str = include_str!("../../data/fruits.csv");

/// Number of objects in [`FRUITS`]
pub const FRUIT_COUNT: usize = 4;
