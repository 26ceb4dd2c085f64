//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, FeatureScore, analyze_dataset};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::run_play;
pub use simulate::{OracleSource, SimulateConfig, SimulateResult, SimulateStep, simulate_game};
