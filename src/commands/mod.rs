//! Command implementations

pub mod evaluate;
pub mod simple;
pub mod simulate;
pub mod summary;

pub use evaluate::{Evaluation, evaluate_guess};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
pub use summary::{load_game, save_game, summarize_file};
