//! Terminal output formatting
//!
//! Colored tiles, boards, keyboards and summaries for the text front-ends.

pub mod display;
pub mod formatters;

pub use display::{
    write_board, write_evaluation, write_keyboard, write_round_result, write_simulation_result,
    write_summary,
};
