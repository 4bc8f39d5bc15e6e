//! Wordle Party
//!
//! A multiplayer Wordle: every player guesses the same target word each
//! round, and the lowest average number of guesses across rounds wins.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_party::core::{Feedback, LetterResult, Word};
//!
//! let guess = Word::new("ocean").unwrap();
//! let target = Word::new("reach").unwrap();
//!
//! let feedback = Feedback::evaluate(Some(&guess), &target);
//! assert_eq!(feedback.count(LetterResult::WrongLocation), 3);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Round termination, keyboard hints and scoring
pub mod engine;

// Multiplayer sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
