//! Interactive TUI interface
//!
//! Hot-seat play for several players sharing one terminal.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, NOTICE_DURATION, Notice, Screen, run_tui};
