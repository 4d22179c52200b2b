//! Terminal output formatting
//!
//! Display utilities for the board, CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_replay_result, write_board};
