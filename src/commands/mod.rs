//! Command implementations

pub mod check;
pub mod play;
pub mod replay;

pub use check::check_guess;
pub use play::run_play;
pub use replay::{ReplayResult, ReplayStep, StepOutcome, replay_game};
