//! Autostack canvas driver
//!
//! Builds the template registry and canvas store once at start-up and replays
//! recorded gesture scripts against them.

mod cli;
mod script;

pub use cli::{AppError, Args, run};
pub use script::{ReplayReport, Replayer, Script, ScriptError, Step};
