//! Text command surface
//!
//! Parses `VERB arg...` lines and runs them against the player.

mod parser;
mod shell;

pub use parser::{Command, CommandError, HELP_TEXT};
pub use shell::{Flow, Shell};
