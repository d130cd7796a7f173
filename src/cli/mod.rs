// CLI module
// Public interface for the interactive chat loop

mod commands;
mod repl;

pub use commands::{handle_command, Command};
pub use repl::Repl;
