//! Command dispatch: bridges CLI args -> renderer operations.

pub mod render;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a renderer-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Render(args) => render::handle(args, global),
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
