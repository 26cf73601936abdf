//! Command-line front end.
//!
//! # Architecture
//!
//! - [`dispatcher`] - Help, version and handler dispatch over a command table
//! - [`args`] - Global options for the `gather` binary
//! - [`builtins`] - Commands shipped with the binary
//!
//! [`execute`] ties them together: it collects the built-in commands with
//! the configured collision policy and dispatches to them.

pub mod args;
pub mod builtins;
pub mod dispatcher;

pub use args::Cli;
pub use dispatcher::{classify, run, write_help, CommandTable, Dispatch};

use std::io::Write;

use indexmap::IndexMap;

use crate::collector::Collector;
use crate::config::Settings;
use crate::error::Result;

use self::builtins::{CommandFn, BUILTINS};

/// Version reported by the `version` subcommand.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the command table from `commands`, resolving collisions per `settings`.
pub fn command_table<E: Clone>(
    commands: &Collector<CommandFn, E>,
    settings: &Settings,
) -> Result<IndexMap<String, CommandFn>> {
    let collected = commands.collect_with(settings.collision)?;
    Ok(collected
        .into_iter()
        .map(|(name, plugin)| (name, plugin.into_original()))
        .collect())
}

/// Dispatch `argv` to the built-in commands.
pub fn execute<W>(argv: &[String], settings: &Settings, output: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    let table = command_table(&BUILTINS, settings)?;
    tracing::debug!(
        commands = table.len(),
        collision = %settings.collision,
        "built command table"
    );
    run(argv.iter().cloned(), &table, VERSION, output)
}
