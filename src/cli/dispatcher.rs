//! Subcommand dispatching.
//!
//! This module provides the minimal command-line front end:
//! - [`CommandTable`] for anything mapping subcommand names to handlers
//! - [`classify`] for deciding what the first argument asks for
//! - [`run`] for printing help or version text, or calling a handler

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::io::{self, Write};

use indexmap::IndexMap;

/// Token that prints the version instead of naming a subcommand.
pub const VERSION_TOKEN: &str = "version";

/// First line of the help listing.
pub const HELP_BANNER: &str = "Available subcommands:";

/// Last line of the help listing.
pub const HELP_FOOTER: &str = "Run a subcommand with '--help' for more information";

/// Mapping from subcommand names to handlers.
pub trait CommandTable {
    /// Callable stored for each subcommand.
    type Handler;

    /// Look up the handler for `name`.
    fn handler(&self, name: &str) -> Option<&Self::Handler>;

    /// Subcommand names in the order they should be listed.
    fn command_names(&self) -> Vec<&str>;
}

impl<H, S: BuildHasher> CommandTable for IndexMap<String, H, S> {
    type Handler = H;

    fn handler(&self, name: &str) -> Option<&H> {
        self.get(name)
    }

    fn command_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

impl<H> CommandTable for BTreeMap<String, H> {
    type Handler = H;

    fn handler(&self, name: &str) -> Option<&H> {
        self.get(name)
    }

    fn command_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

impl<H, S: BuildHasher> CommandTable for HashMap<String, H, S> {
    type Handler = H;

    fn handler(&self, name: &str) -> Option<&H> {
        self.get(name)
    }

    fn command_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

/// What the first argument selects.
#[derive(Debug, PartialEq, Eq)]
pub enum Dispatch<'a, H> {
    /// No argument, or one that names no subcommand.
    Help,

    /// The reserved [`VERSION_TOKEN`].
    Version,

    /// A known subcommand and the arguments that follow it.
    Command {
        /// Name of the selected subcommand.
        name: String,
        /// Handler registered for it.
        handler: &'a H,
        /// Arguments after the subcommand name.
        args: Vec<String>,
    },
}

/// Classify `argv` against `commands`.
///
/// The reserved version token wins over a subcommand of the same name.
pub fn classify<C>(argv: Vec<String>, commands: &C) -> Dispatch<'_, C::Handler>
where
    C: CommandTable,
{
    let mut argv = argv.into_iter();
    let Some(first) = argv.next() else {
        return Dispatch::Help;
    };
    if first == VERSION_TOKEN {
        return Dispatch::Version;
    }
    match commands.handler(&first) {
        Some(handler) => Dispatch::Command {
            name: first,
            handler,
            args: argv.collect(),
        },
        None => Dispatch::Help,
    }
}

/// Write the help listing for `commands`.
pub fn write_help<C, W>(commands: &C, output: &mut W) -> io::Result<()>
where
    C: CommandTable,
    W: Write + ?Sized,
{
    writeln!(output, "{}", HELP_BANNER)?;
    for name in commands.command_names() {
        writeln!(output, "    {}", name)?;
    }
    writeln!(output, "{}", HELP_FOOTER)?;
    Ok(())
}

/// Dispatch `argv` to one of `commands`.
///
/// `argv` excludes the program name. With no argument or an unknown one,
/// the help listing is written to `output`; with `version`, the line
/// `Version {version}` is. Otherwise the selected handler is called with
/// the remaining arguments and its result is returned as is.
///
/// ```
/// use indexmap::IndexMap;
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let mut commands = IndexMap::new();
/// commands.insert("simple".to_string(), |args: Vec<String>| -> gather::Result<()> {
///     seen.borrow_mut().push(args);
///     Ok(())
/// });
///
/// let mut output = Vec::new();
/// gather::run(["simple", "world"], &commands, "0.1.2", &mut output).unwrap();
/// assert_eq!(seen.borrow()[0], vec!["world".to_string()]);
/// assert!(output.is_empty());
/// ```
pub fn run<I, S, C, W, E>(
    argv: I,
    commands: &C,
    version: &str,
    output: &mut W,
) -> Result<(), E>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    C: CommandTable,
    C::Handler: Fn(Vec<String>) -> Result<(), E>,
    W: Write + ?Sized,
    E: From<io::Error>,
{
    let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
    match classify(argv, commands) {
        Dispatch::Help => {
            tracing::debug!("no subcommand selected, listing commands");
            write_help(commands, output)?;
            Ok(())
        }
        Dispatch::Version => {
            writeln!(output, "Version {}", version)?;
            Ok(())
        }
        Dispatch::Command {
            name,
            handler,
            args,
        } => {
            tracing::debug!(command = %name, args = args.len(), "dispatching");
            handler(args)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GatherError, Result};
    use std::cell::RefCell;

    type Seen = RefCell<Vec<Vec<String>>>;

    fn table(seen: &Seen) -> IndexMap<String, impl Fn(Vec<String>) -> Result<()> + '_> {
        let mut commands = IndexMap::new();
        commands.insert(
            "simple".to_string(),
            move |args: Vec<String>| -> Result<()> {
                seen.borrow_mut().push(args);
                Ok(())
            },
        );
        commands
    }

    fn output_lines(output: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(output)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn classify_empty_is_help() {
        let seen = RefCell::new(Vec::new());
        let commands = table(&seen);
        assert!(matches!(classify(vec![], &commands), Dispatch::Help));
    }

    #[test]
    fn classify_unknown_is_help() {
        let seen = RefCell::new(Vec::new());
        let commands = table(&seen);
        assert!(matches!(
            classify(vec!["lala".into()], &commands),
            Dispatch::Help
        ));
    }

    #[test]
    fn classify_version_wins_over_command() {
        let mut commands: BTreeMap<String, u8> = BTreeMap::new();
        commands.insert("version".to_string(), 1);
        assert_eq!(
            classify(vec!["version".into()], &commands),
            Dispatch::Version
        );
    }

    #[test]
    fn classify_command_keeps_rest() {
        let mut commands: BTreeMap<String, u8> = BTreeMap::new();
        commands.insert("simple".to_string(), 7);
        assert_eq!(
            classify(vec!["simple".into(), "a".into(), "b".into()], &commands),
            Dispatch::Command {
                name: "simple".to_string(),
                handler: &7,
                args: vec!["a".to_string(), "b".to_string()],
            }
        );
    }

    #[test]
    fn run_calls_handler_with_remaining_args() {
        let seen = RefCell::new(Vec::new());
        let commands = table(&seen);
        let mut output = Vec::new();
        run(["simple", "world"], &commands, "0.1.2", &mut output).unwrap();
        assert_eq!(seen.borrow().as_slice(), &[vec!["world".to_string()]]);
        assert!(output.is_empty());
    }

    #[test]
    fn run_invalid_prints_help() {
        let seen = RefCell::new(Vec::new());
        let commands = table(&seen);
        let mut output = Vec::new();
        run(["lala"], &commands, "0.1.2", &mut output).unwrap();
        let lines = output_lines(&output);
        assert_eq!(lines[0], "Available subcommands:");
        assert_eq!(lines[1].trim(), "simple");
        assert!(lines[2].contains("--help"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn run_empty_prints_help() {
        let seen = RefCell::new(Vec::new());
        let commands = table(&seen);
        let mut output = Vec::new();
        run(Vec::<String>::new(), &commands, "0.1.2", &mut output).unwrap();
        let lines = output_lines(&output);
        assert_eq!(lines[0], "Available subcommands:");
        assert_eq!(lines[1].trim(), "simple");
        assert!(lines[2].contains("--help"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn run_version_prints_version() {
        let seen = RefCell::new(Vec::new());
        let commands = table(&seen);
        let mut output = Vec::new();
        run(["version"], &commands, "0.1.2", &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Version 0.1.2\n");
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn help_lists_in_table_order() {
        let mut commands: IndexMap<String, fn(Vec<String>) -> Result<()>> = IndexMap::new();
        commands.insert("zeta".to_string(), |_| Ok(()));
        commands.insert("alpha".to_string(), |_| Ok(()));
        let mut output = Vec::new();
        write_help(&commands, &mut output).unwrap();
        let lines = output_lines(&output);
        assert_eq!(lines[1].trim(), "zeta");
        assert_eq!(lines[2].trim(), "alpha");
    }

    #[test]
    fn handler_errors_propagate_unchanged() {
        let mut commands: HashMap<String, fn(Vec<String>) -> Result<()>> = HashMap::new();
        commands.insert("fail".to_string(), |args| {
            Err(GatherError::Collision {
                name: args.join(","),
                count: 9,
            })
        });
        let mut output = Vec::new();
        let err = run(["fail", "x", "y"], &commands, "1.0.0", &mut output).unwrap_err();
        assert!(matches!(
            err,
            GatherError::Collision { ref name, count: 9 } if name == "x,y"
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn write_failures_surface_as_handler_error_type() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let commands: BTreeMap<String, fn(Vec<String>) -> Result<()>> = BTreeMap::new();
        let err = run(["version"], &commands, "1.0.0", &mut Closed).unwrap_err();
        assert!(matches!(err, GatherError::Io(_)));
    }
}
