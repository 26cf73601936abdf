//! Subcommands shipped with the `gather` binary.
//!
//! Each command is registered on [`BUILTINS`] with a one-line description
//! glued on, which `describe` reads back.

use std::io::Write;
use std::sync::LazyLock;

use crate::collector::wrapper::Wrapper;
use crate::collector::Collector;
use crate::error::Result;
use crate::register;

/// Signature shared by the built-in commands.
pub type CommandFn = fn(Vec<String>) -> Result<()>;

/// Built-in commands, each carrying its description.
pub static BUILTINS: LazyLock<Collector<CommandFn, &'static str>> = LazyLock::new(|| {
    let commands: Collector<CommandFn, &'static str> = Collector::new();
    register!(
        commands,
        echo,
        transform = Wrapper::glue("Print the arguments separated by spaces")
    );
    register!(
        commands,
        describe,
        transform = Wrapper::glue("List subcommands with their descriptions")
    );
    commands
});

/// Print the arguments separated by spaces.
pub fn echo(args: Vec<String>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", args.join(" "))?;
    Ok(())
}

/// List every built-in command with its description.
pub fn describe(_args: Vec<String>) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_descriptions(&BUILTINS, &mut stdout)
}

/// Write `name  description` lines for each command on `commands`.
pub fn write_descriptions<W: Write + ?Sized>(
    commands: &Collector<CommandFn, &'static str>,
    output: &mut W,
) -> Result<()> {
    let collected = commands.collect();
    let width = collected.keys().map(String::len).max().unwrap_or(0);
    for (name, plugin) in &collected {
        let description = plugin.extra().copied().unwrap_or("");
        writeln!(output, "{:<width$}  {}", name, description, width = width)?;
    }
    Ok(())
}
