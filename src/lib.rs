//! gather - Plugin registration and subcommand dispatch.
//!
//! Independent parts of a program register named plugins on a
//! [`Collector`]; the collector later gathers them into a name-to-plugin
//! mapping, resolving names registered more than once with a collision
//! [`strategy`]. The [`run`] dispatcher turns such a mapping into a
//! minimal subcommand front end.
//!
//! # Modules
//!
//! - [`collector`] - Registration, collection, strategies and wrappers
//! - [`cli`] - Subcommand dispatcher and the `gather` binary's commands
//! - [`config`] - Settings file loading
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use gather::strategy::ExactlyOne;
//! use gather::{register, run, Collector};
//!
//! type Handler = fn(Vec<String>) -> gather::Result<()>;
//!
//! static COMMANDS: Collector<Handler> = Collector::new();
//!
//! fn greet(args: Vec<String>) -> gather::Result<()> {
//!     assert_eq!(args, vec!["world".to_string()]);
//!     Ok(())
//! }
//!
//! register!(COMMANDS, greet);
//!
//! let table: indexmap::IndexMap<String, Handler> = COMMANDS
//!     .collect_with(ExactlyOne)
//!     .unwrap()
//!     .into_iter()
//!     .map(|(name, plugin)| (name, plugin.into_original()))
//!     .collect();
//!
//! let mut output = Vec::new();
//! run(["greet", "world"], &table, "0.1.0", &mut output).unwrap();
//! run(["version"], &table, "0.1.0", &mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "Version 0.1.0\n");
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;

pub use cli::dispatcher::run;
pub use collector::strategy;
pub use collector::wrapper::{Plugin, Transform, Wrapper};
pub use collector::{Collected, Collector, Registration};
pub use error::{GatherError, Result};
