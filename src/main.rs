//! gather CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gather::cli::{execute, Cli};
use gather::config::load_settings;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn debug_filter() -> EnvFilter {
    EnvFilter::new("gather=debug")
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag or `debug: true` in settings sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// The subscriber is installed before settings are read, so the returned
/// handle lets `debug: true` in settings raise the level afterwards.
fn init_tracing(debug: bool) -> FilterHandle {
    let filter = if debug {
        debug_filter()
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gather=info"))
    };
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
    handle
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter = init_tracing(cli.debug);
    tracing::debug!("gather starting with args: {:?}", cli);

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let settings = match load_settings(&project_root, cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    if settings.debug && !cli.debug {
        if let Err(e) = filter.reload(debug_filter()) {
            eprintln!("Warning: could not enable debug logging: {}", e);
        }
    }

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    match execute(&cli.args, &settings, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
