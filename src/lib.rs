//! # Void CLI
//!
//! A minimal toolkit for command-line programs: it splits raw arguments into
//! positional values and flags, and routes a named subcommand to a
//! registered handler.
//!
//! ## Example
//!
//! ```no_run
//! use void_cli::{ArgRouter, VoidCli};
//!
//! let mut cli = VoidCli::new("todo", "0.1.0");
//! cli.register_command("add", "Add a task", |args: &ArgRouter| {
//!     let title = args.positional_args().join(" ");
//!     let priority = args.flag_or_default("priority", "normal");
//!     println!("added '{title}' ({priority})");
//!     Ok(())
//! })?;
//!
//! cli.run(std::env::args().skip(1))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod router;

pub use cli::{Command, Handler, VoidCli};
pub use error::{CliError, Result};
pub use router::ArgRouter;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a log filter used when debug is off
pub const LOG_ENV: &str = "VOID_LOG";

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr; stdout carries help, version and command output.
pub fn setup_logging(debug: bool) -> anyhow::Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
