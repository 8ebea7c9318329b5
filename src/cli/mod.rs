//! cli
//!
//! Command-line interface layer for Podlink.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT speak HTTP directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that drive the [`crate::pod`] client. All pod interaction goes
//! through the `Pod` trait implementation.

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::{bail, Result};

use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Command handlers
/// are async because they involve network I/O; dispatch happens inside a
/// tokio runtime built here.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let pod_url = match cli.pod.clone().or_else(|| std::env::var("POD_URL").ok()) {
        Some(url) => url,
        None => bail!("No pod endpoint configured. Pass --pod <URL> or set POD_URL."),
    };

    let ctx = commands::Context {
        pod_url,
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(commands::dispatch(cli.command, &ctx))
}
