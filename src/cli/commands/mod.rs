//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds the pod client from the execution context
//! 2. Calls one `Pod` operation
//! 3. Formats and displays the result
//!
//! Handlers are async because every pod operation involves network I/O;
//! `cli::run` provides the tokio runtime.

mod container;
mod publish;
mod read;
mod update;

// Re-export command functions for testing and direct invocation
pub use container::create_container;
pub use publish::publish;
pub use read::read;
pub use update::update;

use crate::cli::args::Command;
use crate::pod::{LdpPod, PodEndpoint};
use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};

/// Execution context shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Pod endpoint URL the commands operate against.
    pub pod_url: String,
    /// Output verbosity derived from --quiet/--debug.
    pub verbosity: Verbosity,
}

impl Context {
    /// Build the pod client for this invocation.
    pub fn client(&self) -> Result<LdpPod> {
        let endpoint = PodEndpoint::new(self.pod_url.clone())
            .with_context(|| format!("Invalid pod endpoint: {}", self.pod_url))?;
        Ok(LdpPod::new(endpoint))
    }
}

/// Dispatch a command to its handler.
pub async fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::CreateContainer { name } => container::create_container(ctx, &name).await,
        Command::Publish {
            container,
            file,
            values,
        } => publish::publish(ctx, &container, &file, values).await,
        Command::Read {
            container,
            file,
            json,
        } => read::read(ctx, &container, &file, json).await,
        Command::Update {
            container,
            file,
            values,
        } => update::update(ctx, &container, &file, values).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_builds_client() {
        let ctx = Context {
            pod_url: "https://pod.example/alice".into(),
            verbosity: Verbosity::Normal,
        };
        let pod = ctx.client().unwrap();
        assert_eq!(pod.endpoint().root(), "https://pod.example/alice/");
    }

    #[test]
    fn context_rejects_bad_endpoint() {
        let ctx = Context {
            pod_url: "not-a-url".into(),
            verbosity: Verbosity::Normal,
        };
        assert!(ctx.client().is_err());
    }
}
