//! create-container command - Create an LDP container in the pod

use super::Context;
use crate::pod::{ContainerOutcome, Pod};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Create an LDP container.
///
/// A rejected creation (any non-201 status) is reported as a warning and
/// the command still exits successfully; only transport failures are
/// errors.
pub async fn create_container(ctx: &Context, name: &str) -> Result<()> {
    let pod = ctx.client()?;
    output::debug(
        format!("POST {} (Slug: {}/)", pod.endpoint(), name),
        ctx.verbosity,
    );

    let outcome = pod
        .create_container(name)
        .await
        .context("Failed to create container")?;

    match outcome {
        ContainerOutcome::Created => {
            output::success(
                format!("Container created: {}{}/", pod.endpoint(), name),
                ctx.verbosity,
            );
        }
        ContainerOutcome::Rejected { status, body } => {
            output::warn(
                format!("Container creation rejected ({}): {}", status, body),
                ctx.verbosity,
            );
        }
    }

    Ok(())
}
