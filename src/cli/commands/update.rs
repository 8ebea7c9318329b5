//! update command - Append values to a resource

use super::Context;
use crate::pod::Pod;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Append values to `<container>/<file>`.
///
/// Reads the current document and rewrites it with the new values after
/// the existing ones. Not atomic: a concurrent writer's changes made
/// between the read and the write are lost.
pub async fn update(ctx: &Context, container: &str, file: &str, values: Vec<String>) -> Result<()> {
    let pod = ctx.client()?;
    let uri = pod.endpoint().resource_url(container, file);
    output::debug(
        format!("appending {} value(s) to {}", values.len(), uri),
        ctx.verbosity,
    );

    pod.update_data(container, file, &values)
        .await
        .with_context(|| format!("Failed to update data at {}", uri))?;

    output::success(format!("Updated {}", uri), ctx.verbosity);
    Ok(())
}
