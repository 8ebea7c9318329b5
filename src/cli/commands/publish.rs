//! publish command - Create or replace a resource

use super::Context;
use crate::pod::Pod;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Write values as the full content of `<container>/<file>`.
///
/// An empty value list publishes an empty document.
pub async fn publish(ctx: &Context, container: &str, file: &str, values: Vec<String>) -> Result<()> {
    let pod = ctx.client()?;
    let uri = pod.endpoint().resource_url(container, file);
    output::debug(
        format!("publishing {} value(s) to {}", values.len(), uri),
        ctx.verbosity,
    );

    pod.publish_data(container, file, &values)
        .await
        .with_context(|| format!("Failed to publish data to {}", uri))?;

    output::success(format!("Published {}", uri), ctx.verbosity);
    Ok(())
}
