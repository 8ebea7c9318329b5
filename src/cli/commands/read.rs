//! read command - Read the values stored in a resource

use super::Context;
use crate::pod::Pod;
use crate::ui::output;
use anyhow::{Context as _, Result};
use serde::Serialize;

/// Machine-readable output of a read.
#[derive(Serialize)]
struct ReadOutput<'a> {
    container: &'a str,
    file: &'a str,
    values: &'a [String],
}

/// Read `<container>/<file>` and print its values, one per line
/// (or as JSON with `--json`).
pub async fn read(ctx: &Context, container: &str, file: &str, json: bool) -> Result<()> {
    let pod = ctx.client()?;
    let uri = pod.endpoint().resource_url(container, file);
    output::debug(format!("GET {}", uri), ctx.verbosity);

    let values = pod
        .read_data(container, file)
        .await
        .with_context(|| format!("Failed to read data from {}", uri))?;

    if json {
        let out = ReadOutput {
            container,
            file,
            values: &values,
        };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        for value in &values {
            println!("{}", value);
        }
    }

    Ok(())
}
