//! `mdsrv numframes <file>` – number of frames of a trajectory.

use anyhow::{Context, Result};
use mdsrv_core::DataSourceClient;

pub async fn run_numframes(client: &DataSourceClient, file: &str, url_only: bool) -> Result<()> {
    if url_only {
        println!("{}", client.get_numframes_url(file));
        return Ok(());
    }
    let n = client
        .get_numframes(file)
        .await
        .with_context(|| format!("frame count of {}", file))?;
    println!("{n}");
    Ok(())
}
