//! `mdsrv path <file> <atom>` – one atom's position in every frame.

use anyhow::{Context, Result};
use mdsrv_core::DataSourceClient;

pub async fn run_path(client: &DataSourceClient, file: &str, atom: u64, url_only: bool) -> Result<()> {
    if url_only {
        println!("{}", client.get_path_url(file, atom));
        return Ok(());
    }
    let trace = client
        .get_path(file, atom)
        .await
        .with_context(|| format!("path of atom {} in {}", atom, file))?;
    for (frame, [x, y, z]) in trace.iter().enumerate() {
        println!("{:>8} {:>12.3} {:>12.3} {:>12.3}", frame, x, y, z);
    }
    Ok(())
}
