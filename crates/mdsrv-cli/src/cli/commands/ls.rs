//! `mdsrv ls [path]` – list a directory on the server.

use anyhow::{Context, Result};
use mdsrv_core::DataSourceClient;

pub async fn run_ls(client: &DataSourceClient, path: &str) -> Result<()> {
    let listing = client
        .get_listing(path)
        .await
        .with_context(|| format!("list {:?}", path))?;
    let entries = listing.entries().context("unexpected listing format")?;
    if entries.is_empty() {
        println!("Empty directory.");
        return Ok(());
    }
    println!("{:<5} {:<12} {}", "TYPE", "SIZE", "PATH");
    for e in entries {
        let kind = if e.restricted == Some(true) {
            "dir*"
        } else if e.dir {
            "dir"
        } else {
            "file"
        };
        let size = e
            .size
            .map(|s| format!("{s}"))
            .unwrap_or_else(|| "-".to_string());
        let shown = if e.is_parent() { ".." } else { e.path.as_str() };
        println!("{:<5} {:<12} {}", kind, size, shown);
    }
    Ok(())
}
