//! CLI for the MDsrv client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mdsrv_core::config::{self, ClientConfig};
use mdsrv_core::DataSourceClient;

use commands::{
    run_frame, run_info, run_ls, run_numframes, run_path, run_url, run_webapp_url,
};

/// Top-level CLI for the MDsrv client.
#[derive(Debug, Parser)]
#[command(name = "mdsrv")]
#[command(about = "MDsrv client: inspect file references and fetch trajectory data", long_about = None)]
pub struct Cli {
    /// Base URL of the data server, e.g. http://127.0.0.1:8010/ (overrides config.toml).
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show how a file reference is parsed (name, ext, compression, ...).
    Info {
        /// Path or URL, e.g. file://cwd/md.pdb.gz
        file: String,
    },

    /// Print the whole-file content URL.
    Url {
        file: String,
    },

    /// List a directory on the server (root when omitted).
    Ls {
        #[arg(default_value = "")]
        path: String,
    },

    /// Fetch the number of frames of a trajectory.
    Numframes {
        file: String,
        /// Only print the URL.
        #[arg(long)]
        url_only: bool,
    },

    /// Fetch one trajectory frame.
    Frame {
        file: String,
        /// Zero-based frame index.
        index: u64,
        /// Restrict to these atoms, in this order.
        #[arg(long, value_delimiter = ',', value_name = "I,J,...")]
        atoms: Vec<usize>,
        /// Only print the URL (and atom parameters).
        #[arg(long)]
        url_only: bool,
    },

    /// Fetch the path of one atom across all frames.
    Path {
        file: String,
        /// Zero-based atom index.
        atom: u64,
        /// Only print the URL.
        #[arg(long)]
        url_only: bool,
    },

    /// Print the web application launch URL.
    WebappUrl {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 8010)]
        port: u16,
        /// Structure file relative to the server's working directory.
        struc: Option<String>,
        /// Trajectory file relative to the server's working directory.
        traj: Option<String>,
    },
}

/// How much a command depends on `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigUse {
    /// Never reads it (pure parsing or formatting).
    Unused,
    /// Builds URLs from the base URL; defaults do if the file is unreadable.
    Optional,
    /// Talks to the server; a broken file is an error.
    Required,
}

impl CliCommand {
    pub fn config_use(&self) -> ConfigUse {
        match self {
            CliCommand::Info { .. } | CliCommand::WebappUrl { .. } => ConfigUse::Unused,
            CliCommand::Url { .. } => ConfigUse::Optional,
            CliCommand::Numframes { url_only, .. }
            | CliCommand::Frame { url_only, .. }
            | CliCommand::Path { url_only, .. } => {
                if *url_only {
                    ConfigUse::Optional
                } else {
                    ConfigUse::Required
                }
            }
            CliCommand::Ls { .. } => ConfigUse::Required,
        }
    }

    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = resolve_config(
            cli.command.config_use(),
            cli.base_url,
            config::load_or_init,
        )?;
        tracing::debug!("using config: {:?}", cfg);
        let client = DataSourceClient::from_config(&cfg);

        match cli.command {
            CliCommand::Info { file } => run_info(&file),
            CliCommand::Url { file } => run_url(&client, &file),
            CliCommand::Ls { path } => run_ls(&client, &path).await?,
            CliCommand::Numframes { file, url_only } => {
                run_numframes(&client, &file, url_only).await?
            }
            CliCommand::Frame {
                file,
                index,
                atoms,
                url_only,
            } => run_frame(&client, &file, index, &atoms, url_only).await?,
            CliCommand::Path {
                file,
                atom,
                url_only,
            } => run_path(&client, &file, atom, url_only).await?,
            CliCommand::WebappUrl {
                host,
                port,
                struc,
                traj,
            } => run_webapp_url(&host, port, struc.as_deref(), traj.as_deref()),
        }

        Ok(())
    }
}

/// Loads the config as far as `usage` needs it, then applies `--base-url`.
pub(crate) fn resolve_config(
    usage: ConfigUse,
    base_url: Option<String>,
    load: impl FnOnce() -> Result<ClientConfig>,
) -> Result<ClientConfig> {
    let mut cfg = match usage {
        ConfigUse::Unused => ClientConfig::default(),
        ConfigUse::Optional => load().unwrap_or_else(|err| {
            tracing::warn!("config unavailable, using defaults: {:#}", err);
            ClientConfig::default()
        }),
        ConfigUse::Required => load()?,
    };
    if let Some(base_url) = base_url {
        cfg.base_url = base_url;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests;
