//! Command-line interface for the publishing preflight.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use commands::init::InitArgs;
use commands::logs::LogsArgs;
use commands::preflight::PreflightArgs;
use commands::title::TitleArgs;

#[derive(Parser)]
#[command(name = "promptinator")]
#[command(about = "Preflight and publish prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Config file to use instead of .promptinator/config.yaml
    #[arg(long, global = true, env = "PROMPTINATOR_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create .promptinator/config.yaml with the default settings
    Init(InitArgs),

    /// Run the publishing preflight, optionally saving a draft or publishing
    Preflight(PreflightArgs),

    /// Generate a title from mode-specific metadata
    Title(TitleArgs),

    /// List the categories and tags known before the first preflight
    Terms,

    /// Inspect and prune the publishing event journal
    Logs(LogsArgs),
}

/// Load configuration from `path` if given, else the project hierarchy.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Report `err` on stderr and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "success": false, "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}
