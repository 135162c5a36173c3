use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use update_checker::config::{self, CheckerConfig};
use update_checker::logging::{self, LogOptions};
use update_checker::UpdateChecker;

#[derive(Parser)]
#[command(name = "update-checker")]
#[command(version, about = "Checks whether a newer version of a mod has been published")]
struct Cli {
    /// Identifier whose `<identifier>-version.txt` is checked
    identifier: String,

    /// Version currently installed
    current_version: String,

    /// JSON config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the base URL of the version files
    #[arg(long)]
    base_url: Option<String>,

    /// Override the trust anchor certificate (PEM or DER)
    #[arg(long)]
    trust_anchor: Option<PathBuf>,

    /// Override the request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(&LogOptions {
        file: cli.log_file.clone(),
        json: cli.json_logs,
    })?;

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => {
            let default_path = config::config_path();
            if default_path.exists() {
                load_config(&default_path)?
            } else {
                CheckerConfig::default()
            }
        }
    };

    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(trust_anchor) = cli.trust_anchor {
        config.trust_anchor_path = Some(trust_anchor);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }

    let mut checker = UpdateChecker::new(cli.identifier, cli.current_version, &config);
    let result = checker.initialize_blocking()?;

    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<CheckerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}
