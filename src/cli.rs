// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::FreeLookConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "free-look-demo")]
#[command(about = "Fly a free-look camera with mouse, keyboard and gamepad", long_about = None)]
pub struct Cli {
    /// JSON camera configuration; missing fields take their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip gamepad detection entirely
    #[arg(long = "no-gamepad", default_value = "false")]
    pub no_gamepad: bool,

    /// Seconds between pose log lines
    #[arg(long = "log-interval", default_value_t = 1.0)]
    pub log_interval: f32,
}

impl Cli {
    /// Load and validate the camera configuration
    pub fn load_config(&self) -> anyhow::Result<FreeLookConfig> {
        let config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_config(&text).with_context(|| format!("loading {}", path.display()))?
            }
            None => FreeLookConfig::default(),
        };
        Ok(config)
    }
}

/// Parse a JSON config and check its values
pub fn parse_config(text: &str) -> anyhow::Result<FreeLookConfig> {
    let config: FreeLookConfig = serde_json::from_str(text).context("invalid JSON")?;
    config.validate()?;
    Ok(config)
}
