//! Bot configuration
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default location of the bot token file
pub const DEFAULT_TOKEN_PATH: &str = "token.secret";

/// Runtime configuration, loaded once at startup
///
/// The gateway token comes from a local secret file (first line only) so the
/// token never has to live in the environment or shell history. Everything
/// else is environment-driven with sensible defaults.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    pub token_path: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Load configuration from the environment and the token file
    ///
    /// * `TOKEN_PATH` - path to the token file (default: `token.secret`)
    /// * `LOG_LEVEL` - default log filter for env_logger (default: `info`)
    pub fn load() -> Result<Self> {
        let token_path = PathBuf::from(
            std::env::var("TOKEN_PATH").unwrap_or_else(|_| DEFAULT_TOKEN_PATH.to_string()),
        );
        let discord_token = read_token(&token_path)?;

        Ok(Config {
            discord_token,
            token_path,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Read the bot token from a secret file: first line only, trimmed
pub fn read_token(path: &Path) -> Result<String> {
    let file = File::open(path)
        .with_context(|| format!("failed to open token file {}", path.display()))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .with_context(|| format!("failed to read token file {}", path.display()))?;

    let token = line.trim().to_string();
    if token.is_empty() {
        anyhow::bail!("token file {} is empty", path.display());
    }
    Ok(token)
}
