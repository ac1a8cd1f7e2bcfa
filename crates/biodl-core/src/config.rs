use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/biodl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiodlConfig {
    /// Directory downloads land in when the CLI is not given --dir.
    /// Unset means the current working directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Timeout in seconds for opening the remote stream. Transfers
    /// themselves are not time-limited.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    30
}

impl Default for BiodlConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl BiodlConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("biodl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BiodlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BiodlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: BiodlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
