//! CLI command handlers, one file per command.

mod fetch;
mod get;
mod list;

pub use fetch::run_fetch;
pub use get::run_get;
pub use list::run_list;

use anyhow::Result;
use biodl_core::config::BiodlConfig;
use std::path::{Path, PathBuf};

/// Resolves the directory downloads go to: the --dir flag wins, then the
/// configured download dir, then the current working directory.
pub(crate) fn download_dir(cfg: &BiodlConfig, flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = &cfg.download_dir {
        return Ok(dir.clone());
    }
    Ok(std::env::current_dir()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_config() {
        let cfg = BiodlConfig {
            download_dir: Some(PathBuf::from("/from/config")),
            ..BiodlConfig::default()
        };
        let dir = download_dir(&cfg, Some(Path::new("/from/flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn config_used_without_flag() {
        let cfg = BiodlConfig {
            download_dir: Some(PathBuf::from("/from/config")),
            ..BiodlConfig::default()
        };
        let dir = download_dir(&cfg, None).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }

    #[test]
    fn cwd_is_the_fallback() {
        let cfg = BiodlConfig::default();
        let dir = download_dir(&cfg, None).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }
}
