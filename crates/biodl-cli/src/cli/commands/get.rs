//! `biodl get <url>` – download an arbitrary URL.

use anyhow::{Context, Result};
use biodl_core::config::BiodlConfig;
use biodl_core::{filename, transfer};
use std::fs;
use std::path::Path;

pub fn run_get(cfg: &BiodlConfig, url: &str, output: Option<&Path>) -> Result<()> {
    let dest = match output {
        Some(path) => path.to_path_buf(),
        None => super::download_dir(cfg, None)?.join(filename::derive_filename(url)),
    };

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let path = transfer::transfer_with_timeout(url, &dest, cfg.connect_timeout())?;
    println!("downloaded {} -> {}", url, path.display());
    Ok(())
}
