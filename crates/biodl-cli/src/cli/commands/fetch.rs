//! `biodl fetch` – download named catalog resources.

use anyhow::{Context, Result};
use biodl_core::catalog::{Catalog, Resource};
use biodl_core::config::BiodlConfig;
use biodl_core::transfer;
use std::fs;
use std::path::Path;

/// Downloads the selected resources to `<dir>/<name>`. Failures do not stop
/// the batch; the command exits nonzero if any resource failed, and whether
/// to retry is the caller's call.
pub fn run_fetch(
    catalog: &Catalog,
    cfg: &BiodlConfig,
    names: &[String],
    all: bool,
    dir: Option<&Path>,
) -> Result<()> {
    let targets: Vec<&Resource> = if all {
        catalog.iter().collect()
    } else {
        if names.is_empty() {
            anyhow::bail!("no resource names given; see `biodl list`, or pass --all");
        }
        names
            .iter()
            .map(|name| {
                catalog
                    .get(name)
                    .with_context(|| format!("unknown resource {name:?}; see `biodl list`"))
            })
            .collect::<Result<_>>()?
    };

    let dir = super::download_dir(cfg, dir)?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create download dir {}", dir.display()))?;

    let total = targets.len();
    let mut failed = 0usize;
    for resource in targets {
        let dest = dir.join(resource.name());
        match transfer::transfer_with_timeout(
            resource.url().as_str(),
            &dest,
            cfg.connect_timeout(),
        ) {
            Ok(path) => println!("fetched {} -> {}", resource.name(), path.display()),
            Err(err) => {
                failed += 1;
                tracing::error!("fetch of {} failed: {}", resource.name(), err);
                eprintln!(
                    "failed to fetch {}: {:#}",
                    resource.name(),
                    anyhow::Error::from(err)
                );
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {total} downloads failed");
    }
    Ok(())
}
