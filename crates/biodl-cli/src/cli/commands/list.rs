//! `biodl list` – print the builtin resource catalog.

use anyhow::Result;
use biodl_core::catalog::Catalog;

pub fn run_list(catalog: &Catalog) -> Result<()> {
    println!("{:<28} {}", "NAME", "URL");
    for resource in catalog.iter() {
        println!("{:<28} {}", resource.name(), resource.url());
    }
    Ok(())
}
