//! `docbar init` – write a starter config.

use anyhow::Result;
use docbar_core::config;
use std::path::Path;

pub fn run_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    config::init(&path, force)?;
    println!("Wrote starter config to {}", path.display());
    Ok(())
}
