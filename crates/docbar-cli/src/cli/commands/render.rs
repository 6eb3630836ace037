//! `docbar render` – write the sidebar fragment.

use anyhow::{Context, Result};
use docbar_core::sidebar::write_sidebar;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use super::resolve_source;
use crate::cli::SourceArgs;

pub fn run_render(source: &SourceArgs, output: Option<&Path>) -> Result<()> {
    let cfg = resolve_source(source)?;
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_sidebar(&cfg, BufWriter::new(file))
                .with_context(|| format!("write {}", path.display()))?;
            tracing::info!("rendered sidebar to {}", path.display());
        }
        None => {
            write_sidebar(&cfg, io::stdout().lock()).context("write sidebar to stdout")?;
        }
    }
    Ok(())
}
