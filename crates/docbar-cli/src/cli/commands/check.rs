//! `docbar check` – show what `render` would substitute.

use anyhow::Result;
use docbar_core::sidebar::{download_url, inspect_download_url};
use std::io::Write;

use super::resolve_source;
use crate::cli::SourceArgs;

/// Print the resolved values, the download link and any link warnings to `out`.
pub fn run_check(source: &SourceArgs, out: &mut impl Write) -> Result<()> {
    let cfg = resolve_source(source)?;
    let rows = [
        ("base", cfg.base.clone()),
        ("host", cfg.host.clone()),
        ("path", cfg.path.clone()),
        ("package", cfg.package.clone()),
        ("version", cfg.version.clone()),
        ("download", download_url(&cfg)),
    ];
    for (name, value) in rows {
        writeln!(out, "{:<10} {}", name, value)?;
    }

    let warnings = inspect_download_url(&cfg);
    if warnings.is_empty() {
        writeln!(out, "No link warnings.")?;
    } else {
        for w in warnings {
            tracing::warn!("{}", w);
            writeln!(out, "warning: {w}")?;
        }
    }
    Ok(())
}
