//! CLI command handlers, one per file.

mod check;
mod completions;
mod init;
mod man;
mod render;

pub use check::run_check;
pub use completions::run_completions;
pub use init::run_init;
pub use man::run_man;
pub use render::run_render;

use anyhow::Result;
use docbar_core::config;
use docbar_core::sidebar::RenderConfig;

use super::SourceArgs;

/// Load the config file (if any) and merge the command-line overrides.
fn resolve_source(source: &SourceArgs) -> Result<RenderConfig> {
    let file = config::load_from(source.config.as_deref())?;
    let cfg = config::resolve(&file, &source.overrides(), source.policy())?;
    tracing::debug!("resolved render config: {:?}", cfg);
    Ok(cfg)
}
