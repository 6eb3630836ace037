//! Sidebar fragment renderer.
//!
//! Turns a [`RenderConfig`] into the fixed sequence of HTML lines that the
//! documentation pages embed. Rendering is a pure function of the config:
//! values are substituted verbatim (no escaping, no validation) and the
//! caller chooses where the output goes.

mod links;
mod template;

pub use links::{download_url, inspect_download_url, LinkWarning};

use std::io::{self, Write};

/// Number of lines in a rendered fragment.
pub const LINE_COUNT: usize = OPENING_LEN + 1 + MIDDLE_LEN + 1 + CLOSING_LEN;

/// Zero-based index of the "About {base}" line.
pub const ABOUT_LINE: usize = OPENING_LEN;

/// Zero-based index of the download link line.
pub const DOWNLOAD_LINE: usize = ABOUT_LINE + 1 + MIDDLE_LEN;

const OPENING_LEN: usize = template::OPENING.len();
const MIDDLE_LEN: usize = template::MIDDLE.len();
const CLOSING_LEN: usize = template::CLOSING.len();

/// Values substituted into the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Product name shown in the "About" anchor.
    pub base: String,
    /// Host serving the distribution archive.
    pub host: String,
    /// Directory on `host` holding the archive.
    pub path: String,
    /// Package name prefix of the archive file.
    pub package: String,
    /// Release version of the archive file.
    pub version: String,
}

/// Render the fragment as lines without trailing newlines.
pub fn render(cfg: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(LINE_COUNT);
    lines.extend(template::OPENING.iter().map(|l| l.to_string()));
    lines.push(template::about_line(&cfg.base));
    lines.extend(template::MIDDLE.iter().map(|l| l.to_string()));
    lines.push(template::download_line(&download_url(cfg)));
    lines.extend(template::CLOSING.iter().map(|l| l.to_string()));
    lines
}

/// Render the fragment as one string, each line terminated by `\n`.
pub fn render_to_string(cfg: &RenderConfig) -> String {
    let mut out = String::new();
    for line in render(cfg) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write the fragment line by line to `sink`, each line followed by `\n`.
pub fn write_sidebar<W: Write>(cfg: &RenderConfig, mut sink: W) -> io::Result<()> {
    for line in render(cfg) {
        sink.write_all(line.as_bytes())?;
        sink.write_all(b"\n")?;
    }
    sink.flush()
}
