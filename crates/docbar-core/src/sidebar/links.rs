//! Download link construction and optional diagnostics.
//!
//! [`download_url`] is plain concatenation; it never rejects input.
//! [`inspect_download_url`] is advisory only and is not consulted by the
//! renderer.

use std::fmt;
use url::Url;

use super::RenderConfig;

/// `http://{host}/{path}/{package}-{version}-dist.zip`, substituted verbatim.
pub fn download_url(cfg: &RenderConfig) -> String {
    format!(
        "http://{}/{}/{}-{}-dist.zip",
        cfg.host, cfg.path, cfg.package, cfg.version
    )
}

/// Something about the download link a browser is likely to trip over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkWarning {
    /// The URL does not parse at all.
    Unparseable { url: String, reason: String },
    /// `host` is empty, so the first path component would be taken as the host.
    EmptyHost,
    /// The URL has an empty path segment (`//`), usually an empty `path`.
    EmptyPathSegment,
    /// The URL parses but a browser would rewrite it (unescaped characters,
    /// upper-case host, dot segments).
    Normalized { written: String, normalized: String },
}

impl fmt::Display for LinkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkWarning::Unparseable { url, reason } => {
                write!(f, "download URL {url:?} does not parse: {reason}")
            }
            LinkWarning::EmptyHost => write!(f, "host is empty"),
            LinkWarning::EmptyPathSegment => {
                write!(f, "download URL has an empty path segment")
            }
            LinkWarning::Normalized {
                written,
                normalized,
            } => write!(
                f,
                "download URL is not URL-safe as written: {written} would be read as {normalized}"
            ),
        }
    }
}

/// Check the download link the renderer would emit for `cfg`.
pub fn inspect_download_url(cfg: &RenderConfig) -> Vec<LinkWarning> {
    let written = download_url(cfg);
    let mut warnings = Vec::new();

    if cfg.host.is_empty() {
        warnings.push(LinkWarning::EmptyHost);
    }

    let parsed = match Url::parse(&written) {
        Ok(u) => u,
        Err(e) => {
            warnings.push(LinkWarning::Unparseable {
                url: written,
                reason: e.to_string(),
            });
            return warnings;
        }
    };

    if parsed
        .path_segments()
        .map(|mut segs| segs.any(str::is_empty))
        .unwrap_or(false)
    {
        warnings.push(LinkWarning::EmptyPathSegment);
    }

    if !cfg.host.is_empty() && parsed.as_str() != written {
        warnings.push(LinkWarning::Normalized {
            normalized: parsed.to_string(),
            written,
        });
    }

    warnings
}
