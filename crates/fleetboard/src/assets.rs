// ── Asset reference generation ──
//
// Offline mode is a rendering-time contract: every stylesheet and script
// reference must be a same-origin relative path, never a cross-origin or
// protocol-relative ("//") URL.

/// Stylesheet and script hrefs for the page shell.
#[derive(Debug, Clone)]
pub struct AssetLinks {
    pub stylesheet: String,
    pub script: String,
}

const LOCAL_STYLESHEET: &str = "/static/css/fleetboard.css";
const LOCAL_SCRIPT: &str = "/static/js/fleetboard.js";

const CDN_STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/purecss@3.0.0/build/pure-min.css";
const CDN_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

impl AssetLinks {
    /// Links for the configured mode.
    pub fn for_mode(offline: bool) -> Self {
        if offline { Self::local() } else { Self::cdn() }
    }

    /// Same-origin relative paths. Also used unconditionally on error
    /// pages, which must render without upstream or network access.
    pub fn local() -> Self {
        Self {
            stylesheet: LOCAL_STYLESHEET.into(),
            script: LOCAL_SCRIPT.into(),
        }
    }

    fn cdn() -> Self {
        Self {
            stylesheet: CDN_STYLESHEET.into(),
            script: CDN_SCRIPT.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_links_have_no_cross_origin_references() {
        let links = AssetLinks::for_mode(true);
        assert!(!links.stylesheet.contains("//"));
        assert!(!links.script.contains("//"));
        assert!(links.stylesheet.starts_with('/'));
    }

    #[test]
    fn online_links_are_absolute() {
        let links = AssetLinks::for_mode(false);
        assert!(links.stylesheet.starts_with("https://"));
        assert!(links.script.starts_with("https://"));
    }
}
