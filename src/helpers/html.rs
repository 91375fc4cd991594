//! HTML helper functions

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="folio-rs {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Attributes for a link, opening off-site targets in a new tab
pub fn link_target_attrs(href: &str) -> &'static str {
    if super::is_external(href) {
        r#" target="_blank" rel="noopener""#
    } else {
        ""
    }
}
