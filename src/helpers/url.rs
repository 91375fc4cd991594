//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped in the address part of a mailto link
const MAILTO: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'#')
    .add(b'%');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/folio.css") // -> "/me/css/folio.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Whether a link leaves the site
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

/// Resolve a configured link target into an href
///
/// Anchors, absolute URLs and scheme links (mailto:, tel:) are kept as-is,
/// site-relative paths get the root prefix.
pub fn resolve_href(config: &SiteConfig, target: &str) -> String {
    let target = target.trim();
    if target.is_empty() {
        return "#".to_string();
    }
    if target.starts_with('#') || is_external(target) || has_scheme(target) {
        return target.to_string();
    }
    url_for(config, target)
}

/// Build a mailto: link for an address
pub fn mailto(email: &str) -> String {
    format!("mailto:{}", utf8_percent_encode(email.trim(), MAILTO))
}

fn has_scheme(target: &str) -> bool {
    match target.split_once(':') {
        Some((scheme, _)) => {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/me/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/folio.css"), "/me/css/folio.css");
        assert_eq!(url_for(&config, ""), "/me/");
        assert_eq!(url_for(&SiteConfig::default(), "resume.pdf"), "/resume.pdf");
    }

    #[test]
    fn test_resolve_href() {
        let config = test_config();
        assert_eq!(resolve_href(&config, "#contact"), "#contact");
        assert_eq!(
            resolve_href(&config, "https://github.com/x"),
            "https://github.com/x"
        );
        assert_eq!(resolve_href(&config, "mailto:a@b.c"), "mailto:a@b.c");
        assert_eq!(resolve_href(&config, "/resume.pdf"), "/me/resume.pdf");
        assert_eq!(resolve_href(&config, ""), "#");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://example.com"));
        assert!(is_external("//cdn.example.com/x.png"));
        assert!(!is_external("#projects"));
        assert!(!is_external("/resume.pdf"));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto("your@email.com"), "mailto:your@email.com");
        assert_eq!(mailto(" a b@c.d "), "mailto:a%20b@c.d");
    }
}
