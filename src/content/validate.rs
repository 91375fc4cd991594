//! Load-time validation of the content document

use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;
use thiserror::Error;

use super::ContentDocument;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// Configuration errors found while loading content.yml
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("required field `{field}` is missing or empty")]
    MissingField { field: &'static str },

    #[error("contact.email is not an e-mail address: {0}")]
    InvalidEmail(String),

    #[error("contact.form_action must be an http(s) URL: {0}")]
    InvalidFormAction(String),

    #[error("project #{index} has no title")]
    UntitledProject { index: usize },

    #[error("{field} uses a script URL: {target}")]
    UnsafeLink { field: String, target: String },
}

/// Check required fields and link shapes
pub fn validate(doc: &ContentDocument) -> Result<(), ContentError> {
    if doc.identity.handle.trim().is_empty() {
        return Err(ContentError::MissingField {
            field: "identity.handle",
        });
    }

    if doc.hero.headline.trim().is_empty() {
        return Err(ContentError::MissingField {
            field: "hero.headline",
        });
    }

    let email = doc.contact.email.trim();
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        return Err(ContentError::InvalidEmail(email.to_string()));
    }

    let action = doc.contact.form_action.trim();
    if !action.is_empty() && !action.starts_with("https://") && !action.starts_with("http://") {
        return Err(ContentError::InvalidFormAction(action.to_string()));
    }

    for (index, project) in doc.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            return Err(ContentError::UntitledProject { index: index + 1 });
        }
        let duplicates = doc.projects[..index]
            .iter()
            .any(|p| p.title.trim() == project.title.trim());
        if duplicates {
            tracing::warn!("Duplicate project title: {}", project.title);
        }
    }

    check_links(doc)?;

    if action.is_empty() {
        tracing::warn!("contact.form_action is empty; the contact form will post to the page itself");
    }

    Ok(())
}

/// Reject `javascript:`-style targets in every configured link
fn check_links(doc: &ContentDocument) -> Result<(), ContentError> {
    let mut links: Vec<(String, &str)> = Vec::new();

    if let Some(resume) = &doc.identity.resume {
        links.push(("identity.resume".to_string(), resume));
    }
    for (i, action) in doc.hero.actions.iter().enumerate() {
        links.push((format!("hero.actions[{}]", i), &action.target));
    }
    if let Some(featured) = &doc.hero.featured_link {
        links.push(("hero.featured_link".to_string(), &featured.url));
    }
    for (i, project) in doc.projects.iter().enumerate() {
        links.push((format!("projects[{}].live_link", i), &project.live_link));
        links.push((format!("projects[{}].repo_link", i), &project.repo_link));
        links.push((format!("projects[{}].image_url", i), &project.image_url));
    }
    for (i, action) in doc.about.actions.iter().enumerate() {
        links.push((format!("about.actions[{}]", i), &action.target));
    }
    for (i, social) in doc.contact.socials.iter().enumerate() {
        links.push((format!("contact.socials[{}]", i), &social.url));
    }

    for (field, target) in links {
        if is_script_url(target) {
            return Err(ContentError::UnsafeLink {
                field,
                target: target.trim().to_string(),
            });
        }
    }

    Ok(())
}

fn is_script_url(target: &str) -> bool {
    // Browsers ignore whitespace and control characters inside the scheme
    let scheme: String = target
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take_while(|c| *c != ':')
        .collect::<String>()
        .to_ascii_lowercase();
    target.contains(':') && (scheme == "javascript" || scheme == "vbscript")
}
