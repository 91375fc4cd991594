//! Content document (content.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::validate::{self, ContentError};

/// Everything the portfolio page displays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    pub identity: Identity,
    pub hero: HeroCopy,
    pub projects: Vec<ProjectEntry>,
    pub skills: Vec<String>,
    pub about: About,
    pub contact: Contact,
    pub headings: SectionHeadings,
}

impl ContentDocument {
    /// Load and validate a document from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_yaml(&content)?;
        tracing::debug!(
            "Loaded content from {:?}: {} projects, {} skills",
            path,
            document.projects.len(),
            document.skills.len()
        );
        Ok(document)
    }

    /// Parse and validate a document from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, ContentError> {
        let document: ContentDocument = serde_yaml::from_str(yaml)?;
        document.validate()?;
        Ok(document)
    }

    /// Check the load-time invariants
    pub fn validate(&self) -> Result<(), ContentError> {
        validate::validate(self)
    }
}

/// Who the page is about
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub name: String,
    pub handle: String,
    pub tagline: String,
    /// Monogram shown in the header badge
    pub initials: Option<String>,
    /// Resume file path or absolute URL
    pub resume: Option<String>,
}

impl Identity {
    /// Monogram for the header badge, derived from the name when not set
    pub fn monogram(&self) -> String {
        if let Some(initials) = self.initials.as_deref().filter(|s| !s.trim().is_empty()) {
            return initials.trim().to_string();
        }

        let source = if self.name.trim().is_empty() {
            &self.handle
        } else {
            &self.name
        };

        source
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Name to show next to the handle, falling back to the handle itself
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.handle
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroCopy {
    pub headline: String,
    pub subheadline: String,
    pub actions: Vec<CallToAction>,
    pub highlights: Vec<Highlight>,
    pub featured_link: Option<SocialLink>,
}

/// A button-style link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub label: String,
    pub target: String,
}

/// One card in the hero highlight panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub label: String,
    pub title: String,
    pub detail: String,
}

/// One portfolio item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_link: String,
    pub repo_link: String,
    pub image_url: String,
}

impl ProjectEntry {
    /// Technology tags with duplicates removed, first occurrence wins
    pub fn unique_technologies(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.technologies.len());
        for tech in &self.technologies {
            let tech = tech.trim();
            if !tech.is_empty() && !seen.contains(&tech) {
                seen.push(tech);
            }
        }
        seen
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub facts: Vec<String>,
    pub facts_heading: String,
    pub actions: Vec<CallToAction>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            paragraphs: Vec::new(),
            facts: Vec::new(),
            facts_heading: "Quick Facts".to_string(),
            actions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// External form-relay endpoint the form posts to
    pub form_action: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
    pub intro: String,
    pub connect_heading: String,
    pub connect_intro: String,
    pub privacy_note: Option<String>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            form_action: String::new(),
            email: String::new(),
            socials: Vec::new(),
            intro: String::new(),
            connect_heading: "Let's connect".to_string(),
            connect_intro: "You can also reach me on:".to_string(),
            privacy_note: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    /// Visible link text, the URL is shown when empty
    pub label: String,
    pub url: String,
}

/// Section titles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeadings {
    pub projects: String,
    pub skills: String,
    pub about: String,
    pub contact: String,
}

impl Default for SectionHeadings {
    fn default() -> Self {
        Self {
            projects: "Selected Projects".to_string(),
            skills: "Skills & Tools".to_string(),
            about: "About Me".to_string(),
            contact: "Contact".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let yaml = r#"
identity:
  handle: TheCyberBeat
hero:
  headline: Hello
"#;
        let doc = ContentDocument::from_yaml(yaml).unwrap();
        assert_eq!(doc.identity.handle, "TheCyberBeat");
        assert!(doc.projects.is_empty());
        assert!(doc.skills.is_empty());
        assert_eq!(doc.headings.projects, "Selected Projects");
        assert_eq!(doc.about.facts_heading, "Quick Facts");
    }

    #[test]
    fn test_parse_projects_in_order() {
        let yaml = r#"
identity:
  handle: h
hero:
  headline: x
projects:
  - title: First
    technologies: [Rust, Tera]
  - title: Second
"#;
        let doc = ContentDocument::from_yaml(yaml).unwrap();
        let titles: Vec<_> = doc.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(doc.projects[0].technologies, vec!["Rust", "Tera"]);
    }

    #[test]
    fn test_monogram() {
        let identity = Identity {
            name: "Marcelino Emmanuel".to_string(),
            handle: "TheCyberBeat".to_string(),
            ..Default::default()
        };
        assert_eq!(identity.monogram(), "ME");

        let identity = Identity {
            initials: Some("MX".to_string()),
            ..identity
        };
        assert_eq!(identity.monogram(), "MX");

        let identity = Identity {
            handle: "beat".to_string(),
            ..Default::default()
        };
        assert_eq!(identity.monogram(), "B");
        assert_eq!(identity.display_name(), "beat");
    }

    #[test]
    fn test_unique_technologies() {
        let project = ProjectEntry {
            technologies: vec![
                "React".to_string(),
                "Tailwind".to_string(),
                "React".to_string(),
                " ".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(project.unique_technologies(), vec!["React", "Tailwind"]);
    }
}
