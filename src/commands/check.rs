//! Validate the content document and print a summary

use anyhow::Result;
use serde::Serialize;

use crate::content::ContentDocument;
use crate::Folio;

/// What `check` reports about a valid document
#[derive(Debug, Serialize)]
pub struct Summary {
    pub handle: String,
    pub headline: String,
    pub projects: Vec<String>,
    pub skills: usize,
    pub socials: usize,
    pub form_action: String,
    pub resume: Option<String>,
}

impl Summary {
    pub fn from_document(doc: &ContentDocument) -> Self {
        Self {
            handle: doc.identity.handle.clone(),
            headline: doc.hero.headline.clone(),
            projects: doc.projects.iter().map(|p| p.title.clone()).collect(),
            skills: doc.skills.len(),
            socials: doc.contact.socials.len(),
            form_action: doc.contact.form_action.clone(),
            resume: doc.identity.resume.clone(),
        }
    }
}

/// Load and validate, then print the summary as text or JSON
pub fn run(folio: &Folio, json: bool) -> Result<()> {
    let doc = folio.load_content()?;
    let summary = Summary::from_document(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{:?} is valid", folio.content_path);
    println!("  Handle:   {}", summary.handle);
    println!("  Headline: {}", summary.headline);
    println!("Projects ({}):", summary.projects.len());
    for title in &summary.projects {
        println!("  {}", title);
    }
    println!("Skills:   {}", summary.skills);
    println!("Socials:  {}", summary.socials);
    if summary.form_action.is_empty() {
        println!("Form:     (no endpoint configured)");
    } else {
        println!("Form:     {}", summary.form_action);
    }
    if let Some(resume) = &summary.resume {
        println!("Resume:   {}", resume);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let doc = ContentDocument::from_yaml(
            r#"
identity:
  handle: beat
hero:
  headline: Hello
projects:
  - title: A
  - title: B
skills: [Linux]
"#,
        )
        .unwrap();
        let summary = Summary::from_document(&doc);
        assert_eq!(summary.projects, vec!["A", "B"]);
        assert_eq!(summary.skills, 1);
        assert!(summary.resume.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["handle"], "beat");
    }
}
