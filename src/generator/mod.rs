//! Generator module - writes the rendered page and its assets

use anyhow::Result;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::content::ContentDocument;
use crate::render::{PageRenderer, STYLESHEET_PATH};
use crate::Folio;

/// Writes the portfolio into the public directory
pub struct Generator {
    folio: Folio,
    renderer: PageRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = PageRenderer::new(&folio.config)?;

        Ok(Self {
            folio: folio.clone(),
            renderer,
        })
    }

    /// Render the document and write every output file
    pub fn generate(&self, doc: &ContentDocument) -> Result<()> {
        // Render before touching the output so a template error leaves it intact
        let html = self.renderer.render(doc)?;

        fs::create_dir_all(&self.folio.public_dir)?;

        let copied = self.copy_static_assets()?;
        tracing::debug!("Copied {} static files", copied);

        let css_path = self.folio.public_dir.join(STYLESHEET_PATH);
        if let Some(parent) = css_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&css_path, self.renderer.stylesheet())?;
        tracing::debug!("Generated: {:?}", css_path);

        let index_path = self.folio.public_dir.join("index.html");
        fs::write(&index_path, html)?;
        tracing::debug!("Generated: {:?}", index_path);

        Ok(())
    }

    /// Copy static/ (resume, images) into the public directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut count = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            if is_hidden(relative) {
                tracing::debug!("Skipping hidden file: {:?}", relative);
                continue;
            }
            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            count += 1;
        }

        Ok(count)
    }
}

/// Any component starting with `.` or `_` (e.g. .git/, _drafts/)
fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| s.starts_with('.') || s.starts_with('_'))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_doc() -> ContentDocument {
        ContentDocument::from_yaml(
            r#"
identity:
  name: Ada
  handle: ada
  resume: /resume.pdf
hero:
  headline: Ada
projects:
  - title: Engine
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_writes_page_and_assets() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("static/img")).unwrap();
        fs::write(dir.path().join("static/resume.pdf"), b"%PDF").unwrap();
        fs::write(dir.path().join("static/img/me.png"), b"png").unwrap();
        fs::write(dir.path().join("static/.DS_Store"), b"x").unwrap();
        fs::create_dir_all(dir.path().join("static/.git")).unwrap();
        fs::write(dir.path().join("static/.git/config"), b"[core]").unwrap();
        fs::create_dir_all(dir.path().join("static/_drafts")).unwrap();
        fs::write(dir.path().join("static/_drafts/old.pdf"), b"%PDF").unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        Generator::new(&folio)
            .unwrap()
            .generate(&sample_doc())
            .unwrap();

        let public = dir.path().join("public");
        let html = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(html.contains(r#"<h3 class="project-title">Engine</h3>"#));
        assert!(public.join("css/folio.css").exists());
        assert_eq!(fs::read(public.join("resume.pdf")).unwrap(), b"%PDF");
        assert!(public.join("img/me.png").exists());
        assert!(!public.join(".DS_Store").exists());
        assert!(!public.join(".git").exists());
        assert!(!public.join("_drafts").exists());
    }

    #[test]
    fn test_generate_without_static_dir() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        Generator::new(&folio)
            .unwrap()
            .generate(&sample_doc())
            .unwrap();
        assert!(dir.path().join("public/index.html").exists());
    }
}
