//! Generate the portfolio page

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::Folio;

/// Validate the content and write the page
pub fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    // A configuration error stops here, before any output is written
    let doc = folio.load_content()?;
    tracing::info!(
        "Loaded content: {} projects, {} skills",
        doc.projects.len(),
        doc.skills.len()
    );

    let generator = Generator::new(folio)?;
    generator.generate(&doc)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {:?} in {:.2}s",
        folio.public_dir.join("index.html"),
        duration.as_secs_f64()
    );

    Ok(())
}

/// Watch config, content and static files and regenerate on change
pub async fn watch(folio: &Folio) -> Result<()> {
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");
    let folio = folio.clone();
    tokio::task::spawn_blocking(move || watch_and_regenerate(&folio, || {})).await??;
    Ok(())
}

/// Block on input changes, regenerating the page after each batch.
///
/// `on_regenerated` runs after every successful rebuild. Failed rebuilds are
/// logged and the watcher keeps going.
pub fn watch_and_regenerate(folio: &Folio, mut on_regenerated: impl FnMut()) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for path in [folio.config_path(), folio.content_path.clone()] {
        if path.exists() {
            debouncer
                .watcher()
                .watch(&path, RecursiveMode::NonRecursive)?;
            tracing::debug!("Watching: {:?}", path);
        }
    }

    if folio.static_dir.exists() {
        debouncer
            .watcher()
            .watch(&folio.static_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", folio.static_dir);
    }

    loop {
        let events = match rx.recv() {
            Ok(Ok(events)) => events,
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
                continue;
            }
            Err(_) => break,
        };

        let changed: Vec<_> = events.iter().filter(|e| !is_editor_noise(&e.path)).collect();
        if changed.is_empty() {
            continue;
        }
        for event in &changed {
            tracing::info!("File changed: {}", event.path.display());
        }

        // Reload so _config.yml edits take effect
        match Folio::new(&folio.base_dir).and_then(|f| run(&f)) {
            Ok(()) => on_regenerated(),
            Err(e) => tracing::error!("Generation failed: {}", e),
        }
    }

    Ok(())
}

/// Finder metadata and editor backup files
fn is_editor_noise(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name == ".DS_Store" || name.ends_with('~') || name.ends_with(".swp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_generates_index() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("content.yml"),
            "identity:\n  handle: beat\nhero:\n  headline: Hi\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        run(&folio).unwrap();

        let html = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(html.contains("(beat)"));
    }

    #[test]
    fn test_invalid_content_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("content.yml"),
            "identity:\n  handle: beat\nhero:\n  headline: ''\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        let err = run(&folio).unwrap_err();
        assert!(err.to_string().contains("hero.headline"));
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_missing_content_file() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(run(&folio).is_err());
    }

    #[test]
    fn test_editor_noise_is_ignored() {
        assert!(is_editor_noise(Path::new("/site/static/.DS_Store")));
        assert!(is_editor_noise(Path::new("/site/content.yml~")));
        assert!(is_editor_noise(Path::new("/site/.content.yml.swp")));
        assert!(!is_editor_noise(Path::new("/site/content.yml")));
        assert!(!is_editor_noise(Path::new("/site/static/img/me.png")));
    }

    #[test]
    fn test_custom_public_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "public_dir: dist\n").unwrap();
        fs::write(
            dir.path().join("content.yml"),
            "identity:\n  handle: beat\nhero:\n  headline: Hi\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        run(&folio).unwrap();
        assert!(dir.path().join("dist/index.html").exists());
    }
}
