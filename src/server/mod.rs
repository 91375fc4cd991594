//! Preview server for the generated page
//!
//! Serves the output directory only. The contact form still posts to the
//! configured external endpoint. With live reload on, the page polls a
//! build counter and reloads itself when a rebuild bumps it.

use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::commands::generate::watch_and_regenerate;
use crate::Folio;

const BUILD_ROUTE: &str = "/__build";

/// Polls the build counter and reloads once it moves
const RELOAD_SCRIPT: &str = r#"<script>
(function() {
    var seen = null;
    setInterval(function() {
        fetch('/__build').then(function(r) { return r.text(); }).then(function(build) {
            if (seen !== null && build !== seen) { location.reload(); }
            seen = build;
        }).catch(function() {});
    }, 1000);
})();
</script>
"#;

struct PreviewState {
    index_path: PathBuf,
    build: AtomicU64,
    live_reload: bool,
}

/// Start the preview server
pub async fn start(folio: &Folio, ip: &str, port: u16, live_reload: bool) -> Result<()> {
    let state = Arc::new(PreviewState {
        index_path: folio.public_dir.join("index.html"),
        build: AtomicU64::new(0),
        live_reload,
    });

    let app = router(state.clone(), folio.public_dir.clone());

    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if live_reload {
        println!("Live reload enabled. Watching for changes...");
        let folio = folio.clone();
        tokio::task::spawn_blocking(move || {
            let result = watch_and_regenerate(&folio, || {
                let build = state.build.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::info!("Regenerated successfully (build {})", build);
            });
            if let Err(e) = result {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<PreviewState>, public_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/index.html", get(page))
        .route(BUILD_ROUTE, get(build_counter))
        .with_state(state)
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
}

/// The page itself, with the reload script when live reload is on
async fn page(State(state): State<Arc<PreviewState>>) -> Result<Html<String>, StatusCode> {
    let html = tokio::fs::read_to_string(&state.index_path)
        .await
        .map_err(|_| StatusCode::NOT_FOUND)?;

    if state.live_reload {
        Ok(Html(with_reload_script(&html)))
    } else {
        Ok(Html(html))
    }
}

async fn build_counter(State(state): State<Arc<PreviewState>>) -> String {
    state.build.load(Ordering::SeqCst).to_string()
}

fn with_reload_script(html: &str) -> String {
    match html.rfind("</body>") {
        Some(pos) => format!("{}{}{}", &html[..pos], RELOAD_SCRIPT, &html[pos..]),
        None => format!("{}{}", html, RELOAD_SCRIPT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn state_for(dir: &TempDir, live_reload: bool) -> Arc<PreviewState> {
        Arc::new(PreviewState {
            index_path: dir.path().join("index.html"),
            build: AtomicU64::new(0),
            live_reload,
        })
    }

    #[test]
    fn test_reload_script_goes_before_body_end() {
        let html = with_reload_script("<html><body><p>x</p></body></html>");
        assert!(html.contains(BUILD_ROUTE));
        assert!(html.ends_with("</script>\n</body></html>"));
        assert_eq!(html.matches("</body>").count(), 1);
    }

    #[test]
    fn test_reload_script_without_body() {
        let html = with_reload_script("<p>x</p>");
        assert!(html.starts_with("<p>x</p><script>"));
    }

    #[tokio::test]
    async fn test_page_injects_script_only_with_live_reload() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("index.html"), "<body>hi</body>").unwrap();

        let Html(live) = page(State(state_for(&dir, true))).await.unwrap();
        assert!(live.contains(BUILD_ROUTE));

        let Html(plain) = page(State(state_for(&dir, false))).await.unwrap();
        assert_eq!(plain, "<body>hi</body>");
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = page(State(state_for(&dir, true))).await.unwrap_err();
        assert_eq!(err, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_build_counter_tracks_rebuilds() {
        let dir = TempDir::new().unwrap();
        let state = state_for(&dir, true);
        assert_eq!(build_counter(State(state.clone())).await, "0");
        state.build.fetch_add(1, Ordering::SeqCst);
        assert_eq!(build_counter(State(state)).await, "1");
    }
}
