//! Static file server for the output root
//!
//! Reads the output directory concurrently with renders. Outputs are
//! replaced atomically, so a request never sees a half-written file.

use std::future::Future;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{PageitError, PageitResult};

/// Router serving `root`, with `index.html` for directory requests
pub fn router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Bind `0.0.0.0:port`
pub async fn bind(root: &Path, port: u16) -> PageitResult<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr)
        .await
        .map_err(|e| serve_error(root, port, e))
}

/// Serve `root` on an already bound listener until `shutdown` resolves
pub async fn serve_on<S>(listener: TcpListener, root: PathBuf, shutdown: S) -> PageitResult<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr().map(|a| a.port()).unwrap_or_default();
    info!(port, root = %root.display(), "serving");
    axum::serve(listener, router(&root))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| serve_error(&root, port, e))
}

fn serve_error(root: &Path, port: u16, err: impl std::fmt::Display) -> PageitError {
    PageitError::Serve {
        root: root.to_path_buf(),
        port,
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;

    #[tokio::test]
    async fn serves_files_and_directory_index() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("blog")).unwrap();
        std::fs::write(dir.path().join("style.css"), "body{}").unwrap();
        std::fs::write(dir.path().join("blog/index.html"), "<p>blog</p>").unwrap();

        let response = router(dir.path())
            .oneshot(Request::get("/style.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router(dir.path())
            .oneshot(Request::get("/blog/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let response = router(dir.path())
            .oneshot(Request::get("/nope.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn port_in_use_is_serve_error() {
        let dir = tempdir().unwrap();
        let first = bind(dir.path(), 0).await.unwrap();
        let port = first.local_addr().unwrap().port();

        let err = bind(dir.path(), port).await.unwrap_err();
        assert!(matches!(err, PageitError::Serve { .. }));
    }
}
