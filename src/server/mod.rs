//! Static file server for exercising the desktop updater locally
//!
//! File serving itself (MIME types, ranges, conditional requests, path
//! traversal checks) is `tower_http`'s `ServeDir`. This module adds the
//! no-cache headers, an `index.htm` fallback and a directory listing for
//! folders without an index page.

use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{debug, info};

pub mod listing;

pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";

/// Headers added to every response so the updater never sees a cached artifact
pub const NO_CACHE_HEADERS: [(HeaderName, &str); 3] = [
    (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];

#[derive(Debug, Clone)]
pub struct NoCacheServer {
    root: Arc<PathBuf>,
}

impl NoCacheServer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn router(&self) -> Router {
        let mut router: Router = Router::<Arc<PathBuf>>::new()
            .fallback(serve_path)
            .with_state(self.root.clone());

        for (name, value) in NO_CACHE_HEADERS {
            router = router.layer(SetResponseHeaderLayer::overriding(
                name,
                HeaderValue::from_static(value),
            ));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// Accept connections on `listener` until `shutdown` resolves
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(%addr, root = %self.root.display(), "updater test server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("Updater test server failed")?;

        info!("updater test server stopped");
        Ok(())
    }
}

async fn serve_path(State(root): State<Arc<PathBuf>>, request: Request) -> Response {
    if matches!(*request.method(), Method::GET | Method::HEAD) {
        if let Some(dir) = listing::resolve_directory(&root, request.uri().path()).await {
            // ServeDir only knows about index.html
            if !dir.join("index.html").is_file() {
                if !request.uri().path().ends_with('/') {
                    return redirect_to_slash(request.uri());
                }

                let legacy_index = dir.join("index.htm");
                if legacy_index.is_file() {
                    debug!(path = %legacy_index.display(), "serving index.htm");
                    return match ServeFile::new(legacy_index).oneshot(request).await {
                        Ok(response) => response.into_response(),
                        Err(never) => match never {},
                    };
                }

                return listing::render(&dir, request.uri().path()).await;
            }
        }
    }

    debug!(path = %request.uri().path(), "delegating to ServeDir");
    match ServeDir::new(root.as_path()).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

fn redirect_to_slash(uri: &Uri) -> Response {
    let location = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_keeps_query_string() {
        let uri: Uri = "/releases?x=1".parse().unwrap();
        let response = redirect_to_slash(&uri);

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.headers()[header::LOCATION], "/releases/?x=1");
    }

    #[test]
    fn no_cache_headers_are_static_values() {
        for (name, value) in NO_CACHE_HEADERS {
            assert!(HeaderValue::from_str(value).is_ok(), "{name}");
        }
    }
}
