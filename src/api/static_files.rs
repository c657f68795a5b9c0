use std::io;
use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use http::{Method, Response, StatusCode};
use http_body_util::Full;
use log::{debug, warn};

use super::response::{ResponseBody, plain_text, with_content_type};

const INDEX_FILE: &str = "index.html";

/// Serves files below a root directory for the web front-end.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Answer a GET or HEAD for `uri_path`.
    pub async fn serve(&self, method: &Method, uri_path: &str) -> Response<ResponseBody> {
        if method != Method::GET && method != Method::HEAD {
            return plain_text(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
        }

        let Some(relative) = sanitize(uri_path) else {
            debug!("Rejected static path {:?}", uri_path);
            return not_found();
        };

        let mut path = self.root.join(relative);
        if tokio::fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
            path.push(INDEX_FILE);
        }

        match tokio::fs::read(&path).await {
            Ok(contents) => {
                let body = if method == Method::HEAD {
                    Bytes::new()
                } else {
                    Bytes::from(contents)
                };
                with_content_type(Response::new(Full::new(body)), content_type(&path))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => not_found(),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// Relative path for a request path, `None` if it tries to leave the root.
fn sanitize(uri_path: &str) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in Path::new(uri_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(relative)
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

fn not_found() -> Response<ResponseBody> {
    plain_text(StatusCode::NOT_FOUND, "404 page not found")
}
