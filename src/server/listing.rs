use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Component, Path, PathBuf};
use tracing::warn;

/// Characters left as-is in listing links, matching what browsers expect
/// from a path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// Map a request path onto a directory below `root`.
///
/// Returns `None` for anything that is not an existing directory, and for
/// paths that would leave `root`.
pub async fn resolve_directory(root: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;

    let mut resolved = root.to_path_buf();
    for segment in decoded.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment.contains('\\') || segment.contains('\0') {
            return None;
        }
        match Path::new(segment).components().next() {
            Some(Component::Normal(part)) => resolved.push(part),
            _ => return None,
        }
    }

    let metadata = tokio::fs::metadata(&resolved).await.ok()?;
    metadata.is_dir().then_some(resolved)
}

/// Read a directory, sorted case-insensitively by name
pub async fn read_entries(dir: &Path) -> std::io::Result<Vec<Entry>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        // follow symlinks so linked folders list as folders
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        entries.push(Entry { name, is_dir });
    }

    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(entries)
}

pub fn render_html(request_path: &str, entries: &[Entry]) -> String {
    let display_path = percent_decode_str(request_path).decode_utf8_lossy();
    let title = format!("Directory listing for {}", escape_html(&display_path));

    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));

    for entry in entries {
        let suffix = if entry.is_dir { "/" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"{}{suffix}\">{}{suffix}</a></li>\n",
            utf8_percent_encode(&entry.name, SEGMENT),
            escape_html(&entry.name),
        ));
    }

    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

pub async fn render(dir: &Path, request_path: &str) -> Response {
    match read_entries(dir).await {
        Ok(entries) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_html(request_path, &entries),
        )
            .into_response(),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list directory");
            (StatusCode::NOT_FOUND, "No permission to list directory").into_response()
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
