//! Version fields inside JSON documents (`package.json`, the npm lockfile,
//! `tauri.conf.json`).

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::errors::BumpError;

fn read_document(path: &Path) -> Result<Value, BumpError> {
    let text = fs::read_to_string(path).map_err(|e| BumpError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| BumpError::json(path, e))
}

/// Read the top-level `version` of a manifest.
///
/// The value must be a string that is not blank once trimmed. The untrimmed
/// string is returned.
pub fn current_version(manifest: &Path) -> Result<String, BumpError> {
    let document = read_document(manifest)?;

    match document.get("version").and_then(Value::as_str) {
        Some(version) if !version.trim().is_empty() => Ok(version.to_string()),
        _ => Err(BumpError::MissingVersion {
            path: manifest.to_path_buf(),
        }),
    }
}

/// Set `version`, and `packages[""].version` when the document has a root
/// package entry, then rewrite the file with two-space indentation.
pub fn update_json_version(path: &Path, version: &str) -> Result<(), BumpError> {
    let mut document = read_document(path)?;
    if !document.is_object() {
        return Err(BumpError::NotAnObject {
            path: path.to_path_buf(),
        });
    }
    set_version(&mut document, version);

    let mut rendered =
        serde_json::to_string_pretty(&document).map_err(|e| BumpError::json(path, e))?;
    rendered.push('\n');

    fs::write(path, rendered).map_err(|e| BumpError::io(path, e))?;
    debug!(path = %path.display(), version, "rewrote JSON version");
    Ok(())
}

fn set_version(document: &mut Value, version: &str) {
    if let Value::Object(map) = document {
        map.insert("version".to_string(), Value::String(version.to_string()));
    }

    // npm lockfiles repeat the version under the root package entry
    if let Some(Value::Object(root_package)) = document
        .get_mut("packages")
        .and_then(|packages| packages.as_object_mut())
        .and_then(|packages| packages.get_mut(""))
    {
        root_package.insert("version".to_string(), Value::String(version.to_string()));
    }
}
