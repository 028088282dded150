use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use super::errors::BumpError;

static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^version\s*=\s*"[^"]*"\s*$"#).expect("version line pattern is valid")
});

/// Rewrite every `version = "..."` line of a Cargo manifest.
///
/// Only lines that start with `version` are considered, so inline dependency
/// tables keep their versions. The file is not touched when no line matches.
pub fn update_cargo_version(path: &Path, version: &str) -> Result<(), BumpError> {
    let original = fs::read_to_string(path).map_err(|e| BumpError::io(path, e))?;

    let rewritten = replace_version_lines(&original, version).ok_or_else(|| {
        BumpError::NoVersionLine {
            path: path.to_path_buf(),
        }
    })?;

    fs::write(path, rewritten).map_err(|e| BumpError::io(path, e))?;
    debug!(path = %path.display(), version, "rewrote Cargo manifest version");
    Ok(())
}

fn replace_version_lines(text: &str, version: &str) -> Option<String> {
    let mut replaced = false;
    let mut lines = Vec::new();

    for line in text.lines() {
        if VERSION_LINE.is_match(line) {
            lines.push(format!(r#"version = "{version}""#));
            replaced = true;
        } else {
            lines.push(line.to_string());
        }
    }

    if !replaced {
        return None;
    }

    let mut joined = lines.join("\n");
    joined.push('\n');
    Some(joined)
}
