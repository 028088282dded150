use std::fs;
use std::path::Path;
use tracing::debug;

use super::errors::BumpError;

const RELEASE_BODY_KEY: &str = "releaseBody:";

/// Render a release note as a single-line double-quoted scalar.
///
/// JSON string syntax is a subset of YAML double-quoted scalars, so the
/// workflow reads back exactly the text the operator typed.
/// Unicode line separators are escaped as well so the value stays on one line.
pub fn escape_for_yaml(value: &str) -> String {
    let json = serde_json::Value::String(value.to_string()).to_string();

    // YAML 1.1 readers break lines on NEL, LS and PS even inside quotes
    json.replace('\u{85}', "\\u0085")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Replace the value of every `releaseBody:` line in the workflow file,
/// keeping each line's indentation.
pub fn update_release_body(path: &Path, body: &str) -> Result<(), BumpError> {
    let original = fs::read_to_string(path).map_err(|e| BumpError::io(path, e))?;

    let rewritten = replace_release_body(&original, body).ok_or_else(|| {
        BumpError::MissingReleaseBody {
            path: path.to_path_buf(),
        }
    })?;

    fs::write(path, rewritten).map_err(|e| BumpError::io(path, e))?;
    debug!(path = %path.display(), "rewrote releaseBody");
    Ok(())
}

fn replace_release_body(text: &str, body: &str) -> Option<String> {
    let escaped = escape_for_yaml(body);
    let mut replaced = false;
    let mut out = String::with_capacity(text.len() + escaped.len());

    // CRLF is normalised to LF so the file never ends up with mixed endings
    for line in text.split_inclusive('\n') {
        let (content, terminated) = match line.strip_suffix('\n') {
            Some(content) => (content.strip_suffix('\r').unwrap_or(content), true),
            None => (line, false),
        };

        let trimmed = content.trim_start();
        if trimmed.starts_with(RELEASE_BODY_KEY) {
            let indent = &content[..content.len() - trimmed.len()];
            out.push_str(indent);
            out.push_str(RELEASE_BODY_KEY);
            out.push(' ');
            out.push_str(&escaped);
            out.push('\n');
            replaced = true;
        } else {
            out.push_str(content);
            if terminated {
                out.push('\n');
            }
        }
    }

    replaced.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const WORKFLOW: &str = "name: Release\n\
on:\n  workflow_dispatch:\n\
jobs:\n  publish:\n    steps:\n      - uses: tauri-apps/tauri-action@v0\n        with:\n          tagName: v__VERSION__\n          releaseBody: \"old notes\"\n          releaseDraft: true\n";

    #[test]
    fn escaped_body_round_trips_through_json() {
        let notes = "Fixes \"quoted\" things\nand a second line\twith a tab \\ and ünïcödé";
        let out = replace_release_body(WORKFLOW, notes).unwrap();

        let line = out
            .lines()
            .find(|l| l.trim_start().starts_with(RELEASE_BODY_KEY))
            .unwrap();
        assert!(line.starts_with("          releaseBody: \""));

        let value = line.trim_start().trim_start_matches(RELEASE_BODY_KEY).trim();
        let decoded: String = serde_json::from_str(value).unwrap();
        assert_eq!(decoded, notes);
    }

    #[test]
    fn other_lines_are_kept_verbatim() {
        let out = replace_release_body(WORKFLOW, "new").unwrap();

        assert_eq!(out.lines().count(), WORKFLOW.lines().count());
        assert!(out.contains("          releaseBody: \"new\"\n          releaseDraft: true\n"));
        assert!(out.starts_with("name: Release\non:\n"));
    }

    #[test]
    fn last_line_without_newline_gains_one() {
        let out = replace_release_body("  releaseBody: x", "y").unwrap();
        assert_eq!(out, "  releaseBody: \"y\"\n");
    }

    #[test]
    fn every_release_body_line_is_replaced() {
        let text = "a:\n  releaseBody: one\nb:\n\treleaseBody: two\n";
        let out = replace_release_body(text, "same").unwrap();
        assert_eq!(out, "a:\n  releaseBody: \"same\"\nb:\n\treleaseBody: \"same\"\n");
    }

    #[test]
    fn crlf_files_come_out_with_lf_only() {
        let out = replace_release_body("a: 1\r\n  releaseBody: x\r\nb: 2\r\n", "y").unwrap();
        assert_eq!(out, "a: 1\n  releaseBody: \"y\"\nb: 2\n");
    }

    #[test]
    fn unicode_line_breaks_are_escaped() {
        let notes = "a\u{2028}b\u{85}c\u{2029}d";
        let escaped = escape_for_yaml(notes);

        assert_eq!(escaped, r#""a\u2028b\u0085c\u2029d""#);
        assert!(!escaped.contains(['\u{85}', '\u{2028}', '\u{2029}']));
        let decoded: String = serde_json::from_str(&escaped).unwrap();
        assert_eq!(decoded, notes);
    }

    #[test]
    fn missing_key_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("release.yml");
        fs::write(&path, "name: Release\n").unwrap();

        let err = update_release_body(&path, "notes").unwrap_err();

        assert!(matches!(err, BumpError::MissingReleaseBody { .. }));
        assert!(err.to_string().starts_with("Could not find releaseBody in"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: Release\n");
    }
}
