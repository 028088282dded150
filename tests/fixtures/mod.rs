/// Temporary repositories laid out like the installer project
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PACKAGE_JSON: &str = r#"{
  "name": "installer-gui",
  "private": true,
  "version": "1.0.0",
  "type": "module"
}
"#;

pub const PACKAGE_LOCK: &str = r#"{
  "name": "installer-gui",
  "version": "1.0.0",
  "lockfileVersion": 3,
  "requires": true,
  "packages": {
    "": {
      "name": "installer-gui",
      "version": "1.0.0"
    }
  }
}
"#;

pub const TAURI_CONF: &str = r#"{
  "productName": "Installer",
  "version": "1.0.0",
  "identifier": "dev.installer.gui"
}
"#;

pub const CARGO_TOML: &str = r#"[package]
name = "installer-gui"
version = "1.0.0"
edition = "2021"

[dependencies]
tauri = { version = "2", features = [] }
"#;

pub const RELEASE_WORKFLOW: &str = r#"name: Release
on:
  workflow_dispatch:
jobs:
  publish-tauri:
    runs-on: ubuntu-latest
    steps:
      - uses: tauri-apps/tauri-action@v0
        with:
          tagName: v__VERSION__
          releaseName: "v__VERSION__"
          releaseBody: "See the assets to download this version and install."
          releaseDraft: true
"#;

pub struct ReleaseRepo {
    temp_dir: TempDir,
}

impl ReleaseRepo {
    /// A repository with every file the version bump touches
    pub fn new() -> Self {
        let repo = Self {
            temp_dir: tempfile::tempdir().expect("create temp repo"),
        };
        repo.write("package.json", PACKAGE_JSON);
        repo.write("package-lock.json", PACKAGE_LOCK);
        repo.write("src-tauri/tauri.conf.json", TAURI_CONF);
        repo.write("src-tauri/Cargo.toml", CARGO_TOML);
        repo.write(".github/workflows/release.yml", RELEASE_WORKFLOW);
        repo
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.temp_dir.path().join(relative_path)
    }

    pub fn write(&self, relative_path: &str, content: &str) {
        let path = self.file(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, content).expect("write fixture file");
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file(relative_path))
            .unwrap_or_else(|_| panic!("Failed to read file: {relative_path}"))
    }

    pub fn json(&self, relative_path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative_path)).expect("valid json")
    }
}
