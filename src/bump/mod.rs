//! Version synchronizer
//!
//! Reads the canonical version from `package.json`, asks the operator for the
//! next version and a release note, then rewrites every file that carries the
//! version. Steps run in a fixed order and stop at the first failure.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::config::PathsConfig;
use crate::prompt::Prompter;

pub mod cargo_manifest;
pub mod errors;
pub mod json;
pub mod workflow;

pub use cargo_manifest::update_cargo_version;
pub use errors::BumpError;
pub use json::{current_version, update_json_version};
pub use workflow::{escape_for_yaml, update_release_body};

/// The files a bump touches, resolved against the repository root
#[derive(Debug, Clone)]
pub struct TargetFiles {
    pub repo_root: PathBuf,
    pub package_json: PathBuf,
    pub package_lock: PathBuf,
    pub tauri_conf: PathBuf,
    pub cargo_toml: PathBuf,
    pub release_workflow: PathBuf,
}

impl TargetFiles {
    pub fn resolve(repo_root: &Path, paths: &PathsConfig) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            package_json: repo_root.join(&paths.package_json),
            package_lock: repo_root.join(&paths.package_lock),
            tauri_conf: repo_root.join(&paths.tauri_conf),
            cargo_toml: repo_root.join(&paths.cargo_toml),
            release_workflow: repo_root.join(&paths.release_workflow),
        }
    }

    /// Path shown to the operator, relative to the repository root when possible
    pub fn display_path<'a>(&self, path: &'a Path) -> std::path::Display<'a> {
        path.strip_prefix(&self.repo_root).unwrap_or(path).display()
    }
}

/// Answers supplied up front; a missing one is asked for interactively
#[derive(Debug, Clone, Default)]
pub struct BumpRequest {
    pub version: Option<String>,
    pub release_notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BumpOutcome {
    pub previous_version: String,
    pub version: String,
    pub updated: Vec<PathBuf>,
}

/// Trim an answer and reject it when nothing is left
pub fn require_input(value: &str) -> Result<String, BumpError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BumpError::EmptyInput);
    }
    Ok(value.to_string())
}

/// Ask one question and apply [`require_input`] to the answer
pub fn prompt_required<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
) -> Result<String, BumpError> {
    let answer = prompter.ask(message).map_err(BumpError::Prompt)?;
    require_input(&answer)
}

pub struct VersionBump {
    targets: TargetFiles,
}

impl VersionBump {
    pub fn new(targets: TargetFiles) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &TargetFiles {
        &self.targets
    }

    #[instrument(skip_all, fields(repo_root = %self.targets.repo_root.display()))]
    pub fn run<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
        request: BumpRequest,
    ) -> Result<BumpOutcome, BumpError> {
        println!("Local version bump utility\n");

        let previous_version = current_version(&self.targets.package_json)?;
        info!(current = %previous_version, "read current version");

        let version = match request.version {
            Some(version) => require_input(&version)?,
            None => prompt_required(
                prompter,
                &format!("Enter the new version [{previous_version}] (e.g. 1.2.3): "),
            )?,
        };
        let release_notes = match request.release_notes {
            Some(notes) => require_input(&notes)?,
            None => prompt_required(prompter, "Enter the release notes/description: ")?,
        };

        let targets = &self.targets;
        let mut updated = Vec::with_capacity(5);

        for path in [&targets.package_json, &targets.package_lock, &targets.tauri_conf] {
            update_json_version(path, &version)?;
            println!("Updated {} version to {version}", targets.display_path(path));
            updated.push(path.clone());
        }

        update_cargo_version(&targets.cargo_toml, &version)?;
        println!(
            "Updated {} version to {version}",
            targets.display_path(&targets.cargo_toml)
        );
        updated.push(targets.cargo_toml.clone());

        update_release_body(&targets.release_workflow, &release_notes)?;
        println!(
            "Updated releaseBody in {}",
            targets.display_path(&targets.release_workflow)
        );
        updated.push(targets.release_workflow.clone());

        println!("\nAll files updated. Don't forget to review and commit your changes if desired.");
        info!(from = %previous_version, to = %version, files = updated.len(), "version bump complete");

        Ok(BumpOutcome {
            previous_version,
            version,
            updated,
        })
    }
}
