use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Default file name looked up in the repository root
pub const CONFIG_FILE_NAME: &str = "release-helper.toml";

/// Main configuration structure for the release helper
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReleaseHelperConfig {
    /// Files touched by the version bump, relative to the repository root
    pub paths: PathsConfig,
    /// Updater test server settings
    pub server: ServerConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    pub package_json: PathBuf,
    pub package_lock: PathBuf,
    pub tauri_conf: PathBuf,
    pub cargo_toml: PathBuf,
    pub release_workflow: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address to bind, all interfaces by default
    pub bind: IpAddr,
    pub port: u16,
    /// Directory to serve, relative to the repository root
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
    /// Emit logs as JSON lines instead of human readable text
    pub json_logs: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            package_json: PathBuf::from("package.json"),
            package_lock: PathBuf::from("package-lock.json"),
            tauri_conf: PathBuf::from("src-tauri/tauri.conf.json"),
            cargo_toml: PathBuf::from("src-tauri/Cargo.toml"),
            release_workflow: PathBuf::from(".github/workflows/release.yml"),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            directory: PathBuf::from("updater-test"),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

impl ReleaseHelperConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (`--config`, or release-helper.toml in the repo root)
    /// 3. Environment variables (prefixed with RELEASE_HELPER__)
    pub fn load(repo_root: &Path, explicit_file: Option<&Path>) -> Result<Self> {
        let defaults = Config::try_from(&ReleaseHelperConfig::default())
            .context("Failed to build default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match explicit_file {
            Some(path) => {
                builder = builder.add_source(File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_file = repo_root.join(CONFIG_FILE_NAME);
                if default_file.exists() {
                    builder = builder.add_source(File::from(default_file));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("RELEASE_HELPER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        let release_config: ReleaseHelperConfig = config
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(release_config)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load .env from the working directory if it exists
    ///
    /// Runs before logging is set up, so the caller reports the outcome.
    /// Returns whether a file was loaded.
    pub fn load_env_file() -> Result<bool> {
        Self::load_env_file_from(Path::new(".env"))
    }

    pub fn load_env_file_from(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        dotenvy::from_path(path).with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(true)
    }
}
