use crate::config::ReleaseHelperConfig;
use std::path::PathBuf;

pub mod bump;
pub mod current_version;
pub mod serve;
pub mod show_config;

pub use bump::BumpCommand;
pub use current_version::CurrentVersionCommand;
pub use serve::ServeCommand;
pub use show_config::ShowConfigCommand;

/// What every command needs: where the repository is and how it is configured
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub repo_root: PathBuf,
    pub config: ReleaseHelperConfig,
}

impl CommandContext {
    pub fn new(repo_root: PathBuf, config: ReleaseHelperConfig) -> Self {
        Self { repo_root, config }
    }
}
