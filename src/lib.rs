// Release Helper Library - version bumps and updater test serving
// This exposes the core components for testing and integration

pub mod bump;
pub mod cli;
pub mod config;
pub mod prompt;
pub mod server;
pub mod shutdown;
pub mod telemetry;

// Re-export key types for easy access
pub use bump::{BumpError, BumpOutcome, BumpRequest, TargetFiles, VersionBump};
pub use config::ReleaseHelperConfig;
pub use prompt::{Prompter, StdioPrompter};
pub use server::NoCacheServer;
pub use telemetry::init_telemetry;
