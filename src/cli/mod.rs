use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "release-helper")]
#[command(version, about = "Release chores for the installer: version bumps and a local updater test server")]
#[command(long_about = "Keeps the version string in package.json, package-lock.json, tauri.conf.json \
                       and Cargo.toml in sync, writes the release notes into the release workflow, \
                       and serves updater artifacts locally with caching disabled.")]
pub struct Cli {
    /// Repository root that all configured paths are relative to
    #[arg(long, global = true, default_value = ".", help = "Repository root (defaults to the current directory)")]
    pub repo_root: PathBuf,
    /// Explicit configuration file
    #[arg(long, global = true, help = "Configuration file (defaults to release-helper.toml in the repo root)")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Bump the version in every manifest and set the release notes
    Bump {
        /// New version; prompted for when omitted
        #[arg(long, help = "New version, e.g. 1.2.3 (prompted for when omitted)")]
        version: Option<String>,
        /// Release notes; prompted for when omitted
        #[arg(long, help = "Release notes/description (prompted for when omitted)")]
        notes: Option<String>,
    },
    /// Print the version currently declared in package.json
    CurrentVersion,
    /// Serve the updater test directory with caching disabled
    Serve {
        /// Directory to serve
        #[arg(long, help = "Directory to serve (defaults to updater-test/ in the repo root)")]
        dir: Option<PathBuf>,
        /// Address to bind
        #[arg(long, help = "Address to bind (defaults to 0.0.0.0)")]
        bind: Option<IpAddr>,
        /// Port to listen on
        #[arg(long, short = 'p', help = "Port to listen on (defaults to 8000)")]
        port: Option<u16>,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bump_takes_no_required_arguments() {
        let cli = Cli::try_parse_from(["release-helper", "bump"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Bump { version: None, notes: None }
        ));
        assert_eq!(cli.repo_root, PathBuf::from("."));
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from([
            "release-helper",
            "--repo-root",
            "/tmp/repo",
            "serve",
            "--bind",
            "127.0.0.1",
            "-p",
            "9000",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve { dir, bind, port } => {
                assert!(dir.is_none());
                assert_eq!(bind, Some(IpAddr::from([127, 0, 0, 1])));
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
        assert_eq!(cli.repo_root, PathBuf::from("/tmp/repo"));
    }
}
