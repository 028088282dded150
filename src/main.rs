use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use release_helper::cli::commands::{
    BumpCommand, CommandContext, CurrentVersionCommand, ServeCommand, ShowConfigCommand,
};
use release_helper::cli::{Cli, Commands};
use release_helper::{init_telemetry, ReleaseHelperConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_file = ReleaseHelperConfig::load_env_file();
    let config = ReleaseHelperConfig::load(&cli.repo_root, cli.config.as_deref())?;
    init_telemetry(&config.observability)?;

    match env_file {
        Ok(true) => info!("Loaded environment variables from .env file"),
        Ok(false) => {}
        Err(e) => warn!("Failed to load .env file: {e:#}"),
    }

    let ctx = CommandContext::new(cli.repo_root, config);

    match cli.command {
        Commands::Bump { version, notes } => BumpCommand::new(version, notes).execute(&ctx),
        Commands::CurrentVersion => CurrentVersionCommand.execute(&ctx),
        Commands::Config => ShowConfigCommand.execute(&ctx),
        Commands::Serve { dir, bind, port } => {
            tokio::runtime::Runtime::new()?.block_on(async {
                ServeCommand::new(dir, bind, port).execute(&ctx).await
            })
        }
    }
}
