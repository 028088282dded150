use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tokio::net::TcpListener;

use super::CommandContext;
use crate::server::NoCacheServer;
use crate::shutdown::shutdown_signal;

pub struct ServeCommand {
    pub dir: Option<PathBuf>,
    pub bind: Option<IpAddr>,
    pub port: Option<u16>,
}

impl ServeCommand {
    pub fn new(dir: Option<PathBuf>, bind: Option<IpAddr>, port: Option<u16>) -> Self {
        Self { dir, bind, port }
    }

    /// Directory to serve; a relative `--dir` or configured path is taken
    /// from the repository root
    pub fn directory(&self, ctx: &CommandContext) -> PathBuf {
        let dir = self.dir.as_ref().unwrap_or(&ctx.config.server.directory);
        ctx.repo_root.join(dir)
    }

    pub fn address(&self, ctx: &CommandContext) -> SocketAddr {
        SocketAddr::new(
            self.bind.unwrap_or(ctx.config.server.bind),
            self.port.unwrap_or(ctx.config.server.port),
        )
    }

    pub async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let directory = self.directory(ctx);
        if !directory.is_dir() {
            anyhow::bail!("Directory to serve does not exist: {}", directory.display());
        }

        let addr = self.address(ctx);
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        let port = listener.local_addr()?.port();

        let shown = directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| directory.display().to_string());
        println!("Serving {shown}/ at http://localhost:{port}/");

        NoCacheServer::new(directory)
            .serve(listener, shutdown_signal())
            .await
    }
}
