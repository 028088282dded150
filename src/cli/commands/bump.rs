use anyhow::Result;

use super::CommandContext;
use crate::bump::{BumpRequest, TargetFiles, VersionBump};
use crate::prompt::StdioPrompter;

pub struct BumpCommand {
    pub version: Option<String>,
    pub notes: Option<String>,
}

impl BumpCommand {
    pub fn new(version: Option<String>, notes: Option<String>) -> Self {
        Self { version, notes }
    }

    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let targets = TargetFiles::resolve(&ctx.repo_root, &ctx.config.paths);
        let request = BumpRequest {
            version: self.version,
            release_notes: self.notes,
        };

        VersionBump::new(targets).run(&mut StdioPrompter::stdio(), request)?;
        Ok(())
    }
}
