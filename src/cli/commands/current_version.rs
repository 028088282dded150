use anyhow::Result;

use super::CommandContext;
use crate::bump::current_version;

pub struct CurrentVersionCommand;

impl CurrentVersionCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let manifest = ctx.repo_root.join(&ctx.config.paths.package_json);
        println!("{}", current_version(&manifest)?);
        Ok(())
    }
}
