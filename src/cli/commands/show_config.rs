use anyhow::Result;

use super::CommandContext;

pub struct ShowConfigCommand;

impl ShowConfigCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<()> {
        print!("{}", ctx.config.to_toml()?);
        Ok(())
    }
}
