//! `pyfackel install`: resolve the wheel and install it with pip.

use anyhow::{Context, Result};
use tracing::info;

use crate::bootstrap::CliContext;

/// Execute the install command.
///
/// With `dry_run` the pip command is printed and nothing is installed.
pub fn execute(ctx: &CliContext, pip: &str, dry_run: bool) -> Result<()> {
    let url = ctx
        .resolver()
        .resolve_url()
        .context("Failed to resolve the torch wheel for this machine")?;

    let installer = ctx.installer(pip);
    if dry_run {
        println!("{}", installer.install_command(&url));
        return Ok(());
    }

    installer
        .install(&url)
        .with_context(|| format!("Failed to install {url}"))?;
    info!(%url, "torch installed");
    Ok(())
}
