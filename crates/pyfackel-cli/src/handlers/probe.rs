//! `pyfackel probe`: show every detected signal.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use pyfackel_core::{Resolution, ToolchainDetection};

use crate::bootstrap::CliContext;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the probe command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let resolution = ctx
        .resolver()
        .resolve()
        .context("Failed to probe this machine")?;

    let styled = std::io::stdout().is_terminal();
    for (label, value) in rows(&resolution) {
        println!("{}", format_row(label, &value, styled));
    }
    Ok(())
}

/// One aligned report line, bold label only when `styled`.
fn format_row(label: &str, value: &str, styled: bool) -> String {
    if styled {
        format!("{BOLD}{label:<14}{RESET}{value}")
    } else {
        format!("{label:<14}{value}")
    }
}

fn rows(resolution: &Resolution) -> Vec<(&'static str, String)> {
    let toolchain = match resolution.toolchain {
        ToolchainDetection::Absent => format!(
            "not found (using {})",
            ToolchainDetection::ABSENT_FALLBACK
        ),
        ToolchainDetection::Present(tag) => tag.to_string(),
    };

    vec![
        ("platform", resolution.platform.to_string()),
        ("interpreter", resolution.interpreter.to_string()),
        ("wheel tag", resolution.wheel_tag.clone()),
        ("cuda", toolchain),
        ("url", resolution.url.to_string()),
    ]
}
