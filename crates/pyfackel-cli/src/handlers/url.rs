//! `pyfackel url`: print the resolved wheel URL.

use anyhow::{Context, Result};
use pyfackel_core::Resolution;

use crate::bootstrap::CliContext;

/// Execute the url command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let resolution = ctx
        .resolver()
        .resolve()
        .context("Failed to resolve the torch wheel for this machine")?;

    println!("{}", render(&resolution, json)?);
    Ok(())
}

/// The bare URL, or the whole resolution as pretty JSON.
fn render(resolution: &Resolution, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(resolution)?)
    } else {
        Ok(resolution.url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyfackel_core::{ArtifactUrl, ComputeTag, InterpreterTag, PlatformTag, ToolchainDetection};

    fn linux_resolution() -> Resolution {
        Resolution {
            platform: PlatformTag::Linux,
            interpreter: InterpreterTag::Py35,
            wheel_tag: InterpreterTag::Py35.wheel_tag(),
            toolchain: ToolchainDetection::Present(ComputeTag::Cu80),
            url: ArtifactUrl::linux(ComputeTag::Cu80, InterpreterTag::Py35).unwrap(),
        }
    }

    #[test]
    fn test_render_plain_is_bare_url() {
        assert_eq!(
            render(&linux_resolution(), false).unwrap(),
            "http://download.pytorch.org/whl/cu80/torch-0.1.12.post2-cp35-cp35m-linux_x86_64.whl"
        );
    }

    #[test]
    fn test_render_json_carries_every_signal() {
        let rendered = render(&linux_resolution(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["platform"], "linux");
        assert_eq!(value["interpreter"], "35");
        assert_eq!(value["wheel_tag"], "cp35-cp35");
        assert_eq!(value["toolchain"]["status"], "present");
        assert_eq!(value["toolchain"]["compute_tag"], "cu80");
        assert_eq!(
            value["url"],
            "http://download.pytorch.org/whl/cu80/torch-0.1.12.post2-cp35-cp35m-linux_x86_64.whl"
        );
    }
}
