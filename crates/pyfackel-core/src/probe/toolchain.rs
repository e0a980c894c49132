//! CUDA toolchain detection.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::ProbeConfig;
use crate::domain::{ComputeTag, ToolchainDetection};
use crate::error::{FackelError, FackelResult};
use crate::ports::{CommandError, CommandRunner, Invocation};

/// Pattern of the release line printed by `nvcc --version`, e.g.
/// "Cuda compilation tools, release 8.0, V8.0.44".
pub const CUDA_RELEASE_PATTERN: &str = r"Cuda compilation tools, release (\d+\.\d+)";

static CUDA_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CUDA_RELEASE_PATTERN).expect("CUDA release pattern is valid"));

/// Extract the `X.Y` release from `nvcc --version` output.
pub fn parse_cuda_release(output: &str) -> Option<&str> {
    CUDA_RELEASE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Detect the CUDA compiler and classify its release.
///
/// The toolchain is looked up first; when the lookup exits non-zero (or the
/// lookup program itself is missing) the toolchain is reported
/// [`ToolchainDetection::Absent`] and its version command is never run.
pub fn probe_toolchain(
    runner: &dyn CommandRunner,
    config: &ProbeConfig,
) -> FackelResult<ToolchainDetection> {
    let binary = config.toolchain_binary();

    if !toolchain_on_path(runner, config) {
        debug!(binary, "CUDA toolchain not found");
        return Ok(ToolchainDetection::Absent);
    }

    let invocation = Invocation::new(binary).arg("--version");
    debug!(command = %invocation, "Querying CUDA toolchain version");
    let output = runner.output(&invocation)?;
    if !output.is_success() {
        return Err(CommandError::failed(&invocation, &output).into());
    }

    let text = output.text();
    let release = parse_cuda_release(text).ok_or_else(|| FackelError::VersionParse {
        output: text.trim().to_string(),
    })?;
    let tag = ComputeTag::from_release(release)?;

    debug!(release, compute_tag = %tag, "Detected CUDA toolchain");
    Ok(ToolchainDetection::Present(tag))
}

fn toolchain_on_path(runner: &dyn CommandRunner, config: &ProbeConfig) -> bool {
    let lookup = Invocation::new(config.lookup_program()).arg(config.toolchain_binary());
    debug!(command = %lookup, "Looking up CUDA toolchain");
    match runner.output(&lookup) {
        Ok(output) => output.is_success(),
        Err(e) => {
            debug!(error = %e, "Toolchain lookup could not run, treating as absent");
            false
        }
    }
}
