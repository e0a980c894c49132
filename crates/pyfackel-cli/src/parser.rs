//! Main CLI parser and top-level argument handling.
//!
//! Probe options are global so every subcommand resolves the same way.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the torch meta installer.
#[derive(Parser, Debug)]
#[command(name = "pyfackel")]
#[command(about = "Detect the host and install the matching prebuilt torch wheel")]
#[command(version)]
pub struct Cli {
    /// Python interpreter whose version selects the wheel
    #[arg(long, global = true, env = "PYFACKEL_PYTHON", default_value = pyfackel_runtime::system::DEFAULT_PYTHON)]
    pub python: String,

    /// CUDA compiler used to detect the toolkit release
    #[arg(long, global = true, env = "PYFACKEL_NVCC", default_value = pyfackel_core::probe::DEFAULT_TOOLCHAIN_BINARY)]
    pub nvcc: String,

    /// Pretend to run on this OS (sys.platform form, e.g. "linux" or "darwin")
    #[arg(long, global = true, env = "PYFACKEL_PLATFORM")]
    pub platform: Option<String>,

    /// Pretend the interpreter has this version instead of asking it
    #[arg(long = "python-version", global = true, env = "PYFACKEL_PYTHON_VERSION")]
    pub python_version: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
