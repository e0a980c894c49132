//! Available subcommands.

use clap::Subcommand;

/// Available commands for the torch meta installer.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the wheel for this machine and install it with pip
    Install {
        /// Print the pip command instead of running it
        #[arg(long)]
        dry_run: bool,
        /// pip executable used for the install
        #[arg(long, env = "PYFACKEL_PIP", default_value = pyfackel_core::installer::DEFAULT_PIP)]
        pip: String,
    },

    /// Print the wheel URL for this machine
    Url {
        /// Print every detected value as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what was detected about this machine
    Probe,
}
