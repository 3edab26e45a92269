//! Command-line interface definitions for the `gangplank` binary.
//!
//! This module centralises the clap parser structure so both the main binary
//! and the build script can reuse it when generating the manual page.

use clap::Parser;

/// Command line for the `gangplank` binary.
///
/// All deployment inputs arrive through the environment; the only accepted
/// flag switches the run into removal mode. Anything else is a usage error
/// rejected by clap before configuration is read.
#[derive(Debug, Parser)]
#[command(
    name = "gangplank",
    about = "Deploy a compose stack to Docker Swarm through the Portainer API"
)]
pub(crate) struct Cli {
    /// Remove the stack named by STACK_NAME instead of deploying it.
    #[arg(long)]
    pub(crate) remove: bool,
}
