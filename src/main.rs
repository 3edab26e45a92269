//! Binary entry point for the gangplank CLI.

use std::process;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gangplank::{
    ConfigError, DeployConfig, DeployError, DeployMode, Deployer, PortainerClient, PortainerError,
};

mod cli;

use cli::Cli;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(PortainerError),
    #[error(transparent)]
    Deploy(#[from] DeployError<PortainerError>),
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(err) => {
            error!("{err}");
            1
        }
    };

    process::exit(exit_code);
}

/// All log output, errors included, goes to stdout as a single stream.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stdout)
        .init();
}

const fn mode_for(cli: &Cli) -> DeployMode {
    if cli.remove {
        DeployMode::Remove
    } else {
        DeployMode::Deploy
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    info!("swarm deployment process started");

    let config = DeployConfig::from_env(mode_for(cli))?;
    let client = PortainerClient::new(&config.portainer_url).map_err(CliError::Client)?;
    let deployer = Deployer::new(client);
    let outcome = deployer.execute(&config).await?;

    info!(
        outcome = outcome.as_str(),
        "swarm deployment process completed"
    );
    Ok(())
}
