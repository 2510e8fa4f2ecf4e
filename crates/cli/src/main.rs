use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use stellar_data_cli::{commands, AppConfig, Cli};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match run(cli).await {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            error!(target: "stellar_data", "{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    let config = AppConfig::resolve(&cli.global)?;
    debug!(
        target: "stellar_data",
        network = %config.client.network,
        horizon = %config.client.horizon_url(),
        credential = %config.credential_source(),
        "configuration resolved"
    );

    let outcome = commands::execute(&cli.command, &config).await?;
    print!("{}", outcome.output);
    Ok(outcome.status)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug,stellar_data=debug"
    } else {
        "info,stellar_data=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
