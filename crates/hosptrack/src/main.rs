mod cli;
mod config;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hosptrack_api::{ApiKey, TornClient};
use hosptrack_core::{TrackOutcome, Tracker};

use crate::cli::Cli;
use crate::error::{CliError, exit_code, outcome_exit_code};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let code = err.exit_code();
            output::print_output("Initialization failed, exiting.");
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(code);
        }
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<i32, CliError> {
    let key = ApiKey::new(cli.key.as_str()).map_err(|source| CliError::InvalidApiKey { source })?;

    // The ID group is required, so clap never lets both IDs be absent.
    let Some(target) = cli.target.target() else {
        return Ok(exit_code::USAGE);
    };

    let cfg = config::load_config(cli.global.config.as_deref())?;
    let settings = config::resolve(&cfg, &cli.global)?;
    let color = output::should_color(settings.color);

    let reporter = Arc::new(output::ConsoleReporter::new(color));
    let client = TornClient::new(&settings.transport, reporter)
        .map_err(|source| CliError::Client { source })?;
    tracing::debug!(base_url = %client.base_url(), ?target, "starting hospital check");

    let tracker = Tracker::new(client);
    let outcome = tracker.run(&key, target).await;

    if let TrackOutcome::Hospitalized { ref view, .. } = outcome {
        output::print_output(&output::render_hospital(settings.output, view, color));
    }

    Ok(outcome_exit_code(&outcome))
}
