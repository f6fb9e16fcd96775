use clap::Parser;
use std::process::ExitCode;

use ghostnet_capture::capture::capture;
use ghostnet_capture::config::cli::Cli;
use ghostnet_capture::ops::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // * Initialize Telemetry
    init_tracing();

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match capture(&config).await {
        Ok(report) => {
            println!("{}", report.path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Capture failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
