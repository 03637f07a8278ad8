//! heroku: manage apps on the hosting platform from the command line

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use heroku_cli::cli::Cli;
use heroku_cli::domain::error::error_code;
use heroku_cli::output::{OutputContext, json};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "HEROKU_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "heroku_cli=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (as_json, no_color) = (cli.json, cli.no_color);
    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let message = format!("{e:#}");
            if as_json {
                match json::format_error(&message, error_code(&e)) {
                    Ok(obj) => println!("{obj}"),
                    Err(_) => eprintln!("Error: {message}"),
                }
            } else {
                OutputContext::new(no_color, false).error(&message);
            }
            ExitCode::FAILURE
        }
    }
}
