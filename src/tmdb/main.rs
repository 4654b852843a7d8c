// ============================================================================
// TMDB-TOKEN - Prints a write access token for the configured account
// ============================================================================

use std::process::ExitCode;

use tmdb_list_tests::{logging, Config, CredentialAcquirer};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Using API {} and website {}", config.api_url, config.web_url);

    let acquirer = match CredentialAcquirer::new(config) {
        Ok(acquirer) => acquirer,
        Err(e) => {
            tracing::error!("Failed to set up HTTP clients: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match acquirer.acquire_write_token().await {
        Ok(token) => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to acquire write access token: {}", e);
            ExitCode::FAILURE
        }
    }
}
