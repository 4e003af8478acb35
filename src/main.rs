//! Beyondstreams results CLI
//!
//! Loads the saved exploration and prints the ranked cluster view as JSON
//! on stdout. Logs go to stderr.

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::fmt;

use beyondstreams::adapters::{FileExplorationStorage, InMemoryExplorationStorage};
use beyondstreams::application::{GetResultsHandler, ResumeExplorationHandler};
use beyondstreams::config::{AppConfig, ConfigError, LoggingConfig, StorageBackend};
use beyondstreams::ports::ExplorationStorage;

fn init_tracing(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = logging.env_filter()?;
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {}", err);
            return ExitCode::from(2);
        }
    };

    if let Err(err) = init_tracing(&config.logging) {
        eprintln!("logging error: {}", err);
        return ExitCode::from(2);
    }

    let storage: Arc<dyn ExplorationStorage> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileExplorationStorage::new(
            &config.storage.directory,
            config.storage.key.clone(),
        )),
        StorageBackend::Memory => Arc::new(InMemoryExplorationStorage::new()),
    };
    tracing::info!(backend = ?config.storage.backend, "Storage ready");

    let resumed = ResumeExplorationHandler::new(storage.clone()).handle().await;
    let results = GetResultsHandler::new(storage, config.ranking.options())
        .results_for(resumed.session.state());

    match serde_json::to_string_pretty(&results) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize results");
            ExitCode::FAILURE
        }
    }
}
