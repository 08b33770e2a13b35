mod config;
mod services;
mod session;
mod state;
mod storage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, StorageKind};
use crate::storage::{FileStorage, MemoryStorage, Storage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let storage: Arc<dyn Storage> = match config.storage {
        StorageKind::File => Arc::new(FileStorage::open(&config.data_dir)?),
        StorageKind::Memory => Arc::new(MemoryStorage::new()),
    };
    tracing::info!(data_dir = %config.data_dir.display(), storage = ?config.storage, "stickyboard starting");

    let (mut state, outcomes) = state::AppState::new(storage, &config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session::run(&mut state, outcomes, stdin, tokio::io::stdout()).await?;

    tracing::info!(count = state.engine.notes().len(), "input closed; exiting");
    Ok(())
}
