//! Customer Form - Main entry point
//!
//! Runs the console front end over stdin/stdout. Logs go to stderr.

use anyhow::Result;
use customer_form::client::{AsyncLookupClient, AsyncLookupClientImpl};
use customer_form::repositories::{CustomerRepository, StoreCustomerRepository};
use customer_form::storage::{FileStore, KeyValueStore};
use customer_form::{Config, Console, CustomerList, LookupClient, Metrics, Reply};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can apply
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting with lookup API URL: {}, data dir: {}",
        config.lookup_api_url,
        config.data_dir.display()
    );

    let metrics = Metrics::new();

    let store = Arc::new(FileStore::open(&config.data_dir)?) as Arc<dyn KeyValueStore>;
    let repo = Arc::new(StoreCustomerRepository::new(store, config.store_key.clone()))
        as Arc<dyn CustomerRepository>;
    let list = CustomerList::load(repo)?;

    let sync_client = LookupClient::new(&config).with_metrics(metrics.clone());
    let lookups = Arc::new(AsyncLookupClientImpl::new(sync_client)) as Arc<dyn AsyncLookupClient>;

    let mut console = Console::new(list, lookups, metrics.clone());
    println!("Customer Form. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match console.handle_line(&line).await {
            Reply::Text(text) if text.is_empty() => {}
            Reply::Text(text) => println!("{}", text),
            Reply::Quit => break,
        }
    }

    let summary = metrics.summary();
    info!(
        "Shutting down: {} lookups ({} failed, avg {:.1} ms), {} autofills, {} stale results",
        summary.lookups_total,
        summary.lookup_errors_total,
        summary.lookup_duration_avg_ms,
        summary.autofills_applied_total,
        summary.stale_results_total
    );
    Ok(())
}
