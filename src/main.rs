//! SQLite Row Inspector - Main entry point.
//!
//! Opens a local SQLite database read-only, prints a diagnostic report of
//! recent rows from a set of candidate tables, and exits.

use clap::Parser;
use sqlite_row_inspector::config::{Config, OVERVIEW_TABLES, ReportMode};
use sqlite_row_inspector::db;
use sqlite_row_inspector::inspect::Inspector;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so the report stream on stdout stays clean.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    init_tracing(&config);

    info!(
        report = %config.report,
        db_path = %config.db_path,
        "Starting SQLite Row Inspector v{}",
        env!("CARGO_PKG_VERSION")
    );

    let pool = db::open_read_only(&config.db_path).await?;
    let inspector = Inspector::new(pool.clone());

    let result = match config.report {
        ReportMode::Overview => {
            inspector
                .overview_report(OVERVIEW_TABLES, config.row_limit())
                .await
        }
        ReportMode::AuthLog => inspector.auth_log_report(config.row_limit()).await,
    };

    // The pool must be released even on a fatal catalog failure.
    pool.close().await;

    let report = result?;
    print!("{}", report);

    Ok(())
}
