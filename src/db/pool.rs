//! Connection pool management.
//!
//! The inspector is a single-shot diagnostic, so the pool is deliberately
//! small: one connection, opened read-only, never creating a missing file.

use crate::error::{InspectError, InspectResult};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

/// Open a read-only pool for the database file at `path`.
///
/// Fails if the file is missing, unreadable, or not a SQLite container.
/// The caller is responsible for closing the pool with `pool.close().await`.
pub async fn open_read_only(path: &str) -> InspectResult<SqlitePool> {
    // sqlx's read-only mode still errors late for a missing file on some
    // platforms; check up front so the failure message names the path.
    if !Path::new(path).exists() {
        return Err(InspectError::connection(
            format!("Database file not found: {}", path),
            "Check the --db-path argument or INSPECT_DB_PATH",
        ));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            InspectError::connection(
                format!("Failed to open {}: {}", path, e),
                "Check the file is a readable SQLite database",
            )
        })?;

    info!(path = %path, "Opened database read-only");
    Ok(pool)
}
