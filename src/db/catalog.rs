//! Catalog introspection.
//!
//! Table names come from `sqlite_master`, SQLite's internal catalog. Internal
//! `sqlite_%` bookkeeping tables are excluded.

use crate::error::{InspectError, InspectResult};
use sqlx::{Row, SqlitePool};
use tracing::debug;

const LIST_TABLES: &str = r#"
    SELECT name FROM sqlite_master
    WHERE type = 'table'
    AND name NOT LIKE 'sqlite_%'
    ORDER BY name
    "#;

/// List all user tables in the database, sorted by name ascending.
///
/// A failure here indicates a corrupt container and is fatal to the run.
pub async fn list_tables(pool: &SqlitePool) -> InspectResult<Vec<String>> {
    let rows = sqlx::query(LIST_TABLES)
        .fetch_all(pool)
        .await
        .map_err(|e| InspectError::catalog(e.to_string()))?;

    let tables: Vec<String> = rows.iter().map(|row| row.get("name")).collect();
    debug!(count = tables.len(), "Listed tables");
    Ok(tables)
}
