//! The Row Inspector.
//!
//! Given an open database, builds a textual report of the catalog's table
//! list plus counts and most-recent rows for a set of candidate tables. The
//! candidate list is a superset guess across schema versions, so any failure
//! scoped to one table means "not applicable here" and the table is skipped
//! without a trace in the report.

use crate::config::{AUTH_EVENT_TABLES, DEFAULT_AUTH_EVENT_LIMIT};
use crate::db::{self, decode_row};
use crate::error::{InspectError, InspectResult};
use crate::report::{format_row, section};
use serde_json::Value as JsonValue;
use sqlx::SqlitePool;
use tracing::debug;

/// Outcome of a speculative per-table query.
///
/// Both non-success arms mean "skip the table"; they are distinguished so
/// unexpected failures can be logged instead of silently folded into the
/// expected-absence case.
#[derive(Debug)]
pub enum Probe<T> {
    Success(T),
    NotFound,
    Failed(InspectError),
}

impl<T> Probe<T> {
    fn classify(result: Result<T, sqlx::Error>) -> Self {
        match result {
            Ok(v) => Probe::Success(v),
            Err(e) => {
                let err = InspectError::from(e);
                if err.is_missing_table() {
                    Probe::NotFound
                } else {
                    Probe::Failed(err)
                }
            }
        }
    }
}

/// Quote an identifier for use in generated SQL.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Read-only row inspector over a single open database.
pub struct Inspector {
    pool: SqlitePool,
}

impl Inspector {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Row count of a table, probed speculatively.
    pub async fn count(&self, table: &str) -> Probe<i64> {
        let sql = format!("SELECT count(*) FROM {}", quote_ident(table));
        let result = sqlx::query_scalar::<_, i64>(&sql).fetch_one(&self.pool).await;
        let probe = Probe::classify(result);
        if let Probe::Failed(ref e) = probe {
            debug!(table = %table, error = %e, "Count query failed, skipping table");
        }
        probe
    }

    /// Most recent rows of a table, descending by rowid.
    ///
    /// With `with_rowid` the implicit row identifier is included as the first
    /// column of each tuple.
    pub async fn recent_rows(
        &self,
        table: &str,
        limit: u32,
        with_rowid: bool,
    ) -> Probe<Vec<Vec<JsonValue>>> {
        let columns = if with_rowid { "rowid, *" } else { "*" };
        let sql = format!(
            "SELECT {} FROM {} ORDER BY rowid DESC LIMIT ?",
            columns,
            quote_ident(table)
        );
        let result = sqlx::query(&sql)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map(|rows| rows.iter().map(decode_row).collect());
        let probe = Probe::classify(result);
        if let Probe::Failed(ref e) = probe {
            debug!(table = %table, error = %e, "Row query failed, skipping table");
        }
        probe
    }

    /// Build the overview report: the sorted table list, then count and
    /// recent rows for each candidate table that exists.
    pub async fn overview_report(
        &self,
        candidates: &[&str],
        row_limit: u32,
    ) -> InspectResult<String> {
        let mut out = String::new();

        out.push('\n');
        out.push_str(&section("sqlite schema (tables)"));
        out.push('\n');
        for name in db::list_tables(&self.pool).await? {
            out.push_str(&name);
            out.push('\n');
        }

        for table in candidates {
            let count = match self.count(table).await {
                Probe::Success(n) => n,
                Probe::NotFound | Probe::Failed(_) => continue,
            };
            out.push_str(&format!("\nTable {}: count={}\n", table, count));

            if let Probe::Success(rows) = self.recent_rows(table, row_limit, false).await {
                for row in &rows {
                    out.push_str("  ");
                    out.push_str(&format_row(row));
                    out.push('\n');
                }
            }
        }

        Ok(out)
    }

    /// Build the auth-log report: recent `authentication_logs` rows, then
    /// recent rows of each auth/event table present in the catalog, all with
    /// their row identifiers.
    pub async fn auth_log_report(&self, row_limit: u32) -> InspectResult<String> {
        let mut out = String::new();

        out.push('\n');
        out.push_str(&section("Recent authentication_logs"));
        out.push('\n');
        match self.recent_rows("authentication_logs", row_limit, true).await {
            Probe::Success(rows) => {
                for row in &rows {
                    out.push_str(&format_row(row));
                    out.push('\n');
                }
            }
            // The primary section reports its failure, unlike the
            // speculative sections below.
            Probe::NotFound => {
                out.push_str("Error querying authentication_logs: no such table: authentication_logs\n");
            }
            Probe::Failed(e) => {
                out.push_str(&format!("Error querying authentication_logs: {}\n", e));
            }
        }

        out.push('\n');
        out.push_str(&section("Recent authentication_events (if present)"));
        out.push('\n');
        let existing = db::list_tables(&self.pool).await?;
        for table in AUTH_EVENT_TABLES {
            if !existing.iter().any(|t| t == table) {
                continue;
            }
            if let Probe::Success(rows) =
                self.recent_rows(table, DEFAULT_AUTH_EVENT_LIMIT, true).await
            {
                for row in &rows {
                    out.push_str(table);
                    out.push(' ');
                    out.push_str(&format_row(row));
                    out.push('\n');
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ident_plain() {
        assert_eq!(quote_ident("users"), "\"users\"");
    }

    #[test]
    fn test_quote_ident_embedded_quote() {
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
