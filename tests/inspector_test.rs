use sqlite_row_inspector::db;
use sqlite_row_inspector::inspect::{Inspector, Probe};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::NamedTempFile;

/// Open a writable pool for building test fixtures.
async fn fixture_pool(path: &str) -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("fixture pool should open")
}

/// Create a database with an `events` table (3 rows), a `users` table
/// (empty), and a `zoo` table (1 row). Returns the temp file guard.
async fn seed_basic_db() -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();
    let pool = fixture_pool(&path).await;

    sqlx::query("CREATE TABLE events (id INTEGER PRIMARY KEY, kind TEXT, detail TEXT)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE zoo (id INTEGER PRIMARY KEY, animal TEXT)")
        .execute(&pool)
        .await
        .unwrap();

    for i in 1..=3 {
        sqlx::query("INSERT INTO events (kind, detail) VALUES (?, ?)")
            .bind(format!("kind{}", i))
            .bind(format!("detail{}", i))
            .execute(&pool)
            .await
            .unwrap();
    }
    sqlx::query("INSERT INTO zoo (animal) VALUES ('otter')")
        .execute(&pool)
        .await
        .unwrap();

    pool.close().await;
    temp_file
}

#[tokio::test]
async fn test_overview_skips_missing_candidates() {
    let temp_file = seed_basic_db().await;
    let path = temp_file.path().to_str().unwrap();

    let pool = db::open_read_only(path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    let report = inspector
        .overview_report(&["events", "no_such_table", "users"], 5)
        .await
        .unwrap();
    pool.close().await;

    assert!(report.contains("Table events: count=3"));
    assert!(report.contains("Table users: count=0"));
    assert!(!report.contains("no_such_table"));
}

#[tokio::test]
async fn test_schema_listing_is_sorted_and_complete() {
    let temp_file = seed_basic_db().await;
    let path = temp_file.path().to_str().unwrap();

    let pool = db::open_read_only(path).await.unwrap();
    let tables = db::list_tables(&pool).await.unwrap();
    pool.close().await;

    assert_eq!(tables, vec!["events", "users", "zoo"]);
}

#[tokio::test]
async fn test_schema_section_ignores_candidate_list() {
    let temp_file = seed_basic_db().await;
    let path = temp_file.path().to_str().unwrap();

    let pool = db::open_read_only(path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    // No candidate exists; the schema section must still be complete.
    let report = inspector
        .overview_report(&["nothing_here"], 5)
        .await
        .unwrap();
    pool.close().await;

    assert!(report.contains("---- sqlite schema (tables) ----\nevents\nusers\nzoo\n"));
    assert!(!report.contains("Table "));
}

#[tokio::test]
async fn test_rows_are_most_recent_first_and_limited() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();
    let pool = fixture_pool(&path).await;
    sqlx::query("CREATE TABLE events (n INTEGER)")
        .execute(&pool)
        .await
        .unwrap();
    for i in 1..=10 {
        sqlx::query("INSERT INTO events (n) VALUES (?)")
            .bind(i)
            .execute(&pool)
            .await
            .unwrap();
    }
    pool.close().await;

    let pool = db::open_read_only(&path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    let rows = match inspector.recent_rows("events", 3, false).await {
        Probe::Success(rows) => rows,
        other => panic!("expected rows, got {:?}", other),
    };
    pool.close().await;

    assert_eq!(rows.len(), 3);
    let values: Vec<i64> = rows
        .iter()
        .map(|row| row[0].as_i64().expect("integer column"))
        .collect();
    assert_eq!(values, vec![10, 9, 8]);
}

#[tokio::test]
async fn test_empty_table_prints_count_zero_and_no_rows() {
    let temp_file = seed_basic_db().await;
    let path = temp_file.path().to_str().unwrap();

    let pool = db::open_read_only(path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    let report = inspector.overview_report(&["users"], 5).await.unwrap();
    pool.close().await;

    assert!(report.ends_with("Table users: count=0\n"));
}

#[tokio::test]
async fn test_missing_database_file_is_fatal() {
    let result = db::open_read_only("/nonexistent/path/to/db.sqlite3").await;
    let err = result.expect_err("missing file must not open");
    assert!(err.to_string().contains("Connection failed"));
}

#[tokio::test]
async fn test_report_is_idempotent() {
    let temp_file = seed_basic_db().await;
    let path = temp_file.path().to_str().unwrap();

    let pool = db::open_read_only(path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    let first = inspector
        .overview_report(&["events", "users", "zoo"], 5)
        .await
        .unwrap();
    let second = inspector
        .overview_report(&["events", "users", "zoo"], 5)
        .await
        .unwrap();
    pool.close().await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_count_probe_classifies_missing_table() {
    let temp_file = seed_basic_db().await;
    let path = temp_file.path().to_str().unwrap();

    let pool = db::open_read_only(path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    let probe = inspector.count("does_not_exist").await;
    pool.close().await;

    assert!(matches!(probe, Probe::NotFound));
}

#[tokio::test]
async fn test_auth_log_report_includes_rowids() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();
    let pool = fixture_pool(&path).await;
    sqlx::query("CREATE TABLE authentication_logs (username TEXT, success INTEGER)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO authentication_logs VALUES ('alice', 1), ('bob', 0)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("CREATE TABLE events (kind TEXT)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO events VALUES ('login')")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let pool = db::open_read_only(&path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    let report = inspector.auth_log_report(50).await.unwrap();
    pool.close().await;

    assert!(report.contains("---- Recent authentication_logs ----"));
    // Most recent first, rowid leading each tuple.
    assert!(report.contains("(2, \"bob\", 0)\n(1, \"alice\", 1)"));
    assert!(report.contains("---- Recent authentication_events (if present) ----"));
    assert!(report.contains("events (1, \"login\")"));
    // The oauth table is absent and must be skipped silently.
    assert!(!report.contains("oauth2_access_token_session"));
}

#[tokio::test]
async fn test_auth_log_report_without_log_table() {
    let temp_file = seed_basic_db().await;
    let path = temp_file.path().to_str().unwrap();

    let pool = db::open_read_only(path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    let report = inspector.auth_log_report(50).await.unwrap();
    pool.close().await;

    assert!(report.contains("Error querying authentication_logs: no such table"));
    // `events` exists in the fixture and carries one row.
    assert!(report.contains("events ("));
}

#[tokio::test]
async fn test_blob_and_null_rendering_in_report() {
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path().to_str().unwrap().to_string();
    let pool = fixture_pool(&path).await;
    sqlx::query("CREATE TABLE bans (reason TEXT, token BLOB)")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO bans VALUES (NULL, x'68656c6c6f')")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let pool = db::open_read_only(&path).await.unwrap();
    let inspector = Inspector::new(pool.clone());
    let report = inspector.overview_report(&["bans"], 5).await.unwrap();
    pool.close().await;

    assert!(report.contains("Table bans: count=1"));
    assert!(report.contains("  (NULL, \"hello\")"));
}
