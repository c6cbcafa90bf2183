//! Configuration handling for the SQLite Row Inspector.
//!
//! This module provides configuration management via CLI arguments and environment variables.

use clap::{Parser, ValueEnum};

/// Default database file path, kept for compatibility with the deployments
/// this tool is pointed at.
pub const DEFAULT_DB_PATH: &str = "/config/db.sqlite3";

/// Candidate tables probed by the overview report. A superset guess across
/// schema versions; absence of any entry is expected.
pub const OVERVIEW_TABLES: &[&str] = &[
    "regulation",
    "user",
    "users",
    "authentications",
    "events",
    "logins",
    "bans",
];

/// Tables of special interest for the auth-log report.
pub const AUTH_EVENT_TABLES: &[&str] = &[
    "authentication_logs",
    "events",
    "oauth2_access_token_session",
];

pub const DEFAULT_OVERVIEW_LIMIT: u32 = 5;
pub const DEFAULT_AUTH_LOG_LIMIT: u32 = 50;
pub const DEFAULT_AUTH_EVENT_LIMIT: u32 = 20;

/// Which report the inspector prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportMode {
    /// Schema listing plus counts and recent rows of the candidate tables
    #[default]
    Overview,
    /// Recent authentication log and event rows, with row identifiers
    AuthLog,
}

impl ReportMode {
    /// Default row limit for this report mode.
    pub fn default_limit(self) -> u32 {
        match self {
            Self::Overview => DEFAULT_OVERVIEW_LIMIT,
            Self::AuthLog => DEFAULT_AUTH_LOG_LIMIT,
        }
    }
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "overview"),
            Self::AuthLog => write!(f, "auth-log"),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "sqlite-row-inspector",
    about = "Read-only diagnostic tool that prints recent rows from a SQLite database",
    version,
    author
)]
pub struct Config {
    /// Path to the SQLite database file
    #[arg(
        short = 'p',
        long = "db-path",
        value_name = "PATH",
        default_value = DEFAULT_DB_PATH,
        env = "INSPECT_DB_PATH"
    )]
    pub db_path: String,

    /// Report to print (overview or auth-log)
    #[arg(
        short,
        long,
        value_enum,
        default_value = "overview",
        env = "INSPECT_REPORT"
    )]
    pub report: ReportMode,

    /// Maximum rows to print per table (default depends on the report mode)
    #[arg(short, long, value_name = "N", env = "INSPECT_LIMIT")]
    pub limit: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "INSPECT_LOG_LEVEL")]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, env = "INSPECT_JSON_LOGS")]
    pub json_logs: bool,
}

impl Config {
    /// Effective row limit: the explicit override, or the mode's default.
    pub fn row_limit(&self) -> u32 {
        self.limit.unwrap_or_else(|| self.report.default_limit())
    }

    /// Create a default configuration (useful for testing).
    pub fn default_config() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            report: ReportMode::Overview,
            limit: None,
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}
