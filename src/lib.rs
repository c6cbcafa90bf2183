//! SQLite Row Inspector Library
//!
//! This library provides a best-effort, read-only inspector that reports the
//! table list of a SQLite database and the most recent rows of a set of
//! candidate tables.

pub mod config;
pub mod db;
pub mod error;
pub mod inspect;
pub mod report;

pub use config::Config;
pub use error::InspectError;
pub use inspect::Inspector;
