//! Database access layer.
//!
//! This module provides read-only access to a SQLite database file:
//! - Pool open/close
//! - Catalog (table list) introspection
//! - Row value decoding

pub mod catalog;
pub mod pool;
pub mod value;

pub use catalog::list_tables;
pub use pool::open_read_only;
pub use value::{decode_row, render_blob};
