//! Random table engine for Text-Based Future.
//!
//! Provides dice, range-to-text tables, and a loader that turns a directory
//! of CSV table sources into a [`TableSet`], either synchronously or on a
//! worker thread that streams progress back to the caller.

pub mod config;
pub mod dice;
pub mod error;
pub mod loader;
pub mod table;
pub mod table_set;

pub use config::LoaderConfig;
pub use dice::Dice;
pub use error::{LoadError, LoadResult, TableError, TableResult};
pub use loader::{LoadEvent, LoadHandle, TableLoader};
pub use table::{Entry, RollResult, Table};
pub use table_set::TableSet;
