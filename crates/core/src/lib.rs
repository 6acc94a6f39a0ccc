//! # Core Crate
//!
//! The `core` crate provides the data model and storage logic for datakeep:
//! the [`Record`] value type, the [`DataCollector`] that owns the on-disk
//! JSON store, and the error types surfaced when loading or saving fails.
//!
//! The crate performs no terminal I/O; the interactive front-end lives in
//! the CLI crate and drives this one through [`DataCollector`].

pub mod collector;
pub mod errors;
pub mod record;

pub use collector::{DataCollector, DEFAULT_STORAGE};
pub use errors::{LoadError, StorageError};
pub use record::Record;
