//! Shared default values for the CLI.
//! These are used by both the clap argument definitions and the
//! interactive `collect` session.

/// Default storage filename, re-exported from the core crate so the CLI
/// and the library always agree on it.
pub const STORAGE_FILE: &str = datakeep_core::DEFAULT_STORAGE;
