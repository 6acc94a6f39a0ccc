//! JSON-backed record store.
//!
//! A [`DataCollector`] loads any existing records from its storage file at
//! construction, appends new records through [`DataCollector::add_record`],
//! and rewrites the whole file after every addition. Records are never
//! deleted or edited; the store only grows.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::error::Category;

use crate::errors::{LoadError, StorageError};
use crate::record::Record;

/// Default storage filename, relative to the working directory.
pub const DEFAULT_STORAGE: &str = "collected_data.json";

/// Owns the in-memory record sequence and its backing JSON file.
///
/// Insertion order is collection order is persisted order.
#[derive(Debug)]
pub struct DataCollector {
    storage_path: PathBuf,
    records: Vec<Record>,
}

impl DataCollector {
    /// Open a collector on [`DEFAULT_STORAGE`] in the working directory.
    pub fn new() -> Result<Self, LoadError> {
        Self::with_path(DEFAULT_STORAGE)
    }

    /// Open a collector on the given storage file, loading any records it
    /// already holds.
    ///
    /// A missing file or one whose content is not valid JSON yields an
    /// empty store; well-formed JSON of the wrong shape is an error. See
    /// [`load`](Self::load) for the full policy.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let storage_path = path.into();
        let records = Self::load(&storage_path)?;
        Ok(Self {
            storage_path,
            records,
        })
    }

    /// Read the record list from `path`.
    ///
    /// The error policy is two-tier and asymmetric on purpose:
    /// - missing file or syntactically invalid JSON is treated as "no
    ///   prior data" and never blocks startup, even though that silently
    ///   discards corrupt content on the next save;
    /// - valid JSON that does not deserialize into `Vec<Record>` (missing
    ///   field, unknown field, wrong top-level shape) is a hard error.
    fn load(path: &Path) -> Result<Vec<Record>, LoadError> {
        if !path.exists() {
            log::debug!("No storage file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(path)?;
        match serde_json::from_str::<Vec<Record>>(&text) {
            Ok(records) => {
                log::info!("Loaded {} records from {}", records.len(), path.display());
                Ok(records)
            }
            Err(e) => match e.classify() {
                Category::Syntax | Category::Eof => {
                    log::warn!(
                        "Storage file {} is not valid JSON, treating as empty",
                        path.display()
                    );
                    Ok(Vec::new())
                }
                _ => Err(LoadError::Shape(e)),
            },
        }
    }

    /// Append a new record stamped with the current local time, then
    /// rewrite the storage file.
    ///
    /// Field values are taken as-is; input validation belongs to the
    /// caller. Returns the stored record for display.
    pub fn add_record(
        &mut self,
        name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
        phone: impl Into<String>,
        notes: impl Into<String>,
    ) -> Result<&Record, StorageError> {
        let record = Record::new(name, age, email, phone, notes);
        self.records.push(record);
        self.save()?;
        Ok(self
            .records
            .last()
            .expect("records is non-empty after push"))
    }

    /// Serialize all records to the storage file, replacing any prior
    /// content.
    ///
    /// The output is a pretty-printed JSON array; non-ASCII text is
    /// written natively, not escaped.
    pub fn save(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.storage_path, json)?;
        log::debug!(
            "Wrote {} records to {}",
            self.records.len(),
            self.storage_path.display()
        );
        Ok(())
    }

    /// All stored records, in collection order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Location of the backing JSON file.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
