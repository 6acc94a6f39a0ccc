use std::error;
use std::fmt;

/// Error type for failures when reconstructing records from an existing
/// storage file.
///
/// Syntactically invalid JSON is deliberately not represented here: the
/// collector treats it as an empty store. A `Shape` error means the file
/// held well-formed JSON whose contents do not match the record schema.
#[derive(Debug)]
pub enum LoadError {
    /// The storage file exists but could not be read.
    Io(std::io::Error),

    /// Well-formed JSON that does not deserialize into a record list.
    Shape(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read storage file: {e}"),
            Self::Shape(e) => {
                write!(f, "Storage content does not match the record schema: {e}")
            }
        }
    }
}

impl error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Error type for failures when writing the record store to disk.
#[derive(Debug)]
pub enum StorageError {
    /// The storage file could not be written.
    Io(std::io::Error),

    /// Records could not be serialized to JSON.
    Serialize(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to write storage file: {e}"),
            Self::Serialize(e) => write!(f, "Failed to serialize records: {e}"),
        }
    }
}

impl error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}
