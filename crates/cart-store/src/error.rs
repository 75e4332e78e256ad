//! # Store Error Types
//!
//! Error types for cart file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / RecordError / AmountError                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds path / line number context            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  checkout binary prints the message and exits non-zero                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use cart_core::{AmountError, RecordError};
use thiserror::Error;

/// Cart store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the cart file failed.
    ///
    /// ## When This Occurs
    /// - Parent directory missing (and `create_parent_dirs` is off)
    /// - File permissions issue
    /// - Disk full mid-write (the file is left partially written)
    #[error("Cart file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O failure on a reader or writer with no file path attached.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line in a cart file did not decode. `line` is 1-based.
    #[error("Line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// An environment setting or command-line option has a bad or missing value.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfig { key: String, value: String },

    /// A command-line item entry could not be turned into an item.
    #[error("Invalid item '{entry}': {source}")]
    Entry {
        entry: String,
        #[source]
        source: EntryError,
    },
}

impl StoreError {
    /// Wraps an I/O error with the file it happened on.
    pub fn file(path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::File {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Attaches a path to a bare `Io` error; other variants pass through.
    pub fn at_path(self, path: impl AsRef<Path>) -> Self {
        match self {
            StoreError::Io(source) => StoreError::file(path, source),
            other => other,
        }
    }
}

/// Why an item entry (`kind:name:price:detail`) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("expected kind:name:price:detail")]
    Format,

    #[error("unknown item kind '{0}'")]
    UnknownKind(String),

    #[error("invalid price: {0}")]
    Price(#[source] AmountError),

    #[error("invalid warranty months '{0}'")]
    Warranty(String),

    #[error("invalid weight: {0}")]
    Weight(#[source] AmountError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
