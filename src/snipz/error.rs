use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snippet data in {}: {source}", path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Validation(String),

    #[error("No snippet at index {index} (the store holds {len})")]
    IndexOutOfRange { index: i64, len: usize },

    /// Same as `IndexOutOfRange`, for the one-based index a user typed.
    #[error("No snippet at index {index} (the store holds {len})")]
    DisplayIndexOutOfRange { index: usize, len: usize },

    #[error("Select a snippet to delete")]
    NoSelection,

    #[error("{0}")]
    Api(String),
}

/// Coarse classification a shell uses to decide between fatal and
/// recoverable handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Storage,
    Validation,
    Index,
    Other,
}

impl SnipzError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SnipzError::Io { .. } | SnipzError::Serialization { .. } => ErrorKind::Storage,
            SnipzError::Validation(_) => ErrorKind::Validation,
            SnipzError::IndexOutOfRange { .. } | SnipzError::DisplayIndexOutOfRange { .. } => {
                ErrorKind::Index
            }
            SnipzError::NoSelection | SnipzError::Api(_) => ErrorKind::Other,
        }
    }

    pub fn is_storage(&self) -> bool {
        self.kind() == ErrorKind::Storage
    }
}

pub type Result<T> = std::result::Result<T, SnipzError>;
