//! Error definitions.
use std::{io, result};

use thiserror::Error;

/// A specialized Result type for this library.
pub type Result<T, E = OverlapError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Error, Debug)]
pub enum OverlapError {
    /// The n-gram width is smaller than one.
    #[error("InvalidSensitivity: sensitivity must be at least 1, got {sensitivity}")]
    InvalidSensitivity {
        /// The rejected value.
        sensitivity: usize,
    },

    /// The content of a document could not be obtained.
    #[error("ReadError: could not read {id}: {source}")]
    Read {
        /// Identifier of the unreadable document.
        id: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl OverlapError {
    pub(crate) const fn invalid_sensitivity(sensitivity: usize) -> Self {
        Self::InvalidSensitivity { sensitivity }
    }

    pub(crate) fn read<S>(id: S, source: io::Error) -> Self
    where
        S: Into<String>,
    {
        Self::Read {
            id: id.into(),
            source,
        }
    }

    /// Gets the identifier of the document if this is a read failure.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Self::Read { id, .. } => Some(id),
            Self::InvalidSensitivity { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_sensitivity() {
        let e = OverlapError::invalid_sensitivity(0);
        assert_eq!(
            e.to_string(),
            "InvalidSensitivity: sensitivity must be at least 1, got 0"
        );
        assert_eq!(e.document_id(), None);
    }

    #[test]
    fn test_display_read() {
        let e = OverlapError::read(
            "essay.txt",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(e.to_string(), "ReadError: could not read essay.txt: missing");
        assert_eq!(e.document_id(), Some("essay.txt"));
    }
}
