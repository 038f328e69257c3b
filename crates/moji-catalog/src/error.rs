#![forbid(unsafe_code)]

use std::fmt;
use std::io;

/// Failure while building a catalog. No partial catalog is ever produced.
#[derive(Debug)]
pub enum CatalogError {
    /// Reading the catalog source failed.
    Io(io::Error),
    /// The source is not valid JSON or a record is missing a required field.
    Json(serde_json::Error),
    /// A record has an empty `aliases` list.
    EmptyAliases { index: usize },
    /// A record carries a `sequence_type` outside 0..=2.
    UnknownSequenceType { index: usize, value: i64 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read emoji catalog: {err}"),
            Self::Json(err) => write!(f, "invalid emoji catalog data: {err}"),
            Self::EmptyAliases { index } => {
                write!(f, "emoji record {index} has no aliases")
            }
            Self::UnknownSequenceType { index, value } => {
                write!(f, "emoji record {index} has unknown sequence_type {value}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::EmptyAliases { .. } | Self::UnknownSequenceType { .. } => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
