//! Error types for recordqlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a dataset or selecting a query.
///
/// The queries themselves never fail: an empty collection yields the
/// documented zero value. Errors only arise at the boundary, where input
/// is read, parsed, or a query is named.
#[derive(Error, Debug)]
pub enum RecordqError {
    /// Failed to read a dataset file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset JSON is malformed (includes missing or null collections)
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Query name not recognised
    #[error("unknown {kind} query: {name}")]
    UnknownQuery { kind: &'static str, name: String },

    /// Query needs a parameter that was not supplied
    #[error("query '{query}' requires --{parameter}")]
    MissingParameter {
        query: String,
        parameter: &'static str,
    },
}
