// crates/ugeo-core/src/error.rs

//! Load-time errors.
//!
//! Queries never fail: a missing village, parish, subcounty or district is
//! reported as `None` or an empty slice. Everything here concerns getting the
//! dataset into memory (or writing a snapshot back out).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    /// The dataset file does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// The input is readable but cannot be used with the enabled features.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
