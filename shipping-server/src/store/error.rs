//! City store error types.

use std::path::PathBuf;

use crate::domain::{CityId, RegionCode};

/// Errors that can occur when loading or querying city reference data.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading the data file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the reference data JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A record failed validation
    #[error("invalid city record {id}: {message}")]
    InvalidRecord { id: CityId, message: String },

    /// A country record failed validation
    #[error("invalid code record {code:?}: {message}")]
    InvalidCode { code: String, message: String },

    /// Two records share an id
    #[error("duplicate city id {0}")]
    DuplicateId(CityId),

    /// Two country records share a code
    #[error("duplicate code {0}")]
    DuplicateCode(RegionCode),

    /// The backing store could not answer
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
