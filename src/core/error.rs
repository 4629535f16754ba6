// error.rs - Error types for the filtering core

use thiserror::Error;

/// Errors raised by the alignment filter.
///
/// Every variant is detected before any sequence or column is touched,
/// so a failed call never leaves partial output behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Alignment has no taxa")]
    EmptyAlignment,

    #[error("Ragged alignment: taxon '{taxon}' has length {actual}, expected {expected}")]
    RaggedAlignment {
        taxon: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Duplicate taxon identifier '{0}'")]
    DuplicateTaxon(String),

    #[error("Filtering cancelled at column {column} of {total}")]
    Cancelled { column: usize, total: usize },
}

/// Result type alias for filtering operations.
pub type Result<T> = std::result::Result<T, FilterError>;

impl From<FilterError> for String {
    fn from(e: FilterError) -> Self {
        e.to_string()
    }
}
