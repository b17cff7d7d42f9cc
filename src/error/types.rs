use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the cabinet layout crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced on the checked planning path.
///
/// `allocate` and `split` never produce these; they are total over any input.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("total width must be a positive finite number, got {0}")]
    InvalidTotalWidth(f64),
    #[error("unit id `{0}` appears more than once")]
    DuplicateUnitId(String),
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
}
