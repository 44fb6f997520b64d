use thiserror::Error;

/// Structural errors raised while building a header collection.
///
/// Everything else (casing, whitespace, empty values) is normalized rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// A raw line without a `:` separator, e.g. a status line.
    #[error("invalid HTTP header: {0}")]
    InvalidRawHeader(String),

    #[error("invalid name/value pair structure at index {index}")]
    InvalidPairStructure { index: usize },
}
