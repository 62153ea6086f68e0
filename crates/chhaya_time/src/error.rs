//! Error types for date parsing.

/// Errors from parsing or validating calendar timestamps.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The text does not match `YYYY-MM-DD[Thh:mm[:ss[.fff]]][Z]`.
    #[error("malformed date '{0}': expected YYYY-MM-DD[Thh:mm[:ss]]")]
    Malformed(String),
    /// A field is outside its calendar range.
    #[error("date field out of range: {0}")]
    OutOfRange(&'static str),
}
