/// Alias for `Result<T, BkError>`.
pub type BkResult<T> = Result<T, BkError>;

/// Errors that can occur when reading properties from text.
///
/// Building never fails; only parsing kinds and assignments does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BkError {
    /// A property kind was given as an empty string.
    #[error("property kind must not be empty")]
    EmptyKind,

    /// An assignment was not of the form `KIND=VALUE`.
    #[error("malformed assignment: \"{0}\" (expected KIND=VALUE)")]
    MalformedAssignment(String),
}
