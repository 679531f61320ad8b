//! The payload-free outcome type

use std::fmt;

use crate::{Error, ValueOutcome};

/// The outcome of an operation that produces no payload: success, or failure
/// with an [`Error`].
///
/// An `Outcome` is built through its two factories and is immutable from then
/// on. A failure always holds an error and a success never does; no other
/// state is representable.
///
/// # Example
///
/// ```rust
/// use openresult::{Error, Outcome};
///
/// fn flush() -> Outcome {
///     Outcome::success()
/// }
///
/// let outcome = flush();
/// assert!(outcome.is_success());
/// assert!(outcome.error().is_none());
///
/// let failed = Outcome::failure(Error::new("disk full").with_code("DISK_FULL"));
/// if let Some(err) = failed.error() {
///     assert_eq!(err.code(), Some("DISK_FULL"));
/// }
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    error: Option<Error>,
}

impl Outcome {
    // =========================================================================
    // Factories
    // =========================================================================

    /// A successful outcome with no payload
    pub fn success() -> Self {
        Self { error: None }
    }

    /// A successful outcome carrying a payload.
    ///
    /// Sugar for [`ValueOutcome::success`], so call sites can use one factory
    /// name whether or not a payload exists.
    pub fn success_with<T>(value: T) -> ValueOutcome<T> {
        ValueOutcome::success(value)
    }

    /// A failed outcome carrying the given error
    pub fn failure(error: Error) -> Self {
        Self { error: Some(error) }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Whether the operation succeeded
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Whether the operation failed
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Get the error: `Some` exactly when the outcome is a failure
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => f.write_str("success"),
            Some(error) => write!(f, "failure: {}", error),
        }
    }
}
