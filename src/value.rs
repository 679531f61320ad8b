//! The value-carrying outcome type

use crate::Error;

/// The outcome of an operation that produces a payload: success with a `T`,
/// or failure with an [`Error`].
///
/// Like [`Outcome`](crate::Outcome), a `ValueOutcome` is built through its two
/// factories and is immutable from then on. A success always holds a value and
/// a failure always holds an error; the factories take both by value, so
/// nothing else can be constructed.
///
/// # Example
///
/// ```rust
/// use openresult::{Error, ValueOutcome};
///
/// fn parse_port(raw: &str) -> ValueOutcome<u16> {
///     match raw.parse() {
///         Ok(port) => ValueOutcome::success(port),
///         Err(e) => ValueOutcome::failure(
///             Error::new(format!("invalid port '{raw}'")).set_fault(e),
///         ),
///     }
/// }
///
/// assert_eq!(parse_port("8080").value(), Some(&8080));
/// assert!(parse_port("zero").error().unwrap().is_exceptional());
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct ValueOutcome<T> {
    value: Option<T>,
    error: Option<Error>,
}

impl<T> ValueOutcome<T> {
    // =========================================================================
    // Factories
    // =========================================================================

    /// A successful outcome carrying the given value
    pub fn success(value: T) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    /// A failed outcome carrying the given error
    pub fn failure(error: Error) -> Self {
        Self {
            value: None,
            error: Some(error),
        }
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

    /// Get the payload: `Some` exactly when the outcome is a success
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the outcome and take ownership of the payload
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// Get the error: `Some` exactly when the outcome is a failure
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }
}
