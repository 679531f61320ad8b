//! The chainable error value

use std::fmt;

/// An immutable description of a failure.
///
/// An `Error` carries:
/// - `message`: human-readable description of what went wrong
/// - `code`: optional identifier for programmatic matching
/// - `fault`: optional captured native fault that triggered this error
/// - `inner`: optional deeper cause, forming a singly-linked chain
///
/// All fields are fixed at construction. Errors compare structurally, so two
/// independently built errors with the same content are equal.
///
/// # Example
///
/// ```rust
/// use openresult::Error;
///
/// let err = Error::new("page 'context' not loaded")
///     .with_code("PAGE_NOT_FOUND")
///     .with_inner(Error::new("cache miss"));
///
/// assert_eq!(err.code(), Some("PAGE_NOT_FOUND"));
/// assert_eq!(err.root().message(), "cache miss");
/// ```
pub struct Error {
    message: String,
    code: Option<String>,
    fault: Option<anyhow::Error>,
    inner: Option<Box<Error>>,
}

impl Error {
    /// Create a new error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            fault: None,
            inner: None,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the error code (if any)
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Get the captured fault (if any)
    pub fn fault(&self) -> Option<&anyhow::Error> {
        self.fault.as_ref()
    }

    /// Get the next error in the cause chain (if any)
    pub fn inner(&self) -> Option<&Error> {
        self.inner.as_deref()
    }

    // =========================================================================
    // Builders (chainable)
    // =========================================================================

    /// Set the error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Chain a deeper cause onto this error
    pub fn with_inner(mut self, inner: Error) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }

    /// Capture the native fault that triggered this error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if a fault was already captured.
    pub fn set_fault(mut self, fault: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.fault.is_none(), "fault already captured");
        self.fault = Some(fault.into());
        self
    }

    // =========================================================================
    // Chain queries
    // =========================================================================

    /// Walk the cause chain to its deepest error.
    ///
    /// An error with no inner cause is its own root. The chain is held by
    /// exclusive ownership, so it cannot contain a cycle and the walk always
    /// terminates.
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Some(inner) = current.inner.as_deref() {
            current = inner;
        }
        current
    }

    /// Check whether a native fault was captured for this error
    pub fn is_exceptional(&self) -> bool {
        self.fault.is_some()
    }
}

impl Default for Error {
    /// An error with an empty message and no code, fault, or cause
    fn default() -> Self {
        Self::new("")
    }
}

// =============================================================================
// Equality - structural, recursing through the cause chain
// =============================================================================

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        // Captured faults have no structural identity of their own; they
        // compare by their rendered chain text.
        let faults_equal = match (&self.fault, &other.fault) {
            (None, None) => true,
            (Some(a), Some(b)) => format!("{a:#}") == format!("{b:#}"),
            _ => false,
        };

        self.message == other.message
            && self.code == other.code
            && faults_equal
            && self.inner == other.inner
    }
}

impl Eq for Error {}

// =============================================================================
// Display - compact, single-line format for logs
// =============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(code) = &self.code {
            write!(f, " [{}]", code)?;
        }

        if let Some(fault) = &self.fault {
            write!(f, ", fault: {}", fault)?;
        }

        if let Some(inner) = &self.inner {
            write!(f, " => {}", inner)?;
        }

        Ok(())
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;

        if let Some(code) = &self.code {
            writeln!(f, "    Code: {}", code)?;
        }

        if let Some(fault) = &self.fault {
            writeln!(f, "    Fault: {:?}", fault)?;
        }

        if let Some(inner) = &self.inner {
            writeln!(f, "    Inner: {:?}", inner)?;
        }

        Ok(())
    }
}

// =============================================================================
// std::error::Error implementation
// =============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Some(fault) = &self.fault {
            return Some(fault.as_ref() as &(dyn std::error::Error + 'static));
        }
        self.inner
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fields_are_empty() {
        let err = Error::default();
        assert_eq!(err.message(), "");
        assert!(err.code().is_none());
        assert!(err.fault().is_none());
        assert!(err.inner().is_none());
    }

    #[test]
    fn test_construction_with_all_fields() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::new("test")
            .with_code("CODE")
            .with_inner(Error::new("inner"))
            .set_fault(io_err);

        assert_eq!(err.message(), "test");
        assert_eq!(err.code(), Some("CODE"));
        assert!(err.fault().is_some());
        assert_eq!(err.inner().map(Error::message), Some("inner"));
    }

    #[test]
    fn test_root_returns_self_when_no_inner() {
        let err = Error::new("lonely");
        assert!(std::ptr::eq(err.root(), &err));
    }

    #[test]
    fn test_root_returns_deepest_inner() {
        let outer = Error::new("Outer").with_inner(Error::new("Mid").with_inner(Error::new("Root")));

        assert_eq!(outer.root().message(), "Root");
        assert_eq!(outer.inner().unwrap().root().message(), "Root");
    }

    #[test]
    fn test_all_chain_links_accessible() {
        let outer =
            Error::new("Outer").with_inner(Error::new("Middle").with_inner(Error::new("InnerMost")));

        assert_eq!(outer.message(), "Outer");
        assert_eq!(outer.inner().map(Error::message), Some("Middle"));
        assert_eq!(
            outer.inner().and_then(Error::inner).map(Error::message),
            Some("InnerMost")
        );
    }

    #[test]
    fn test_is_exceptional_with_fault() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::new("msg").set_fault(io_err);

        assert!(err.is_exceptional());
        assert!(err.fault().is_some());
        assert_eq!(err.fault().unwrap().to_string(), "denied");
    }

    #[test]
    fn test_is_exceptional_without_fault() {
        let err = Error::new("msg");
        assert!(!err.is_exceptional());
        assert!(err.fault().is_none());
    }

    #[test]
    fn test_structural_equality() {
        let a = Error::new("bad").with_code("B").with_inner(Error::new("cause"));
        let b = Error::new("bad").with_code("B").with_inner(Error::new("cause"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_inequality_on_differing_fields() {
        let base = Error::new("bad");
        assert_ne!(base, Error::new("worse"));
        assert_ne!(base, Error::new("bad").with_code("B"));
        assert_ne!(base, Error::new("bad").with_inner(Error::new("cause")));
    }

    #[test]
    fn test_fault_equality_by_rendered_text() {
        let a = Error::new("bad")
            .set_fault(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let b = Error::new("bad")
            .set_fault(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let c = Error::new("bad")
            .set_fault(std::io::Error::new(std::io::ErrorKind::NotFound, "other"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Error::new("bad"));
    }

    #[test]
    fn test_display_compact() {
        let err = Error::new("load failed")
            .with_code("LOAD")
            .with_inner(Error::new("disk offline"));

        let display = format!("{}", err);
        assert!(display.contains("load failed"));
        assert!(display.contains("[LOAD]"));
        assert!(display.contains("disk offline"));
    }

    #[test]
    fn test_source_prefers_fault() {
        use std::error::Error as _;

        let err = Error::new("outer")
            .set_fault(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.source().unwrap().to_string(), "gone");

        let chained = Error::new("outer").with_inner(Error::new("cause"));
        assert_eq!(chained.source().unwrap().to_string(), "cause");

        assert!(Error::new("alone").source().is_none());
    }
}
