//! Unified error reporting for Cycler
//!
//! Each crate in the workspace has its own error type. All of them implement
//! [`AsCyclerError`], which lets front ends turn any of them into a
//! [`CyclerError`] carrying a message, an optional source location, and
//! notes or help text.

mod context;
mod location;
mod traits;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsCyclerError;

/// The broad class an error belongs to.
///
/// Callers use this to decide whether to abort building an experiment or to
/// ask the user for corrected input. No error is ever retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A structural violation, e.g. a drive cycle table with the wrong shape
    Validation,
    /// An unrecognized unit suffix, timestamp format, or instruction
    Parse,
    /// A malformed numeric literal
    NumericParse,
}

impl ErrorCategory {
    /// Returns a short lowercase name, e.g. `numeric-parse`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Parse => "parse",
            Self::NumericParse => "numeric-parse",
        }
    }
}

/// An error prepared for display to a user.
///
/// `origin` names where the failing input came from, usually a protocol file
/// path or `<stdin>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclerError {
    origin: String,
    category: ErrorCategory,
    message: String,
    location: Option<ErrorLocation>,
    context: Vec<Context>,
}

impl CyclerError {
    /// Creates a `CyclerError` without source location information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cycler_error::{AsCyclerError, CyclerError, ErrorCategory};
    ///
    /// struct SimpleError;
    ///
    /// impl AsCyclerError for SimpleError {
    ///     fn message(&self) -> String {
    ///         "something went wrong".to_string()
    ///     }
    ///
    ///     fn category(&self) -> ErrorCategory {
    ///         ErrorCategory::Validation
    ///     }
    /// }
    ///
    /// let error = CyclerError::from_error(&SimpleError, "protocol.txt");
    /// assert_eq!(error.message(), "something went wrong");
    /// assert!(error.location().is_none());
    /// ```
    pub fn from_error(error: &impl AsCyclerError, origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            category: error.category(),
            message: error.message(),
            location: None,
            context: error.context(),
        }
    }

    /// Creates a `CyclerError`, resolving the error location against `source`.
    pub fn from_error_with_source(
        error: &impl AsCyclerError,
        origin: impl Into<String>,
        source: &str,
    ) -> Self {
        Self {
            origin: origin.into(),
            category: error.category(),
            message: error.message(),
            location: error.error_location(source),
            context: error.context(),
        }
    }

    /// Replaces the location, e.g. to shift it to the right line of a file.
    #[must_use]
    pub fn with_location(self, location: Option<ErrorLocation>) -> Self {
        Self { location, ..self }
    }

    /// Returns where the failing input came from
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the class of the error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location, if known
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the notes and help text attached to the error
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
