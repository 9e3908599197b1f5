use crate::{Context, ErrorCategory, ErrorLocation};

/// Trait for errors that can be reported to a Cycler user.
///
/// Every error type in the workspace implements this so that the CLI can
/// render them uniformly: a message line, an optional source location, and
/// any notes or help text.
pub trait AsCyclerError {
    /// Returns the primary error message.
    ///
    /// This should be a concise description of what went wrong, without
    /// trailing punctuation.
    fn message(&self) -> String;

    /// Returns the class of the error.
    fn category(&self) -> ErrorCategory;

    /// Returns additional context about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the error within `source`, if the error knows
    /// where it happened.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }
}
