/// Extra information attached to an error message.
///
/// Errors in Cycler usually come from user-written experiment instructions,
/// so most of them carry a [`Context::Help`] with example syntax that the
/// user can copy.
///
/// # Examples
///
/// ```rust
/// use cycler_error::Context;
///
/// let note = Context::Note("drive cycles derive their own duration".to_string());
/// let help = Context::Help("try `Discharge at 1C for 0.5 hours`".to_string());
///
/// assert_ne!(note, help);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information about the error.
    Note(String),

    /// A suggestion for resolving the error, typically example syntax.
    Help(String),
}

impl Context {
    /// Returns the label used when the context is rendered (`note` or `help`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Note(_) => "note",
            Self::Help(_) => "help",
        }
    }

    /// Returns the text of the context.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Note(text) | Self::Help(text) => text,
        }
    }
}
