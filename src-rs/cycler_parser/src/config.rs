/// Configuration for the instruction parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Require actions to be written exactly as `Discharge`, `Charge`,
    /// `Hold` or `Rest`.
    ///
    /// By default the first letter may also be lower case.
    pub strict_capitalization: bool,
}

impl ParseConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_capitalization: false,
        }
    }

    /// Returns a configuration that only accepts capitalized actions.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            strict_capitalization: true,
        }
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
