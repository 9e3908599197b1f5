/// Source location information for error reporting.
///
/// Line and column numbers are 1-indexed. Tabs are expanded to four columns
/// so that the caret printed under `line_source` lines up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// Byte offset from the beginning of the source
    offset: usize,
    /// Line number where the error occurred (1-indexed)
    line: usize,
    /// Column number where the error occurred (1-indexed)
    column: usize,
    /// Optional length of the highlighted span
    length: Option<usize>,
    /// The source line content where the error occurred
    line_source: String,
}

impl ErrorLocation {
    fn new(source: &str, offset: usize, length: Option<usize>) -> Self {
        // the offset may point one past the last character, e.g. when the
        // input ended before a required value
        let offset = offset.min(source.len());

        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);

        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();

        // tabs already count as one column, add three more for each
        let column = offset - line_start + 1 + num_tabs * 3;

        let line = source[..offset].chars().filter(|c| *c == '\n').count() + 1;

        let line_source = source
            .lines()
            .nth(line - 1)
            .unwrap_or_default()
            .replace('\t', "    ");

        // multi-line highlights are not supported, clamp to the line
        let line_end = source[line_start..]
            .find('\n')
            .map_or(source.len(), |newline_idx| line_start + newline_idx);
        let length = length
            .filter(|length| *length > 0)
            .map(|length| length.min(line_end.saturating_sub(offset)).max(1));

        Self {
            offset,
            line,
            column,
            length,
            line_source,
        }
    }

    /// Creates a location pointing at a single character.
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, None)
    }

    /// Creates a location highlighting `length` bytes starting at `offset`.
    ///
    /// The highlight is clamped to the line containing `offset`.
    #[must_use]
    pub fn from_source_and_span(source: &str, offset: usize, length: usize) -> Self {
        Self::new(source, offset, Some(length))
    }

    /// Returns the byte offset from the beginning of the source
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number where the error occurred (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number where the error occurred (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the length of the highlighted span, defaulting to one character
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.unwrap_or(1)
    }

    /// Returns the source line content where the error occurred
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_offset() {
        let location = ErrorLocation::from_source_and_offset("Discharge at 5Q", 13);
        assert_eq!(location.line(), 1);
        assert_eq!(location.column(), 14);
        assert_eq!(location.length(), 1);
        assert_eq!(location.line_source(), "Discharge at 5Q");
    }

    #[test]
    fn second_line_offset() {
        let source = "Rest for 1 hour\nCharge at 1 A\n";
        let location = ErrorLocation::from_source_and_offset(source, 23);
        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 8);
        assert_eq!(location.line_source(), "Charge at 1 A");
    }

    #[test]
    fn offset_at_end_of_input() {
        let source = "Charge at";
        let location = ErrorLocation::from_source_and_offset(source, source.len());
        assert_eq!(location.line(), 1);
        assert_eq!(location.column(), 10);
        assert_eq!(location.line_source(), "Charge at");
    }

    #[test]
    fn tabs_are_expanded() {
        let location = ErrorLocation::from_source_and_offset("\tHold", 1);
        assert_eq!(location.column(), 5);
        assert_eq!(location.line_source(), "    Hold");
    }

    #[test]
    fn span_is_clamped_to_line() {
        let source = "Hold at 4.1 V\nRest for 1 hour";
        let location = ErrorLocation::from_source_and_span(source, 8, 100);
        assert_eq!(location.length(), 5);
    }
}
