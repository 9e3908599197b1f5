//! Error message formatting and display functionality
//
//       error: unknown unit `Q` in `5Q`
//        --> protocol.txt:4:16
//         |
//       4 |   Discharge at 5Q for 1 hour
//         |                ^-
//         = help: try one of the example instructions
//

use anstream::eprintln;
use cycler_error::{Context, CyclerError, ErrorLocation};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// Prints a formatted error message to stderr
pub fn print(error: &CyclerError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
    } else {
        let error_string = error_to_string(error);
        eprintln!("{error_string}");
    }
}

/// Prints an error that has no source to point at, e.g. an unreadable file
pub fn print_message(message: &str) {
    let message_line = get_error_message_line(message);
    eprintln!("{message_line}");
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &CyclerError) -> String {
    let message_line = get_error_message_line(error.message());
    let location_line = get_location_line(error.origin(), error.location());
    let detail_lines = error.location().map_or_else(
        || get_context_lines(" ", error.context()),
        |location| get_source_lines(location, error.context()),
    );

    let mut lines = vec![message_line, location_line];
    lines.extend(detail_lines);
    lines.push(String::new());

    lines.join("\n")
}

fn get_error_message_line(message: &str) -> String {
    get_message_line("error", stylesheet::ERROR_COLOR, message)
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}

/// Formats the location information line
fn get_location_line(origin: &str, location: Option<&ErrorLocation>) -> String {
    //  --> <origin>
    // OR
    //  --> <origin>:<line>:<column>
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");

    location.map_or_else(
        || format!(" {arrow} {origin}"),
        |location| format!(" {arrow} {origin}:{}:{}", location.line(), location.column()),
    )
}

/// Formats the source code snippet with error highlighting
fn get_source_lines(location: &ErrorLocation, context: &[Context]) -> Vec<String> {
    //   |
    // 1 | Discharge at 5Q for 1 hour
    //   |              ^-
    let line = location.line();

    // one column per digit of the line number
    let margin_width = line.ilog10() + 1;
    let margin = " ".repeat(margin_width as usize);

    let bar = stylesheet::SOURCE_ANNOTATION.style("|");
    let line_label = stylesheet::SOURCE_ANNOTATION.style(line.to_string());

    let pointer_indent = " ".repeat(location.column() - 1);
    let pointer = stylesheet::ERROR_COLOR.bold().style("^");
    let pointer_rest = stylesheet::ERROR_COLOR
        .bold()
        .style("-".repeat(location.length() - 1));

    let mut lines = vec![
        format!("{margin} {bar} "),
        format!("{line_label} {bar} {}", location.line_source()),
        format!("{margin} {bar} {pointer_indent}{pointer}{pointer_rest}"),
    ];
    lines.extend(get_context_lines(&margin, context));

    lines
}

fn get_context_lines(margin: &str, context: &[Context]) -> Vec<String> {
    context
        .iter()
        .map(|context| {
            let color = match context {
                Context::Note(_) => stylesheet::NOTE_COLOR,
                Context::Help(_) => stylesheet::HELP_COLOR,
            };
            let equals = color.bold().style("=");
            let message_line = get_message_line(context.label(), color, context.text());
            format!("{margin} {equals} {message_line}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use anstream::adapter::strip_str;

    use super::*;
    use crate::protocol::{StepDefaults, parse_protocol};

    fn render(source: &str) -> String {
        let results = parse_protocol(source, "protocol.txt", &StepDefaults::default());
        let error = results
            .into_iter()
            .find_map(Result::err)
            .expect("should contain an error");
        strip_str(&error_to_string(&error)).to_string()
    }

    #[test]
    fn error_points_at_the_file_line() {
        let rendered = render("Rest for 1 hour\n\n  Discharge at 5Q for 1 hour\n");
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("error: "));
        assert_eq!(lines[1], " --> protocol.txt:3:16");
        assert_eq!(lines[2], "  | ");
        assert_eq!(lines[3], "3 |   Discharge at 5Q for 1 hour");
        assert_eq!(lines[4], "  |                ^-");
    }

    #[test]
    fn context_follows_the_pointer() {
        let rendered = render("Dance at 1 A for 1 hour");
        assert!(
            rendered
                .lines()
                .skip(5)
                .any(|line| line.starts_with("  = help: ") || line.starts_with("  = note: "))
        );
    }
}
