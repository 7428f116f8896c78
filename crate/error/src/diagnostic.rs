use crate::location::Location;
use colored::Colorize;

/// A location-tagged diagnostic produced by scanning, parsing or validation
///
/// Diagnostics are plain values: they are cloned, compared and collected into
/// vectors rather than thrown. An empty diagnostic vector denotes success.
/// Ordering follows the location first, then the message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
#[error("{location}: {message}")]
pub struct TemplateError {
    /// Where the problem was discovered
    pub location: Location,
    /// Human-readable description of the problem
    pub message: String,
}

impl TemplateError {
    /// Creates a new diagnostic at the given location
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        TemplateError {
            location,
            message: message.into(),
        }
    }
}

/// Prints a list of diagnostics to stderr, one line per error
///
/// ### Arguments
/// * `errors` - The diagnostics to report, in discovery order
pub fn report_errors(errors: &[TemplateError]) {
    for error in errors {
        eprintln!(
            "{} {} {}",
            "error:".red().bold(),
            error.location.to_string().dimmed(),
            error.message
        );
    }
    if !errors.is_empty() {
        eprintln!("{}", format!("{} error(s) generated", errors.len()).red());
    }
}
