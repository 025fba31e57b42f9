//! Error adapter for converting YoungError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use young::{DiagramError, YoungError};

/// Adapter that renders a [`YoungError`] through miette.
///
/// Parse errors carry the offending partition text, which is shown as the
/// source snippet with a label covering it.
pub struct ErrorAdapter<'a>(pub &'a YoungError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            YoungError::Io(_) => "young::io",
            YoungError::Diagram(_) => "young::diagram",
            YoungError::Parse { .. } => "young::parse",
            YoungError::Config(_) => "young::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            YoungError::Parse { .. } => {
                "write the partition as row lengths separated by commas, e.g. `5,5,2,1`"
            }
            YoungError::Diagram(err) if err.is_invalid_partition() => {
                "row lengths must be positive and must not increase from one row to the next"
            }
            YoungError::Diagram(DiagramError::EmptyDiagram { .. }) => {
                "give at least one row, e.g. `1`"
            }
            YoungError::Config(_) => "check the [render] section of the configuration file",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match &self.0 {
            YoungError::Parse { input, .. } => Some(input as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match &self.0 {
            YoungError::Parse { input, reason } => {
                let span = SourceSpan::from(0..input.len());
                let label = LabeledSpan::new_primary_with_span(Some(reason.clone()), span);
                Some(Box::new(std::iter::once(label)))
            }
            _ => None,
        }
    }
}
