use std::fmt::{self, Display};

/// A position within the JSON input text.
///
/// Reported for parse failures so callers can point at the offending spot.
/// Both values are zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPosition {
    /// Line number (zero-indexed, so first line is 0).
    pub row: usize,
    /// Column number within the line (zero-indexed).
    pub column: usize,
}

/// The error type for everything that can go wrong while prettifying:
/// unreadable input, invalid JSON, or a failed write of the result.
#[derive(Debug, Clone)]
pub struct CanonJsonError {
    pub message: String,
    pub input_position: Option<InputPosition>,
}

impl CanonJsonError {
    pub fn new(message: impl Into<String>, pos: Option<InputPosition>) -> Self {
        let message = message.into();
        let message = if let Some(p) = pos {
            format!("{} at row={}, col={}", message, p.row, p.column)
        } else {
            message
        };
        Self { message, input_position: pos }
    }

    pub fn simple(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }
}

impl Display for CanonJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CanonJsonError {}

impl From<serde_json::Error> for CanonJsonError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports 1-indexed lines; line 0 means no position is
        // available. Its message already names the line and column, so it is
        // kept verbatim rather than re-rendered through `new`.
        let pos = if err.line() > 0 {
            Some(InputPosition {
                row: err.line() - 1,
                column: err.column().saturating_sub(1),
            })
        } else {
            None
        };
        Self { message: err.to_string(), input_position: pos }
    }
}
