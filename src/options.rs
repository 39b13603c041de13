/// Line ending style for the formatted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EolStyle {
    /// Windows-style line endings (`\r\n`).
    Crlf,
    /// Unix-style line endings (`\n`).
    Lf,
}

/// Configuration options for canonical serialization.
///
/// The defaults describe the on-disk contract the `cjson` tool produces:
/// 2-space indentation and Unix line endings. The CLI never exposes these;
/// they exist for library callers embedding the formatter.
///
/// # Example
///
/// ```rust
/// use canonjson::{CanonJsonOptions, EolStyle};
///
/// let mut options = CanonJsonOptions::default();
/// options.indent_spaces = 4;
/// options.json_eol_style = EolStyle::Crlf;
/// ```
#[derive(Debug, Clone)]
pub struct CanonJsonOptions {
    /// Number of spaces per indentation level. Default: 2.
    pub indent_spaces: usize,

    /// Line ending style for the output. Default: [`EolStyle::Lf`].
    pub json_eol_style: EolStyle,
}

impl Default for CanonJsonOptions {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            json_eol_style: EolStyle::Lf,
        }
    }
}

impl CanonJsonOptions {
    /// Creates a new `CanonJsonOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`], but may include
    /// improved defaults in future versions without breaking compatibility.
    pub fn recommended() -> Self {
        Self::default()
    }
}
