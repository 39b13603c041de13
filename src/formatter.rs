use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonJsonError;
use crate::options::CanonJsonOptions;
use crate::writer::CanonicalWriter;

/// Reformats JSON into canonical form.
///
/// This is the main entry point of the crate. Create one with
/// [`Formatter::new`], adjust [`Formatter::options`] if needed, then call
/// [`reformat`](Formatter::reformat) for text-to-text formatting or
/// [`reformat_file`](Formatter::reformat_file) to rewrite a file in place.
#[derive(Debug, Default)]
pub struct Formatter {
    /// Formatting options. Public so callers can tweak individual settings.
    pub options: CanonJsonOptions,
}

impl Formatter {
    pub fn new() -> Self {
        Self { options: CanonJsonOptions::default() }
    }

    /// Parses `input_json` and returns its canonical rendering.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is not valid JSON; the error carries
    /// the row and column of the failure.
    pub fn reformat(&self, input_json: &str) -> Result<String, CanonJsonError> {
        let value: Value = serde_json::from_str(input_json)?;
        CanonicalWriter::new(&self.options).write_document(&value)
    }

    /// Serializes any [`serde::Serialize`] value as canonical JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error when the value cannot be represented as JSON
    /// (for example a map with non-string keys).
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, CanonJsonError> {
        let value = serde_json::to_value(value)?;
        CanonicalWriter::new(&self.options).write_document(&value)
    }

    /// Rewrites the JSON file at `path` in place.
    ///
    /// The whole file is read and parsed before the path is reopened for
    /// writing, so a file that fails to parse is left untouched. The write
    /// truncates the original without temp-file staging; a failure mid-write
    /// can leave the file truncated.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, does not contain valid
    /// JSON, or cannot be written back.
    pub fn reformat_file(&self, path: impl AsRef<Path>) -> Result<(), CanonJsonError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path)
            .map_err(|e| CanonJsonError::simple(format!("cannot read '{}': {}", path.display(), e)))?;
        let output = self.reformat(&input)?;
        fs::write(path, &output)
            .map_err(|e| CanonJsonError::simple(format!("cannot write '{}': {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use serde::Serialize;

    use super::*;

    #[test]
    fn reformat_sorts_and_indents() {
        let formatter = Formatter::new();
        let out = formatter.reformat(r#"{"b":1,"a":2}"#).unwrap();
        assert_eq!(out, "{\n  \"a\": 2,\n  \"b\": 1\n}\n");
    }

    #[test]
    fn reformat_sorts_nested_objects() {
        let formatter = Formatter::new();
        let out = formatter.reformat(r#"{"z":{"b":2,"a":1}}"#).unwrap();
        assert_eq!(out, "{\n  \"z\": {\n    \"a\": 1,\n    \"b\": 2\n  }\n}\n");
    }

    #[test]
    fn reformat_is_idempotent() {
        let formatter = Formatter::new();
        let once = formatter.reformat(r#"{"b":[3,1,2],"a":{"y":null,"x":true}}"#).unwrap();
        let twice = formatter.reformat(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn reformat_preserves_semantics() {
        let input = r#"{"b":[3,1,2],"a":{"n":1.25,"s":"x\ny","t":false,"v":null}}"#;
        let formatter = Formatter::new();
        let out = formatter.reformat(input).unwrap();
        let before: Value = serde_json::from_str(input).unwrap();
        let after: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn reformat_emits_exactly_one_trailing_newline() {
        let formatter = Formatter::new();
        assert_eq!(formatter.reformat("{}").unwrap(), "{}\n");
        assert_eq!(formatter.reformat("{}\n\n\n").unwrap(), "{}\n");
    }

    #[test]
    fn reformat_rejects_invalid_json_with_position() {
        let formatter = Formatter::new();
        let err = formatter.reformat("{bad}").unwrap_err();
        let pos = err.input_position.expect("parse errors carry a position");
        assert_eq!(pos.row, 0);
    }

    #[test]
    fn reformat_rejects_trailing_garbage() {
        let formatter = Formatter::new();
        assert!(formatter.reformat("{} {}").is_err());
    }

    #[test]
    fn serialize_formats_rust_values() {
        #[derive(Serialize)]
        struct Player {
            name: String,
            scores: Vec<i32>,
        }

        let player = Player { name: "Alice".into(), scores: vec![95, 87] };
        let out = Formatter::new().serialize(&player).unwrap();
        assert_eq!(
            out,
            "{\n  \"name\": \"Alice\",\n  \"scores\": [\n    95,\n    87\n  ]\n}\n"
        );
    }

    #[test]
    fn reformat_file_rewrites_in_place() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("data.json");
        file.write_str(r#"{"b":1,"a":2}"#).unwrap();

        Formatter::new().reformat_file(file.path()).unwrap();

        file.assert("{\n  \"a\": 2,\n  \"b\": 1\n}\n");
    }

    #[test]
    fn reformat_file_leaves_invalid_input_untouched() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("bad.json");
        file.write_str("{bad}").unwrap();

        let err = Formatter::new().reformat_file(file.path()).unwrap_err();
        assert!(err.input_position.is_some());

        file.assert("{bad}");
    }

    #[test]
    fn reformat_file_reports_missing_path() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.child("absent.json");

        let err = Formatter::new().reformat_file(missing.path()).unwrap_err();
        assert!(err.message.contains("cannot read"));
    }
}
