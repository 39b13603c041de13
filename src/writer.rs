use serde_json::Value;

use crate::error::CanonJsonError;
use crate::options::{CanonJsonOptions, EolStyle};

/// Serializes a [`serde_json::Value`] tree as canonical text.
///
/// Canonical form: object keys in ascending lexicographic order at every
/// nesting depth, every member of a non-empty container on its own line at a
/// fixed indent per level, empty containers on one line, and a single
/// trailing newline after the document. Array element order is preserved.
pub struct CanonicalWriter {
    indent_size: usize,
    indent_strings: Vec<String>,
    eol: &'static str,
    buffer: String,
}

impl CanonicalWriter {
    pub fn new(options: &CanonJsonOptions) -> Self {
        let eol = match options.json_eol_style {
            EolStyle::Crlf => "\r\n",
            EolStyle::Lf => "\n",
        };
        Self {
            indent_size: options.indent_spaces,
            indent_strings: vec![String::new()],
            eol,
            buffer: String::new(),
        }
    }

    /// Writes the whole document, including the trailing end-of-line.
    pub fn write_document(mut self, value: &Value) -> Result<String, CanonJsonError> {
        self.write_value(value, 0)?;
        self.buffer.push_str(self.eol);
        Ok(self.buffer)
    }

    fn write_value(&mut self, value: &Value, depth: usize) -> Result<(), CanonJsonError> {
        match value {
            Value::Null => self.buffer.push_str("null"),
            Value::Bool(true) => self.buffer.push_str("true"),
            Value::Bool(false) => self.buffer.push_str("false"),
            Value::Number(num) => self.buffer.push_str(&num.to_string()),
            Value::String(text) => self.write_string(text)?,
            Value::Array(items) => self.write_array(items, depth)?,
            Value::Object(members) => self.write_object(members, depth)?,
        }
        Ok(())
    }

    fn write_array(&mut self, items: &[Value], depth: usize) -> Result<(), CanonJsonError> {
        if items.is_empty() {
            self.buffer.push_str("[]");
            return Ok(());
        }

        self.buffer.push('[');
        self.buffer.push_str(self.eol);
        for (i, item) in items.iter().enumerate() {
            self.push_indent(depth + 1);
            self.write_value(item, depth + 1)?;
            if i + 1 < items.len() {
                self.buffer.push(',');
            }
            self.buffer.push_str(self.eol);
        }
        self.push_indent(depth);
        self.buffer.push(']');
        Ok(())
    }

    fn write_object(
        &mut self,
        members: &serde_json::Map<String, Value>,
        depth: usize,
    ) -> Result<(), CanonJsonError> {
        if members.is_empty() {
            self.buffer.push_str("{}");
            return Ok(());
        }

        // Key order must not depend on how serde_json's map happens to be
        // backed, so the members are sorted here rather than taken in
        // iteration order.
        let mut sorted: Vec<(&String, &Value)> = members.iter().collect();
        sorted.sort_unstable_by_key(|(name, _)| *name);

        self.buffer.push('{');
        self.buffer.push_str(self.eol);
        for (i, (name, value)) in sorted.iter().enumerate() {
            self.push_indent(depth + 1);
            self.write_string(name)?;
            self.buffer.push_str(": ");
            self.write_value(value, depth + 1)?;
            if i + 1 < sorted.len() {
                self.buffer.push(',');
            }
            self.buffer.push_str(self.eol);
        }
        self.push_indent(depth);
        self.buffer.push('}');
        Ok(())
    }

    fn write_string(&mut self, text: &str) -> Result<(), CanonJsonError> {
        let quoted = serde_json::to_string(text)?;
        self.buffer.push_str(&quoted);
        Ok(())
    }

    fn push_indent(&mut self, depth: usize) {
        while self.indent_strings.len() <= depth {
            let next = " ".repeat(self.indent_strings.len() * self.indent_size);
            self.indent_strings.push(next);
        }
        self.buffer.push_str(&self.indent_strings[depth]);
    }
}
