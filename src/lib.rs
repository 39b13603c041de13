//! # CanonJson
//!
//! A JSON prettifier that rewrites documents in a canonical form:
//!
//! - Object keys are sorted in ascending lexicographic order, recursively at
//!   every nesting level (array element order is left alone)
//! - Indentation is a fixed 2 spaces per level, every member of a non-empty
//!   container on its own line
//! - The output ends with exactly one trailing newline
//!
//! Reformatting never changes what the document means: the output parses back
//! to the same value as the input, so running the tool over a file tree is
//! safe and idempotent. It exists to keep hand-edited JSON resources in one
//! predictable shape so diffs stay small.
//!
//! ## Command-Line Tool
//!
//! This crate includes the `cjson` CLI tool, which prettifies a file in place:
//!
//! ```sh
//! # Install
//! cargo install canonjson
//!
//! # Rewrite a file in canonical form
//! cjson resources/scene.json
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use canonjson::Formatter;
//!
//! let formatter = Formatter::new();
//! let output = formatter.reformat(r#"{"b":1,"a":2}"#).unwrap();
//!
//! assert_eq!(output, "{\n  \"a\": 2,\n  \"b\": 1\n}\n");
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be rendered directly:
//!
//! ```rust
//! use canonjson::Formatter;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let output = Formatter::new().serialize(&player).unwrap();
//! ```
//!
//! ## Configuration
//!
//! Library callers can adjust the output shape through [`CanonJsonOptions`]:
//!
//! ```rust
//! use canonjson::{EolStyle, Formatter};
//!
//! let mut formatter = Formatter::new();
//! formatter.options.indent_spaces = 4;
//! formatter.options.json_eol_style = EolStyle::Lf;
//!
//! let output = formatter.reformat(r#"{"values":[1,2,3]}"#).unwrap();
//! ```

mod error;
mod formatter;
mod options;
mod writer;

pub use crate::error::{CanonJsonError, InputPosition};
pub use crate::formatter::Formatter;
pub use crate::options::{CanonJsonOptions, EolStyle};
