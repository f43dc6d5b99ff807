//! # LeanJson
//!
//! Token-economical JSON conversion for LLM prompts.
//!
//! LeanJson re-encodes JSON data into representations that cost fewer tokens
//! under the `cl100k_base` BPE encoding, and reports exactly how much each
//! conversion saves:
//!
//! - **Flattening** turns a document into minimal-punctuation `key:value`
//!   text. Braces and quoting disappear entirely, so the result is for
//!   prompt stuffing, not for parsing back.
//! - **Optimization** re-encodes the same data losslessly, as minified JSON
//!   or as single-line flow-style YAML, both of which parse back to the
//!   original value.
//!
//! ## Command-Line Tools
//!
//! Two binaries ship with the crate:
//!
//! ```sh
//! # Flatten a file; --save writes data_flat.txt next to it
//! jflat data.json --save
//!
//! # Re-encode as flow YAML (the default) or minified JSON
//! jopt data.json --save
//! jopt data.json --format json
//!
//! # Optimize every *.json file directly inside a directory
//! jopt configs/ --format yaml --save
//! ```
//!
//! Both tools print a per-file savings report and exit non-zero if any
//! requested file could not be converted.
//!
//! ## Quick Start
//!
//! ```rust
//! use leanjson::{flatten, to_flow, to_minified};
//! use serde_json::json;
//!
//! let value = json!({"user": {"name": "Alice", "roles": ["admin", "dev"]}});
//!
//! assert_eq!(
//!     flatten(&value).unwrap(),
//!     "user:name:Alice, roles:[admin, dev]"
//! );
//! assert_eq!(
//!     to_minified(&value).unwrap(),
//!     r#"{"user":{"name":"Alice","roles":["admin","dev"]}}"#
//! );
//! assert_eq!(
//!     to_flow(&value).unwrap(),
//!     "{user: {name: Alice, roles: [admin, dev]}}"
//! );
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be converted directly:
//!
//! ```rust
//! use leanjson::{convert_serializable, OutputFormat};
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
//! let yaml = convert_serializable(&player, OutputFormat::FlowYaml).unwrap();
//! assert_eq!(yaml, "{name: Alice, scores: [95, 87, 92]}");
//! ```
//!
//! ## Measuring Savings
//!
//! A [`TokenCounter`] prefers the real BPE encoding and silently degrades to
//! a character-based estimate when the encoding cannot be loaded, so token
//! accounting always works:
//!
//! ```rust
//! use leanjson::{compare, PreviewStyle, TokenCounter};
//!
//! let counter = TokenCounter::new();
//! let report = compare(&counter, r#"{"a": 1, "b": [2, 3]}"#, "a:1, b:[2, 3]", PreviewStyle::Flattened);
//!
//! assert_eq!(report.tokens_saved, report.tokens_before as i64 - report.tokens_after as i64);
//! assert_eq!(report.preview, "a:1, b:[2, 3]");
//! ```
//!
//! ## Key Order
//!
//! Object keys keep their document order through every conversion; nothing
//! is ever sorted.

mod convert;
mod error;
mod flatten;
mod flow_yaml;
mod pipeline;
mod report;
mod tokenizer;

pub use crate::convert::{convert, convert_serializable, to_flow, to_minified, OutputFormat};
pub use crate::error::{LeanJsonError, Result};
pub use crate::flatten::{flatten, flatten_with_depth, DEFAULT_DEPTH_LIMIT};
pub use crate::pipeline::{process_directory, process_file, BatchSummary, Conversion, FileOutcome};
pub use crate::report::{compare, PreviewStyle, ReportKind, SavingsReport};
pub use crate::tokenizer::TokenCounter;
