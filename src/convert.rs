use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::flatten::DEFAULT_DEPTH_LIMIT;
use crate::flow_yaml;

/// Target encodings for [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact JSON with all inter-token whitespace removed.
    MinifiedJson,
    /// Single-line flow-style YAML with minimal punctuation and quoting.
    FlowYaml,
}

impl OutputFormat {
    /// File suffix used for derived output names.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::MinifiedJson => ".min.json",
            OutputFormat::FlowYaml => ".yaml",
        }
    }

    /// Upper-case name shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            OutputFormat::MinifiedJson => "JSON",
            OutputFormat::FlowYaml => "YAML",
        }
    }
}

/// Renders `value` in the requested format.
pub fn convert(value: &Value, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::MinifiedJson => to_minified(value),
        OutputFormat::FlowYaml => to_flow(value),
    }
}

/// Renders any [`serde::Serialize`] type without a JSON string round trip.
pub fn convert_serializable<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let value = serde_json::to_value(value)?;
    convert(&value, format)
}

/// Minified JSON: `{"a":1,"b":[2,3]}`. Key order and non-ASCII text are
/// preserved, and the output parses back to the identical value.
pub fn to_minified(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Flow-style YAML: `{a: 1, b: [2, 3]}` on a single line.
pub fn to_flow(value: &Value) -> Result<String> {
    flow_yaml::emit_document(value, DEFAULT_DEPTH_LIMIT)
}
