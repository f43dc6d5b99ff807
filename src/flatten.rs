use serde_json::Value;

use crate::error::{LeanJsonError, Result};

/// Maximum nesting depth accepted by [`flatten`] and the format converters.
pub const DEFAULT_DEPTH_LIMIT: usize = 1000;

/// Renders a JSON value as minimal-punctuation text.
///
/// Mappings lose their braces and quotes and become `key:value` pairs joined
/// by `", "`; lists keep square brackets; `null`, `true` and `false` stay
/// literal; strings and numbers appear in natural form with surrounding
/// whitespace trimmed.
///
/// ```
/// use serde_json::json;
///
/// let value = json!({"a": 1, "b": [2, 3]});
/// assert_eq!(leanjson::flatten(&value).unwrap(), "a:1, b:[2, 3]");
/// ```
pub fn flatten(value: &Value) -> Result<String> {
    flatten_with_depth(value, DEFAULT_DEPTH_LIMIT)
}

/// Same as [`flatten`] with an explicit nesting depth limit.
pub fn flatten_with_depth(value: &Value, depth_limit: usize) -> Result<String> {
    let mut out = String::new();
    write_flat(value, depth_limit, &mut out)?;
    Ok(out)
}

fn write_flat(value: &Value, recursion_limit: usize, out: &mut String) -> Result<()> {
    if recursion_limit == 0 {
        return Err(LeanJsonError::Depth);
    }

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(num) => out.push_str(&num.to_string()),
        Value::String(text) => out.push_str(text.trim()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_flat(item, recursion_limit - 1, out)?;
            }
            out.push(']');
        }
        Value::Object(entries) => {
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push(':');
                write_flat(item, recursion_limit - 1, out)?;
            }
        }
    }

    Ok(())
}
