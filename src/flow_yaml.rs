//! Single-line flow-style YAML output.
//!
//! Collections render inline (`{key: value}`, `[a, b]`) with no wrapping.
//! Quoting follows the YAML 1.1 resolver: a plain scalar that would re-read
//! as null, bool, int, float or timestamp is single-quoted, and strings with
//! control characters or line breaks fall back to double quotes with
//! escapes. Everything else stays plain, including non-ASCII text.

use std::fmt::Write as _;

use serde_json::Value;

use crate::error::{LeanJsonError, Result};

pub(crate) fn emit_document(value: &Value, depth_limit: usize) -> Result<String> {
    let mut out = String::new();
    write_value(value, depth_limit, false, &mut out)?;
    Ok(out)
}

fn write_value(value: &Value, recursion_limit: usize, in_flow: bool, out: &mut String) -> Result<()> {
    if recursion_limit == 0 {
        return Err(LeanJsonError::Depth);
    }

    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(num) => write_number(num, out),
        Value::String(text) => write_string(text, in_flow, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(item, recursion_limit - 1, true, out)?;
            }
            out.push(']');
        }
        Value::Object(entries) => {
            out.push('{');
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_string(key, true, out);
                out.push_str(": ");
                write_value(item, recursion_limit - 1, true, out)?;
            }
            out.push('}');
        }
    }

    Ok(())
}

// Floats must re-read as floats, so a dotless rendering gains ".0"
// ("1e+30" becomes "1.0e+30", integral values become "2.0").
fn write_number(num: &serde_json::Number, out: &mut String) {
    let text = num.to_string();
    if num.is_f64() {
        if let Some(pos) = text.find(['e', 'E']) {
            if !text[..pos].contains('.') {
                out.push_str(&text[..pos]);
                out.push_str(".0");
                out.push_str(&text[pos..]);
                return;
            }
        } else if !text.contains('.') {
            out.push_str(&text);
            out.push_str(".0");
            return;
        }
    }
    out.push_str(&text);
}

fn write_string(text: &str, in_flow: bool, out: &mut String) {
    if text.chars().any(forces_double_quotes) {
        write_double_quoted(text, out);
    } else if plain_is_unsafe(text, in_flow) {
        write_single_quoted(text, out);
    } else {
        out.push_str(text);
    }
}

fn forces_double_quotes(c: char) -> bool {
    c < '\x20' || ('\x7f'..='\u{9f}').contains(&c) || matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}')
}

fn write_single_quoted(text: &str, out: &mut String) {
    out.push('\'');
    for c in text.chars() {
        if c == '\'' {
            out.push_str("''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
}

fn write_double_quoted(text: &str, out: &mut String) {
    out.push('"');
    for c in text.chars() {
        match c {
            '\0' => out.push_str("\\0"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\x1b' => out.push_str("\\e"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if forces_double_quotes(c) => {
                let code = c as u32;
                if code <= 0xff {
                    let _ = write!(out, "\\x{code:02X}");
                } else if code <= 0xffff {
                    let _ = write!(out, "\\u{code:04X}");
                } else {
                    let _ = write!(out, "\\U{code:08X}");
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

// A plain scalar is unsafe when the parser would read it as something other
// than this exact string, or when an indicator character would cut it short.
// Control characters never reach this check.
fn plain_is_unsafe(text: &str, in_flow: bool) -> bool {
    if text.is_empty() {
        return true;
    }
    if resolves_as_null(text)
        || resolves_as_bool(text)
        || resolves_as_int(text)
        || resolves_as_float(text)
        || resolves_as_timestamp(text)
        || text == "="
        || text == "<<"
    {
        return true;
    }

    let chars: Vec<char> = text.chars().collect();
    let first = chars[0];
    if matches!(
        first,
        '#' | ',' | '[' | ']' | '{' | '}' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%' | '@' | '`'
    ) {
        return true;
    }
    let after_first_is_space = matches!(chars.get(1), None | Some(&' '));
    match first {
        '-' if after_first_is_space => return true,
        '?' | ':' if in_flow || after_first_is_space => return true,
        _ => {}
    }
    if first == ' ' || *chars.last().unwrap_or(&' ') == ' ' {
        return true;
    }

    for (i, &c) in chars.iter().enumerate() {
        match c {
            ',' | '?' | '[' | ']' | '{' | '}' if in_flow && i > 0 => return true,
            ':' if matches!(chars.get(i + 1), None | Some(&' ')) => return true,
            '#' if i > 0 && chars[i - 1] == ' ' => return true,
            _ => {}
        }
    }

    if !in_flow
        && (text.starts_with("---") || text.starts_with("..."))
        && matches!(chars.get(3), None | Some(&' ') | Some(&'\t'))
    {
        return true;
    }

    false
}

fn resolves_as_null(s: &str) -> bool {
    matches!(s, "~" | "null" | "Null" | "NULL")
}

fn resolves_as_bool(s: &str) -> bool {
    matches!(
        s,
        "yes" | "Yes" | "YES" | "no" | "No" | "NO" | "true" | "True" | "TRUE" | "false"
            | "False" | "FALSE" | "on" | "On" | "ON" | "off" | "Off" | "OFF"
    )
}

fn is_sexagesimal_segment(seg: &str) -> bool {
    let bytes = seg.as_bytes();
    match bytes {
        [d] => d.is_ascii_digit(),
        [h, l] => (b'0'..=b'5').contains(h) && l.is_ascii_digit(),
        _ => false,
    }
}

fn resolves_as_int(s: &str) -> bool {
    let body = s.strip_prefix(['-', '+']).unwrap_or(s);
    if body.is_empty() {
        return false;
    }
    if let Some(digits) = body.strip_prefix("0b") {
        return !digits.is_empty() && digits.chars().all(|c| matches!(c, '0' | '1' | '_'));
    }
    if let Some(digits) = body.strip_prefix("0x") {
        return !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit() || c == '_');
    }
    if body == "0" {
        return true;
    }
    if let Some(digits) = body.strip_prefix('0') {
        return !digits.is_empty() && digits.chars().all(|c| matches!(c, '0'..='7' | '_'));
    }

    // decimal, with optional base-60 ":mm" groups
    let mut segments = body.split(':');
    let head = segments.next().unwrap_or("");
    let mut head_chars = head.chars();
    if !matches!(head_chars.next(), Some('1'..='9')) {
        return false;
    }
    if !head_chars.all(|c| c.is_ascii_digit() || c == '_') {
        return false;
    }
    segments.all(is_sexagesimal_segment)
}

fn resolves_as_float(s: &str) -> bool {
    let signed = s.starts_with(['-', '+']);
    let body = s.strip_prefix(['-', '+']).unwrap_or(s);
    if matches!(body, ".inf" | ".Inf" | ".INF") {
        return true;
    }
    if !signed && matches!(body, ".nan" | ".NaN" | ".NAN") {
        return true;
    }

    // exponents require an explicit sign ("1.5e+3", never "1.5e3")
    let (mantissa, has_exponent) = match body.find(['e', 'E']) {
        Some(pos) => {
            let exp = &body[pos + 1..];
            let mut exp_chars = exp.chars();
            if !matches!(exp_chars.next(), Some('+') | Some('-')) {
                return false;
            }
            let digits = exp_chars.as_str();
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }
            (&body[..pos], true)
        }
        None => (body, false),
    };

    let Some(dot) = mantissa.find('.') else {
        return false;
    };
    let (int_part, frac_part) = (&mantissa[..dot], &mantissa[dot + 1..]);
    if !frac_part.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return false;
    }
    if int_part.is_empty() {
        return !frac_part.is_empty();
    }

    if int_part.contains(':') {
        if has_exponent {
            return false;
        }
        let mut segments = int_part.split(':');
        let head = segments.next().unwrap_or("");
        let mut head_chars = head.chars();
        if !matches!(head_chars.next(), Some(c) if c.is_ascii_digit()) {
            return false;
        }
        if !head_chars.all(|c| c.is_ascii_digit() || c == '_') {
            return false;
        }
        segments.all(is_sexagesimal_segment)
    } else {
        let mut int_chars = int_part.chars();
        matches!(int_chars.next(), Some(c) if c.is_ascii_digit())
            && int_chars.all(|c| c.is_ascii_digit() || c == '_')
    }
}

fn eat_digits(s: &[u8], min: usize, max: usize) -> Option<(usize, &[u8])> {
    let available = s.iter().take_while(|b| b.is_ascii_digit()).count();
    if available < min {
        return None;
    }
    let taken = available.min(max);
    Some((taken, &s[taken..]))
}

fn eat_byte(s: &[u8], expected: u8) -> Option<&[u8]> {
    match s.split_first() {
        Some((&b, rest)) if b == expected => Some(rest),
        _ => None,
    }
}

// Date-only timestamps need two-digit month and day; with a time part,
// single digits are accepted.
fn resolves_as_timestamp(s: &str) -> bool {
    if !s.is_ascii() {
        return false;
    }
    let b = s.as_bytes();
    let Some((_, rest)) = eat_digits(b, 4, 4) else {
        return false;
    };
    let Some(rest) = eat_byte(rest, b'-') else {
        return false;
    };
    let Some((month_len, rest)) = eat_digits(rest, 1, 2) else {
        return false;
    };
    let Some(rest) = eat_byte(rest, b'-') else {
        return false;
    };
    let Some((day_len, rest)) = eat_digits(rest, 1, 2) else {
        return false;
    };
    if rest.is_empty() {
        return month_len == 2 && day_len == 2;
    }

    // separator: 'T', 't', or at least one space/tab
    let rest = match rest.split_first() {
        Some((b'T' | b't', tail)) => tail,
        Some((b' ' | b'\t', tail)) => {
            let mut tail = tail;
            while let Some((b' ' | b'\t', more)) = tail.split_first() {
                tail = more;
            }
            tail
        }
        _ => return false,
    };

    let Some((_, rest)) = eat_digits(rest, 1, 2) else {
        return false;
    };
    let Some(rest) = eat_byte(rest, b':') else {
        return false;
    };
    let Some((_, rest)) = eat_digits(rest, 2, 2) else {
        return false;
    };
    let Some(rest) = eat_byte(rest, b':') else {
        return false;
    };
    let Some((_, mut rest)) = eat_digits(rest, 2, 2) else {
        return false;
    };

    if let Some(tail) = eat_byte(rest, b'.') {
        let fraction = tail.iter().take_while(|b| b.is_ascii_digit()).count();
        rest = &tail[fraction..];
    }

    while let Some((b' ' | b'\t', more)) = rest.split_first() {
        rest = more;
    }
    if rest.is_empty() {
        return true;
    }

    match rest.split_first() {
        Some((b'Z', tail)) => tail.is_empty(),
        Some((b'-' | b'+', tail)) => {
            let Some((_, tail)) = eat_digits(tail, 1, 2) else {
                return false;
            };
            if tail.is_empty() {
                return true;
            }
            let Some(tail) = eat_byte(tail, b':') else {
                return false;
            };
            matches!(eat_digits(tail, 2, 2), Some((_, rest)) if rest.is_empty())
        }
        _ => false,
    }
}
