use crate::decode::scanner::{is_key_anchor, is_key_char};

/// True if `key` can be written without quotes and read back as a bare key.
pub fn is_normalized_key(key: &str) -> bool {
    let b = key.as_bytes();
    match (b.first(), b.last()) {
        (Some(&first), Some(&last)) => {
            is_key_anchor(first) && is_key_anchor(last) && b.iter().all(|&c| is_key_char(c))
        }
        _ => false,
    }
}

/// `[-+]?digits?(.digits)?([eE][-+]?digits)?`, anchored. Every part is
/// optional, so a lone sign or `e5` counts; the empty string does not,
/// since a bare empty value cannot be read back.
fn looks_like_number(s: &str) -> bool {
    let b = s.as_bytes();
    if b.is_empty() {
        return false;
    }
    let mut i = 0usize;
    if matches!(b[i], b'+' | b'-') {
        i += 1;
    }
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        i = frac_start;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        i += 1;
        if i < b.len() && matches!(b[i], b'+' | b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == b.len()
}

fn is_bool_literal(s: &str) -> bool {
    s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false")
}

/// Numbers and `true`/`false` (any case) are written bare; everything
/// else is quoted.
pub fn is_not_string(value: &str) -> bool {
    looks_like_number(value) || is_bool_literal(value)
}

#[inline]
pub fn needs_escape(ch: char) -> bool {
    matches!(ch, '\\' | '"' | '\'' | ';' | '#' | '`')
}

pub fn escape_and_quote_into(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if needs_escape(ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}

/// Append `key`, quoted when it is not a normalized key.
pub fn format_key_into(out: &mut String, key: &str) {
    if is_normalized_key(key) {
        out.push_str(key);
    } else {
        escape_and_quote_into(out, key);
    }
}

/// Append `value`, bare for numbers and booleans, quoted otherwise.
pub fn format_value_into(out: &mut String, value: &str) {
    if is_not_string(value) {
        out.push_str(value);
    } else {
        escape_and_quote_into(out, value);
    }
}
