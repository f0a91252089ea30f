//! Numeric text: canonical formatting for stored floats and the
//! prefix-tolerant readers behind the typed getters.

/// Format an f64 in canonical form:
/// - no exponent notation
/// - no trailing fractional zeros (strip decimal point if none remains)
/// - -0 normalized to 0
/// - non-finite values as `nan`, `inf`, `-inf`
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if let Some(s) = format_non_finite(value.is_nan(), value.is_infinite(), value < 0.0) {
        return s;
    }
    if value == 0.0 {
        return String::from("0");
    }
    let mut buf = ryu::Buffer::new();
    canonicalize(buf.format_finite(value.abs()), value < 0.0)
}

/// Same as [`format_canonical_f64`] but keeps the shortest f32 spelling,
/// so `0.1f32` stores as `0.1` rather than its widened f64 digits.
pub(crate) fn format_canonical_f32(value: f32) -> String {
    if let Some(s) = format_non_finite(value.is_nan(), value.is_infinite(), value < 0.0) {
        return s;
    }
    if value == 0.0 {
        return String::from("0");
    }
    let mut buf = ryu::Buffer::new();
    canonicalize(buf.format_finite(value.abs()), value < 0.0)
}

fn format_non_finite(nan: bool, infinite: bool, negative: bool) -> Option<String> {
    if nan {
        Some(String::from("nan"))
    } else if infinite && negative {
        Some(String::from("-inf"))
    } else if infinite {
        Some(String::from("inf"))
    } else {
        None
    }
}

fn canonicalize(raw: &str, negative: bool) -> String {
    let body = if let Some(exp_index) = raw.find(['e', 'E']) {
        let mantissa = &raw[..exp_index];
        let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
        expand_exponent(mantissa, exp)
    } else {
        String::from(raw)
    };
    let trimmed = trim_fraction(body);
    if trimmed == "0" || !negative {
        return trimmed;
    }
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push('-');
    out.push_str(&trimmed);
    out
}

fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let mut digits = Vec::with_capacity(mantissa.len());
    let mut point_index = None;
    for &b in mantissa.as_bytes() {
        if b == b'.' {
            point_index = Some(digits.len());
        } else {
            digits.push(b);
        }
    }
    let point_index = point_index.unwrap_or(digits.len());

    if exp >= 0 {
        let target = point_index + exp as usize;
        if target >= digits.len() {
            let mut result = String::with_capacity(target);
            result.extend(digits.iter().map(|&d| d as char));
            result.extend(core::iter::repeat_n('0', target - digits.len()));
            result
        } else {
            insert_point(&digits, target)
        }
    } else {
        let shift = (-exp) as usize;
        if shift >= point_index {
            let zeros = shift - point_index;
            let mut result = String::with_capacity(digits.len() + zeros + 2);
            result.push_str("0.");
            result.extend(core::iter::repeat_n('0', zeros));
            result.extend(digits.iter().map(|&d| d as char));
            result
        } else {
            insert_point(&digits, point_index - shift)
        }
    }
}

fn insert_point(digits: &[u8], split: usize) -> String {
    let mut result = String::with_capacity(digits.len() + 1);
    for (idx, &d) in digits.iter().enumerate() {
        if idx == split {
            result.push('.');
        }
        result.push(d as char);
    }
    result
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot_pos) = s.find('.') {
        let mut end = s.len();
        while end > dot_pos + 1 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        if end > dot_pos && s.as_bytes()[end - 1] == b'.' {
            end -= 1;
        }
        s.truncate(end);
    }
    s
}

#[inline]
fn skip_leading_space(b: &[u8]) -> usize {
    let mut i = 0usize;
    while i < b.len() && matches!(b[i], b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c) {
        i += 1;
    }
    i
}

/// Longest `[ws][+-]digits` prefix, without the leading whitespace.
fn int_prefix(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let start = skip_leading_space(b);
    let mut i = start;
    if i < b.len() && matches!(b[i], b'+' | b'-') {
        i += 1;
    }
    let digits_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    Some(&s[start..i])
}

/// Longest decimal float prefix (or `inf`/`infinity`/`nan` spelling),
/// without the leading whitespace. Requires at least one mantissa digit.
fn float_prefix(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let start = skip_leading_space(b);
    let mut i = start;
    if i < b.len() && matches!(b[i], b'+' | b'-') {
        i += 1;
    }
    for word in ["infinity", "inf", "nan"] {
        let end = i + word.len();
        if end <= b.len() && b[i..end].eq_ignore_ascii_case(word.as_bytes()) {
            return Some(&s[start..end]);
        }
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - (i + 1);
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    if i < b.len() && matches!(b[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < b.len() && matches!(b[j], b'+' | b'-') {
            j += 1;
        }
        let exp_digits = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits {
            i = j;
        }
    }
    Some(&s[start..i])
}

fn is_infinity_spelling(token: &str) -> bool {
    token.bytes().any(|c| c.eq_ignore_ascii_case(&b'i'))
}

pub(crate) fn parse_i64_prefix(s: &str) -> Option<i64> {
    int_prefix(s)?.parse().ok()
}

pub(crate) fn parse_i32_prefix(s: &str) -> Option<i32> {
    i32::try_from(parse_i64_prefix(s)?).ok()
}

/// A finite spelling that overflows to infinity counts as a failure.
pub(crate) fn parse_f64_prefix(s: &str) -> Option<f64> {
    let token = float_prefix(s)?;
    let v: f64 = token.parse().ok()?;
    if v.is_infinite() && !is_infinity_spelling(token) {
        return None;
    }
    Some(v)
}

pub(crate) fn parse_f32_prefix(s: &str) -> Option<f32> {
    let token = float_prefix(s)?;
    let v: f32 = token.parse().ok()?;
    if v.is_infinite() && !is_infinity_spelling(token) {
        return None;
    }
    Some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_canonical_f64() {
        assert_eq!(format_canonical_f64(0.0), "0");
        assert_eq!(format_canonical_f64(-0.0), "0");
        assert_eq!(format_canonical_f64(1.0), "1");
        assert_eq!(format_canonical_f64(1.5), "1.5");
        assert_eq!(format_canonical_f64(-2.25), "-2.25");
        assert_eq!(format_canonical_f64(1e21), "1000000000000000000000");
        assert_eq!(format_canonical_f64(1.5e-7), "0.00000015");
        assert_eq!(format_canonical_f64(f64::NAN), "nan");
        assert_eq!(format_canonical_f64(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_format_canonical_f32_keeps_short_spelling() {
        assert_eq!(format_canonical_f32(0.1), "0.1");
        assert_eq!(format_canonical_f32(3.0), "3");
        assert_eq!(format_canonical_f32(f32::INFINITY), "inf");
    }

    #[test]
    fn test_int_prefix() {
        assert_eq!(parse_i64_prefix("42"), Some(42));
        assert_eq!(parse_i64_prefix("42abc"), Some(42));
        assert_eq!(parse_i64_prefix("  -7 apples"), Some(-7));
        assert_eq!(parse_i64_prefix("+3"), Some(3));
        assert_eq!(parse_i64_prefix("3.9"), Some(3));
        assert_eq!(parse_i64_prefix("abc"), None);
        assert_eq!(parse_i64_prefix("-"), None);
        assert_eq!(parse_i64_prefix(""), None);
        assert_eq!(parse_i64_prefix("99999999999999999999"), None);
    }

    #[test]
    fn test_i32_range() {
        assert_eq!(parse_i32_prefix("2147483647"), Some(i32::MAX));
        assert_eq!(parse_i32_prefix("2147483648"), None);
        assert_eq!(parse_i32_prefix("-2147483648"), Some(i32::MIN));
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_f64_prefix("1.5"), Some(1.5));
        assert_eq!(parse_f64_prefix("1.5kg"), Some(1.5));
        assert_eq!(parse_f64_prefix(".5"), Some(0.5));
        assert_eq!(parse_f64_prefix("5."), Some(5.0));
        assert_eq!(parse_f64_prefix("2e3"), Some(2000.0));
        assert_eq!(parse_f64_prefix("2e"), Some(2.0));
        assert_eq!(parse_f64_prefix("2e+x"), Some(2.0));
        assert_eq!(parse_f64_prefix(" -1.25e-2"), Some(-0.0125));
        assert_eq!(parse_f64_prefix("."), None);
        assert_eq!(parse_f64_prefix("e5"), None);
        assert_eq!(parse_f64_prefix("x1"), None);
    }

    #[test]
    fn test_float_special_spellings() {
        assert_eq!(parse_f64_prefix("inf"), Some(f64::INFINITY));
        assert_eq!(parse_f64_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_f64_prefix("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_f64_prefix("1e400"), None);
        assert_eq!(parse_f32_prefix("1e39"), None);
        assert_eq!(parse_f32_prefix("0.25"), Some(0.25));
    }
}
