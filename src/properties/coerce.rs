//! Numeric coercion with JavaScript `Number()` semantics.
//!
//! Values that are absent or `null` are the caller's business (see
//! [`number_or`]); anything present is coerced, and garbage becomes `NaN`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid decimal pattern")
});

/// Coerces a present JSON value the way `Number(value)` would.
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_str(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => array_element(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// `Number(value ?? default)`: absent and `null` both take the default.
pub fn number_or(value: Option<&Value>, default: f64) -> f64 {
    match value {
        None | Some(Value::Null) => default,
        Some(v) => to_number(v),
    }
}

/// `value != null ? Number(value) : null`.
pub fn optional_number(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => Some(to_number(v)),
    }
}

// A one-element array stringifies to its element, so `[null]` and `[[]]` are 0.
fn array_element(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(_) | Value::Object(_) => f64::NAN,
        other => to_number(other),
    }
}

fn parse_str(raw: &str) -> f64 {
    let s = raw.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(radix) = radix_prefix(s) {
        return parse_radix(&s[2..], radix);
    }

    if DECIMAL_LITERAL.is_match(s) {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// ECMAScript `StrWhiteSpaceChar`: Unicode `Zs`, the ASCII controls
/// `\t \n \v \f \r`, BOM and the two line/paragraph separators. Unlike
/// `char::is_whitespace`, U+0085 is not included.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn radix_prefix(s: &str) -> Option<u32> {
    let prefix = s.get(..2)?;
    match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(to_number(&json!(2.9)), 2.9);
        assert_eq!(to_number(&json!(-4)), -4.0);
        assert_eq!(to_number(&json!(0)), 0.0);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(to_number(&json!("0.50")), 0.5);
        assert_eq!(to_number(&json!("  12 ")), 12.0);
        assert_eq!(to_number(&json!("1e3")), 1000.0);
        assert_eq!(to_number(&json!(".25")), 0.25);
        assert_eq!(to_number(&json!("5.")), 5.0);
        assert_eq!(to_number(&json!("-0.3")), -0.3);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!("   ")), 0.0);
    }

    #[test]
    fn test_trims_only_js_whitespace() {
        assert_eq!(to_number(&json!("\u{feff}\u{a0}8\u{2028}\t")), 8.0);
        assert_eq!(to_number(&json!("\u{3000}1.5\u{2003}")), 1.5);
        assert!(to_number(&json!("\u{85}12")).is_nan());
        assert!(to_number(&json!("12\u{85}")).is_nan());
    }

    #[test]
    fn test_prefixed_and_infinite_strings() {
        assert_eq!(to_number(&json!("0x1F")), 31.0);
        assert_eq!(to_number(&json!("0b101")), 5.0);
        assert_eq!(to_number(&json!("0o17")), 15.0);
        assert_eq!(to_number(&json!("Infinity")), f64::INFINITY);
        assert_eq!(to_number(&json!("-Infinity")), f64::NEG_INFINITY);
    }

    #[test]
    fn test_garbage_is_nan() {
        assert!(to_number(&json!("abc")).is_nan());
        assert!(to_number(&json!("12abc")).is_nan());
        assert!(to_number(&json!("1,000")).is_nan());
        assert!(to_number(&json!("inf")).is_nan());
        assert!(to_number(&json!("NaN")).is_nan());
        assert!(to_number(&json!("0x")).is_nan());
        assert!(to_number(&json!("-0x10")).is_nan());
        assert!(to_number(&json!({"value": 1})).is_nan());
        assert!(to_number(&json!([1, 2])).is_nan());
    }

    #[test]
    fn test_booleans_and_arrays() {
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&json!(false)), 0.0);
        assert_eq!(to_number(&json!([])), 0.0);
        assert_eq!(to_number(&json!(["7"])), 7.0);
        assert_eq!(to_number(&json!([null])), 0.0);
    }

    #[test]
    fn test_nullish_defaulting() {
        assert_eq!(number_or(None, 1.0), 1.0);
        assert_eq!(number_or(Some(&Value::Null), 1.0), 1.0);
        assert_eq!(number_or(Some(&json!("0")), 1.0), 0.0);
        assert_eq!(optional_number(Some(&Value::Null)), None);
        assert_eq!(optional_number(Some(&json!(0))), Some(0.0));
    }
}
