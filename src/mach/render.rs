use super::Val;
use std::iter::repeat;

/// Decimal point positions shown without an exponent.
const SINGLE_FIXED: i32 = 7;
const DOUBLE_FIXED: i32 = 16;

/// Canonical text of a number, as `PRINT` and `STR$` would show it
/// minus their padding.
pub fn render(val: Val) -> String {
    match val {
        Val::Integer(i) => i.to_string(),
        Val::Single(f) => {
            let f = if f.is_nan() {
                0.0
            } else if f.is_infinite() {
                f32::MAX.copysign(f)
            } else {
                f
            };
            float(&format!("{:e}", f), SINGLE_FIXED, 'E')
        }
        Val::Double(f) => {
            let f = if f.is_nan() {
                0.0
            } else if f.is_infinite() {
                f64::MAX.copysign(f)
            } else {
                f
            };
            float(&format!("{:e}", f), DOUBLE_FIXED, 'D')
        }
    }
}

// `sci` is the shortest round trip form from `{:e}`, e.g. "-1.25e-3".
fn float(sci: &str, fixed: i32, marker: char) -> String {
    let (mantissa, exp) = match sci.find('e') {
        Some(i) => (&sci[..i], &sci[i + 1..]),
        None => (sci, "0"),
    };
    let exp = exp.parse::<i32>().unwrap_or_default();
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    if digits.trim_start_matches('0').is_empty() {
        return "0".to_string();
    }
    let mut s = String::new();
    if mantissa.starts_with('-') {
        s.push('-');
    }
    let point = exp + 1;
    if point >= -1 && point <= fixed {
        if point <= 0 {
            s.push('.');
            s.extend(repeat('0').take(-point as usize));
            s.push_str(&digits);
        } else if (point as usize) < digits.len() {
            s.push_str(&digits[..point as usize]);
            s.push('.');
            s.push_str(&digits[point as usize..]);
        } else {
            s.push_str(&digits);
            s.extend(repeat('0').take(point as usize - digits.len()));
        }
    } else {
        s.push_str(&digits[..1]);
        if digits.len() > 1 {
            s.push('.');
            s.push_str(&digits[1..]);
        }
        s.push(marker);
        s.push(if exp < 0 { '-' } else { '+' });
        s.push_str(&format!("{:02}", exp.abs()));
    }
    s
}
