use super::Val;
use crate::lang::{LiteralSpan, Precision, Radix};

/// Significant digits a Single literal may carry before the unmarked
/// float default becomes Double.
const SINGLE_DIGITS: usize = 7;

pub fn resolve_decimal(span: &LiteralSpan<'_>) -> Val {
    if span.fraction.is_none() && span.exponent.is_none() && span.suffix.is_none() {
        if let Some(i) = integer(span.negative, span.digits) {
            return Val::Integer(i);
        }
    }
    let text = float_text(span);
    match precision(span) {
        Precision::Single => {
            let f = text.parse::<f32>().unwrap_or_default();
            if f.is_infinite() {
                Val::Single(f32::MAX.copysign(f))
            } else {
                Val::Single(f)
            }
        }
        Precision::Double => {
            let f = text.parse::<f64>().unwrap_or_default();
            if f.is_infinite() {
                Val::Double(f64::MAX.copysign(f))
            } else {
                Val::Double(f)
            }
        }
    }
}

/// Hexadecimal and octal digits are a 16 bit pattern. Higher bits
/// fall off the top. The first character that is not a digit in
/// `radix` ends the number, as it does when scanning.
pub fn resolve_radix(span: &LiteralSpan<'_>, radix: Radix) -> Val {
    let base: u16 = match radix {
        Radix::Hexadecimal => 16,
        Radix::Octal => 8,
        Radix::Decimal => return resolve_decimal(span),
    };
    let mut bits = 0u16;
    for c in span.digits.chars() {
        match c.to_digit(base as u32) {
            Some(d) => bits = bits.wrapping_mul(base).wrapping_add(d as u16),
            None => break,
        }
    }
    Val::Integer(bits as i16)
}

fn integer(negative: bool, digits: &str) -> Option<i16> {
    let digits = digits.trim_start_matches('0');
    if digits.len() > 5 {
        return None;
    }
    let mut n = digits.parse::<i32>().unwrap_or_default();
    if negative {
        n = -n;
    }
    if n < i16::min_value() as i32 || n > i16::max_value() as i32 {
        return None;
    }
    Some(n as i16)
}

fn precision(span: &LiteralSpan<'_>) -> Precision {
    if let Some(suffix) = span.suffix {
        return suffix;
    }
    if let Some(exponent) = &span.exponent {
        return exponent.precision;
    }
    let significant = span
        .digits
        .chars()
        .chain(span.fraction.unwrap_or("").chars())
        .skip_while(|&c| c == '0')
        .count();
    if significant > SINGLE_DIGITS {
        Precision::Double
    } else {
        Precision::Single
    }
}

// Normalized so the standard library's correctly rounded parser accepts it.
fn float_text(span: &LiteralSpan<'_>) -> String {
    let mut s = String::new();
    if span.negative {
        s.push('-');
    }
    s.push_str(if span.digits.is_empty() { "0" } else { span.digits });
    s.push('.');
    match span.fraction {
        Some(f) if !f.is_empty() => s.push_str(f),
        _ => s.push('0'),
    }
    if let Some(exponent) = &span.exponent {
        s.push('e');
        s.push_str(exponent.digits);
    }
    s
}
