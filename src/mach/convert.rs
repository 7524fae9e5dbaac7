use super::resolve::{resolve_decimal, resolve_radix};
use super::Val;
use crate::error;
use crate::lang::{scan_literal, Error, Radix};

/// Converts the numeric literal at the start of `s`.
///
/// Leading whitespace is skipped and anything after the literal is
/// ignored. The only failure is when there is no literal at all.
pub fn convert(s: &str) -> Result<Val, Error> {
    let span = scan_literal(s)
        .map_err(|column| error!(NoNumericPrefix, ..&column; "NO NUMERIC PREFIX"))?;
    Ok(match span.radix {
        Radix::Decimal => resolve_decimal(&span),
        radix => resolve_radix(&span, radix),
    })
}

/// `VAL` as a BASIC program sees it: no numeric prefix is zero.
pub fn val(s: &str) -> Val {
    convert(s).unwrap_or_default()
}
