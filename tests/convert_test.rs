mod common;
use basic_val::{convert, ErrorCode, Val};
use common::*;

#[test]
fn test_leading_zeros() {
    assert_eq!(convert("001"), Ok(Val::Integer(1)));
    assert_eq!(convert("-007"), Ok(Val::Integer(-7)));
    assert_eq!(convert("0"), Ok(Val::Integer(0)));
    assert_eq!(exec("000032767"), "INTEGER 32767");
}

#[test]
fn test_fractions() {
    assert_eq!(convert("1.2"), Ok(Val::Single(1.2)));
    assert_eq!(convert(".2"), Ok(Val::Single(0.2)));
    assert_eq!(convert("0.2"), Ok(Val::Single(0.2)));
    assert_eq!(convert("2."), Ok(Val::Single(2.0)));
    assert_eq!(exec("2."), "SINGLE 2");
}

#[test]
fn test_exponent_marker_selects_precision() {
    assert_eq!(convert("1.2e23"), Ok(Val::Single(1.2e23)));
    assert_eq!(convert("1.2d23"), Ok(Val::Double(1.2e23)));
    assert_eq!(exec("1.2e23"), "SINGLE 1.2E+23");
    assert_eq!(exec("1.2d23"), "DOUBLE 1.2D+23");
    assert_eq!(exec("1.2E-3"), "SINGLE 1.2E-03");
}

#[test]
fn test_hex() {
    assert_eq!(convert("&hab56"), Ok(Val::Integer(0xAB56u16 as i16)));
    assert_eq!(convert("&H10"), Ok(Val::Integer(16)));
    assert_eq!(exec("&hab56"), "INTEGER -21674");
    assert_eq!(exec("&H1FFFF"), "INTEGER -1");
    assert_eq!(exec("&HFFFFFFFFFFFF0"), "INTEGER -16");
}

#[test]
fn test_octal() {
    assert_eq!(convert("&o70"), Ok(Val::Integer(56)));
    assert_eq!(convert("&17"), Ok(Val::Integer(15)));
    assert_eq!(convert("&O17"), Ok(Val::Integer(15)));
    assert_eq!(exec("&1777777"), "INTEGER -1");
}

#[test]
fn test_no_numeric_prefix() {
    for s in &["", "&H", "&", "+", "-", ".", "&O", " \t", "A1", "&H+1", "+&H10"] {
        let error = convert(s).unwrap_err();
        assert_eq!(error.code(), ErrorCode::NoNumericPrefix);
        assert_eq!(error.code().number(), 2);
    }
    assert_eq!(exec("&H"), "?SYNTAX ERROR IN (0..2); NO NUMERIC PREFIX");
    assert_eq!(exec(""), "?SYNTAX ERROR; NO NUMERIC PREFIX");
}

#[test]
fn test_trailing_garbage() {
    assert_eq!(exec("12 apples"), "INTEGER 12");
    assert_eq!(exec("1.5.5"), "SINGLE 1.5");
    assert_eq!(exec("3e"), "INTEGER 3");
    assert_eq!(exec("3e+"), "INTEGER 3");
    assert_eq!(exec("3d-x"), "INTEGER 3");
    assert_eq!(exec("&H1G"), "INTEGER 1");
    assert_eq!(exec("&O78"), "INTEGER 7");
    assert_eq!(exec("&9"), "?SYNTAX ERROR IN (0..1); NO NUMERIC PREFIX");
}

#[test]
fn test_whitespace() {
    assert_eq!(exec("   42"), "INTEGER 42");
    assert_eq!(exec("\t\r\n-5"), "INTEGER -5");
    assert_eq!(exec("- 5"), "?SYNTAX ERROR IN (0..1); NO NUMERIC PREFIX");
}

#[test]
fn test_integer_range() {
    assert_eq!(exec("32767"), "INTEGER 32767");
    assert_eq!(exec("-32768"), "INTEGER -32768");
    assert_eq!(exec("32768"), "SINGLE 32768");
    assert_eq!(exec("-32769"), "SINGLE -32769");
    assert_eq!(exec("1234567"), "SINGLE 1234567");
    assert_eq!(exec("12345678"), "DOUBLE 12345678");
}

#[test]
fn test_significant_digits() {
    assert_eq!(exec("3.141593"), "SINGLE 3.141593");
    assert_eq!(exec("3.1415926"), "DOUBLE 3.1415926");
    assert_eq!(exec("0.000001234567"), "SINGLE 1.234567E-06");
    assert_eq!(exec("1.23456789E2"), "SINGLE 123.45679");
}

#[test]
fn test_type_suffix() {
    assert_eq!(exec("1#"), "DOUBLE 1");
    assert_eq!(exec("1.5!"), "SINGLE 1.5");
    assert_eq!(exec("123456789!"), "SINGLE 1.2345679E+08");
    assert_eq!(exec("2.5E3#"), "DOUBLE 2500");
    assert_eq!(exec("7%"), "INTEGER 7");
}

#[test]
fn test_overflow_clamps() {
    assert_eq!(exec("1E39"), "SINGLE 3.4028235E+38");
    assert_eq!(exec("-1E39"), "SINGLE -3.4028235E+38");
    assert_eq!(exec("1D309"), "DOUBLE 1.7976931348623157D+308");
    assert_eq!(exec("1E-99"), "SINGLE 0");
}
