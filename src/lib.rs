//! # BASIC VAL
//!
//! Numeric literal conversion as it was in the 8-bit era.
//!
//! `VAL` takes whatever string a program hands it and finds the number
//! at the front. The type of the result comes from how the number is
//! written, the same way it does for a literal typed into a program.
//! ```
//! use basic_val::{convert, render, Val};
//!
//! assert_eq!(convert("001"), Ok(Val::Integer(1)));
//! assert_eq!(convert(".2"), Ok(Val::Single(0.2)));
//! assert_eq!(convert("1.2d23"), Ok(Val::Double(1.2e23)));
//! assert_eq!(convert("&HFFFF"), Ok(Val::Integer(-1)));
//! assert_eq!(render(Val::Single(1.2e23)), "1.2E+23");
//! ```
//!
//! Integers are 16 bit. A number with a fraction, an `E` exponent, or
//! too large for an integer is single precision. A `D` exponent or more
//! than seven significant digits makes it double precision. A trailing
//! `!` or `#` forces single or double.
//!
//! `&H` introduces hexadecimal and `&O` (or just `&`) octal. These are
//! always 16 bit integers; extra high digits are dropped.
//!
//! Conversion stops at the first character that can't continue the
//! number. Only a string with no number at the front at all is an
//! error, and [`val`] turns even that into zero.

pub mod lang;
pub mod mach;

pub use lang::{Error, ErrorCode};
pub use mach::{convert, render, val, Val};
