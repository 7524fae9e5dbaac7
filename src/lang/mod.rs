/*!
# Rust Language Module

This Rust module finds numeric literals in text the way BASIC does.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod scan;

pub use error::Error;
pub use error::ErrorCode;
pub use scan::{scan, scan_literal};
pub use scan::{Exponent, LiteralSpan, Precision, Radix};
