/*!
## Rust Machine Module

This Rust module turns scanned literals into typed BASIC numbers
and renders them back to text.

*/

mod convert;
mod render;
mod resolve;
mod val;

pub use convert::convert;
pub use convert::val;
pub use render::render;
pub use resolve::resolve_decimal;
pub use resolve::resolve_radix;
pub use val::Val;
