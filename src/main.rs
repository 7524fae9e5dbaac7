//! # VAL
//!
//! Type a number, see what BASIC makes of it.
//!

mod term;

fn main() {
    term::main();
}
