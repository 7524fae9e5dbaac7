use basic_val::{convert, render};

/// Converts `s` and renders the result, or the error text.
pub fn exec(s: &str) -> String {
    match convert(s) {
        Ok(value) => format!("{} {}", value.type_name(), render(value)),
        Err(error) => format!("?{}", error),
    }
}
