/// A typed BASIC number.
///
/// The variant comes from the shape of the literal that produced it,
/// not from its magnitude.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Val {
    Integer(i16),
    Single(f32),
    Double(f64),
}

impl Val {
    /// Upper case type name as the dialect spells it.
    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Integer(_) => "INTEGER",
            Val::Single(_) => "SINGLE",
            Val::Double(_) => "DOUBLE",
        }
    }
}

impl Default for Val {
    fn default() -> Self {
        Val::Integer(0)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", super::render(*self))
    }
}
