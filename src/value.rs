//! Value types used during filter evaluation.

/// A value produced while evaluating a filter expression.
///
/// Text borrows from either the record being evaluated or the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// Column contents or a string literal.
    Text(&'a str),
    /// Result of a comparison or a boolean literal.
    Bool(bool),
}

impl<'a> Value<'a> {
    /// Truthiness: booleans are themselves, text is true when non-empty.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Text(s) => !s.is_empty(),
        }
    }

    /// Attempts to view the value as text.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(*s),
            Value::Bool(_) => None,
        }
    }

    /// Returns the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
        }
    }
}
