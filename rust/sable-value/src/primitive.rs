//! Canonical scalar values.

use std::fmt;

/// The canonical primitive forms an entity can reduce to.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Primitive {
    /// Returns the boolean payload, or `None` for other variants.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Primitive::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the numeric payload, or `None` for other variants.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Primitive::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the textual payload, or `None` for other variants.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Primitive::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(value) => write!(f, "{value}"),
            Primitive::Number(value) => write!(f, "{value}"),
            Primitive::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Primitive::Number(value as f64)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::Text(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::Text(value)
    }
}
