//! Typed value slots for form fields.

/// The kind of value a field reads and stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text, taken as-is from the input line.
    Text,
    /// A signed integer.
    Int,
    /// A named-value enumeration code.
    Code,
}

/// A single value as entered by the user.
///
/// `Empty` is the unset sentinel: a field starts here and returns here
/// whenever a read produces text that does not parse as the field's kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Code(u32),
}

impl Value {
    /// Parse one raw input line according to `kind`.
    ///
    /// No range or content checks happen here; out-of-table codes and
    /// digit-laden names are stored verbatim and rejected by validators.
    /// A blank line or an unparseable number yields `Empty`.
    pub fn parse(kind: ValueKind, raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Value::Empty;
        }
        match kind {
            ValueKind::Text => Value::Text(raw.to_string()),
            ValueKind::Int => raw.parse().map(Value::Int).unwrap_or(Value::Empty),
            ValueKind::Code => raw.parse().map(Value::Code).unwrap_or(Value::Empty),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Value::Empty
    }

    /// Integer interpretation, shared by `Int` values and enumeration codes.
    ///
    /// This is what lets one range validator cover years and all
    /// enumeration fields alike.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Code(c) => Some(i64::from(*c)),
            _ => None,
        }
    }

    pub fn as_code(&self) -> Option<u32> {
        match self {
            Value::Code(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}
