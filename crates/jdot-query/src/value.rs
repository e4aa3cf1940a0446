use std::fmt::{self, Display, Formatter};

use crate::codec;

/// A named member of an object. Objects keep their members in source order
/// and may hold the same name more than once.
pub type Member = (String, Value);

/// One node of a parsed JSON document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<Member>),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

impl From<Vec<Member>> for Value {
    fn from(members: Vec<Member>) -> Self {
        Value::Object(members)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", codec::print_compact(self))
    }
}

impl Value {
    pub const NULL: Value = Self::Null;
    pub const TRUE: Value = Self::Bool(true);
    pub const FALSE: Value = Self::Bool(false);

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Number of direct elements or members; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(members) => members.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The members of an object, in order. `None` for every other kind.
    pub fn members(&self) -> Option<&[Member]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// First member named `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members()?
            .iter()
            .find(|(member, _)| member == name)
            .map(|(_, value)| value)
    }

    /// Element `index` of an array.
    pub fn index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Checks that the tree can be represented as JSON text.
    ///
    /// JSON has no encoding for NaN or infinities, so a tree holding one was
    /// not produced by a parser and is rejected on adoption.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Value::Number(n) if !n.is_finite() => Err(format!("non-finite number {}", n)),
            Value::Array(items) => items.iter().try_for_each(Value::validate),
            Value::Object(members) => members.iter().try_for_each(|(name, value)| {
                value
                    .validate()
                    .map_err(|reason| format!("member \"{}\": {}", name, reason))
            }),
            _ => Ok(()),
        }
    }
}

/// An owned subtree that has been split off a document.
///
/// The only way to put a tree into a [`Document`](crate::Document) after
/// construction is to move a `Detached` into
/// [`Document::adopt`](crate::Document::adopt), so a tree never has two owners.
#[derive(Debug, Clone, PartialEq)]
pub struct Detached(Value);

impl Detached {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for Detached {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Display for Detached {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.fmt(f)
    }
}
