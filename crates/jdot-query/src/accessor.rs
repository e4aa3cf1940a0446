use std::fmt::{self, Display, Formatter};

use crate::{Detached, Document, Error, Path, Value, resolver};

/// Classification of whatever sits at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Nothing resolves at the path.
    Missing,
    /// The path resolves to an explicit `null`.
    Empty,
    Boolean,
    Number,
    Text,
    Array,
    Object,
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Missing => "missing",
            DataType::Empty => "empty",
            DataType::Boolean => "boolean",
            DataType::Number => "number",
            DataType::Text => "text",
            DataType::Array => "array",
            DataType::Object => "object",
        };
        write!(f, "{}", name)
    }
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Empty,
            Value::Bool(_) => DataType::Boolean,
            Value::Number(_) => DataType::Number,
            Value::String(_) => DataType::Text,
            Value::Array(_) => DataType::Array,
            Value::Object(_) => DataType::Object,
        }
    }
}

impl Document {
    /// Resolves a dotted `path` within entry `entry`. See [`resolver::resolve`].
    pub fn resolve(&self, path: &str, entry: i64) -> Result<&Value, Error> {
        resolver::resolve(self, &path.parse::<Path>()?, entry)
    }

    /// Single-level lookup of `name` within entry `entry`, falling back into
    /// the first element of array sections. See [`resolver::lookup`].
    pub fn lookup(&self, name: &str, entry: i64) -> Result<&Value, Error> {
        resolver::lookup(resolver::section(self, entry)?, name)
    }

    pub fn data_type(&self, path: &str, entry: i64) -> DataType {
        match self.resolve(path, entry) {
            Ok(value) => value.data_type(),
            Err(Error::NullValue(_)) => DataType::Empty,
            Err(_) => DataType::Missing,
        }
    }

    pub fn string_value(&self, path: &str, entry: i64) -> Result<String, Error> {
        coerce(self.resolve(path, entry)?, path, DataType::Text, |value| {
            value.as_str().map(str::to_string)
        })
    }

    pub fn float_value(&self, path: &str, entry: i64) -> Result<f64, Error> {
        coerce(self.resolve(path, entry)?, path, DataType::Number, Value::as_f64)
    }

    pub fn bool_value(&self, path: &str, entry: i64) -> Result<bool, Error> {
        coerce(self.resolve(path, entry)?, path, DataType::Boolean, Value::as_bool)
    }

    /// Copies the subtree at `path` out of this document so that it can be
    /// handed to [`Document::adopt`]. Any kind of value is accepted, not only
    /// arrays.
    pub fn json_array(&self, path: &str, entry: i64) -> Result<Detached, Error> {
        self.resolve(path, entry).cloned().map(Detached::new)
    }

    /// Whether `path` resolves, counting an explicit `null` as present.
    ///
    /// Only `NotFound` and `NullValue` are classified; a bad entry or an
    /// invalid path is still an error.
    pub fn has_item(&self, path: &str, entry: i64) -> Result<bool, Error> {
        match self.resolve(path, entry) {
            Ok(_) | Err(Error::NullValue(_)) => Ok(true),
            Err(Error::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Whether `path` holds `null`. A path that does not resolve at all is
    /// reported as null too.
    pub fn is_null(&self, path: &str, entry: i64) -> Result<bool, Error> {
        match self.resolve(path, entry) {
            Ok(_) => Ok(false),
            Err(e) if e.is_absent() => Ok(true),
            Err(e) => Err(e),
        }
    }
}

pub(crate) fn coerce<T>(
    value: &Value,
    path: &str,
    expected: DataType,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Result<T, Error> {
    convert(value).ok_or_else(|| Error::TypeMismatch {
        path: path.to_string(),
        expected,
        found: value.data_type(),
    })
}
