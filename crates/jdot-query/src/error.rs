use miette::Diagnostic;
use thiserror::Error;

use crate::DataType;

/// Failures raised while loading a document or resolving a path against it.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq)]
pub enum Error {
    /// The source bytes (or an adopted tree) did not yield a valid document.
    #[error("Document could not be parsed as JSON: {0}")]
    #[diagnostic(code(jdot::parse_failure))]
    ParseFailure(String),
    /// The entry index is negative or not below the cached cardinality.
    #[error("Entry {entry} is out of bounds for a document of {cardinality} entries")]
    #[diagnostic(code(jdot::bad_entry))]
    BadEntry { entry: i64, cardinality: usize },
    #[error("\"{0}\" was not found")]
    #[diagnostic(code(jdot::not_found))]
    NotFound(String),
    #[error("\"{0}\" is null")]
    #[diagnostic(code(jdot::null_value))]
    NullValue(String),
    #[error("\"{path}\" is {found}, expected {expected}")]
    #[diagnostic(code(jdot::type_mismatch))]
    TypeMismatch {
        path: String,
        expected: DataType,
        found: DataType,
    },
    /// Empty paths and paths with an empty segment (`"a..b"`, `".a"`).
    #[error("Invalid path \"{0}\"")]
    #[diagnostic(
        code(jdot::invalid_path),
        help("paths are one or more non-empty names separated by `.`")
    )]
    InvalidPath(String),
}

impl Error {
    /// Whether this failure only means that nothing usable sits at the path.
    pub fn is_absent(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::NullValue(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::parse(Error::ParseFailure("EOF while parsing".to_string()), "Document could not be parsed as JSON: EOF while parsing")]
    #[case::bad_entry(Error::BadEntry { entry: -1, cardinality: 3 }, "Entry -1 is out of bounds for a document of 3 entries")]
    #[case::not_found(Error::NotFound("a.b".to_string()), "\"a.b\" was not found")]
    #[case::null(Error::NullValue("a".to_string()), "\"a\" is null")]
    #[case::mismatch(
        Error::TypeMismatch { path: "a".to_string(), expected: DataType::Number, found: DataType::Text },
        "\"a\" is text, expected number"
    )]
    #[case::invalid_path(Error::InvalidPath("a..b".to_string()), "Invalid path \"a..b\"")]
    fn test_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_is_absent() {
        assert!(Error::NotFound("a".to_string()).is_absent());
        assert!(Error::NullValue("a".to_string()).is_absent());
        assert!(!Error::BadEntry { entry: 0, cardinality: 0 }.is_absent());
    }
}
