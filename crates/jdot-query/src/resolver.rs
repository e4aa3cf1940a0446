//! Name-path resolution over array-wrapped documents.
//!
//! Vendor APIs often wrap object layers in single-element arrays at arbitrary
//! depth. Both resolvers here look through such wrappers by always taking the
//! first element, so one path string works whichever layers are wrapped.

use crate::{Document, Error, Member, Path, Value};

/// Selects the part of the document that `entry` refers to.
///
/// `entry` is bounds-checked against the cached cardinality for every root
/// kind. For an array root it picks the element; any other root is returned
/// whole.
pub fn section(document: &Document, entry: i64) -> Result<&Value, Error> {
    let cardinality = document.cardinality();
    let bad_entry = || Error::BadEntry { entry, cardinality };

    let index = usize::try_from(entry)
        .ok()
        .filter(|index| *index < cardinality)
        .ok_or_else(bad_entry)?;

    match document.root().ok_or_else(bad_entry)? {
        // The array may have shrunk through `root_mut` since the count was cached.
        Value::Array(items) => items.get(index).ok_or_else(bad_entry),
        root => Ok(root),
    }
}

/// Resolves `path` within entry `entry` of `document`.
///
/// Starting at the first member of the section named after the first
/// segment, the walk descends whenever the current member's name equals the
/// segment expected at the current depth and otherwise moves on to the next
/// sibling. It stops at the first member named after the last segment.
/// Descending into an array continues with the members of its first element.
pub fn resolve<'a>(document: &'a Document, path: &Path, entry: i64) -> Result<&'a Value, Error> {
    let section = section(document, entry)?;
    let not_found = || Error::NotFound(path.to_string());

    let segments = path.segments();
    let last = path.last();

    let mut members = section.members().unwrap_or_default();
    let mut at = members
        .iter()
        .position(|(name, _)| name.as_str() == path.first())
        .ok_or_else(not_found)?;
    let mut level = 0;

    let value = loop {
        let Some((name, value)) = members.get(at) else {
            return Err(not_found());
        };

        if name.as_str() == last {
            break value;
        }

        if name.as_str() == segments[level].as_str() {
            members = children(value);
            at = 0;
            level += 1;
        } else {
            at += 1;
        }
    };

    tracing::trace!(path = %path, entry, "resolved");
    non_null(value, path.as_str())
}

/// Single-level lookup of `name` in `section`.
///
/// If `section` has no member called `name` and is itself an array, the
/// lookup is retried against its first element, repeatedly.
pub fn lookup<'a>(section: &'a Value, name: &str) -> Result<&'a Value, Error> {
    match (section.get(name), section) {
        (Some(value), _) => non_null(value, name),
        (None, Value::Array(items)) => items
            .first()
            .ok_or_else(|| Error::NotFound(name.to_string()))
            .and_then(|first| lookup(first, name)),
        (None, _) => Err(Error::NotFound(name.to_string())),
    }
}

// Members one level down: those of an object, or those of the first element
// of an array. Anything else has none.
fn children(value: &Value) -> &[Member] {
    let target = match value {
        Value::Array(items) => match items.first() {
            Some(first) => first,
            None => return &[],
        },
        other => other,
    };

    target.members().unwrap_or_default()
}

fn non_null<'a>(value: &'a Value, path: &str) -> Result<&'a Value, Error> {
    if value.is_null() {
        Err(Error::NullValue(path.to_string()))
    } else {
        Ok(value)
    }
}
