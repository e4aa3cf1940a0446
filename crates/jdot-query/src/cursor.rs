use crate::accessor::coerce;
use crate::{DataType, Detached, Document, Error, Value, resolver};

/// Iteration state for pulling the value at one path out of every entry of
/// a document in turn.
///
/// A cursor remembers the last path it was asked for. Asking for a different
/// path starts over at entry 0, so a cursor should be driven through one path
/// at a time; iterate two paths side by side with two cursors.
///
/// ```
/// use jdot_query::{Cursor, Document};
///
/// let document: Document = r#"[{"v": 10}, {"v": 20}]"#.parse().unwrap();
/// let mut cursor = Cursor::new();
///
/// assert_eq!(cursor.next_float(&document, "v"), Ok(Some(10.0)));
/// assert_eq!(cursor.next_float(&document, "v"), Ok(Some(20.0)));
/// assert_eq!(cursor.next_float(&document, "v"), Ok(None));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    path: Option<String>,
    index: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts over at entry 0 for `path`.
    pub fn rewind(&mut self, path: &str) {
        self.path = Some(path.to_string());
        self.index = 0;
    }

    /// The path currently being iterated.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The entry the next call will resolve.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Resolves `path` in the next entry of `document`.
    ///
    /// Returns `Ok(None)` once every entry has been visited. A failed
    /// resolution is returned as an error and the cursor still moves past
    /// that entry.
    pub fn next<'a>(&mut self, document: &'a Document, path: &str) -> Result<Option<&'a Value>, Error> {
        if self.path.as_deref() != Some(path) {
            self.rewind(path);
        }

        if self.index >= document.cardinality() {
            return Ok(None);
        }

        let entry = self.index;
        self.index += 1;

        // Parsed per call since the path may change between calls.
        let parsed = path.parse()?;
        resolver::resolve(document, &parsed, entry as i64).map(Some)
    }

    pub fn next_string(&mut self, document: &Document, path: &str) -> Result<Option<String>, Error> {
        self.next(document, path)?
            .map(|value| coerce(value, path, DataType::Text, |v| v.as_str().map(str::to_string)))
            .transpose()
    }

    pub fn next_float(&mut self, document: &Document, path: &str) -> Result<Option<f64>, Error> {
        self.next(document, path)?
            .map(|value| coerce(value, path, DataType::Number, Value::as_f64))
            .transpose()
    }

    pub fn next_bool(&mut self, document: &Document, path: &str) -> Result<Option<bool>, Error> {
        self.next(document, path)?
            .map(|value| coerce(value, path, DataType::Boolean, Value::as_bool))
            .transpose()
    }

    pub fn next_array(&mut self, document: &Document, path: &str) -> Result<Option<Detached>, Error> {
        Ok(self.next(document, path)?.cloned().map(Detached::new))
    }
}

/// Iterator over the value at one path in every entry of a document.
///
/// Created by [`Document::each`].
#[derive(Debug)]
pub struct Each<'a> {
    document: &'a Document,
    path: String,
    cursor: Cursor,
}

impl<'a> Iterator for Each<'a> {
    type Item = Result<&'a Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next(self.document, &self.path).transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.document.cardinality().saturating_sub(self.cursor.position());
        (remaining, Some(remaining))
    }
}

impl Document {
    pub fn each(&self, path: &str) -> Each<'_> {
        let mut cursor = Cursor::new();
        cursor.rewind(path);
        Each {
            document: self,
            path: path.to_string(),
            cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn readings() -> Document {
        r#"[{"v": 10, "ok": true}, {"v": 20, "ok": false}, {"v": 30, "ok": true}]"#
            .parse()
            .unwrap()
    }

    #[rstest]
    fn test_next_until_end(readings: Document) {
        let mut cursor = Cursor::new();

        assert_eq!(cursor.next(&readings, "v"), Ok(Some(&Value::Number(10.0))));
        assert_eq!(cursor.next(&readings, "v"), Ok(Some(&Value::Number(20.0))));
        assert_eq!(cursor.next(&readings, "v"), Ok(Some(&Value::Number(30.0))));
        assert_eq!(cursor.next(&readings, "v"), Ok(None));
        assert_eq!(cursor.next(&readings, "v"), Ok(None));
        assert_eq!(cursor.position(), 3);
    }

    #[rstest]
    fn test_path_change_resets(readings: Document) {
        let mut cursor = Cursor::new();
        cursor.next(&readings, "v").unwrap();
        cursor.next(&readings, "v").unwrap();

        assert_eq!(cursor.next_bool(&readings, "ok"), Ok(Some(true)));
        assert_eq!(cursor.path(), Some("ok"));
        assert_eq!(cursor.position(), 1);

        assert_eq!(cursor.next_float(&readings, "v"), Ok(Some(10.0)));
    }

    #[rstest]
    fn test_separate_cursors_do_not_interfere(readings: Document) {
        let mut values = Cursor::new();
        let mut flags = Cursor::new();

        assert_eq!(values.next_float(&readings, "v"), Ok(Some(10.0)));
        assert_eq!(flags.next_bool(&readings, "ok"), Ok(Some(true)));
        assert_eq!(values.next_float(&readings, "v"), Ok(Some(20.0)));
        assert_eq!(flags.next_bool(&readings, "ok"), Ok(Some(false)));
    }

    #[rstest]
    fn test_rewind(readings: Document) {
        let mut cursor = Cursor::new();
        while cursor.next(&readings, "v").unwrap().is_some() {}

        cursor.rewind("v");
        assert_eq!(cursor.next_float(&readings, "v"), Ok(Some(10.0)));
    }

    #[test]
    fn test_failures_are_not_end_of_iteration() {
        let document: Document = r#"[{"v": 1}, {"w": 2}, {"v": null}, {"v": 4}]"#.parse().unwrap();
        let mut cursor = Cursor::new();

        assert_eq!(cursor.next_float(&document, "v"), Ok(Some(1.0)));
        assert_eq!(
            cursor.next_float(&document, "v"),
            Err(Error::NotFound("v".to_string()))
        );
        assert_eq!(
            cursor.next_float(&document, "v"),
            Err(Error::NullValue("v".to_string()))
        );
        assert_eq!(cursor.next_float(&document, "v"), Ok(Some(4.0)));
        assert_eq!(cursor.next_float(&document, "v"), Ok(None));
    }

    #[test]
    fn test_typed_wrappers_report_mismatch() {
        let document: Document = r#"[{"v": "ten"}]"#.parse().unwrap();
        let mut cursor = Cursor::new();

        assert_eq!(
            cursor.next_float(&document, "v"),
            Err(Error::TypeMismatch {
                path: "v".to_string(),
                expected: DataType::Number,
                found: DataType::Text
            })
        );
    }

    #[test]
    fn test_next_string_and_array() {
        let document: Document =
            r#"[{"name": "a", "tags": [1]}, {"name": "b", "tags": [2, 3]}]"#.parse().unwrap();
        let mut names = Cursor::new();
        let mut tags = Cursor::new();

        assert_eq!(names.next_string(&document, "name"), Ok(Some("a".to_string())));
        assert_eq!(names.next_string(&document, "name"), Ok(Some("b".to_string())));
        assert_eq!(names.next_string(&document, "name"), Ok(None));

        tags.next_array(&document, "tags").unwrap();
        let second = tags.next_array(&document, "tags").unwrap().unwrap();
        assert_eq!(Document::from_detached(second).unwrap().cardinality(), 2);
        assert_eq!(tags.next_array(&document, "tags"), Ok(None));
    }

    #[test]
    fn test_object_root_iterates_by_member_count() {
        // Entries only bound-check an object root, so each call sees the
        // whole object.
        let document: Document = r#"{"a": 1, "b": 2}"#.parse().unwrap();
        let values = document
            .each("b")
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(values, vec![&Value::Number(2.0), &Value::Number(2.0)]);
    }

    #[test]
    fn test_empty_document_ends_immediately() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.next(&Document::new(), "v"), Ok(None));
    }

    #[rstest]
    fn test_each(readings: Document) {
        let each = readings.each("v");
        assert_eq!(each.size_hint(), (3, Some(3)));

        let values = each
            .map(|value| value.map(|v| v.as_f64()))
            .collect::<Result<Vec<_>, _>>();
        assert_eq!(values, Ok(vec![Some(10.0), Some(20.0), Some(30.0)]));
    }

    #[test]
    fn test_each_invalid_path() {
        let document: Document = r#"[{"v": 1}]"#.parse().unwrap();
        let mut each = document.each("v..");

        assert_eq!(each.next(), Some(Err(Error::InvalidPath("v..".to_string()))));
        assert_eq!(each.next(), None);
    }
}
