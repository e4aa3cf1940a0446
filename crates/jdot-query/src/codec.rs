//! JSON text <-> [`Value`] conversion.
//!
//! serde_json does the syntax work. The `Deserialize` impl below collects
//! object members into a `Vec` instead of a map so that member order and
//! duplicate names survive parsing.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{Error, Value};

// Whole numbers inside this range print without a fraction (`7`, not `7.0`).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Parses JSON text into a tree.
pub fn parse(bytes: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(bytes).map_err(|e| Error::ParseFailure(e.to_string()))
}

/// Pretty-printed JSON, as used for diagnostic dumps.
pub fn print(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Single-line JSON.
pub fn print_compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (name, value) in members {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Number(n as f64))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(member) = map.next_entry::<String, Value>()? {
            members.push(member);
        }
        Ok(Value::Object(members))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::null("null", Value::Null)]
    #[case::bool("true", Value::TRUE)]
    #[case::int("-12", Value::Number(-12.0))]
    #[case::float("2.5e1", Value::Number(25.0))]
    #[case::string(r#""wind""#, Value::from("wind"))]
    #[case::array("[1, null]", Value::from(vec![Value::from(1), Value::Null]))]
    #[case::nested(
        r#"{"a": [{"b": false}]}"#,
        Value::Object(vec![(
            "a".to_string(),
            Value::from(vec![Value::Object(vec![("b".to_string(), Value::FALSE)])])
        )])
    )]
    fn test_parse(#[case] input: &str, #[case] expected: Value) {
        assert_eq!(parse(input.as_bytes()), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::truncated(r#"{"a": "#)]
    #[case::trailing_comma("[1,]")]
    #[case::bare_word("sunny")]
    fn test_parse_failure(#[case] input: &str) {
        assert!(matches!(parse(input.as_bytes()), Err(Error::ParseFailure(_))));
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let value = parse(br#"{"z": 1, "a": 2, "z": 3}"#).unwrap();
        let names = value
            .members()
            .unwrap()
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["z", "a", "z"]);
        assert_eq!(print_compact(&value), r#"{"z":1,"a":2,"z":3}"#);
    }

    #[rstest]
    #[case::whole(Value::Number(7.0), "7")]
    #[case::negative_whole(Value::Number(-3.0), "-3")]
    #[case::fraction(Value::Number(0.25), "0.25")]
    #[case::huge(Value::Number(1e300), "1e+300")]
    fn test_print_numbers(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(print_compact(&value), expected);
    }

    #[test]
    fn test_print_pretty() {
        let value = parse(br#"{"a":[1,{"b":null}]}"#).unwrap();
        assert_eq!(
            print(&value),
            "{\n  \"a\": [\n    1,\n    {\n      \"b\": null\n    }\n  ]\n}"
        );
    }
}
