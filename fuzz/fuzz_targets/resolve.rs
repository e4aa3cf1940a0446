#![no_main]

use arbitrary::Arbitrary;
use itertools::Itertools;
use jdot_query::{Cursor, Document, Error};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum Node {
    Null,
    Bool(bool),
    Number(i32),
    Text(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
    Raw(String),
}

impl Node {
    fn to_json(&self) -> String {
        match self {
            Node::Null => "null".to_string(),
            Node::Bool(b) => b.to_string(),
            Node::Number(n) => n.to_string(),
            Node::Text(s) => format!("{:?}", s),
            Node::Array(items) => format!("[{}]", items.iter().map(Node::to_json).join(",")),
            Node::Object(members) => format!(
                "{{{}}}",
                members
                    .iter()
                    .map(|(name, value)| format!("{:?}:{}", name, value.to_json()))
                    .join(",")
            ),
            Node::Raw(raw) => raw.clone(),
        }
    }
}

#[derive(Debug, Clone, Arbitrary)]
struct Query {
    document: Node,
    segments: Vec<String>,
    entry: i64,
}

fuzz_target!(|query: Query| {
    let Ok(document) = query.document.to_json().parse::<Document>() else {
        return;
    };
    let path = query.segments.iter().join(".");

    match document.resolve(&path, query.entry) {
        Ok(value) => assert!(!value.is_null()),
        Err(Error::BadEntry { cardinality, .. }) => assert_eq!(cardinality, document.cardinality()),
        Err(_) => {}
    }

    let _ = document.data_type(&path, query.entry);
    let _ = document.lookup(&path, query.entry);
    assert_eq!(document.each(&path).count(), document.cardinality());

    let mut cursor = Cursor::new();
    let mut visited = 0;
    while let Ok(Some(_)) | Err(_) = cursor.next(&document, &path) {
        visited += 1;
        if visited > document.cardinality() {
            panic!("cursor did not stop after {} entries", document.cardinality());
        }
    }
});
