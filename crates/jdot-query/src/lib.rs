//! `jdot-query` resolves dotted name paths such as `"a.b.c"` against parsed
//! JSON documents whose object layers may be wrapped in arrays.
//!
//! ## Examples
//!
//! ```rust
//! use jdot_query::{DataType, Document};
//!
//! let document: Document = r#"[
//!     {"Date": "2019-03-05", "Temperature": [{"Minimum": {"Value": -4.5}}]},
//!     {"Date": "2019-03-06", "Temperature": [{"Minimum": {"Value": 1.0}}], "Note": null}
//! ]"#
//! .parse()
//! .unwrap();
//!
//! // Array wrappers are looked through.
//! assert_eq!(document.float_value("Temperature.Minimum.Value", 0), Ok(-4.5));
//! assert_eq!(document.data_type("Note", 1), DataType::Empty);
//! assert_eq!(document.is_null("Note", 1), Ok(true));
//! assert!(document.is_null("Note", 5).is_err());
//!
//! // Pull one path out of every entry.
//! let dates = document
//!     .each("Date")
//!     .map(|value| value.map(|v| v.to_string()))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(dates, vec![r#""2019-03-05""#, r#""2019-03-06""#]);
//!
//! // Split a subtree off and query it as a document of its own.
//! let temperature = document.json_array("Temperature", 1).unwrap();
//! let nested = jdot_query::Document::from_detached(temperature).unwrap();
//! assert_eq!(nested.float_value("Minimum.Value", 0), Ok(1.0));
//! ```
mod accessor;
pub mod codec;
mod cursor;
mod document;
mod error;
mod path;
pub mod resolver;
mod value;

pub use accessor::DataType;
pub use cursor::{Cursor, Each};
pub use document::Document;
pub use error::Error;
pub use path::Path;
pub use value::{Detached, Member, Value};

pub type QueryResult<T> = Result<T, Error>;
