//! Document sources for jdot.
//!
//! This crate reads JSON documents from files or downloads them with a
//! blocking HTTP GET, then hands the bytes to [`jdot_query::Document`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use jdot_fetch::{FetchConfig, HttpClient, LoadExt, Source};
//! use jdot_query::Document;
//!
//! let client = HttpClient::new(&FetchConfig::from_env())?;
//! let document = jdot_fetch::open(&Source::detect("https://example.com/forecast.json"), &client)?;
//! println!("{}", document.float_value("Temperature.Minimum.Value", 0)?);
//!
//! // Reload in place from a file.
//! let mut document = document;
//! document.load_file("forecast.json")?;
//! ```
//!
//! # TLS
//!
//! Certificates and host names are verified unless
//! [`FetchConfig::accept_invalid_certs`] is set, either directly or through
//! `JDOT_ACCEPT_INVALID_CERTS=1`.
pub mod config;
pub mod error;
pub mod http_client;
pub mod loader;
pub mod source;

pub use config::FetchConfig;
pub use error::FetchError;
pub use http_client::HttpClient;
pub use loader::{LoadExt, open};
pub use source::{Mode, Source};
