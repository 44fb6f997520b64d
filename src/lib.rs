//! Ordered, case-insensitive, multi-valued HTTP header collection.
//!
//! The [`Headers`] type stores header values under canonical names and
//! enforces the wire rules configured in [`HeaderRules`]: headers that may
//! only carry one value, and headers that must never be folded into a single
//! comma-separated line.
//!
//! ```
//! use hyperheaders::Headers;
//!
//! let mut headers = Headers::new();
//! headers.add_raw_header("set-cookie: a=1").unwrap();
//! headers.add_raw_header("Set-Cookie: b=2").unwrap();
//! headers.add_header("accept", vec!["text/html", "application/json"]);
//!
//! assert_eq!(
//!     headers.to_raw_headers(),
//!     vec![
//!         "Set-Cookie: a=1",
//!         "Set-Cookie: b=2",
//!         "Accept: text/html, application/json",
//!     ]
//! );
//! ```

pub mod cli;
pub mod config;
pub mod http;

pub use config::HeaderRules;
pub use http::StandardHeader;
pub use http::error::HeaderError;
pub use http::headers::Headers;
pub use http::name::normalize_name;
pub use http::value::HeaderValue;
