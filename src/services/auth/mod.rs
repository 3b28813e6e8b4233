//! Authentication primitives shared by middleware and handlers.

pub mod api_key;

pub use api_key::{ApiKey, ApiKeyError, get_api_key, parse_authorization};
