//! Kafka wire protocol: primitive types, versioned message codecs, and the
//! API key/version identifiers that tie a request to its response.

pub mod api_key;
pub mod api_version;
pub mod error;
pub mod messages;
pub mod primitives;
pub mod traits;

pub use api_key::ApiKey;
pub use api_version::{ApiVersion, ApiVersionRange};
pub use error::Error as ApiError;
