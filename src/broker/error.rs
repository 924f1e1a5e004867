//! Broker-level errors.

use thiserror::Error;

use crate::connection::sasl::SaslError;
use crate::connection::ConnectionError;
use crate::protocol::messages::{ReadVersionedError, WriteVersionedError};
use crate::protocol::ApiError;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("broker is not connected")]
    NotConnected,

    #[error("connect timed out waiting for the connect lock")]
    LockTimeout,

    #[error("TCP connect timed out")]
    ConnectTimeout,

    #[error("SASL authentication timed out")]
    AuthenticationTimeout,

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error("broker does not support any version of this API in range {0}")]
    UnsupportedVersion(crate::protocol::api_version::ApiVersionRange),

    #[error("request encoding failed: {0}")]
    Encode(#[from] WriteVersionedError),

    #[error("response decoding failed: {0}")]
    Decode(#[from] ReadVersionedError),

    #[error("broker returned a protocol error: {0}")]
    Protocol(#[from] ApiError),

    #[error("SASL error: {0}")]
    Sasl(#[from] SaslError),

    #[error("SASL authentication failed: {0}")]
    SaslAuthenticationFailed(String),
}
