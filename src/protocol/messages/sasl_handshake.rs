//! `SaslHandshake` request/response (key 17), version 1.
//!
//! The handshake negotiates the mechanism; the actual credential exchange
//! happens over `SaslAuthenticate` (KIP-152) once the broker has echoed back
//! the mechanism this client asked for.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{ReadVersionedError, ReadVersionedType, RequestBody, WriteVersionedError, WriteVersionedType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaslHandshakeRequest {
    pub mechanism: String,
}

impl RequestBody for SaslHandshakeRequest {
    type ResponseBody = SaslHandshakeResponse;

    const API_KEY: ApiKey = ApiKey::SaslHandshake;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for SaslHandshakeRequest {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.mechanism.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for SaslHandshakeRequest {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            mechanism: String::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaslHandshakeResponse {
    pub error_code: i16,
    pub mechanisms: Vec<String>,
}

impl RequestBody for SaslHandshakeResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::SaslHandshake;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for SaslHandshakeResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.mechanisms.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for SaslHandshakeResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            mechanisms: Vec::<String>::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = SaslHandshakeRequest {
            mechanism: "PLAIN".to_string(),
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored = SaslHandshakeRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(req, restored);
    }

    #[test]
    fn response_lists_supported_mechanisms_on_error() {
        let resp = SaslHandshakeResponse {
            error_code: 33, // UNSUPPORTED_SASL_MECHANISM
            mechanisms: vec!["PLAIN".to_string(), "SCRAM-SHA-256".to_string()],
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored =
            SaslHandshakeResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(resp, restored);
    }
}
