//! `SaslAuthenticate` request/response (key 36), version 0.
//!
//! Carries one opaque round of a SASL exchange as raw bytes -- this crate
//! doesn't interpret the mechanism's own framing, only PLAIN's single
//! request/response round trip.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{ReadVersionedError, ReadVersionedType, RequestBody, WriteVersionedError, WriteVersionedType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaslAuthenticateRequest {
    pub auth_bytes: Vec<u8>,
}

impl RequestBody for SaslAuthenticateRequest {
    type ResponseBody = SaslAuthenticateResponse;

    const API_KEY: ApiKey = ApiKey::SaslAuthenticate;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for SaslAuthenticateRequest {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.auth_bytes.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for SaslAuthenticateRequest {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            auth_bytes: Vec::<u8>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaslAuthenticateResponse {
    pub error_code: i16,
    pub error_message: Option<String>,
    pub auth_bytes: Vec<u8>,
    /// Remaining lifetime of the authenticated session, in milliseconds;
    /// `0` means the session never expires and no reauthentication is ever
    /// required.
    pub session_lifetime_ms: i64,
}

impl RequestBody for SaslAuthenticateResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::SaslAuthenticate;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for SaslAuthenticateResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.error_message.write(writer)?;
        self.auth_bytes.write(writer)?;
        self.session_lifetime_ms.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for SaslAuthenticateResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            error_message: Option::<String>::read(reader)?,
            auth_bytes: Vec::<u8>::read(reader)?,
            session_lifetime_ms: i64::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = SaslAuthenticateRequest {
            auth_bytes: b"\0alice\0secret".to_vec(),
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            SaslAuthenticateRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }

    #[test]
    fn response_zero_session_lifetime_means_never_expires() {
        let resp = SaslAuthenticateResponse {
            error_code: 0,
            error_message: None,
            auth_bytes: vec![],
            session_lifetime_ms: 0,
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            SaslAuthenticateResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(restored.session_lifetime_ms, 0);
    }
}
