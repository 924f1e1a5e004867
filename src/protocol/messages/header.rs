//! Request/response headers.
//!
//! Only the non-flexible header versions are implemented (header v1 for
//! requests, header v0 for responses) -- this crate never negotiates a
//! flexible API version, so the tagged-fields header variants never appear
//! on the wire.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::traits::{ReadError, ReadType, WriteError, WriteType};

/// `RequestHeader` (header version 1): api key, api version, correlation id
/// and an optional client id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeader {
    pub api_key: ApiKey,
    pub api_version: i16,
    pub correlation_id: i32,
    pub client_id: Option<String>,
}

impl<W: Write> WriteType<W> for RequestHeader {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        i16::from(self.api_key).write(writer)?;
        self.api_version.write(writer)?;
        self.correlation_id.write(writer)?;
        self.client_id.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadType<R> for RequestHeader {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        let api_key = ApiKey::from(i16::read(reader)?);
        let api_version = i16::read(reader)?;
        let correlation_id = i32::read(reader)?;
        let client_id = Option::<String>::read(reader)?;

        Ok(Self {
            api_key,
            api_version,
            correlation_id,
            client_id,
        })
    }
}

/// `ResponseHeader` (header version 0): just the correlation id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub correlation_id: i32,
}

impl<W: Write> WriteType<W> for ResponseHeader {
    fn write(&self, writer: &mut W) -> Result<(), WriteError> {
        self.correlation_id.write(writer)
    }
}

impl<R: Read> ReadType<R> for ResponseHeader {
    fn read(reader: &mut R) -> Result<Self, ReadError> {
        Ok(Self {
            correlation_id: i32::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn request_header_roundtrip() {
        let header = RequestHeader {
            api_key: ApiKey::ApiVersions,
            api_version: 2,
            correlation_id: 42,
            client_id: Some("test-client".to_string()),
        };

        let mut buf = Vec::new();
        header.write(&mut buf).unwrap();
        let restored = RequestHeader::read(&mut Cursor::new(buf)).unwrap();
        assert_eq!(header, restored);
    }

    #[test]
    fn request_header_null_client_id() {
        let header = RequestHeader {
            api_key: ApiKey::Metadata,
            api_version: 1,
            correlation_id: 7,
            client_id: None,
        };

        let mut buf = Vec::new();
        header.write(&mut buf).unwrap();
        let restored = RequestHeader::read(&mut Cursor::new(buf)).unwrap();
        assert_eq!(header, restored);
    }

    #[test]
    fn response_header_roundtrip() {
        let header = ResponseHeader { correlation_id: 99 };

        let mut buf = Vec::new();
        header.write(&mut buf).unwrap();
        let restored = ResponseHeader::read(&mut Cursor::new(buf)).unwrap();
        assert_eq!(header, restored);
    }
}
