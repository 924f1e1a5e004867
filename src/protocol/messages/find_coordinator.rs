//! `FindCoordinator` request/response (key 10), version 0.
//!
//! Exposed on the broker surface under the `GroupCoordinator` name, since
//! that's the role this RPC actually plays from a consumer-group client's
//! point of view.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{ReadVersionedError, ReadVersionedType, RequestBody, WriteVersionedError, WriteVersionedType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCoordinatorRequest {
    pub key: String,
}

impl RequestBody for FindCoordinatorRequest {
    type ResponseBody = FindCoordinatorResponse;

    const API_KEY: ApiKey = ApiKey::FindCoordinator;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for FindCoordinatorRequest {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.key.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for FindCoordinatorRequest {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            key: String::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCoordinatorResponse {
    pub error_code: i16,
    pub node_id: i32,
    pub host: String,
    pub port: i32,
}

impl RequestBody for FindCoordinatorResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::FindCoordinator;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for FindCoordinatorResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.node_id.write(writer)?;
        self.host.write(writer)?;
        self.port.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for FindCoordinatorResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            node_id: i32::read(reader)?,
            host: String::read(reader)?,
            port: i32::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let resp = FindCoordinatorResponse {
            error_code: 0,
            node_id: 1,
            host: "kafka-1".to_string(),
            port: 9092,
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            FindCoordinatorResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(resp, restored);
    }
}
