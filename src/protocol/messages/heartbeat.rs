//! `Heartbeat` request/response (key 12), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{ReadVersionedError, ReadVersionedType, RequestBody, WriteVersionedError, WriteVersionedType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatRequest {
    pub group_id: String,
    pub generation_id: i32,
    pub member_id: String,
}

impl RequestBody for HeartbeatRequest {
    type ResponseBody = HeartbeatResponse;

    const API_KEY: ApiKey = ApiKey::Heartbeat;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for HeartbeatRequest {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.group_id.write(writer)?;
        self.generation_id.write(writer)?;
        self.member_id.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for HeartbeatRequest {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            group_id: String::read(reader)?,
            generation_id: i32::read(reader)?,
            member_id: String::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartbeatResponse {
    pub error_code: i16,
}

impl RequestBody for HeartbeatResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::Heartbeat;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for HeartbeatResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for HeartbeatResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = HeartbeatRequest {
            group_id: "consumers".to_string(),
            generation_id: 3,
            member_id: "member-1".to_string(),
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = HeartbeatRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
