//! `JoinGroup` request/response (key 11), version 1.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinGroupRequestProtocol {
    pub name: String,
    pub metadata: Vec<u8>,
}

impl<W: Write> WriteVersionedType<W> for JoinGroupRequestProtocol {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.metadata.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for JoinGroupRequestProtocol {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            metadata: Vec::<u8>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinGroupRequest {
    pub group_id: String,
    pub session_timeout_ms: i32,
    pub rebalance_timeout_ms: i32,
    /// Empty string on the first join attempt; the broker assigns one and
    /// the caller retries with it on `MEMBER_ID_REQUIRED`.
    pub member_id: String,
    pub protocol_type: String,
    pub protocols: Vec<JoinGroupRequestProtocol>,
}

impl RequestBody for JoinGroupRequest {
    type ResponseBody = JoinGroupResponse;

    const API_KEY: ApiKey = ApiKey::JoinGroup;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for JoinGroupRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.group_id.write(writer)?;
        self.session_timeout_ms.write(writer)?;
        self.rebalance_timeout_ms.write(writer)?;
        self.member_id.write(writer)?;
        self.protocol_type.write(writer)?;
        write_versioned_array(writer, &self.protocols, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for JoinGroupRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            group_id: String::read(reader)?,
            session_timeout_ms: i32::read(reader)?,
            rebalance_timeout_ms: i32::read(reader)?,
            member_id: String::read(reader)?,
            protocol_type: String::read(reader)?,
            protocols: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinGroupResponseMember {
    pub member_id: String,
    pub metadata: Vec<u8>,
}

impl<W: Write> WriteVersionedType<W> for JoinGroupResponseMember {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.member_id.write(writer)?;
        self.metadata.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for JoinGroupResponseMember {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            member_id: String::read(reader)?,
            metadata: Vec::<u8>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinGroupResponse {
    pub error_code: i16,
    pub generation_id: i32,
    pub protocol_name: String,
    pub leader: String,
    pub member_id: String,
    pub members: Vec<JoinGroupResponseMember>,
}

impl RequestBody for JoinGroupResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::JoinGroup;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for JoinGroupResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.generation_id.write(writer)?;
        self.protocol_name.write(writer)?;
        self.leader.write(writer)?;
        self.member_id.write(writer)?;
        write_versioned_array(writer, &self.members, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for JoinGroupResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            generation_id: i32::read(reader)?,
            protocol_name: String::read(reader)?,
            leader: String::read(reader)?,
            member_id: String::read(reader)?,
            members: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = JoinGroupRequest {
            group_id: "consumers".to_string(),
            session_timeout_ms: 10_000,
            rebalance_timeout_ms: 30_000,
            member_id: String::new(),
            protocol_type: "consumer".to_string(),
            protocols: vec![JoinGroupRequestProtocol {
                name: "range".to_string(),
                metadata: vec![0, 1],
            }],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored = JoinGroupRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(req, restored);
    }

    #[test]
    fn response_member_id_required_has_empty_member_list() {
        let resp = JoinGroupResponse {
            error_code: 79, // MEMBER_ID_REQUIRED
            generation_id: -1,
            protocol_name: String::new(),
            leader: String::new(),
            member_id: "assigned-member-1".to_string(),
            members: vec![],
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored = JoinGroupResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(resp, restored);
    }
}
