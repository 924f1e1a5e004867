//! `SyncGroup` request/response (key 14), version 1.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncGroupRequestAssignment {
    pub member_id: String,
    pub assignment: Vec<u8>,
}

impl<W: Write> WriteVersionedType<W> for SyncGroupRequestAssignment {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.member_id.write(writer)?;
        self.assignment.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for SyncGroupRequestAssignment {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            member_id: String::read(reader)?,
            assignment: Vec::<u8>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncGroupRequest {
    pub group_id: String,
    pub generation_id: i32,
    pub member_id: String,
    pub assignments: Vec<SyncGroupRequestAssignment>,
}

impl RequestBody for SyncGroupRequest {
    type ResponseBody = SyncGroupResponse;

    const API_KEY: ApiKey = ApiKey::SyncGroup;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for SyncGroupRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.group_id.write(writer)?;
        self.generation_id.write(writer)?;
        self.member_id.write(writer)?;
        write_versioned_array(writer, &self.assignments, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for SyncGroupRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            group_id: String::read(reader)?,
            generation_id: i32::read(reader)?,
            member_id: String::read(reader)?,
            assignments: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncGroupResponse {
    pub error_code: i16,
    pub assignment: Vec<u8>,
}

impl RequestBody for SyncGroupResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::SyncGroup;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for SyncGroupResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.assignment.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for SyncGroupResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            assignment: Vec::<u8>::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = SyncGroupRequest {
            group_id: "consumers".to_string(),
            generation_id: 3,
            member_id: "member-1".to_string(),
            assignments: vec![SyncGroupRequestAssignment {
                member_id: "member-1".to_string(),
                assignment: vec![1, 2, 3],
            }],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored = SyncGroupRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(req, restored);
    }
}
