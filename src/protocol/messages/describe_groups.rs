//! `DescribeGroups` request/response (key 15), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeGroupsRequest {
    pub groups: Vec<String>,
}

impl RequestBody for DescribeGroupsRequest {
    type ResponseBody = DescribeGroupsResponse;

    const API_KEY: ApiKey = ApiKey::DescribeGroups;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DescribeGroupsRequest {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.groups.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeGroupsRequest {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            groups: Vec::<String>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedGroupMember {
    pub member_id: String,
    pub client_id: String,
    pub client_host: String,
    pub member_metadata: Vec<u8>,
    pub member_assignment: Vec<u8>,
}

impl<W: Write> WriteVersionedType<W> for DescribedGroupMember {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.member_id.write(writer)?;
        self.client_id.write(writer)?;
        self.client_host.write(writer)?;
        self.member_metadata.write(writer)?;
        self.member_assignment.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribedGroupMember {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            member_id: String::read(reader)?,
            client_id: String::read(reader)?,
            client_host: String::read(reader)?,
            member_metadata: Vec::<u8>::read(reader)?,
            member_assignment: Vec::<u8>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedGroup {
    pub error_code: i16,
    pub group_id: String,
    pub group_state: String,
    pub protocol_type: String,
    pub protocol_data: String,
    pub members: Vec<DescribedGroupMember>,
}

impl<W: Write> WriteVersionedType<W> for DescribedGroup {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.group_id.write(writer)?;
        self.group_state.write(writer)?;
        self.protocol_type.write(writer)?;
        self.protocol_data.write(writer)?;
        write_versioned_array(writer, &self.members, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribedGroup {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            group_id: String::read(reader)?,
            group_state: String::read(reader)?,
            protocol_type: String::read(reader)?,
            protocol_data: String::read(reader)?,
            members: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeGroupsResponse {
    pub groups: Vec<DescribedGroup>,
}

impl RequestBody for DescribeGroupsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::DescribeGroups;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DescribeGroupsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.groups, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeGroupsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            groups: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = DescribeGroupsRequest {
            groups: vec!["consumers".to_string()],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            DescribeGroupsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
