//! `ListGroups` request/response (key 16), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListGroupsRequest;

impl RequestBody for ListGroupsRequest {
    type ResponseBody = ListGroupsResponse;

    const API_KEY: ApiKey = ApiKey::ListGroups;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for ListGroupsRequest {
    fn write_versioned(&self, _writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListGroupsRequest {
    fn read_versioned(_reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedGroup {
    pub group_id: String,
    pub protocol_type: String,
}

impl<W: Write> WriteVersionedType<W> for ListedGroup {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.group_id.write(writer)?;
        self.protocol_type.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListedGroup {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            group_id: String::read(reader)?,
            protocol_type: String::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGroupsResponse {
    pub error_code: i16,
    pub groups: Vec<ListedGroup>,
}

impl RequestBody for ListGroupsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::ListGroups;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for ListGroupsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        write_versioned_array(writer, &self.groups, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListGroupsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
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
        let resp = ListGroupsResponse {
            error_code: 0,
            groups: vec![ListedGroup {
                group_id: "consumers".to_string(),
                protocol_type: "consumer".to_string(),
            }],
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = ListGroupsResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(resp, restored);
    }
}
