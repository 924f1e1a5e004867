//! `DeleteGroups` request/response (key 42), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteGroupsRequest {
    pub groups_names: Vec<String>,
}

impl RequestBody for DeleteGroupsRequest {
    type ResponseBody = DeleteGroupsResponse;

    const API_KEY: ApiKey = ApiKey::DeleteGroups;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DeleteGroupsRequest {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.groups_names.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteGroupsRequest {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            groups_names: Vec::<String>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletableGroupResult {
    pub group_id: String,
    pub error_code: i16,
}

impl<W: Write> WriteVersionedType<W> for DeletableGroupResult {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.group_id.write(writer)?;
        self.error_code.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeletableGroupResult {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            group_id: String::read(reader)?,
            error_code: i16::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteGroupsResponse {
    pub results: Vec<DeletableGroupResult>,
}

impl RequestBody for DeleteGroupsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::DeleteGroups;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DeleteGroupsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.results, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteGroupsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            results: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = DeleteGroupsRequest {
            groups_names: vec!["consumers".to_string()],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = DeleteGroupsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
