//! `DeleteAcls` request/response (key 31), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAclsFilter {
    pub resource_type_filter: i8,
    pub resource_name_filter: Option<String>,
    pub pattern_type_filter: i8,
    pub principal_filter: Option<String>,
    pub host_filter: Option<String>,
    pub operation: i8,
    pub permission_type: i8,
}

impl<W: Write> WriteVersionedType<W> for DeleteAclsFilter {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.resource_type_filter.write(writer)?;
        self.resource_name_filter.write(writer)?;
        self.pattern_type_filter.write(writer)?;
        self.principal_filter.write(writer)?;
        self.host_filter.write(writer)?;
        self.operation.write(writer)?;
        self.permission_type.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteAclsFilter {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            resource_type_filter: i8::read(reader)?,
            resource_name_filter: Option::<String>::read(reader)?,
            pattern_type_filter: i8::read(reader)?,
            principal_filter: Option::<String>::read(reader)?,
            host_filter: Option::<String>::read(reader)?,
            operation: i8::read(reader)?,
            permission_type: i8::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAclsRequest {
    pub filters: Vec<DeleteAclsFilter>,
}

impl RequestBody for DeleteAclsRequest {
    type ResponseBody = DeleteAclsResponse;

    const API_KEY: ApiKey = ApiKey::DeleteAcls;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DeleteAclsRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.filters, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteAclsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            filters: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAclsMatchingAcl {
    pub error_code: i16,
    pub error_message: Option<String>,
    pub resource_type: i8,
    pub resource_name: String,
    pub pattern_type: i8,
    pub principal: String,
    pub host: String,
    pub operation: i8,
    pub permission_type: i8,
}

impl<W: Write> WriteVersionedType<W> for DeleteAclsMatchingAcl {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.error_message.write(writer)?;
        self.resource_type.write(writer)?;
        self.resource_name.write(writer)?;
        self.pattern_type.write(writer)?;
        self.principal.write(writer)?;
        self.host.write(writer)?;
        self.operation.write(writer)?;
        self.permission_type.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteAclsMatchingAcl {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            error_message: Option::<String>::read(reader)?,
            resource_type: i8::read(reader)?,
            resource_name: String::read(reader)?,
            pattern_type: i8::read(reader)?,
            principal: String::read(reader)?,
            host: String::read(reader)?,
            operation: i8::read(reader)?,
            permission_type: i8::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAclsFilterResult {
    pub error_code: i16,
    pub error_message: Option<String>,
    pub matching_acls: Vec<DeleteAclsMatchingAcl>,
}

impl<W: Write> WriteVersionedType<W> for DeleteAclsFilterResult {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.error_message.write(writer)?;
        write_versioned_array(writer, &self.matching_acls, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteAclsFilterResult {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            error_message: Option::<String>::read(reader)?,
            matching_acls: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAclsResponse {
    pub throttle_time_ms: i32,
    pub filter_results: Vec<DeleteAclsFilterResult>,
}

impl RequestBody for DeleteAclsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::DeleteAcls;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DeleteAclsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        write_versioned_array(writer, &self.filter_results, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteAclsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            throttle_time_ms: i32::read(reader)?,
            filter_results: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = DeleteAclsRequest {
            filters: vec![DeleteAclsFilter {
                resource_type_filter: 2,
                resource_name_filter: Some("orders".to_string()),
                pattern_type_filter: 3,
                principal_filter: Some("User:alice".to_string()),
                host_filter: None,
                operation: 1,
                permission_type: 1,
            }],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = DeleteAclsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
