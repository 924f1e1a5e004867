//! `DescribeAcls` request/response (key 29), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeAclsRequest {
    pub resource_type_filter: i8,
    pub resource_name_filter: Option<String>,
    pub pattern_type_filter: i8,
    pub principal_filter: Option<String>,
    pub host_filter: Option<String>,
    pub operation: i8,
    pub permission_type: i8,
}

impl RequestBody for DescribeAclsRequest {
    type ResponseBody = DescribeAclsResponse;

    const API_KEY: ApiKey = ApiKey::DescribeAcls;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DescribeAclsRequest {
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

impl<R: Read> ReadVersionedType<R> for DescribeAclsRequest {
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
pub struct AclDescription {
    pub principal: String,
    pub host: String,
    pub operation: i8,
    pub permission_type: i8,
}

impl<W: Write> WriteVersionedType<W> for AclDescription {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.principal.write(writer)?;
        self.host.write(writer)?;
        self.operation.write(writer)?;
        self.permission_type.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AclDescription {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            principal: String::read(reader)?,
            host: String::read(reader)?,
            operation: i8::read(reader)?,
            permission_type: i8::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeAclsResource {
    pub resource_type: i8,
    pub resource_name: String,
    pub pattern_type: i8,
    pub acls: Vec<AclDescription>,
}

impl<W: Write> WriteVersionedType<W> for DescribeAclsResource {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.resource_type.write(writer)?;
        self.resource_name.write(writer)?;
        self.pattern_type.write(writer)?;
        write_versioned_array(writer, &self.acls, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeAclsResource {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            resource_type: i8::read(reader)?,
            resource_name: String::read(reader)?,
            pattern_type: i8::read(reader)?,
            acls: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeAclsResponse {
    pub throttle_time_ms: i32,
    pub error_code: i16,
    pub error_message: Option<String>,
    pub resources: Vec<DescribeAclsResource>,
}

impl RequestBody for DescribeAclsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::DescribeAcls;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DescribeAclsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        self.error_code.write(writer)?;
        self.error_message.write(writer)?;
        write_versioned_array(writer, &self.resources, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeAclsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            throttle_time_ms: i32::read(reader)?,
            error_code: i16::read(reader)?,
            error_message: Option::<String>::read(reader)?,
            resources: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = DescribeAclsRequest {
            resource_type_filter: 1, // ANY
            resource_name_filter: None,
            pattern_type_filter: 1, // ANY
            principal_filter: None,
            host_filter: None,
            operation: 1, // ANY
            permission_type: 1, // ANY
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = DescribeAclsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
