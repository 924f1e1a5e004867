//! `CreateAcls` request/response (key 30), version 0.
//!
//! The broker surface renames the user-facing `acl` parameter to the wire
//! field `creations` (plural, matching Kafka's actual field name).

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclCreation {
    pub resource_type: i8,
    pub resource_name: String,
    pub resource_pattern_type: i8,
    pub principal: String,
    pub host: String,
    pub operation: i8,
    pub permission_type: i8,
}

impl<W: Write> WriteVersionedType<W> for AclCreation {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.resource_type.write(writer)?;
        self.resource_name.write(writer)?;
        self.resource_pattern_type.write(writer)?;
        self.principal.write(writer)?;
        self.host.write(writer)?;
        self.operation.write(writer)?;
        self.permission_type.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AclCreation {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            resource_type: i8::read(reader)?,
            resource_name: String::read(reader)?,
            resource_pattern_type: i8::read(reader)?,
            principal: String::read(reader)?,
            host: String::read(reader)?,
            operation: i8::read(reader)?,
            permission_type: i8::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAclsRequest {
    pub creations: Vec<AclCreation>,
}

impl RequestBody for CreateAclsRequest {
    type ResponseBody = CreateAclsResponse;

    const API_KEY: ApiKey = ApiKey::CreateAcls;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for CreateAclsRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.creations, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreateAclsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            creations: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclCreationResult {
    pub error_code: i16,
    pub error_message: Option<String>,
}

impl<W: Write> WriteVersionedType<W> for AclCreationResult {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.error_message.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AclCreationResult {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            error_message: Option::<String>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAclsResponse {
    pub throttle_time_ms: i32,
    pub results: Vec<AclCreationResult>,
}

impl RequestBody for CreateAclsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::CreateAcls;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for CreateAclsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        write_versioned_array(writer, &self.results, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreateAclsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            throttle_time_ms: i32::read(reader)?,
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
        let req = CreateAclsRequest {
            creations: vec![AclCreation {
                resource_type: 2,
                resource_name: "orders".to_string(),
                resource_pattern_type: 3, // LITERAL
                principal: "User:alice".to_string(),
                host: "*".to_string(),
                operation: 3, // READ
                permission_type: 3, // ALLOW
            }],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = CreateAclsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
