//! `AlterConfigs` request/response (key 33), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterableConfig {
    pub name: String,
    pub value: Option<String>,
}

impl<W: Write> WriteVersionedType<W> for AlterableConfig {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.value.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AlterableConfig {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            value: Option::<String>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterConfigsResource {
    pub resource_type: i8,
    pub resource_name: String,
    pub configs: Vec<AlterableConfig>,
}

impl<W: Write> WriteVersionedType<W> for AlterConfigsResource {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.resource_type.write(writer)?;
        self.resource_name.write(writer)?;
        write_versioned_array(writer, &self.configs, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AlterConfigsResource {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            resource_type: i8::read(reader)?,
            resource_name: String::read(reader)?,
            configs: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterConfigsRequest {
    pub resources: Vec<AlterConfigsResource>,
    pub validate_only: bool,
}

impl RequestBody for AlterConfigsRequest {
    type ResponseBody = AlterConfigsResponse;

    const API_KEY: ApiKey = ApiKey::AlterConfigs;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for AlterConfigsRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.resources, version)?;
        self.validate_only.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AlterConfigsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            resources: read_versioned_array(reader, version)?,
            validate_only: bool::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterConfigsResourceResponse {
    pub error_code: i16,
    pub error_message: Option<String>,
    pub resource_type: i8,
    pub resource_name: String,
}

impl<W: Write> WriteVersionedType<W> for AlterConfigsResourceResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.error_message.write(writer)?;
        self.resource_type.write(writer)?;
        self.resource_name.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AlterConfigsResourceResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            error_message: Option::<String>::read(reader)?,
            resource_type: i8::read(reader)?,
            resource_name: String::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterConfigsResponse {
    pub throttle_time_ms: i32,
    pub responses: Vec<AlterConfigsResourceResponse>,
}

impl RequestBody for AlterConfigsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::AlterConfigs;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for AlterConfigsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        write_versioned_array(writer, &self.responses, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AlterConfigsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            throttle_time_ms: i32::read(reader)?,
            responses: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = AlterConfigsRequest {
            resources: vec![AlterConfigsResource {
                resource_type: 2,
                resource_name: "orders".to_string(),
                configs: vec![AlterableConfig {
                    name: "retention.ms".to_string(),
                    value: Some("3600000".to_string()),
                }],
            }],
            validate_only: true,
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = AlterConfigsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
