//! `DescribeConfigs` request/response (key 32), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeConfigsResource {
    pub resource_type: i8,
    pub resource_name: String,
    pub configuration_keys: Option<Vec<String>>,
}

impl<W: Write> WriteVersionedType<W> for DescribeConfigsResource {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.resource_type.write(writer)?;
        self.resource_name.write(writer)?;
        match &self.configuration_keys {
            Some(keys) => keys.write(writer)?,
            None => (-1i32).write(writer)?,
        }
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeConfigsResource {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        let resource_type = i8::read(reader)?;
        let resource_name = String::read(reader)?;
        let len = i32::read(reader)?;
        let configuration_keys = if len < 0 {
            None
        } else {
            let len = usize::try_from(len).map_err(|e| ReadVersionedError::ReadError(e.into()))?;
            let mut v = Vec::with_capacity(len.min(4096));
            for _ in 0..len {
                v.push(String::read(reader)?);
            }
            Some(v)
        };
        Ok(Self {
            resource_type,
            resource_name,
            configuration_keys,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeConfigsRequest {
    pub resources: Vec<DescribeConfigsResource>,
    pub include_synonyms: bool,
}

impl RequestBody for DescribeConfigsRequest {
    type ResponseBody = DescribeConfigsResponse;

    const API_KEY: ApiKey = ApiKey::DescribeConfigs;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DescribeConfigsRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.resources, version)?;
        self.include_synonyms.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeConfigsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            resources: read_versioned_array(reader, version)?,
            include_synonyms: bool::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeConfigsResourceResultEntry {
    pub name: String,
    pub value: Option<String>,
    pub read_only: bool,
    pub is_default: bool,
    pub is_sensitive: bool,
}

impl<W: Write> WriteVersionedType<W> for DescribeConfigsResourceResultEntry {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.value.write(writer)?;
        self.read_only.write(writer)?;
        self.is_default.write(writer)?;
        self.is_sensitive.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeConfigsResourceResultEntry {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            value: Option::<String>::read(reader)?,
            read_only: bool::read(reader)?,
            is_default: bool::read(reader)?,
            is_sensitive: bool::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeConfigsResourceResult {
    pub error_code: i16,
    pub error_message: Option<String>,
    pub resource_type: i8,
    pub resource_name: String,
    pub configs: Vec<DescribeConfigsResourceResultEntry>,
}

impl<W: Write> WriteVersionedType<W> for DescribeConfigsResourceResult {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.error_message.write(writer)?;
        self.resource_type.write(writer)?;
        self.resource_name.write(writer)?;
        write_versioned_array(writer, &self.configs, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeConfigsResourceResult {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            error_message: Option::<String>::read(reader)?,
            resource_type: i8::read(reader)?,
            resource_name: String::read(reader)?,
            configs: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeConfigsResponse {
    pub throttle_time_ms: i32,
    pub results: Vec<DescribeConfigsResourceResult>,
}

impl RequestBody for DescribeConfigsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::DescribeConfigs;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DescribeConfigsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        write_versioned_array(writer, &self.results, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DescribeConfigsResponse {
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
    fn roundtrip_with_null_keys() {
        let req = DescribeConfigsRequest {
            resources: vec![DescribeConfigsResource {
                resource_type: 2, // TOPIC
                resource_name: "orders".to_string(),
                configuration_keys: None,
            }],
            include_synonyms: false,
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            DescribeConfigsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
