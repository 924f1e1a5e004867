//! `CreateTopics` request/response (key 19), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTopicsRequestReplicaAssignment {
    pub partition_index: i32,
    pub broker_ids: Vec<i32>,
}

impl<W: Write> WriteVersionedType<W> for CreateTopicsRequestReplicaAssignment {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.broker_ids.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreateTopicsRequestReplicaAssignment {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            broker_ids: Vec::<i32>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTopicsRequestConfig {
    pub name: String,
    pub value: Option<String>,
}

impl<W: Write> WriteVersionedType<W> for CreateTopicsRequestConfig {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.value.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreateTopicsRequestConfig {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            value: Option::<String>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatableTopic {
    pub name: String,
    pub num_partitions: i32,
    pub replication_factor: i16,
    pub assignments: Vec<CreateTopicsRequestReplicaAssignment>,
    pub configs: Vec<CreateTopicsRequestConfig>,
}

impl<W: Write> WriteVersionedType<W> for CreatableTopic {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.num_partitions.write(writer)?;
        self.replication_factor.write(writer)?;
        write_versioned_array(writer, &self.assignments, version)?;
        write_versioned_array(writer, &self.configs, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreatableTopic {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            num_partitions: i32::read(reader)?,
            replication_factor: i16::read(reader)?,
            assignments: read_versioned_array(reader, version)?,
            configs: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTopicsRequest {
    pub topics: Vec<CreatableTopic>,
    pub timeout_ms: i32,
}

impl RequestBody for CreateTopicsRequest {
    type ResponseBody = CreateTopicsResponse;

    const API_KEY: ApiKey = ApiKey::CreateTopics;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for CreateTopicsRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.topics, version)?;
        self.timeout_ms.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreateTopicsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            topics: read_versioned_array(reader, version)?,
            timeout_ms: i32::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatableTopicResult {
    pub name: String,
    pub error_code: i16,
}

impl<W: Write> WriteVersionedType<W> for CreatableTopicResult {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.error_code.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreatableTopicResult {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            error_code: i16::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTopicsResponse {
    pub topics: Vec<CreatableTopicResult>,
}

impl RequestBody for CreateTopicsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::CreateTopics;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for CreateTopicsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.topics, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreateTopicsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            topics: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = CreateTopicsRequest {
            topics: vec![CreatableTopic {
                name: "orders".to_string(),
                num_partitions: 3,
                replication_factor: 1,
                assignments: vec![],
                configs: vec![CreateTopicsRequestConfig {
                    name: "retention.ms".to_string(),
                    value: Some("604800000".to_string()),
                }],
            }],
            timeout_ms: 30_000,
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = CreateTopicsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
