//! `Metadata` request/response (key 3), version 1.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRequestTopic {
    pub name: String,
}

impl<W: Write> WriteVersionedType<W> for MetadataRequestTopic {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for MetadataRequestTopic {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
        })
    }
}

/// `None` requests metadata for all topics, matching the v1 wire convention
/// of a `null` topics array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRequest {
    pub topics: Option<Vec<MetadataRequestTopic>>,
}

impl RequestBody for MetadataRequest {
    type ResponseBody = MetadataResponse;

    const API_KEY: ApiKey = ApiKey::Metadata;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for MetadataRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        match &self.topics {
            Some(topics) => write_versioned_array(writer, topics, version)?,
            None => (-1i32).write(writer)?,
        }
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for MetadataRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        let len = i32::read(reader)?;
        let topics = if len < 0 {
            None
        } else {
            let len = usize::try_from(len).map_err(|e| ReadVersionedError::ReadError(e.into()))?;
            let mut v = Vec::with_capacity(len.min(4096));
            for _ in 0..len {
                v.push(MetadataRequestTopic::read_versioned(reader, version)?);
            }
            Some(v)
        };
        Ok(Self { topics })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataBroker {
    pub node_id: i32,
    pub host: String,
    pub port: i32,
    pub rack: Option<String>,
}

impl<W: Write> WriteVersionedType<W> for MetadataBroker {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.node_id.write(writer)?;
        self.host.write(writer)?;
        self.port.write(writer)?;
        self.rack.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for MetadataBroker {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            node_id: i32::read(reader)?,
            host: String::read(reader)?,
            port: i32::read(reader)?,
            rack: Option::<String>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataPartition {
    pub error_code: i16,
    pub partition_index: i32,
    pub leader_id: i32,
    pub replica_nodes: Vec<i32>,
    pub isr_nodes: Vec<i32>,
}

impl<W: Write> WriteVersionedType<W> for MetadataPartition {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.partition_index.write(writer)?;
        self.leader_id.write(writer)?;
        self.replica_nodes.write(writer)?;
        self.isr_nodes.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for MetadataPartition {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            partition_index: i32::read(reader)?,
            leader_id: i32::read(reader)?,
            replica_nodes: Vec::<i32>::read(reader)?,
            isr_nodes: Vec::<i32>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataTopic {
    pub error_code: i16,
    pub name: String,
    pub is_internal: bool,
    pub partitions: Vec<MetadataPartition>,
}

impl<W: Write> WriteVersionedType<W> for MetadataTopic {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.name.write(writer)?;
        self.is_internal.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for MetadataTopic {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            name: String::read(reader)?,
            is_internal: bool::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataResponse {
    pub brokers: Vec<MetadataBroker>,
    pub controller_id: i32,
    pub topics: Vec<MetadataTopic>,
}

impl RequestBody for MetadataResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::Metadata;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for MetadataResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.brokers, version)?;
        self.controller_id.write(writer)?;
        write_versioned_array(writer, &self.topics, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for MetadataResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            brokers: read_versioned_array(reader, version)?,
            controller_id: i32::read(reader)?,
            topics: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn request_null_topics_roundtrip() {
        let req = MetadataRequest { topics: None };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored = MetadataRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(req, restored);
    }

    #[test]
    fn response_roundtrip() {
        let resp = MetadataResponse {
            brokers: vec![MetadataBroker {
                node_id: 1,
                host: "kafka-1".to_string(),
                port: 9092,
                rack: None,
            }],
            controller_id: 1,
            topics: vec![MetadataTopic {
                error_code: 0,
                name: "orders".to_string(),
                is_internal: false,
                partitions: vec![MetadataPartition {
                    error_code: 0,
                    partition_index: 0,
                    leader_id: 1,
                    replica_nodes: vec![1],
                    isr_nodes: vec![1],
                }],
            }],
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored = MetadataResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(resp, restored);
    }
}
