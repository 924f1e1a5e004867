//! `Produce` request/response (key 0), version 7.
//!
//! Record batch payloads are carried as opaque, pre-encoded bytes -- this
//! crate does not implement record batch framing or message compression,
//! both of which are treated as external collaborators.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionProduceData {
    pub partition_index: i32,
    /// Opaque, pre-encoded `RecordBatch` bytes.
    pub records: Vec<u8>,
}

impl<W: Write> WriteVersionedType<W> for PartitionProduceData {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.records.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for PartitionProduceData {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            records: Vec::<u8>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicProduceData {
    pub name: String,
    pub partitions: Vec<PartitionProduceData>,
}

impl<W: Write> WriteVersionedType<W> for TopicProduceData {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for TopicProduceData {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProduceRequest {
    pub transactional_id: Option<String>,
    pub acks: i16,
    pub timeout_ms: i32,
    pub topic_data: Vec<TopicProduceData>,
}

impl RequestBody for ProduceRequest {
    type ResponseBody = ProduceResponse;

    const API_KEY: ApiKey = ApiKey::Produce;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(7, 7);
}

impl<W: Write> WriteVersionedType<W> for ProduceRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.transactional_id.write(writer)?;
        self.acks.write(writer)?;
        self.timeout_ms.write(writer)?;
        write_versioned_array(writer, &self.topic_data, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ProduceRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            transactional_id: Option::<String>::read(reader)?,
            acks: i16::read(reader)?,
            timeout_ms: i32::read(reader)?,
            topic_data: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionProduceResponse {
    pub partition_index: i32,
    pub error_code: i16,
    pub base_offset: i64,
    pub log_append_time_ms: i64,
    pub log_start_offset: i64,
}

impl<W: Write> WriteVersionedType<W> for PartitionProduceResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.error_code.write(writer)?;
        self.base_offset.write(writer)?;
        self.log_append_time_ms.write(writer)?;
        self.log_start_offset.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for PartitionProduceResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            error_code: i16::read(reader)?,
            base_offset: i64::read(reader)?,
            log_append_time_ms: i64::read(reader)?,
            log_start_offset: i64::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicProduceResponse {
    pub name: String,
    pub partition_responses: Vec<PartitionProduceResponse>,
}

impl<W: Write> WriteVersionedType<W> for TopicProduceResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        write_versioned_array(writer, &self.partition_responses, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for TopicProduceResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partition_responses: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProduceResponse {
    pub responses: Vec<TopicProduceResponse>,
    pub throttle_time_ms: i32,
}

impl RequestBody for ProduceResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::Produce;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(7, 7);
}

impl<W: Write> WriteVersionedType<W> for ProduceResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.responses, version)?;
        self.throttle_time_ms.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ProduceResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            responses: read_versioned_array(reader, version)?,
            throttle_time_ms: i32::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn request_roundtrip() {
        let req = ProduceRequest {
            transactional_id: None,
            acks: -1,
            timeout_ms: 30_000,
            topic_data: vec![TopicProduceData {
                name: "orders".to_string(),
                partitions: vec![PartitionProduceData {
                    partition_index: 0,
                    records: vec![1, 2, 3, 4],
                }],
            }],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(7)).unwrap();
        let restored = ProduceRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(7)).unwrap();
        assert_eq!(req, restored);
    }

    #[test]
    fn response_roundtrip() {
        let resp = ProduceResponse {
            responses: vec![TopicProduceResponse {
                name: "orders".to_string(),
                partition_responses: vec![PartitionProduceResponse {
                    partition_index: 0,
                    error_code: 0,
                    base_offset: 100,
                    log_append_time_ms: -1,
                    log_start_offset: 0,
                }],
            }],
            throttle_time_ms: 0,
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(7)).unwrap();
        let restored = ProduceResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(7)).unwrap();
        assert_eq!(resp, restored);
    }
}
