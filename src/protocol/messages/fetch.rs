//! `Fetch` request/response (key 1), version 9.
//!
//! Version 9 is the version spelled out explicitly: partitions carry
//! `current_leader_epoch` and `log_start_offset`, and the request carries the
//! incremental-fetch session fields (`session_id`, `session_epoch`) even
//! though this crate always uses the full-fetch session (`session_id == 0`,
//! `session_epoch == -1`).

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPartition {
    pub partition: i32,
    pub current_leader_epoch: i32,
    pub fetch_offset: i64,
    pub log_start_offset: i64,
    pub partition_max_bytes: i32,
}

impl<W: Write> WriteVersionedType<W> for FetchPartition {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition.write(writer)?;
        self.current_leader_epoch.write(writer)?;
        self.fetch_offset.write(writer)?;
        self.log_start_offset.write(writer)?;
        self.partition_max_bytes.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for FetchPartition {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition: i32::read(reader)?,
            current_leader_epoch: i32::read(reader)?,
            fetch_offset: i64::read(reader)?,
            log_start_offset: i64::read(reader)?,
            partition_max_bytes: i32::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTopic {
    pub topic: String,
    pub partitions: Vec<FetchPartition>,
}

impl<W: Write> WriteVersionedType<W> for FetchTopic {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.topic.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for FetchTopic {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            topic: String::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgottenTopic {
    pub topic: String,
    pub partitions: Vec<i32>,
}

impl<W: Write> WriteVersionedType<W> for ForgottenTopic {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.topic.write(writer)?;
        self.partitions.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ForgottenTopic {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            topic: String::read(reader)?,
            partitions: Vec::<i32>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub replica_id: i32,
    pub max_wait_ms: i32,
    pub min_bytes: i32,
    pub max_bytes: i32,
    pub isolation_level: i8,
    pub session_id: i32,
    pub session_epoch: i32,
    pub topics: Vec<FetchTopic>,
    pub forgotten_topics_data: Vec<ForgottenTopic>,
    pub rack_id: String,
}

impl RequestBody for FetchRequest {
    type ResponseBody = FetchResponse;

    const API_KEY: ApiKey = ApiKey::Fetch;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(9, 9);
}

impl<W: Write> WriteVersionedType<W> for FetchRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.replica_id.write(writer)?;
        self.max_wait_ms.write(writer)?;
        self.min_bytes.write(writer)?;
        self.max_bytes.write(writer)?;
        self.isolation_level.write(writer)?;
        self.session_id.write(writer)?;
        self.session_epoch.write(writer)?;
        write_versioned_array(writer, &self.topics, version)?;
        write_versioned_array(writer, &self.forgotten_topics_data, version)?;
        self.rack_id.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for FetchRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            replica_id: i32::read(reader)?,
            max_wait_ms: i32::read(reader)?,
            min_bytes: i32::read(reader)?,
            max_bytes: i32::read(reader)?,
            isolation_level: i8::read(reader)?,
            session_id: i32::read(reader)?,
            session_epoch: i32::read(reader)?,
            topics: read_versioned_array(reader, version)?,
            forgotten_topics_data: read_versioned_array(reader, version)?,
            rack_id: String::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbortedTransaction {
    pub producer_id: i64,
    pub first_offset: i64,
}

impl<W: Write> WriteVersionedType<W> for AbortedTransaction {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.producer_id.write(writer)?;
        self.first_offset.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AbortedTransaction {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            producer_id: i64::read(reader)?,
            first_offset: i64::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPartitionResponse {
    pub partition_index: i32,
    pub error_code: i16,
    pub high_watermark: i64,
    pub last_stable_offset: i64,
    pub log_start_offset: i64,
    pub aborted_transactions: Vec<AbortedTransaction>,
    /// Opaque, pre-encoded `RecordBatch` bytes.
    pub records: Vec<u8>,
}

impl<W: Write> WriteVersionedType<W> for FetchPartitionResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.error_code.write(writer)?;
        self.high_watermark.write(writer)?;
        self.last_stable_offset.write(writer)?;
        self.log_start_offset.write(writer)?;
        write_versioned_array(writer, &self.aborted_transactions, version)?;
        self.records.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for FetchPartitionResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            error_code: i16::read(reader)?,
            high_watermark: i64::read(reader)?,
            last_stable_offset: i64::read(reader)?,
            log_start_offset: i64::read(reader)?,
            aborted_transactions: read_versioned_array(reader, version)?,
            records: Vec::<u8>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchableTopicResponse {
    pub topic: String,
    pub partitions: Vec<FetchPartitionResponse>,
}

impl<W: Write> WriteVersionedType<W> for FetchableTopicResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.topic.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for FetchableTopicResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            topic: String::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub throttle_time_ms: i32,
    pub error_code: i16,
    pub session_id: i32,
    pub responses: Vec<FetchableTopicResponse>,
}

impl RequestBody for FetchResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::Fetch;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(9, 9);
}

impl<W: Write> WriteVersionedType<W> for FetchResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        self.error_code.write(writer)?;
        self.session_id.write(writer)?;
        write_versioned_array(writer, &self.responses, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for FetchResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            throttle_time_ms: i32::read(reader)?,
            error_code: i16::read(reader)?,
            session_id: i32::read(reader)?,
            responses: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn request_roundtrip() {
        let req = FetchRequest {
            replica_id: -1,
            max_wait_ms: 500,
            min_bytes: 1,
            max_bytes: 50 * 1024 * 1024,
            isolation_level: 0,
            session_id: 0,
            session_epoch: -1,
            topics: vec![FetchTopic {
                topic: "orders".to_string(),
                partitions: vec![FetchPartition {
                    partition: 0,
                    current_leader_epoch: -1,
                    fetch_offset: 10,
                    log_start_offset: -1,
                    partition_max_bytes: 1024 * 1024,
                }],
            }],
            forgotten_topics_data: vec![],
            rack_id: String::new(),
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(9)).unwrap();
        let restored = FetchRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(9)).unwrap();
        assert_eq!(req, restored);
    }

    #[test]
    fn response_roundtrip_with_aborted_transactions() {
        let resp = FetchResponse {
            throttle_time_ms: 0,
            error_code: 0,
            session_id: 0,
            responses: vec![FetchableTopicResponse {
                topic: "orders".to_string(),
                partitions: vec![FetchPartitionResponse {
                    partition_index: 0,
                    error_code: 0,
                    high_watermark: 100,
                    last_stable_offset: 100,
                    log_start_offset: 0,
                    aborted_transactions: vec![AbortedTransaction {
                        producer_id: 5,
                        first_offset: 42,
                    }],
                    records: vec![9, 9, 9],
                }],
            }],
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(9)).unwrap();
        let restored = FetchResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(9)).unwrap();
        assert_eq!(resp, restored);
    }
}
