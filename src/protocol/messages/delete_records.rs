//! `DeleteRecords` request/response (key 21), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordsPartition {
    pub partition_index: i32,
    pub offset: i64,
}

impl<W: Write> WriteVersionedType<W> for DeleteRecordsPartition {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.offset.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteRecordsPartition {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            offset: i64::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordsTopic {
    pub name: String,
    pub partitions: Vec<DeleteRecordsPartition>,
}

impl<W: Write> WriteVersionedType<W> for DeleteRecordsTopic {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteRecordsTopic {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordsRequest {
    pub topics: Vec<DeleteRecordsTopic>,
    pub timeout_ms: i32,
}

impl RequestBody for DeleteRecordsRequest {
    type ResponseBody = DeleteRecordsResponse;

    const API_KEY: ApiKey = ApiKey::DeleteRecords;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DeleteRecordsRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.topics, version)?;
        self.timeout_ms.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteRecordsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            topics: read_versioned_array(reader, version)?,
            timeout_ms: i32::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordsPartitionResult {
    pub partition_index: i32,
    pub low_watermark: i64,
    pub error_code: i16,
}

impl<W: Write> WriteVersionedType<W> for DeleteRecordsPartitionResult {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.low_watermark.write(writer)?;
        self.error_code.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteRecordsPartitionResult {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            low_watermark: i64::read(reader)?,
            error_code: i16::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordsTopicResult {
    pub name: String,
    pub partitions: Vec<DeleteRecordsPartitionResult>,
}

impl<W: Write> WriteVersionedType<W> for DeleteRecordsTopicResult {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteRecordsTopicResult {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRecordsResponse {
    pub throttle_time_ms: i32,
    pub topics: Vec<DeleteRecordsTopicResult>,
}

impl RequestBody for DeleteRecordsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::DeleteRecords;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for DeleteRecordsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        write_versioned_array(writer, &self.topics, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for DeleteRecordsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            throttle_time_ms: i32::read(reader)?,
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
        let req = DeleteRecordsRequest {
            topics: vec![DeleteRecordsTopic {
                name: "orders".to_string(),
                partitions: vec![DeleteRecordsPartition {
                    partition_index: 0,
                    offset: 500,
                }],
            }],
            timeout_ms: 30_000,
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = DeleteRecordsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
