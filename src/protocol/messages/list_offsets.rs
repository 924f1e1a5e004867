//! `ListOffsets` request/response (key 2), version 1.
//!
//! The broker layer normalizes the legacy plural `offsets` field down to the
//! single `timestamp` this version actually carries on the wire.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOffsetsPartition {
    pub partition_index: i32,
    pub current_leader_epoch: i32,
    pub timestamp: i64,
}

impl<W: Write> WriteVersionedType<W> for ListOffsetsPartition {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.current_leader_epoch.write(writer)?;
        self.timestamp.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListOffsetsPartition {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            current_leader_epoch: i32::read(reader)?,
            timestamp: i64::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOffsetsTopic {
    pub name: String,
    pub partitions: Vec<ListOffsetsPartition>,
}

impl<W: Write> WriteVersionedType<W> for ListOffsetsTopic {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListOffsetsTopic {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOffsetsRequest {
    pub replica_id: i32,
    pub topics: Vec<ListOffsetsTopic>,
}

impl RequestBody for ListOffsetsRequest {
    type ResponseBody = ListOffsetsResponse;

    const API_KEY: ApiKey = ApiKey::ListOffsets;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for ListOffsetsRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.replica_id.write(writer)?;
        write_versioned_array(writer, &self.topics, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListOffsetsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            replica_id: i32::read(reader)?,
            topics: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOffsetsPartitionResponse {
    pub partition_index: i32,
    pub error_code: i16,
    pub timestamp: i64,
    pub offset: i64,
}

impl<W: Write> WriteVersionedType<W> for ListOffsetsPartitionResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.error_code.write(writer)?;
        self.timestamp.write(writer)?;
        self.offset.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListOffsetsPartitionResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            error_code: i16::read(reader)?,
            timestamp: i64::read(reader)?,
            offset: i64::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOffsetsTopicResponse {
    pub name: String,
    pub partitions: Vec<ListOffsetsPartitionResponse>,
}

impl<W: Write> WriteVersionedType<W> for ListOffsetsTopicResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListOffsetsTopicResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOffsetsResponse {
    pub topics: Vec<ListOffsetsTopicResponse>,
}

impl RequestBody for ListOffsetsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::ListOffsets;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for ListOffsetsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.topics, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ListOffsetsResponse {
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
        let req = ListOffsetsRequest {
            replica_id: -1,
            topics: vec![ListOffsetsTopic {
                name: "orders".to_string(),
                partitions: vec![ListOffsetsPartition {
                    partition_index: 0,
                    current_leader_epoch: -1,
                    timestamp: -1,
                }],
            }],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored = ListOffsetsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(req, restored);
    }
}
