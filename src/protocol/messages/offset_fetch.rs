//! `OffsetFetch` request/response (key 9), version 1.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetFetchRequestTopic {
    pub name: String,
    pub partition_indexes: Vec<i32>,
}

impl<W: Write> WriteVersionedType<W> for OffsetFetchRequestTopic {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.partition_indexes.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for OffsetFetchRequestTopic {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partition_indexes: Vec::<i32>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetFetchRequest {
    pub group_id: String,
    pub topics: Vec<OffsetFetchRequestTopic>,
}

impl RequestBody for OffsetFetchRequest {
    type ResponseBody = OffsetFetchResponse;

    const API_KEY: ApiKey = ApiKey::OffsetFetch;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for OffsetFetchRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.group_id.write(writer)?;
        write_versioned_array(writer, &self.topics, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for OffsetFetchRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            group_id: String::read(reader)?,
            topics: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetFetchResponsePartition {
    pub partition_index: i32,
    pub committed_offset: i64,
    pub metadata: Option<String>,
    pub error_code: i16,
}

impl<W: Write> WriteVersionedType<W> for OffsetFetchResponsePartition {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.committed_offset.write(writer)?;
        self.metadata.write(writer)?;
        self.error_code.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for OffsetFetchResponsePartition {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            committed_offset: i64::read(reader)?,
            metadata: Option::<String>::read(reader)?,
            error_code: i16::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetFetchResponseTopic {
    pub name: String,
    pub partitions: Vec<OffsetFetchResponsePartition>,
}

impl<W: Write> WriteVersionedType<W> for OffsetFetchResponseTopic {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        write_versioned_array(writer, &self.partitions, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for OffsetFetchResponseTopic {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partitions: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetFetchResponse {
    pub topics: Vec<OffsetFetchResponseTopic>,
}

impl RequestBody for OffsetFetchResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::OffsetFetch;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(1, 1);
}

impl<W: Write> WriteVersionedType<W> for OffsetFetchResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.topics, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for OffsetFetchResponse {
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
        let resp = OffsetFetchResponse {
            topics: vec![OffsetFetchResponseTopic {
                name: "orders".to_string(),
                partitions: vec![OffsetFetchResponsePartition {
                    partition_index: 0,
                    committed_offset: 10,
                    metadata: None,
                    error_code: 0,
                }],
            }],
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored =
            OffsetFetchResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(resp, restored);
    }
}
