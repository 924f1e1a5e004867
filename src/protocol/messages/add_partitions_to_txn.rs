//! `AddPartitionsToTxn` request/response (key 24), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPartitionsToTxnTopic {
    pub name: String,
    pub partitions: Vec<i32>,
}

impl<W: Write> WriteVersionedType<W> for AddPartitionsToTxnTopic {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.partitions.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AddPartitionsToTxnTopic {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            partitions: Vec::<i32>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPartitionsToTxnRequest {
    pub transactional_id: String,
    pub producer_id: i64,
    pub producer_epoch: i16,
    pub topics: Vec<AddPartitionsToTxnTopic>,
}

impl RequestBody for AddPartitionsToTxnRequest {
    type ResponseBody = AddPartitionsToTxnResponse;

    const API_KEY: ApiKey = ApiKey::AddPartitionsToTxn;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for AddPartitionsToTxnRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.transactional_id.write(writer)?;
        self.producer_id.write(writer)?;
        self.producer_epoch.write(writer)?;
        write_versioned_array(writer, &self.topics, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AddPartitionsToTxnRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            transactional_id: String::read(reader)?,
            producer_id: i64::read(reader)?,
            producer_epoch: i16::read(reader)?,
            topics: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPartitionsToTxnPartitionResult {
    pub partition_index: i32,
    pub error_code: i16,
}

impl<W: Write> WriteVersionedType<W> for AddPartitionsToTxnPartitionResult {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.partition_index.write(writer)?;
        self.error_code.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AddPartitionsToTxnPartitionResult {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            partition_index: i32::read(reader)?,
            error_code: i16::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPartitionsToTxnTopicResult {
    pub name: String,
    pub results: Vec<AddPartitionsToTxnPartitionResult>,
}

impl<W: Write> WriteVersionedType<W> for AddPartitionsToTxnTopicResult {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        write_versioned_array(writer, &self.results, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AddPartitionsToTxnTopicResult {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            results: read_versioned_array(reader, version)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPartitionsToTxnResponse {
    pub throttle_time_ms: i32,
    pub results: Vec<AddPartitionsToTxnTopicResult>,
}

impl RequestBody for AddPartitionsToTxnResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::AddPartitionsToTxn;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for AddPartitionsToTxnResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        write_versioned_array(writer, &self.results, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for AddPartitionsToTxnResponse {
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
        let req = AddPartitionsToTxnRequest {
            transactional_id: "txn-1".to_string(),
            producer_id: 1000,
            producer_epoch: 0,
            topics: vec![AddPartitionsToTxnTopic {
                name: "orders".to_string(),
                partitions: vec![0, 1],
            }],
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            AddPartitionsToTxnRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
