//! `CreatePartitions` request/response (key 37), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePartitionsAssignment {
    pub broker_ids: Vec<i32>,
}

impl<W: Write> WriteVersionedType<W> for CreatePartitionsAssignment {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.broker_ids.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreatePartitionsAssignment {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            broker_ids: Vec::<i32>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePartitionsTopic {
    pub name: String,
    pub count: i32,
    pub assignments: Option<Vec<CreatePartitionsAssignment>>,
}

impl<W: Write> WriteVersionedType<W> for CreatePartitionsTopic {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.count.write(writer)?;
        match &self.assignments {
            Some(assignments) => write_versioned_array(writer, assignments, version)?,
            None => (-1i32).write(writer)?,
        }
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreatePartitionsTopic {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        let name = String::read(reader)?;
        let count = i32::read(reader)?;
        let len = i32::read(reader)?;
        let assignments = if len < 0 {
            None
        } else {
            let len = usize::try_from(len).map_err(|e| ReadVersionedError::ReadError(e.into()))?;
            let mut v = Vec::with_capacity(len.min(4096));
            for _ in 0..len {
                v.push(CreatePartitionsAssignment::read_versioned(reader, version)?);
            }
            Some(v)
        };
        Ok(Self {
            name,
            count,
            assignments,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePartitionsRequest {
    pub topics: Vec<CreatePartitionsTopic>,
    pub timeout_ms: i32,
    pub validate_only: bool,
}

impl RequestBody for CreatePartitionsRequest {
    type ResponseBody = CreatePartitionsResponse;

    const API_KEY: ApiKey = ApiKey::CreatePartitions;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for CreatePartitionsRequest {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.topics, version)?;
        self.timeout_ms.write(writer)?;
        self.validate_only.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreatePartitionsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            topics: read_versioned_array(reader, version)?,
            timeout_ms: i32::read(reader)?,
            validate_only: bool::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePartitionsTopicResult {
    pub name: String,
    pub error_code: i16,
    pub error_message: Option<String>,
}

impl<W: Write> WriteVersionedType<W> for CreatePartitionsTopicResult {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.name.write(writer)?;
        self.error_code.write(writer)?;
        self.error_message.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreatePartitionsTopicResult {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            name: String::read(reader)?,
            error_code: i16::read(reader)?,
            error_message: Option::<String>::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePartitionsResponse {
    pub results: Vec<CreatePartitionsTopicResult>,
}

impl RequestBody for CreatePartitionsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::CreatePartitions;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for CreatePartitionsResponse {
    fn write_versioned(&self, writer: &mut W, version: ApiVersion) -> Result<(), WriteVersionedError> {
        write_versioned_array(writer, &self.results, version)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for CreatePartitionsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            results: read_versioned_array(reader, version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip_with_null_assignments() {
        let req = CreatePartitionsRequest {
            topics: vec![CreatePartitionsTopic {
                name: "orders".to_string(),
                count: 6,
                assignments: None,
            }],
            timeout_ms: 30_000,
            validate_only: false,
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            CreatePartitionsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
