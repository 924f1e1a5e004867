//! `InitProducerId` request/response (key 22), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{ReadVersionedError, ReadVersionedType, RequestBody, WriteVersionedError, WriteVersionedType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitProducerIdRequest {
    pub transactional_id: Option<String>,
    pub transaction_timeout_ms: i32,
}

impl RequestBody for InitProducerIdRequest {
    type ResponseBody = InitProducerIdResponse;

    const API_KEY: ApiKey = ApiKey::InitProducerId;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for InitProducerIdRequest {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.transactional_id.write(writer)?;
        self.transaction_timeout_ms.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for InitProducerIdRequest {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            transactional_id: Option::<String>::read(reader)?,
            transaction_timeout_ms: i32::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitProducerIdResponse {
    pub error_code: i16,
    pub producer_id: i64,
    pub producer_epoch: i16,
}

impl RequestBody for InitProducerIdResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::InitProducerId;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for InitProducerIdResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        self.producer_id.write(writer)?;
        self.producer_epoch.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for InitProducerIdResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            error_code: i16::read(reader)?,
            producer_id: i64::read(reader)?,
            producer_epoch: i16::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let resp = InitProducerIdResponse {
            error_code: 0,
            producer_id: 1000,
            producer_epoch: 0,
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            InitProducerIdResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(resp, restored);
    }
}
