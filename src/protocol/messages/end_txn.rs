//! `EndTxn` request/response (key 26), version 0.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{ReadVersionedError, ReadVersionedType, RequestBody, WriteVersionedError, WriteVersionedType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndTxnRequest {
    pub transactional_id: String,
    pub producer_id: i64,
    pub producer_epoch: i16,
    pub committed: bool,
}

impl RequestBody for EndTxnRequest {
    type ResponseBody = EndTxnResponse;

    const API_KEY: ApiKey = ApiKey::EndTxn;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for EndTxnRequest {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.transactional_id.write(writer)?;
        self.producer_id.write(writer)?;
        self.producer_epoch.write(writer)?;
        self.committed.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for EndTxnRequest {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            transactional_id: String::read(reader)?,
            producer_id: i64::read(reader)?,
            producer_epoch: i16::read(reader)?,
            committed: bool::read(reader)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndTxnResponse {
    pub throttle_time_ms: i32,
    pub error_code: i16,
}

impl RequestBody for EndTxnResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::EndTxn;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 0);
}

impl<W: Write> WriteVersionedType<W> for EndTxnResponse {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        self.throttle_time_ms.write(writer)?;
        self.error_code.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for EndTxnResponse {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        Ok(Self {
            throttle_time_ms: i32::read(reader)?,
            error_code: i16::read(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn roundtrip() {
        let req = EndTxnRequest {
            transactional_id: "txn-1".to_string(),
            producer_id: 1000,
            producer_epoch: 0,
            committed: true,
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored = EndTxnRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(req, restored);
    }
}
