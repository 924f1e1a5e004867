//! `ApiVersions` request/response (key 18), versions 0..=3.
//!
//! This is the first request ever sent on a new connection (before SASL,
//! before anything else) and drives version negotiation, so unlike most of
//! the other message types in this crate it supports a real version range
//! rather than a single pinned version.

use std::io::{Read, Write};

use super::super::api_key::ApiKey;
use super::super::api_version::{ApiVersion, ApiVersionRange};
use super::super::traits::{ReadType, WriteType};
use super::{
    read_versioned_array, write_versioned_array, ReadVersionedError, ReadVersionedType,
    RequestBody, WriteVersionedError, WriteVersionedType,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiVersionsRequest {
    /// Present from version 3 onward; empty string otherwise.
    pub client_software_name: String,
    pub client_software_version: String,
}

impl RequestBody for ApiVersionsRequest {
    type ResponseBody = ApiVersionsResponse;

    const API_KEY: ApiKey = ApiKey::ApiVersions;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 3);
}

impl<W: Write> WriteVersionedType<W> for ApiVersionsRequest {
    fn write_versioned(
        &self,
        writer: &mut W,
        version: ApiVersion,
    ) -> Result<(), WriteVersionedError> {
        if version.0 >= 3 {
            self.client_software_name.write(writer)?;
            self.client_software_version.write(writer)?;
        }
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ApiVersionsRequest {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        if version.0 >= 3 {
            let client_software_name = String::read(reader)?;
            let client_software_version = String::read(reader)?;
            Ok(Self {
                client_software_name,
                client_software_version,
            })
        } else {
            Ok(Self::default())
        }
    }
}

/// A single `(api_key, min_version, max_version)` triple advertised by the
/// broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersionsResponseKey {
    pub api_key: ApiKey,
    pub min_version: i16,
    pub max_version: i16,
}

impl<W: Write> WriteVersionedType<W> for ApiVersionsResponseKey {
    fn write_versioned(&self, writer: &mut W, _version: ApiVersion) -> Result<(), WriteVersionedError> {
        i16::from(self.api_key).write(writer)?;
        self.min_version.write(writer)?;
        self.max_version.write(writer)?;
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ApiVersionsResponseKey {
    fn read_versioned(reader: &mut R, _version: ApiVersion) -> Result<Self, ReadVersionedError> {
        let api_key = ApiKey::from(i16::read(reader)?);
        let min_version = i16::read(reader)?;
        let max_version = i16::read(reader)?;
        Ok(Self {
            api_key,
            min_version,
            max_version,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiVersionsResponse {
    pub error_code: i16,
    pub api_keys: Vec<ApiVersionsResponseKey>,
    /// Present from version 1 onward; `0` otherwise.
    pub throttle_time_ms: i32,
}

impl RequestBody for ApiVersionsResponse {
    type ResponseBody = ();

    const API_KEY: ApiKey = ApiKey::ApiVersions;
    const API_VERSION_RANGE: ApiVersionRange = ApiVersionRange::new(0, 3);
}

impl<W: Write> WriteVersionedType<W> for ApiVersionsResponse {
    fn write_versioned(
        &self,
        writer: &mut W,
        version: ApiVersion,
    ) -> Result<(), WriteVersionedError> {
        self.error_code.write(writer)?;
        write_versioned_array(writer, &self.api_keys, version)?;
        if version.0 >= 1 {
            self.throttle_time_ms.write(writer)?;
        }
        Ok(())
    }
}

impl<R: Read> ReadVersionedType<R> for ApiVersionsResponse {
    fn read_versioned(reader: &mut R, version: ApiVersion) -> Result<Self, ReadVersionedError> {
        let error_code = i16::read(reader)?;
        let api_keys = read_versioned_array(reader, version)?;
        let throttle_time_ms = if version.0 >= 1 {
            i32::read(reader)?
        } else {
            0
        };

        Ok(Self {
            error_code,
            api_keys,
            throttle_time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn request_v0_roundtrip() {
        let req = ApiVersionsRequest::default();
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        assert!(buf.is_empty());
        let restored = ApiVersionsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(0))
            .unwrap();
        assert_eq!(req, restored);
    }

    #[test]
    fn request_v3_roundtrip() {
        let req = ApiVersionsRequest {
            client_software_name: "kafka-broker-client".to_string(),
            client_software_version: "0.1.0".to_string(),
        };
        let mut buf = Vec::new();
        req.write_versioned(&mut buf, ApiVersion(3)).unwrap();
        let restored = ApiVersionsRequest::read_versioned(&mut Cursor::new(buf), ApiVersion(3))
            .unwrap();
        assert_eq!(req, restored);
    }

    #[test]
    fn response_v0_omits_throttle_time() {
        let resp = ApiVersionsResponse {
            error_code: 0,
            api_keys: vec![ApiVersionsResponseKey {
                api_key: ApiKey::Fetch,
                min_version: 0,
                max_version: 9,
            }],
            throttle_time_ms: 0,
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            ApiVersionsResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(resp, restored);
    }

    #[test]
    fn response_v1_roundtrip_with_throttle_time() {
        let resp = ApiVersionsResponse {
            error_code: 0,
            api_keys: vec![
                ApiVersionsResponseKey {
                    api_key: ApiKey::Produce,
                    min_version: 0,
                    max_version: 8,
                },
                ApiVersionsResponseKey {
                    api_key: ApiKey::ApiVersions,
                    min_version: 0,
                    max_version: 3,
                },
            ],
            throttle_time_ms: 123,
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(1)).unwrap();
        let restored =
            ApiVersionsResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(1)).unwrap();
        assert_eq!(resp, restored);
    }

    #[test]
    fn response_reports_unsupported_version_error_code() {
        let resp = ApiVersionsResponse {
            error_code: 35, // UNSUPPORTED_VERSION
            api_keys: vec![],
            throttle_time_ms: 0,
        };
        let mut buf = Vec::new();
        resp.write_versioned(&mut buf, ApiVersion(0)).unwrap();
        let restored =
            ApiVersionsResponse::read_versioned(&mut Cursor::new(buf), ApiVersion(0)).unwrap();
        assert_eq!(restored.error_code, 35);
    }
}
