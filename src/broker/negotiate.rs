//! Version negotiation.
//!
//! The very first request on a new connection is always `ApiVersions`.
//! Brokers older than 0.10 don't understand it at all and close the
//! connection; brokers that do understand it but not the version we asked
//! for reply with `UNSUPPORTED_VERSION` using the *lowest* response format
//! (version 0), so a client has to retry with descending candidate versions
//! until one is accepted.

use tracing::debug;

use crate::connection::Connection;
use crate::protocol::api_key::ApiKey;
use crate::protocol::api_version::{ApiVersion, ApiVersionRange};
use crate::protocol::messages::api_versions::{ApiVersionsRequest, ApiVersionsResponse};
use crate::protocol::messages::{ReadVersionedType, RequestBody, WriteVersionedType};
use crate::protocol::ApiError;

use super::error::Error;
use super::lookup::VersionTable;

/// Whether the broker understands `SaslAuthenticate` (KIP-152 framed SASL)
/// at all, as opposed to only the pre-KIP-152 raw-socket exchange.
///
/// Resolved once from the very first `ApiVersions` response and never
/// re-probed for the lifetime of the connection, even across
/// reconnects -- a broker's supported API surface doesn't change mid-session
/// in any way this crate needs to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportAuthenticationProtocol {
    Unknown,
    Yes,
    No,
}

/// Descending candidate versions to probe, highest first.
const CANDIDATE_VERSIONS: &[i16] = &[3, 2, 1, 0];

pub struct NegotiationOutcome {
    pub version_table: VersionTable,
    pub supports_authentication: SupportAuthenticationProtocol,
}

pub async fn negotiate(
    connection: &dyn Connection,
    client_id: Option<&str>,
) -> Result<NegotiationOutcome, Error> {
    let request = ApiVersionsRequest {
        client_software_name: "kafka-broker-client".to_string(),
        client_software_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let mut last_err = None;

    for &candidate in CANDIDATE_VERSIONS {
        let version = ApiVersion(candidate);

        let mut body = Vec::new();
        if let Err(e) = request.write_versioned(&mut body, version) {
            last_err = Some(Error::Encode(e));
            continue;
        }

        let raw = connection
            .roundtrip(ApiKey::ApiVersions, candidate, client_id, &body)
            .await?;

        let response = match ApiVersionsResponse::read_versioned(&mut std::io::Cursor::new(raw), version) {
            Ok(response) => response,
            Err(e) => {
                last_err = Some(Error::Decode(e));
                continue;
            }
        };

        match ApiError::new(response.error_code) {
            None => {
                debug!(version = candidate, "ApiVersions negotiated");
                let supports_authentication = if response
                    .api_keys
                    .iter()
                    .any(|k| k.api_key == ApiKey::SaslAuthenticate)
                {
                    SupportAuthenticationProtocol::Yes
                } else {
                    SupportAuthenticationProtocol::No
                };

                let mut ranges = std::collections::HashMap::new();
                for key in &response.api_keys {
                    ranges.insert(
                        key.api_key,
                        ApiVersionRange::new(key.min_version, key.max_version),
                    );
                }

                return Ok(NegotiationOutcome {
                    version_table: VersionTable::new(ranges),
                    supports_authentication,
                });
            }
            Some(ApiError::UnsupportedVersion) => {
                debug!(version = candidate, "broker rejected ApiVersions version, retrying lower");
                continue;
            }
            Some(other) => {
                last_err = Some(Error::Protocol(other));
                continue;
            }
        }
    }

    Err(last_err.unwrap_or(Error::UnsupportedVersion(ApiVersionsRequest::API_VERSION_RANGE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    struct ScriptedConnection {
        responses: StdMutex<Vec<(i16, ApiVersionsResponse)>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Connection for ScriptedConnection {
        async fn roundtrip(
            &self,
            _api_key: ApiKey,
            api_version: i16,
            _client_id: Option<&str>,
            _body: &[u8],
        ) -> Result<Vec<u8>, ConnectionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            let idx = responses
                .iter()
                .position(|(v, _)| *v == api_version)
                .ok_or(ConnectionError::Closed)?;
            let (_, response) = responses.remove(idx);
            let mut buf = Vec::new();
            response
                .write_versioned(&mut buf, ApiVersion(api_version))
                .unwrap();
            Ok(buf)
        }

        async fn raw_exchange(&self, _bytes: &[u8]) -> Result<Vec<u8>, ConnectionError> {
            unimplemented!("not exercised by version negotiation tests")
        }

        fn is_closed(&self) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn falls_back_to_lower_version_on_unsupported_version() {
        let connection = ScriptedConnection {
            responses: StdMutex::new(vec![
                (
                    3,
                    ApiVersionsResponse {
                        error_code: 35,
                        api_keys: vec![],
                        throttle_time_ms: 0,
                    },
                ),
                (
                    2,
                    ApiVersionsResponse {
                        error_code: 35,
                        api_keys: vec![],
                        throttle_time_ms: 0,
                    },
                ),
                (
                    1,
                    ApiVersionsResponse {
                        error_code: 0,
                        api_keys: vec![crate::protocol::messages::api_versions::ApiVersionsResponseKey {
                            api_key: ApiKey::SaslAuthenticate,
                            min_version: 0,
                            max_version: 0,
                        }],
                        throttle_time_ms: 0,
                    },
                ),
            ]),
            calls: AtomicUsize::new(0),
        };

        let outcome = negotiate(&connection, Some("test-client")).await.unwrap();
        assert_eq!(
            outcome.supports_authentication,
            SupportAuthenticationProtocol::Yes
        );
        assert_eq!(connection.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn no_sasl_handshake_key_means_authentication_unsupported() {
        let connection = ScriptedConnection {
            responses: StdMutex::new(vec![(
                3,
                ApiVersionsResponse {
                    error_code: 0,
                    api_keys: vec![],
                    throttle_time_ms: 0,
                },
            )]),
            calls: AtomicUsize::new(0),
        };

        let outcome = negotiate(&connection, None).await.unwrap();
        assert_eq!(
            outcome.supports_authentication,
            SupportAuthenticationProtocol::No
        );
    }
}
