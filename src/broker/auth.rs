//! SASL authentication: handshake, credential exchange, and the
//! re-authentication policy that governs when a session needs to repeat it.

use tracing::debug;

use crate::connection::sasl::{build_mechanism, SaslConfig};
use crate::connection::Connection;
use crate::protocol::messages::sasl_authenticate::{SaslAuthenticateRequest, SaslAuthenticateResponse};
use crate::protocol::messages::sasl_handshake::{SaslHandshakeRequest, SaslHandshakeResponse};
use crate::protocol::messages::{ReadVersionedType, WriteVersionedType};
use crate::protocol::ApiError;

use super::error::Error;
use super::negotiate::SupportAuthenticationProtocol;

/// Runs the SASL exchange and returns the session lifetime the broker
/// granted, in milliseconds (`0` if the broker never expires the session,
/// which is always the case for the raw pre-KIP-152 exchange below).
///
/// When the broker's `ApiVersions` response never advertised
/// `SaslAuthenticate`, it predates KIP-152 and doesn't understand the framed
/// `SaslHandshake`/`SaslAuthenticate` request pair at all: the mechanism's
/// bytes go straight over the socket via [`Connection::raw_exchange`], with
/// no correlation id and no structured error code to inspect. A failed
/// exchange in that mode surfaces as the broker closing the connection
/// instead of a protocol error.
pub async fn authenticate(
    connection: &dyn Connection,
    client_id: Option<&str>,
    supports_authentication: SupportAuthenticationProtocol,
    config: &SaslConfig,
) -> Result<i64, Error> {
    if supports_authentication == SupportAuthenticationProtocol::No {
        let mechanism = build_mechanism(config)?;
        connection.raw_exchange(&mechanism.initial_response()).await?;
        debug!("SASL authentication succeeded (raw pre-KIP-152 exchange)");
        return Ok(0);
    }

    let handshake = SaslHandshakeRequest {
        mechanism: config.mechanism.name().to_string(),
    };
    let mut body = Vec::new();
    handshake.write_versioned(&mut body, crate::protocol::ApiVersion(1))?;

    let raw = connection
        .roundtrip(crate::protocol::ApiKey::SaslHandshake, 1, client_id, &body)
        .await?;
    let response = SaslHandshakeResponse::read_versioned(
        &mut std::io::Cursor::new(raw),
        crate::protocol::ApiVersion(1),
    )?;

    if let Some(err) = ApiError::new(response.error_code) {
        return Err(Error::Protocol(err));
    }

    let mechanism = build_mechanism(config)?;
    let auth_request = SaslAuthenticateRequest {
        auth_bytes: mechanism.initial_response(),
    };
    let mut body = Vec::new();
    auth_request.write_versioned(&mut body, crate::protocol::ApiVersion(0))?;

    let raw = connection
        .roundtrip(crate::protocol::ApiKey::SaslAuthenticate, 0, client_id, &body)
        .await?;
    let response: SaslAuthenticateResponse =
        SaslAuthenticateResponse::read_versioned(&mut std::io::Cursor::new(raw), crate::protocol::ApiVersion(0))?;

    if let Some(err) = ApiError::new(response.error_code) {
        let message = response
            .error_message
            .unwrap_or_else(|| err.to_string());
        return Err(Error::SaslAuthenticationFailed(message));
    }

    debug!(
        session_lifetime_ms = response.session_lifetime_ms,
        "SASL authentication succeeded"
    );

    Ok(response.session_lifetime_ms)
}

/// Whether a session needs to reauthenticate before its lifetime expires.
///
/// `session_lifetime_ms == 0` means the broker never expires the session, so
/// this always returns `false` in that case. Otherwise a session is due for
/// reauthentication once `elapsed_ms + reauthentication_threshold_ms` would
/// carry it past `session_lifetime_ms` -- the threshold is a safety margin so
/// reauthentication completes comfortably before the broker actually closes
/// the connection.
pub fn should_reauthenticate(
    elapsed_ms: i64,
    session_lifetime_ms: i64,
    reauthentication_threshold_ms: i64,
) -> bool {
    if session_lifetime_ms == 0 {
        return false;
    }

    elapsed_ms + reauthentication_threshold_ms >= session_lifetime_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_lifetime_never_reauthenticates() {
        assert!(!should_reauthenticate(1_000_000, 0, 1000));
    }

    #[test]
    fn reauthenticates_once_within_threshold_of_expiry() {
        assert!(should_reauthenticate(9_200, 10_000, 1_000));
        assert!(!should_reauthenticate(8_000, 10_000, 1_000));
    }

    #[test]
    fn boundary_is_inclusive() {
        assert!(should_reauthenticate(9_000, 10_000, 1_000));
    }
}
