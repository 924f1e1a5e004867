//! SASL mechanism plumbing.
//!
//! Only `PLAIN` is implemented concretely. Other mechanisms are named so
//! callers can select them through [`SaslConfig`], but constructing one
//! currently fails with [`SaslError::UnsupportedMechanism`] -- their
//! challenge/response byte framing is mechanism-specific cryptography this
//! crate does not implement.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SaslError {
    #[error("unsupported SASL mechanism: {0}")]
    UnsupportedMechanism(String),
}

/// Credentials for a SASL exchange.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The SASL mechanism a broker connection should authenticate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mechanism {
    Plain,
}

impl Mechanism {
    pub fn name(&self) -> &'static str {
        match self {
            Mechanism::Plain => "PLAIN",
        }
    }
}

/// SASL configuration for a broker connection.
#[derive(Debug, Clone)]
pub struct SaslConfig {
    pub mechanism: Mechanism,
    pub credentials: Credentials,
}

/// A mechanism's one-shot challenge-response byte encoding.
///
/// PLAIN needs only a single round: the client sends its credentials and the
/// broker replies with an empty success frame or an error. Mechanisms that
/// need multiple challenge/response rounds (SCRAM, GSSAPI, OAUTHBEARER)
/// don't fit this trait as written and are out of scope here.
pub trait SaslMechanism: Send + Sync {
    /// Build the bytes sent as the sole `SaslAuthenticate` request payload.
    fn initial_response(&self) -> Vec<u8>;
}

pub struct PlainMechanism {
    credentials: Credentials,
}

impl PlainMechanism {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl SaslMechanism for PlainMechanism {
    fn initial_response(&self) -> Vec<u8> {
        // authzid (empty) \0 authcid \0 password, per RFC 4616.
        let mut out = Vec::new();
        out.push(0u8);
        out.extend_from_slice(self.credentials.username.as_bytes());
        out.push(0u8);
        out.extend_from_slice(self.credentials.password.as_bytes());
        out
    }
}

pub fn build_mechanism(config: &SaslConfig) -> Result<Box<dyn SaslMechanism>, SaslError> {
    match config.mechanism {
        Mechanism::Plain => Ok(Box::new(PlainMechanism::new(config.credentials.clone()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_initial_response_format() {
        let mechanism = PlainMechanism::new(Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        });
        let response = mechanism.initial_response();
        assert_eq!(response, b"\0alice\0secret".to_vec());
    }
}
