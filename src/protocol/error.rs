//! Kafka broker-returned error codes.
//!
//! # References
//! - <https://kafka.apache.org/protocol#protocol_error_codes>

use thiserror::Error;

/// A broker-returned protocol error code.
///
/// `Error::new` maps the wire `i16` to this enum, returning `None` for `0`
/// ("no error") -- most response decoders store the result as
/// `Option<Error>` directly.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum Error {
    #[error("the requested offset is out of range")]
    OffsetOutOfRange,
    #[error("message contents does not match its CRC")]
    CorruptMessage,
    #[error("unknown topic or partition")]
    UnknownTopicOrPartition,
    #[error("request for unsupported version")]
    UnsupportedVersion,
    #[error("broker is not the leader for this partition")]
    NotLeaderOrFollower,
    #[error("request timed out")]
    RequestTimedOut,
    #[error("replica is not available for the requested topic-partition")]
    ReplicaNotAvailable,
    #[error("message is larger than the server will accept")]
    MessageTooLarge,
    #[error("coordinator load in progress")]
    CoordinatorLoadInProgress,
    #[error("coordinator is not available")]
    CoordinatorNotAvailable,
    #[error("this is not the correct coordinator")]
    NotCoordinator,
    #[error("request attempted to perform an operation on an invalid topic")]
    InvalidTopicException,
    #[error("group is rebalancing, re-join the group")]
    RebalanceInProgress,
    #[error("commit offset data size is not valid")]
    InvalidCommitOffsetSize,
    #[error("topic authorization failed")]
    TopicAuthorizationFailed,
    #[error("group authorization failed")]
    GroupAuthorizationFailed,
    #[error("cluster authorization failed")]
    ClusterAuthorizationFailed,
    #[error("the timestamp is out of acceptable range")]
    InvalidTimestamp,
    #[error("the broker does not support the requested SASL mechanism")]
    UnsupportedSaslMechanism,
    #[error("request is not valid given the current SASL state")]
    IllegalSaslState,
    #[error("version of API is not supported")]
    UnsupportedVersionVersion,
    #[error("topic already exists")]
    TopicAlreadyExists,
    #[error("number of partitions is invalid")]
    InvalidPartitions,
    #[error("replication factor is invalid")]
    InvalidReplicationFactor,
    #[error("replica assignment is invalid")]
    InvalidReplicaAssignment,
    #[error("configuration is invalid")]
    InvalidConfig,
    #[error("this is not the correct controller for this cluster")]
    NotController,
    #[error("request body is malformed")]
    InvalidRequest,
    #[error("message format version on the broker does not support the request")]
    UnsupportedForMessageFormat,
    #[error("request parameters do not satisfy policy")]
    PolicyViolation,
    #[error("fenced by a more recent producer epoch")]
    ProducerFenced,
    #[error("request principal is not authorized")]
    SecurityDisabled,
    #[error("member id is required for this join group request")]
    MemberIdRequired,
    #[error("group instance id has been fenced by a new instance")]
    FencedInstanceId,
    #[error("SASL authentication failed")]
    SaslAuthenticationFailed,
    #[error("offset is not available for this topic-partition")]
    OffsetNotAvailable,
    #[error("offset metadata is too large")]
    OffsetMetadataTooLarge,
    #[error("unknown member id")]
    UnknownMemberId,
    #[error("invalid session timeout")]
    InvalidSessionTimeout,
    #[error("unknown server error")]
    UnknownServerError,
    #[error("an unmapped broker error code: {0}")]
    Other(i16),
}

impl Error {
    /// Map a wire `i16` error code to `Some(Error)`, or `None` for "no error".
    pub fn new(code: i16) -> Option<Self> {
        match code {
            0 => None,
            1 => Some(Self::OffsetOutOfRange),
            2 => Some(Self::CorruptMessage),
            3 => Some(Self::UnknownTopicOrPartition),
            6 => Some(Self::NotLeaderOrFollower),
            7 => Some(Self::RequestTimedOut),
            9 => Some(Self::ReplicaNotAvailable),
            10 => Some(Self::MessageTooLarge),
            14 => Some(Self::CoordinatorLoadInProgress),
            15 => Some(Self::CoordinatorNotAvailable),
            16 => Some(Self::NotCoordinator),
            17 => Some(Self::InvalidTopicException),
            20 => Some(Self::InvalidCommitOffsetSize),
            22 => Some(Self::RebalanceInProgress),
            27 => Some(Self::TopicAuthorizationFailed),
            30 => Some(Self::GroupAuthorizationFailed),
            31 => Some(Self::ClusterAuthorizationFailed),
            32 => Some(Self::InvalidTimestamp),
            33 => Some(Self::UnsupportedSaslMechanism),
            34 => Some(Self::IllegalSaslState),
            35 => Some(Self::UnsupportedVersion),
            36 => Some(Self::TopicAlreadyExists),
            37 => Some(Self::InvalidPartitions),
            38 => Some(Self::InvalidReplicationFactor),
            39 => Some(Self::InvalidReplicaAssignment),
            40 => Some(Self::InvalidConfig),
            41 => Some(Self::NotController),
            42 => Some(Self::InvalidRequest),
            43 => Some(Self::UnsupportedForMessageFormat),
            44 => Some(Self::PolicyViolation),
            45 => Some(Self::OffsetNotAvailable),
            50 => Some(Self::OffsetMetadataTooLarge),
            58 => Some(Self::SaslAuthenticationFailed),
            74 => Some(Self::UnknownMemberId),
            26 => Some(Self::InvalidSessionTimeout),
            79 => Some(Self::MemberIdRequired),
            90 => Some(Self::FencedInstanceId),
            88 => Some(Self::ProducerFenced),
            -1 => Some(Self::UnknownServerError),
            other => Some(Self::Other(other)),
        }
    }

    /// Re-encode as the wire `i16` error code, `0` meaning "no error".
    pub fn code(&self) -> i16 {
        match self {
            Self::OffsetOutOfRange => 1,
            Self::CorruptMessage => 2,
            Self::UnknownTopicOrPartition => 3,
            Self::UnsupportedVersion | Self::UnsupportedVersionVersion => 35,
            Self::NotLeaderOrFollower => 6,
            Self::RequestTimedOut => 7,
            Self::ReplicaNotAvailable => 9,
            Self::MessageTooLarge => 10,
            Self::CoordinatorLoadInProgress => 14,
            Self::CoordinatorNotAvailable => 15,
            Self::NotCoordinator => 16,
            Self::InvalidTopicException => 17,
            Self::RebalanceInProgress => 22,
            Self::InvalidCommitOffsetSize => 20,
            Self::TopicAuthorizationFailed => 27,
            Self::GroupAuthorizationFailed => 30,
            Self::ClusterAuthorizationFailed => 31,
            Self::InvalidTimestamp => 32,
            Self::UnsupportedSaslMechanism => 33,
            Self::IllegalSaslState => 34,
            Self::TopicAlreadyExists => 36,
            Self::InvalidPartitions => 37,
            Self::InvalidReplicationFactor => 38,
            Self::InvalidReplicaAssignment => 39,
            Self::InvalidConfig => 40,
            Self::NotController => 41,
            Self::InvalidRequest => 42,
            Self::UnsupportedForMessageFormat => 43,
            Self::PolicyViolation => 44,
            Self::ProducerFenced => 88,
            Self::SecurityDisabled => 54,
            Self::MemberIdRequired => 79,
            Self::FencedInstanceId => 90,
            Self::SaslAuthenticationFailed => 58,
            Self::OffsetNotAvailable => 45,
            Self::OffsetMetadataTooLarge => 50,
            Self::UnknownMemberId => 74,
            Self::InvalidSessionTimeout => 26,
            Self::UnknownServerError => -1,
            Self::Other(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_no_error() {
        assert_eq!(Error::new(0), None);
    }

    #[test]
    fn unsupported_version_roundtrips() {
        assert_eq!(Error::new(35), Some(Error::UnsupportedVersion));
        assert_eq!(Error::UnsupportedVersion.code(), 35);
    }

    #[test]
    fn member_id_required_roundtrips() {
        assert_eq!(Error::new(79), Some(Error::MemberIdRequired));
        assert_eq!(Error::MemberIdRequired.code(), 79);
    }

    #[test]
    fn unknown_code_preserved() {
        assert_eq!(Error::new(12345), Some(Error::Other(12345)));
        assert_eq!(Error::Other(12345).code(), 12345);
    }
}
