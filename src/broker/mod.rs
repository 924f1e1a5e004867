//! The `Broker` client: one connection to a single Kafka broker, with
//! version negotiation, optional SASL (re)authentication, and one typed
//! method per supported RPC.

pub mod auth;
pub mod error;
pub mod lookup;
pub mod negotiate;

use std::io::Cursor;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::connection::sasl::SaslConfig;
use crate::connection::transport::Transport;
use crate::connection::{Connection, TcpConnection};
use crate::protocol::messages::add_offsets_to_txn::{AddOffsetsToTxnRequest, AddOffsetsToTxnResponse};
use crate::protocol::messages::add_partitions_to_txn::{AddPartitionsToTxnRequest, AddPartitionsToTxnResponse};
use crate::protocol::messages::alter_configs::{AlterConfigsRequest, AlterConfigsResponse};
use crate::protocol::messages::create_acls::{CreateAclsRequest, CreateAclsResponse};
use crate::protocol::messages::create_partitions::{CreatePartitionsRequest, CreatePartitionsResponse};
use crate::protocol::messages::create_topics::{CreateTopicsRequest, CreateTopicsResponse};
use crate::protocol::messages::delete_acls::{DeleteAclsRequest, DeleteAclsResponse};
use crate::protocol::messages::delete_groups::{DeleteGroupsRequest, DeleteGroupsResponse};
use crate::protocol::messages::delete_records::{DeleteRecordsRequest, DeleteRecordsResponse};
use crate::protocol::messages::delete_topics::{DeleteTopicsRequest, DeleteTopicsResponse};
use crate::protocol::messages::describe_acls::{DescribeAclsRequest, DescribeAclsResponse};
use crate::protocol::messages::describe_configs::{DescribeConfigsRequest, DescribeConfigsResponse};
use crate::protocol::messages::describe_groups::{DescribeGroupsRequest, DescribeGroupsResponse};
use crate::protocol::messages::end_txn::{EndTxnRequest, EndTxnResponse};
use crate::protocol::messages::fetch::{FetchPartition, FetchRequest, FetchResponse, FetchTopic};
use crate::protocol::messages::find_coordinator::{FindCoordinatorRequest, FindCoordinatorResponse};
use crate::protocol::messages::heartbeat::{HeartbeatRequest, HeartbeatResponse};
use crate::protocol::messages::init_producer_id::{InitProducerIdRequest, InitProducerIdResponse};
use crate::protocol::messages::join_group::{JoinGroupRequest, JoinGroupResponse};
use crate::protocol::messages::leave_group::{LeaveGroupRequest, LeaveGroupResponse};
use crate::protocol::messages::list_groups::{ListGroupsRequest, ListGroupsResponse};
use crate::protocol::messages::list_offsets::{ListOffsetsRequest, ListOffsetsResponse};
use crate::protocol::messages::metadata::{MetadataRequest, MetadataResponse};
use crate::protocol::messages::offset_commit::{OffsetCommitRequest, OffsetCommitResponse};
use crate::protocol::messages::offset_fetch::{OffsetFetchRequest, OffsetFetchResponse};
use crate::protocol::messages::produce::{ProduceRequest, ProduceResponse};
use crate::protocol::messages::sync_group::{SyncGroupRequest, SyncGroupResponse};
use crate::protocol::messages::txn_offset_commit::{TxnOffsetCommitRequest, TxnOffsetCommitResponse};
use crate::protocol::messages::{ReadVersionedType, RequestBody, WriteVersionedType};
use crate::protocol::ApiError;

pub use error::Error;
use lookup::VersionTable;
use negotiate::SupportAuthenticationProtocol;

/// Configuration for a [`Broker`] connection.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    pub client_id: Option<String>,
    pub transport: Transport,
    pub sasl: Option<SaslConfig>,
    pub connection_timeout: Duration,
    pub authentication_timeout: Duration,
    /// How long before the negotiated session lifetime expires this broker
    /// starts reauthenticating, see [`auth::should_reauthenticate`].
    pub reauthentication_threshold: Duration,
    /// Whether `metadata()` calls may implicitly create missing topics.
    ///
    /// Real brokers only honor this from `Metadata` v4 onward; this crate
    /// pins `Metadata` at v1 (see [`crate::protocol::messages::metadata`]),
    /// so the field is accepted for configuration parity but has no effect
    /// on the wire today.
    pub allow_auto_topic_creation: bool,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: 9092,
            client_id: None,
            transport: Transport::default(),
            sasl: None,
            connection_timeout: Duration::from_secs(10),
            authentication_timeout: Duration::from_secs(1),
            reauthentication_threshold: Duration::from_secs(10),
            allow_auto_topic_creation: true,
        }
    }
}

struct Session {
    connection: Arc<dyn Connection>,
    version_table: VersionTable,
    #[allow(dead_code)]
    supports_authentication: SupportAuthenticationProtocol,
    session_lifetime_ms: i64,
    authenticated_at: Option<Instant>,
}

/// A connection to a single Kafka broker.
///
/// Owns connect/reconnect, `ApiVersions` negotiation, and optional SASL
/// (re)authentication, and exposes one typed method per supported RPC. All
/// methods transparently (re)connect if the current session is closed or
/// due for reauthentication.
pub struct Broker {
    config: BrokerConfig,
    session: Mutex<Option<Session>>,
    connect_lock: Mutex<()>,
}

impl Broker {
    pub fn new(config: BrokerConfig) -> Self {
        Self {
            config,
            session: Mutex::new(None),
            connect_lock: Mutex::new(()),
        }
    }

    /// `2 * connection_timeout + authentication_timeout`: long enough for a
    /// connect attempt plus a full authentication round trip to fail
    /// honestly twice over before giving up on the lock itself.
    fn connect_lock_timeout(&self) -> Duration {
        self.config.connection_timeout * 2 + self.config.authentication_timeout
    }

    /// True if there is a live, usable session: the connection hasn't
    /// closed, and -- when SASL is configured -- authentication has
    /// actually completed (`authenticated_at` is set) and isn't due for
    /// reauthentication yet.
    pub async fn is_connected(&self) -> bool {
        let session = self.session.lock().await;
        match &*session {
            Some(s) => {
                if s.connection.is_closed() {
                    return false;
                }
                if self.config.sasl.is_some() && s.authenticated_at.is_none() {
                    return false;
                }
                !self.session_needs_reauth(s)
            }
            None => false,
        }
    }

    pub async fn should_reauthenticate(&self) -> bool {
        let session = self.session.lock().await;
        match &*session {
            Some(s) => self.session_needs_reauth(s),
            None => false,
        }
    }

    fn session_needs_reauth(&self, session: &Session) -> bool {
        match session.authenticated_at {
            Some(authenticated_at) => auth::should_reauthenticate(
                authenticated_at.elapsed().as_millis() as i64,
                session.session_lifetime_ms,
                self.config.reauthentication_threshold.as_millis() as i64,
            ),
            None => false,
        }
    }

    pub async fn disconnect(&self) {
        let mut session = self.session.lock().await;
        *session = None;
    }

    /// Ensures a usable, authenticated session exists, (re)connecting and
    /// (re)authenticating as needed. Safe to call concurrently: callers
    /// serialize on an internal lock rather than racing to open duplicate
    /// sockets.
    pub async fn connect(&self) -> Result<(), Error> {
        let _guard = timeout(self.connect_lock_timeout(), self.connect_lock.lock())
            .await
            .map_err(|_| Error::LockTimeout)?;

        {
            let session = self.session.lock().await;
            if let Some(s) = &*session {
                if !s.connection.is_closed() {
                    if !self.session_needs_reauth(s) {
                        return Ok(());
                    }
                    debug!("session due for reauthentication, reconnecting");
                }
            }
        }

        let connection = timeout(
            self.config.connection_timeout,
            TcpConnection::connect(&self.config.host, self.config.port, &self.config.transport),
        )
        .await
        .map_err(|_| Error::ConnectTimeout)??;

        let outcome = negotiate::negotiate(&connection, self.config.client_id.as_deref()).await?;

        let (session_lifetime_ms, authenticated_at) = match &self.config.sasl {
            Some(sasl_config) => {
                let lifetime_ms = timeout(
                    self.config.authentication_timeout,
                    auth::authenticate(
                        &connection,
                        self.config.client_id.as_deref(),
                        outcome.supports_authentication,
                        sasl_config,
                    ),
                )
                .await
                .map_err(|_| Error::AuthenticationTimeout)??;
                (lifetime_ms, Some(Instant::now()))
            }
            None => (0, None),
        };

        let mut session = self.session.lock().await;
        *session = Some(Session {
            connection: Arc::new(connection),
            version_table: outcome.version_table,
            supports_authentication: outcome.supports_authentication,
            session_lifetime_ms,
            authenticated_at,
        });

        info!(host = %self.config.host, port = self.config.port, "broker connection established");

        Ok(())
    }

    async fn call<B>(&self, request: B) -> Result<B::ResponseBody, Error>
    where
        B: RequestBody + WriteVersionedType<Vec<u8>>,
        B::ResponseBody: ReadVersionedType<Cursor<Vec<u8>>>,
    {
        if !self.is_connected().await || self.should_reauthenticate().await {
            self.connect().await?;
        }

        // Clone the connection handle and release the session lock before
        // the round trip: `TcpConnection` multiplexes concurrent requests by
        // correlation id on its own, so holding this lock across an `.await`
        // here would serialize every RPC on the broker and defeat that
        // multiplexing entirely.
        let (connection, version) = {
            let session_guard = self.session.lock().await;
            let session = session_guard.as_ref().ok_or(Error::NotConnected)?;
            let version = session.version_table.resolve::<B>()?;
            (session.connection.clone(), version)
        };

        let mut body = Vec::new();
        request.write_versioned(&mut body, version)?;

        let outcome = connection
            .roundtrip(B::API_KEY, version.0, self.config.client_id.as_deref(), &body)
            .await;

        let raw = match outcome {
            Ok(raw) => raw,
            Err(e @ crate::connection::ConnectionError::Closed) => {
                // Clear auth state so the next call re-enters connect();
                // any other transport error leaves it intact (§7).
                self.disconnect().await;
                return Err(Error::Connection(e));
            }
            Err(e) => return Err(Error::Connection(e)),
        };

        let response = B::ResponseBody::read_versioned(&mut Cursor::new(raw), version)?;
        Ok(response)
    }

    pub async fn produce(&self, request: ProduceRequest) -> Result<ProduceResponse, Error> {
        self.call(request).await
    }

    /// Fetches records. The requested `(topic, partition)` pairs are
    /// flattened and shuffled before sending, so this client doesn't always
    /// starve the same partitions when `max_bytes` is tight, and a topic may
    /// legitimately end up split across multiple non-adjacent entries in the
    /// outgoing request (KIP-74 cross-topic fairness).
    pub async fn fetch(&self, mut request: FetchRequest) -> Result<FetchResponse, Error> {
        shuffle_fetch_request(&mut request);
        self.call(request).await
    }

    pub async fn list_offsets(&self, request: ListOffsetsRequest) -> Result<ListOffsetsResponse, Error> {
        self.call(request).await
    }

    /// Fetches cluster metadata, shuffling the requested topic order for the
    /// same load-spreading reason as [`Broker::fetch`].
    pub async fn metadata(&self, mut request: MetadataRequest) -> Result<MetadataResponse, Error> {
        if let Some(topics) = &mut request.topics {
            topics.shuffle(&mut rand::thread_rng());
        }
        self.call(request).await
    }

    pub async fn offset_commit(&self, request: OffsetCommitRequest) -> Result<OffsetCommitResponse, Error> {
        self.call(request).await
    }

    pub async fn offset_fetch(&self, request: OffsetFetchRequest) -> Result<OffsetFetchResponse, Error> {
        self.call(request).await
    }

    pub async fn find_coordinator(&self, request: FindCoordinatorRequest) -> Result<FindCoordinatorResponse, Error> {
        self.call(request).await
    }

    /// Joins a consumer group. On a first attempt with an empty `member_id`
    /// the broker may reject the request with `MEMBER_ID_REQUIRED` and hand
    /// back the member id it wants the client to use; this retries exactly
    /// once with that id rather than making every caller implement the
    /// retry themselves.
    pub async fn join_group(&self, request: JoinGroupRequest) -> Result<JoinGroupResponse, Error> {
        let response = self.call(request.clone()).await?;
        if ApiError::new(response.error_code) == Some(ApiError::MemberIdRequired) {
            let retry = JoinGroupRequest {
                member_id: response.member_id,
                ..request
            };
            return self.call(retry).await;
        }
        Ok(response)
    }

    pub async fn sync_group(&self, request: SyncGroupRequest) -> Result<SyncGroupResponse, Error> {
        self.call(request).await
    }

    pub async fn heartbeat(&self, request: HeartbeatRequest) -> Result<HeartbeatResponse, Error> {
        self.call(request).await
    }

    pub async fn leave_group(&self, request: LeaveGroupRequest) -> Result<LeaveGroupResponse, Error> {
        self.call(request).await
    }

    pub async fn describe_groups(&self, request: DescribeGroupsRequest) -> Result<DescribeGroupsResponse, Error> {
        self.call(request).await
    }

    pub async fn list_groups(&self, request: ListGroupsRequest) -> Result<ListGroupsResponse, Error> {
        self.call(request).await
    }

    pub async fn delete_groups(&self, request: DeleteGroupsRequest) -> Result<DeleteGroupsResponse, Error> {
        self.call(request).await
    }

    pub async fn create_topics(&self, request: CreateTopicsRequest) -> Result<CreateTopicsResponse, Error> {
        self.call(request).await
    }

    pub async fn create_partitions(&self, request: CreatePartitionsRequest) -> Result<CreatePartitionsResponse, Error> {
        self.call(request).await
    }

    pub async fn delete_topics(&self, request: DeleteTopicsRequest) -> Result<DeleteTopicsResponse, Error> {
        self.call(request).await
    }

    pub async fn delete_records(&self, request: DeleteRecordsRequest) -> Result<DeleteRecordsResponse, Error> {
        self.call(request).await
    }

    pub async fn describe_configs(&self, request: DescribeConfigsRequest) -> Result<DescribeConfigsResponse, Error> {
        self.call(request).await
    }

    pub async fn alter_configs(&self, request: AlterConfigsRequest) -> Result<AlterConfigsResponse, Error> {
        self.call(request).await
    }

    pub async fn init_producer_id(&self, request: InitProducerIdRequest) -> Result<InitProducerIdResponse, Error> {
        self.call(request).await
    }

    pub async fn add_partitions_to_txn(
        &self,
        request: AddPartitionsToTxnRequest,
    ) -> Result<AddPartitionsToTxnResponse, Error> {
        self.call(request).await
    }

    pub async fn add_offsets_to_txn(&self, request: AddOffsetsToTxnRequest) -> Result<AddOffsetsToTxnResponse, Error> {
        self.call(request).await
    }

    pub async fn txn_offset_commit(&self, request: TxnOffsetCommitRequest) -> Result<TxnOffsetCommitResponse, Error> {
        self.call(request).await
    }

    pub async fn end_txn(&self, request: EndTxnRequest) -> Result<EndTxnResponse, Error> {
        self.call(request).await
    }

    pub async fn create_acls(&self, request: CreateAclsRequest) -> Result<CreateAclsResponse, Error> {
        self.call(request).await
    }

    pub async fn describe_acls(&self, request: DescribeAclsRequest) -> Result<DescribeAclsResponse, Error> {
        self.call(request).await
    }

    pub async fn delete_acls(&self, request: DeleteAclsRequest) -> Result<DeleteAclsResponse, Error> {
        self.call(request).await
    }
}

/// Flattens every `(topic, partition)` pair across all requested topics into
/// one list, shuffles that flat list, then regroups consecutive same-topic
/// pairs back into `FetchTopic` entries. Unlike shuffling topics and
/// partitions independently, this lets a topic end up in more than one
/// non-adjacent entry, which is what actually spreads load evenly across
/// topic boundaries rather than just within each topic's own partitions.
fn shuffle_fetch_request(request: &mut FetchRequest) {
    let mut flattened: Vec<(String, FetchPartition)> = request
        .topics
        .drain(..)
        .flat_map(|topic| {
            let name = topic.topic;
            topic
                .partitions
                .into_iter()
                .map(move |partition| (name.clone(), partition))
        })
        .collect();

    flattened.shuffle(&mut rand::thread_rng());

    let mut regrouped: Vec<FetchTopic> = Vec::with_capacity(flattened.len());
    for (topic, partition) in flattened {
        match regrouped.last_mut() {
            Some(last) if last.topic == topic => last.partitions.push(partition),
            _ => regrouped.push(FetchTopic {
                topic,
                partitions: vec![partition],
            }),
        }
    }

    request.topics = regrouped;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_partition(partition: i32) -> FetchPartition {
        FetchPartition {
            partition,
            current_leader_epoch: -1,
            fetch_offset: 0,
            log_start_offset: -1,
            partition_max_bytes: 1_048_576,
        }
    }

    #[test]
    fn shuffle_preserves_all_partitions_and_only_merges_adjacent_same_topic_runs() {
        let request = FetchRequest {
            replica_id: -1,
            max_wait_ms: 500,
            min_bytes: 1,
            max_bytes: 1_000_000,
            isolation_level: 0,
            session_id: 0,
            session_epoch: -1,
            topics: vec![
                FetchTopic {
                    topic: "orders".to_string(),
                    partitions: vec![fetch_partition(0), fetch_partition(1)],
                },
                FetchTopic {
                    topic: "payments".to_string(),
                    partitions: vec![fetch_partition(0)],
                },
            ],
            forgotten_topics_data: vec![],
            rack_id: String::new(),
        };

        let mut shuffled = request.clone();
        shuffle_fetch_request(&mut shuffled);

        let mut before: Vec<(String, i32)> = request
            .topics
            .iter()
            .flat_map(|t| t.partitions.iter().map(move |p| (t.topic.clone(), p.partition)))
            .collect();
        let mut after: Vec<(String, i32)> = shuffled
            .topics
            .iter()
            .flat_map(|t| t.partitions.iter().map(move |p| (t.topic.clone(), p.partition)))
            .collect();
        before.sort();
        after.sort();
        assert_eq!(before, after, "shuffling must not lose or duplicate any (topic, partition) pair");

        for window in shuffled.topics.windows(2) {
            assert_ne!(
                window[0].topic, window[1].topic,
                "regrouping must merge every adjacent same-topic run into one entry"
            );
        }
    }

    #[test]
    fn connect_lock_timeout_formula() {
        let config = BrokerConfig {
            connection_timeout: Duration::from_secs(3),
            authentication_timeout: Duration::from_secs(2),
            ..BrokerConfig::default()
        };
        let broker = Broker::new(config);
        assert_eq!(broker.connect_lock_timeout(), Duration::from_secs(8));
    }
}
