//! End-to-end scenarios driven against a minimal in-process mock broker
//! speaking just enough of the wire protocol to exercise connect,
//! negotiation, join-group retry and connection-closed handling.

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use kafka_broker_client::protocol::api_key::ApiKey;
use kafka_broker_client::protocol::api_version::ApiVersion;
use kafka_broker_client::protocol::messages::api_versions::{ApiVersionsResponse, ApiVersionsResponseKey};
use kafka_broker_client::protocol::messages::header::{RequestHeader, ResponseHeader};
use kafka_broker_client::protocol::messages::join_group::{JoinGroupRequest, JoinGroupResponse};
use kafka_broker_client::protocol::messages::metadata::{MetadataRequest, MetadataResponse};
use kafka_broker_client::protocol::messages::{ReadVersionedType, WriteVersionedType};
use kafka_broker_client::protocol::traits::{ReadType, WriteType};
use kafka_broker_client::{Broker, BrokerConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn read_request(stream: &mut TcpStream) -> (RequestHeader, Vec<u8>) {
    let mut len_buf = [0u8; 4];
    stream.read_exact(&mut len_buf).await.unwrap();
    let len = i32::from_be_bytes(len_buf) as usize;
    let mut buf = vec![0u8; len];
    stream.read_exact(&mut buf).await.unwrap();
    let mut cursor = Cursor::new(buf);
    let header = RequestHeader::read(&mut cursor).unwrap();
    let pos = cursor.position() as usize;
    let body = cursor.into_inner().split_off(pos);
    (header, body)
}

async fn write_response(stream: &mut TcpStream, correlation_id: i32, body: &[u8]) {
    let mut frame = Vec::new();
    ResponseHeader { correlation_id }.write(&mut frame).unwrap();
    frame.extend_from_slice(body);
    stream
        .write_all(&(frame.len() as i32).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(&frame).await.unwrap();
    stream.flush().await.unwrap();
}

fn encode_api_versions(version: i16, response: &ApiVersionsResponse) -> Vec<u8> {
    let mut buf = Vec::new();
    response.write_versioned(&mut buf, ApiVersion(version)).unwrap();
    buf
}

fn encode_versioned<T: WriteVersionedType<Vec<u8>>>(version: i16, value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    value.write_versioned(&mut buf, ApiVersion(version)).unwrap();
    buf
}

/// Answers exactly one `ApiVersions` probe (at whichever version the client
/// sent) with a fixed response, then hands control to `rest` for everything
/// after.
async fn accept_and_negotiate(
    listener: &TcpListener,
    api_versions_response: ApiVersionsResponse,
) -> TcpStream {
    let (mut stream, _) = listener.accept().await.unwrap();
    let (header, _body) = read_request(&mut stream).await;
    assert_eq!(header.api_key, ApiKey::ApiVersions);
    let body = encode_api_versions(header.api_version, &api_versions_response);
    write_response(&mut stream, header.correlation_id, &body).await;
    stream
}

fn no_auth_api_versions() -> ApiVersionsResponse {
    ApiVersionsResponse {
        error_code: 0,
        api_keys: vec![ApiVersionsResponseKey {
            api_key: ApiKey::Metadata,
            min_version: 1,
            max_version: 1,
        }],
        throttle_time_ms: 0,
    }
}

fn test_broker_config(port: u16) -> BrokerConfig {
    BrokerConfig {
        host: "127.0.0.1".to_string(),
        port,
        connection_timeout: Duration::from_secs(5),
        authentication_timeout: Duration::from_secs(5),
        reauthentication_threshold: Duration::from_millis(10),
        ..BrokerConfig::default()
    }
}

/// S3: a broker that only accepts `ApiVersions` v2 forces the client to
/// probe v3 first (rejected) before settling on v2.
#[tokio::test]
async fn negotiates_down_to_the_highest_version_the_broker_accepts() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let (header, _) = read_request(&mut stream).await;
        assert_eq!(header.api_version, 3);
        let rejected = encode_api_versions(
            header.api_version,
            &ApiVersionsResponse {
                error_code: 35, // UNSUPPORTED_VERSION
                api_keys: vec![],
                throttle_time_ms: 0,
            },
        );
        write_response(&mut stream, header.correlation_id, &rejected).await;

        let (header, _) = read_request(&mut stream).await;
        assert_eq!(header.api_version, 2);
        let accepted = encode_api_versions(header.api_version, &no_auth_api_versions());
        write_response(&mut stream, header.correlation_id, &accepted).await;

        stream
    });

    let broker = Broker::new(test_broker_config(addr.port()));
    broker.connect().await.unwrap();
    assert!(broker.is_connected().await);

    server.await.unwrap();
}

/// S4: `MEMBER_ID_REQUIRED` triggers exactly one retry with the
/// broker-assigned member id.
#[tokio::test]
async fn join_group_retries_once_on_member_id_required() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let mut stream = accept_and_negotiate(&listener, no_auth_api_versions()).await;

        let (header, body) = read_request(&mut stream).await;
        assert_eq!(header.api_key, ApiKey::JoinGroup);
        let request = JoinGroupRequest::read_versioned(&mut Cursor::new(body), ApiVersion(1)).unwrap();
        assert_eq!(request.member_id, "");

        let rejected = encode_versioned(
            1,
            &JoinGroupResponse {
                error_code: 79, // MEMBER_ID_REQUIRED
                generation_id: -1,
                protocol_name: String::new(),
                leader: String::new(),
                member_id: "m-7".to_string(),
                members: vec![],
            },
        );
        write_response(&mut stream, header.correlation_id, &rejected).await;

        let (header, body) = read_request(&mut stream).await;
        let request = JoinGroupRequest::read_versioned(&mut Cursor::new(body), ApiVersion(1)).unwrap();
        assert_eq!(request.member_id, "m-7");

        let accepted = encode_versioned(
            1,
            &JoinGroupResponse {
                error_code: 0,
                generation_id: 1,
                protocol_name: "range".to_string(),
                leader: "m-7".to_string(),
                member_id: "m-7".to_string(),
                members: vec![],
            },
        );
        write_response(&mut stream, header.correlation_id, &accepted).await;
    });

    let broker = Broker::new(test_broker_config(addr.port()));
    let response = broker
        .join_group(JoinGroupRequest {
            group_id: "g".to_string(),
            session_timeout_ms: 10_000,
            rebalance_timeout_ms: 10_000,
            member_id: String::new(),
            protocol_type: "consumer".to_string(),
            protocols: vec![],
        })
        .await
        .unwrap();

    assert_eq!(response.error_code, 0);
    assert_eq!(response.member_id, "m-7");

    server.await.unwrap();
}

/// S5: two concurrent callers racing against an unconnected broker still
/// produce exactly one TCP connect and one `ApiVersions` exchange.
#[tokio::test]
async fn concurrent_calls_share_a_single_connect() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let accept_count = Arc::new(AtomicUsize::new(0));
    let accept_count_server = accept_count.clone();

    let server = tokio::spawn(async move {
        let mut stream = accept_and_negotiate(&listener, no_auth_api_versions()).await;
        accept_count_server.fetch_add(1, Ordering::SeqCst);

        for _ in 0..2 {
            let (header, _) = read_request(&mut stream).await;
            assert_eq!(header.api_key, ApiKey::Metadata);
            let body = encode_versioned(
                1,
                &MetadataResponse {
                    brokers: vec![],
                    controller_id: 0,
                    topics: vec![],
                },
            );
            write_response(&mut stream, header.correlation_id, &body).await;
        }
    });

    let broker = Arc::new(Broker::new(test_broker_config(addr.port())));

    let b1 = broker.clone();
    let b2 = broker.clone();
    let (r1, r2) = tokio::join!(
        b1.metadata(MetadataRequest { topics: None }),
        b2.metadata(MetadataRequest { topics: None }),
    );
    r1.unwrap();
    r2.unwrap();

    assert_eq!(accept_count.load(Ordering::SeqCst), 1);

    server.await.unwrap();
}

/// S6: once the broker closes the socket mid-flight, the next call
/// transparently reconnects rather than returning a dead connection
/// forever.
#[tokio::test]
async fn reconnects_after_the_connection_is_closed() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        {
            let mut stream = accept_and_negotiate(&listener, no_auth_api_versions()).await;
            let (header, _) = read_request(&mut stream).await;
            assert_eq!(header.api_key, ApiKey::Metadata);
            // Close without responding: simulates the broker dropping the
            // connection mid-request.
            drop(stream);
        }

        let mut stream = accept_and_negotiate(&listener, no_auth_api_versions()).await;
        let (header, _) = read_request(&mut stream).await;
        assert_eq!(header.api_key, ApiKey::Metadata);
        let body = encode_versioned(
            1,
            &MetadataResponse {
                brokers: vec![],
                controller_id: 0,
                topics: vec![],
            },
        );
        write_response(&mut stream, header.correlation_id, &body).await;
    });

    let broker = Broker::new(test_broker_config(addr.port()));

    let first = broker.metadata(MetadataRequest { topics: None }).await;
    assert!(first.is_err());
    assert!(!broker.is_connected().await);

    let second = broker.metadata(MetadataRequest { topics: None }).await;
    assert!(second.is_ok());

    server.await.unwrap();
}
