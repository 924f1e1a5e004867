//! Framed request/response transport over a single broker socket.
//!
//! A [`Connection`] multiplexes many concurrent in-flight requests over one
//! socket using Kafka's own correlation id: a background task owns the read
//! half, and each caller's request is matched back to its response via a
//! map of correlation id to a one-shot reply channel.

pub mod sasl;
pub mod transport;

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, warn};

use crate::protocol::api_key::ApiKey;
use crate::protocol::messages::header::{RequestHeader, ResponseHeader};
use crate::protocol::traits::{ReadType, WriteType};
use transport::Transport;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConnectionError {
    #[error("failed to connect: {0}")]
    Connect(#[source] std::io::Error),

    #[error("connection closed")]
    Closed,

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("protocol framing error: {0}")]
    Framing(String),
}

/// A single, already-established connection to a broker, able to multiplex
/// many concurrent typed requests.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Send a pre-encoded request body and return the pre-encoded response
    /// body, matched by correlation id. `client_id` is carried in the
    /// request header for broker-side logging; it has no other effect.
    async fn roundtrip(
        &self,
        api_key: ApiKey,
        api_version: i16,
        client_id: Option<&str>,
        body: &[u8],
    ) -> Result<Vec<u8>, ConnectionError>;

    /// Writes a single length-prefixed frame directly on the socket, with no
    /// `RequestHeader`/correlation id envelope, and returns the next raw
    /// frame the broker sends back unparsed. Exists only for the
    /// pre-KIP-152 SASL exchange, where the broker doesn't tag bytes with a
    /// correlation id at all, so the normal demultiplexed `roundtrip` can't
    /// be used.
    async fn raw_exchange(&self, bytes: &[u8]) -> Result<Vec<u8>, ConnectionError>;

    /// True once the read loop has observed the socket close or error out.
    fn is_closed(&self) -> bool;
}

type PendingMap = Arc<Mutex<HashMap<i32, oneshot::Sender<Vec<u8>>>>>;
type RawPending = Arc<Mutex<Option<oneshot::Sender<Vec<u8>>>>>;

/// A TCP (optionally TLS) connection to one broker.
pub struct TcpConnection {
    write_half: Mutex<Box<dyn tokio::io::AsyncWrite + Send + Unpin>>,
    pending: PendingMap,
    raw_pending: RawPending,
    next_correlation_id: AtomicI32,
    closed: Arc<std::sync::atomic::AtomicBool>,
}

impl TcpConnection {
    /// Establish a connection and spawn the background read-demultiplexer
    /// task. `transport` controls whether the socket is wrapped in TLS.
    pub async fn connect(host: &str, port: u16, transport: &Transport) -> Result<Self, ConnectionError> {
        let stream = tokio::net::TcpStream::connect((host, port))
            .await
            .map_err(ConnectionError::Connect)?;
        stream.set_nodelay(true).map_err(ConnectionError::Connect)?;

        let (read_half, write_half): (
            Box<dyn tokio::io::AsyncRead + Send + Unpin>,
            Box<dyn tokio::io::AsyncWrite + Send + Unpin>,
        ) = transport.wrap(stream, host).await?;

        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let raw_pending: RawPending = Arc::new(Mutex::new(None));
        let closed = Arc::new(std::sync::atomic::AtomicBool::new(false));

        tokio::spawn(read_loop(
            read_half,
            pending.clone(),
            raw_pending.clone(),
            closed.clone(),
        ));

        Ok(Self {
            write_half: Mutex::new(write_half),
            pending,
            raw_pending,
            next_correlation_id: AtomicI32::new(0),
            closed,
        })
    }
}

async fn read_loop(
    mut read_half: Box<dyn tokio::io::AsyncRead + Send + Unpin>,
    pending: PendingMap,
    raw_pending: RawPending,
    closed: Arc<std::sync::atomic::AtomicBool>,
) {
    loop {
        let mut len_buf = [0u8; 4];
        if let Err(e) = read_half.read_exact(&mut len_buf).await {
            debug!(error = %e, "connection read loop exiting");
            break;
        }
        let len = i32::from_be_bytes(len_buf);
        if len < 0 {
            warn!(len, "broker sent a negative frame length, closing connection");
            break;
        }
        let mut buf = vec![0u8; len as usize];
        if let Err(e) = read_half.read_exact(&mut buf).await {
            debug!(error = %e, "connection read loop exiting mid-frame");
            break;
        }

        {
            let mut raw_pending = raw_pending.lock().await;
            if let Some(sender) = raw_pending.take() {
                let _ = sender.send(buf);
                continue;
            }
        }

        let mut cursor = std::io::Cursor::new(buf);
        let header = match ResponseHeader::read(&mut cursor) {
            Ok(header) => header,
            Err(e) => {
                warn!(error = %e, "failed to decode response header, closing connection");
                break;
            }
        };

        let remaining = cursor.position() as usize;
        let body = cursor.into_inner().split_off(remaining);

        let mut pending = pending.lock().await;
        if let Some(sender) = pending.remove(&header.correlation_id) {
            let _ = sender.send(body);
        } else {
            warn!(
                correlation_id = header.correlation_id,
                "received response for unknown correlation id"
            );
        }
    }

    closed.store(true, Ordering::SeqCst);
    let mut pending = pending.lock().await;
    pending.clear();
}

#[async_trait]
impl Connection for TcpConnection {
    async fn roundtrip(
        &self,
        api_key: ApiKey,
        api_version: i16,
        client_id: Option<&str>,
        body: &[u8],
    ) -> Result<Vec<u8>, ConnectionError> {
        if self.is_closed() {
            return Err(ConnectionError::Closed);
        }

        let correlation_id = self.next_correlation_id.fetch_add(1, Ordering::SeqCst);
        let header = RequestHeader {
            api_key,
            api_version,
            correlation_id,
            client_id: client_id.map(str::to_string),
        };

        let mut frame = Vec::with_capacity(body.len() + 16);
        header
            .write(&mut frame)
            .map_err(|e| ConnectionError::Framing(e.to_string()))?;
        frame.extend_from_slice(body);

        let (tx, rx) = oneshot::channel();
        {
            let mut pending = self.pending.lock().await;
            pending.insert(correlation_id, tx);
        }

        {
            let mut write_half = self.write_half.lock().await;
            let len = i32::try_from(frame.len())
                .map_err(|e| ConnectionError::Framing(e.to_string()))?;
            write_half.write_all(&len.to_be_bytes()).await?;
            write_half.write_all(&frame).await?;
            write_half.flush().await?;
        }

        rx.await.map_err(|_| ConnectionError::Closed)
    }

    async fn raw_exchange(&self, bytes: &[u8]) -> Result<Vec<u8>, ConnectionError> {
        if self.is_closed() {
            return Err(ConnectionError::Closed);
        }

        let (tx, rx) = oneshot::channel();
        {
            let mut raw_pending = self.raw_pending.lock().await;
            *raw_pending = Some(tx);
        }

        {
            let mut write_half = self.write_half.lock().await;
            let len = i32::try_from(bytes.len()).map_err(|e| ConnectionError::Framing(e.to_string()))?;
            write_half.write_all(&len.to_be_bytes()).await?;
            write_half.write_all(bytes).await?;
            write_half.flush().await?;
        }

        rx.await.map_err(|_| ConnectionError::Closed)
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
