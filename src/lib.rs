//! A client speaking the Kafka broker wire protocol to a single broker.
//!
//! This crate owns the connection lifecycle for one broker: establishing
//! the socket, negotiating API versions, authenticating over SASL when
//! configured (and reauthenticating before the session expires), and
//! exposing a typed method per RPC. It does not do cluster discovery,
//! partition assignment, or any higher-level consumer/producer semantics --
//! those belong one layer up, built on top of [`Broker`].
//!
//! ```no_run
//! use kafka_broker_client::{Broker, BrokerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let broker = Broker::new(BrokerConfig {
//!     host: "localhost".to_string(),
//!     port: 9092,
//!     ..Default::default()
//! });
//! broker.connect().await?;
//! # Ok(())
//! # }
//! ```

pub mod broker;
pub mod connection;
pub mod protocol;

pub use broker::{Broker, BrokerConfig, Error as BrokerError};
pub use connection::sasl::{Credentials, Mechanism, SaslConfig};
pub use connection::transport::Transport;
pub use connection::{Connection, ConnectionError, TcpConnection};
