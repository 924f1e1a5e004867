//! Plaintext vs. TLS socket wrapping.

use super::ConnectionError;

/// Which transport a [`super::TcpConnection`] should establish.
#[derive(Debug, Clone, Default)]
pub enum Transport {
    #[default]
    Plain,
    #[cfg(feature = "transport-tls")]
    Tls(std::sync::Arc<rustls::ClientConfig>),
}

impl Transport {
    pub(super) async fn wrap(
        &self,
        stream: tokio::net::TcpStream,
        host: &str,
    ) -> Result<
        (
            Box<dyn tokio::io::AsyncRead + Send + Unpin>,
            Box<dyn tokio::io::AsyncWrite + Send + Unpin>,
        ),
        ConnectionError,
    > {
        match self {
            Transport::Plain => {
                let (read_half, write_half) = tokio::io::split(stream);
                Ok((Box::new(read_half), Box::new(write_half)))
            }
            #[cfg(feature = "transport-tls")]
            Transport::Tls(config) => {
                let connector = tokio_rustls::TlsConnector::from(config.clone());
                let server_name = rustls::pki_types::ServerName::try_from(host.to_string())
                    .map_err(|e| ConnectionError::Framing(format!("invalid TLS server name: {e}")))?;
                let tls_stream = connector
                    .connect(server_name, stream)
                    .await
                    .map_err(ConnectionError::Connect)?;
                let (read_half, write_half) = tokio::io::split(tls_stream);
                Ok((Box::new(read_half), Box::new(write_half)))
            }
        }
    }
}
