pub mod resolver;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use ferrous_txt_domain::{DnsProtocol, DomainError};
use std::io::ErrorKind;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

#[async_trait]
impl DnsTransport for Transport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => t.send(message_bytes, timeout).await,
            Self::Tcp(t) => t.send(message_bytes, timeout).await,
        }
    }

    fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(t) => t.protocol_name(),
            Self::Tcp(t) => t.protocol_name(),
        }
    }
}

pub fn create_transport(protocol: &DnsProtocol) -> Transport {
    match protocol {
        DnsProtocol::Udp { addr } => Transport::Udp(udp::UdpTransport::new(*addr)),
        DnsProtocol::Tcp { addr } => Transport::Tcp(tcp::TcpTransport::new(*addr)),
    }
}

/// Hands out a transport for each attempt.
pub trait TransportConnector: Send + Sync {
    type Transport: DnsTransport;

    fn connect(&self, protocol: &DnsProtocol) -> Self::Transport;
}

/// Real sockets, one fresh transport per attempt (enum dispatch, no heap alloc).
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectConnector;

impl TransportConnector for DirectConnector {
    type Transport = Transport;

    fn connect(&self, protocol: &DnsProtocol) -> Transport {
        create_transport(protocol)
    }
}

/// Maps socket errors onto the transport variants of `DomainError`.
pub(crate) fn map_io_error(server: SocketAddr, action: &str, e: std::io::Error) -> DomainError {
    let server = server.to_string();
    match e.kind() {
        ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
        ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted => {
            DomainError::TransportConnectionReset { server }
        }
        ErrorKind::TimedOut | ErrorKind::WouldBlock => DomainError::TransportTimeout { server },
        _ => DomainError::IoError(format!("Failed to {} {}: {}", action, server, e)),
    }
}
