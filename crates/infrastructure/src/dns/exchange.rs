//! Single-server exchange with UDP → TCP fallback
//!
//! The query goes out over UDP first. Two outcomes trigger exactly one retry
//! over TCP against the same address with the same bytes: a response with the
//! TC bit set, or an error that reports a timeout. Whatever TCP returns is final.
//!
//! A hostname nameserver may resolve to several addresses. They are tried in
//! order until one of them produces a response.

use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::resolver::nameserver_addrs;
use super::transport::{DirectConnector, DnsTransport, TransportConnector, TransportResponse};
use async_trait::async_trait;
use ferrous_txt_application::ports::{QueryExchange, QueryResponse};
use ferrous_txt_domain::{DnsProtocol, DomainError, NameserverTarget, QueryRequest};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct FallbackExchange<C = DirectConnector> {
    connector: C,
    timeout: Duration,
}

impl FallbackExchange<DirectConnector> {
    pub fn new(timeout: Duration) -> Self {
        Self::with_connector(DirectConnector, timeout)
    }
}

impl<C: TransportConnector> FallbackExchange<C> {
    pub fn with_connector(connector: C, timeout: Duration) -> Self {
        Self { connector, timeout }
    }

    async fn send(
        &self,
        protocol: &DnsProtocol,
        bytes: &[u8],
    ) -> Result<TransportResponse, DomainError> {
        let transport = self.connector.connect(protocol);
        debug!(protocol = %protocol, "Sending query");
        transport.send(bytes, self.timeout).await
    }

    fn finish(
        &self,
        response: TransportResponse,
        query_id: u16,
        target: &NameserverTarget,
    ) -> Result<QueryResponse, DomainError> {
        let message = ResponseParser::parse(&response.bytes)?;

        if message.id() != query_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {} from {}",
                message.id(),
                query_id,
                target
            )));
        }

        Ok(QueryResponse::new(
            message,
            target.clone(),
            response.protocol_used,
        ))
    }

    /// Tries each address in turn, returning the first response or the last error.
    async fn exchange_with(
        &self,
        addrs: &[SocketAddr],
        query_id: u16,
        bytes: &[u8],
        server: &NameserverTarget,
    ) -> Result<QueryResponse, DomainError> {
        let mut outcome = Err(DomainError::NameserverLookup {
            server: server.to_string(),
            reason: "no addresses found".to_string(),
        });

        for &addr in addrs {
            outcome = self.exchange_at(addr, query_id, bytes, server).await;
            match &outcome {
                Ok(_) => return outcome,
                Err(e) if addrs.len() > 1 => {
                    warn!(
                        server = %server,
                        address = %addr,
                        error = %e,
                        "Nameserver address failed"
                    );
                }
                Err(_) => {}
            }
        }

        outcome
    }

    async fn exchange_at(
        &self,
        addr: SocketAddr,
        query_id: u16,
        bytes: &[u8],
        server: &NameserverTarget,
    ) -> Result<QueryResponse, DomainError> {
        let udp_result = self.send(&DnsProtocol::Udp { addr }, bytes).await;

        let retry_reason = match &udp_result {
            Ok(response) if ResponseParser::is_truncated(&response.bytes) => Some("truncated"),
            Err(e) if e.is_timeout() => Some("timeout"),
            _ => None,
        };

        let Some(reason) = retry_reason else {
            return self.finish(udp_result?, query_id, server);
        };

        info!(server = %addr, reason = reason, "Retrying over TCP");

        let tcp_response = self.send(&DnsProtocol::Tcp { addr }, bytes).await?;
        self.finish(tcp_response, query_id, server)
    }
}

#[async_trait]
impl<C> QueryExchange for FallbackExchange<C>
where
    C: TransportConnector + 'static,
{
    async fn exchange(
        &self,
        request: &QueryRequest,
        server: &NameserverTarget,
    ) -> Result<QueryResponse, DomainError> {
        let (query_id, bytes) = MessageBuilder::build_query(request)?;
        let addrs = nameserver_addrs(server, self.timeout).await?;
        debug!(server = %server, resolved = ?addrs, "Nameserver addresses");

        self.exchange_with(&addrs, query_id, &bytes, server).await
    }
}
