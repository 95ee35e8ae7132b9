use async_trait::async_trait;
use ferrous_txt_domain::{DomainError, NameserverTarget, QueryRequest};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::Record;

/// A parsed reply from one nameserver, passed through untouched to the caller.
#[derive(Debug, Clone)]
pub struct QueryResponse {
    pub message: Message,
    pub server: NameserverTarget,
    pub protocol_used: &'static str,
}

impl QueryResponse {
    pub fn new(message: Message, server: NameserverTarget, protocol_used: &'static str) -> Self {
        Self {
            message,
            server,
            protocol_used,
        }
    }

    pub fn answers(&self) -> &[Record] {
        self.message.answers()
    }

    pub fn has_answers(&self) -> bool {
        !self.message.answers().is_empty()
    }

    pub fn recursion_available(&self) -> bool {
        self.message.recursion_available()
    }

    pub fn truncated(&self) -> bool {
        self.message.truncated()
    }

    pub fn response_code(&self) -> ResponseCode {
        self.message.response_code()
    }
}

/// Sends one request to one nameserver, handling transport selection internally.
#[async_trait]
pub trait QueryExchange: Send + Sync {
    async fn exchange(
        &self,
        request: &QueryRequest,
        server: &NameserverTarget,
    ) -> Result<QueryResponse, DomainError>;
}
