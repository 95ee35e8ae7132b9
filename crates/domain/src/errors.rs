use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Failed to resolve nameserver {server}: {reason}")]
    NameserverLookup { server: String, reason: String },

    #[error("No nameservers to query")]
    NoNameservers,
}

impl DomainError {
    /// True when the error reports an expired deadline, whatever layer raised it.
    pub fn is_timeout(&self) -> bool {
        if matches!(self, DomainError::TransportTimeout { .. }) {
            return true;
        }
        let message = self.to_string().to_lowercase();
        message.contains("timeout") || message.contains("timed out")
    }
}
