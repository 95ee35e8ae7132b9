//! Ferrous TXT Domain Layer
pub mod config;
pub mod dns_protocol;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use config::{ConfigError, LoggingConfig, QueryConfig};
pub use dns_protocol::{DnsProtocol, NameserverTarget, DEFAULT_DNS_PORT};
pub use dns_query::{fully_qualified, QueryRequest};
pub use dns_record::RecordType;
pub use errors::DomainError;
