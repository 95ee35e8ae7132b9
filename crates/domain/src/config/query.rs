use super::errors::ConfigError;
use crate::dns_protocol::{NameserverTarget, DEFAULT_DNS_PORT};
use std::time::Duration;

pub const DEFAULT_SERVER: &str = "ns1.namesystem.se";
pub const DEFAULT_EDNS_PAYLOAD_SIZE: u16 = 1232;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for one invocation. Built once from the command line, read-only afterwards.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Tried in order until one returns a non-empty answer
    pub nameservers: Vec<NameserverTarget>,

    /// Request recursion (RD flag) on the first attempt against each server
    pub recursive: bool,

    /// EDNS0 UDP payload size, 0 disables EDNS0
    pub edns_payload_size: u16,

    /// Per transport attempt
    pub timeout: Duration,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            nameservers: vec![NameserverTarget::new(DEFAULT_SERVER, DEFAULT_DNS_PORT)],
            recursive: true,
            edns_payload_size: DEFAULT_EDNS_PAYLOAD_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl QueryConfig {
    /// Parses `host[:port]` strings into nameserver targets, keeping their order.
    pub fn parse_nameservers<I, S>(servers: I) -> Result<Vec<NameserverTarget>, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        servers
            .into_iter()
            .map(|server| server.as_ref().parse::<NameserverTarget>())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "No nameservers configured".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}
