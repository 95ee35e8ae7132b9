use crate::config::ConfigError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// A nameserver as given on the command line: an IP literal or a hostname, plus a port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameserverTarget {
    host: Arc<str>,
    port: u16,
}

impl NameserverTarget {
    pub fn new(host: impl Into<Arc<str>>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the socket address when the host is an IP literal.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.host
            .parse::<IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, self.port))
    }
}

impl From<SocketAddr> for NameserverTarget {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}

impl fmt::Display for NameserverTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.host.parse::<IpAddr>() {
            Ok(IpAddr::V6(ip)) => write!(f, "[{}]:{}", ip, self.port),
            _ => write!(f, "{}:{}", self.host, self.port),
        }
    }
}

fn parse_port(s: &str, port_str: &str) -> Result<u16, ConfigError> {
    port_str
        .parse::<u16>()
        .map_err(|e| ConfigError::Validation(format!("Invalid port in '{}': {}", s, e)))
}

impl FromStr for NameserverTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ConfigError::Validation(
                "Nameserver address cannot be empty".to_string(),
            ));
        }

        if let Ok(addr) = s.parse::<SocketAddr>() {
            return Ok(addr.into());
        }

        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self::new(ip.to_string(), DEFAULT_DNS_PORT));
        }

        if let Some(rest) = s.strip_prefix('[') {
            let end = rest.find(']').ok_or_else(|| {
                ConfigError::Validation(format!("Unterminated '[' in nameserver '{}'", s))
            })?;
            let host = &rest[..end];
            let port = match rest[end + 1..].strip_prefix(':') {
                Some(port_str) => parse_port(s, port_str)?,
                None if rest[end + 1..].is_empty() => DEFAULT_DNS_PORT,
                None => {
                    return Err(ConfigError::Validation(format!(
                        "Unexpected characters after ']' in nameserver '{}'",
                        s
                    )))
                }
            };
            return Ok(Self::new(host, port));
        }

        match s.rsplit_once(':') {
            Some((host, port_str)) if !host.is_empty() => {
                Ok(Self::new(host, parse_port(s, port_str)?))
            }
            Some(_) => Err(ConfigError::Validation(format!(
                "Missing host in nameserver '{}'",
                s
            ))),
            None => Ok(Self::new(s, DEFAULT_DNS_PORT)),
        }
    }
}

/// Wire transport used for a single attempt against a resolved nameserver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsProtocol {
    Udp { addr: SocketAddr },
    Tcp { addr: SocketAddr },
}

impl DnsProtocol {
    pub fn socket_addr(&self) -> SocketAddr {
        match self {
            DnsProtocol::Udp { addr } | DnsProtocol::Tcp { addr } => *addr,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            DnsProtocol::Udp { .. } => "UDP",
            DnsProtocol::Tcp { .. } => "TCP",
        }
    }
}

impl fmt::Display for DnsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsProtocol::Udp { addr } => write!(f, "udp://{}", addr),
            DnsProtocol::Tcp { addr } => write!(f, "tcp://{}", addr),
        }
    }
}
