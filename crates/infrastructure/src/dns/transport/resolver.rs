use ferrous_txt_domain::{DomainError, NameserverTarget};
use std::net::SocketAddr;
use std::time::Duration;

/// Addresses to try for a nameserver, in the order the system resolver returned them.
///
/// IP literals are returned as-is without a lookup. Duplicates are dropped.
pub async fn nameserver_addrs(
    target: &NameserverTarget,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    if let Some(addr) = target.socket_addr() {
        return Ok(vec![addr]);
    }

    let lookup = tokio::net::lookup_host((target.host(), target.port()));
    let found = tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.to_string(),
        })?
        .map_err(|e| DomainError::NameserverLookup {
            server: target.to_string(),
            reason: e.to_string(),
        })?;

    let mut addrs: Vec<SocketAddr> = Vec::new();
    for addr in found {
        if !addrs.contains(&addr) {
            addrs.push(addr);
        }
    }

    if addrs.is_empty() {
        return Err(DomainError::NameserverLookup {
            server: target.to_string(),
            reason: "no addresses found".to_string(),
        });
    }

    Ok(addrs)
}
