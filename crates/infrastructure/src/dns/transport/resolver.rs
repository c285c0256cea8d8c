use ferrous_resolver_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Resolves a hostname to all its IP addresses (IPv4 + IPv6).
pub async fn resolve_all(
    hostname: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    let target = format!("{}:{}", hostname, port);

    let addrs_iter = tokio::time::timeout(timeout, tokio::net::lookup_host(&target))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: target.clone(),
        })?
        .map_err(|e| DomainError::TransportFailure {
            server: target.clone(),
            reason: format!("host lookup failed: {}", e),
        })?;

    let addrs: Vec<SocketAddr> = addrs_iter.collect();

    if addrs.is_empty() {
        return Err(DomainError::TransportFailure {
            server: target,
            reason: "host has no addresses".to_string(),
        });
    }

    Ok(addrs)
}

/// Turns a configured server entry into socket addresses.
///
/// Accepts `ip:port`, a bare IP (port 53), `host:port` or a bare host name.
pub async fn resolve_server(
    server: &str,
    timeout: Duration,
) -> Result<Vec<SocketAddr>, DomainError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(vec![addr]);
    }
    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(vec![SocketAddr::new(ip, 53)]);
    }

    match server.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|_| DomainError::TransportFailure {
                server: server.to_string(),
                reason: format!("invalid port '{}'", port),
            })?;
            resolve_all(host, port, timeout).await
        }
        None => resolve_all(server, 53, timeout).await,
    }
}
