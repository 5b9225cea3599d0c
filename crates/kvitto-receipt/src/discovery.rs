// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// LAN printer discovery and raw job delivery.
//
// Network receipt printers universally accept raw jobs on TCP port 9100, so
// discovery is a connect probe across the local /24.  Common printer
// addresses are probed first so a typical setup answers within one timeout.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use kvitto_core::error::{KvittoError, Result};

/// Raw-job port spoken by essentially every network receipt printer.
pub const RAW_PRINT_PORT: u16 = 9100;

/// Host octets that printers are most often parked on, probed first.
const COMMON_HOSTS: [u8; 10] = [1, 10, 20, 50, 100, 101, 102, 150, 200, 254];

/// Cap on simultaneous connect probes.
const MAX_CONCURRENT_PROBES: usize = 50;

/// Detect the local /24 prefix, e.g. `"192.168.1."`.
///
/// Uses the UDP-connect trick: no packet is sent, the OS just picks the
/// outbound interface.  Falls back to the home-router default when the
/// machine has no route at all.
pub fn local_subnet() -> String {
    fn detect() -> std::io::Result<String> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect("10.254.254.254:1")?;
        let local = socket.local_addr()?;
        let IpAddr::V4(ip) = local.ip() else {
            return Err(std::io::Error::other("not an IPv4 interface"));
        };
        let [a, b, c, _] = ip.octets();
        Ok(format!("{a}.{b}.{c}."))
    }

    detect().unwrap_or_else(|e| {
        warn!(error = %e, "local subnet detection failed, assuming 192.168.1.");
        "192.168.1.".to_string()
    })
}

/// Scan a /24 for hosts accepting connections on `port`.
///
/// `subnet` is the dotted prefix from [`local_subnet`].  Returns every
/// responding address, sorted.
pub async fn discover_lan_printers(
    subnet: &str,
    port: u16,
    timeout: Duration,
) -> Result<Vec<IpAddr>> {
    info!(subnet, port, "scanning LAN for printers");

    // Common printer addresses first, then the rest of the /24.
    let hosts = COMMON_HOSTS
        .into_iter()
        .chain((1..255).filter(|h| !COMMON_HOSTS.contains(h)));

    let limit = Arc::new(Semaphore::new(MAX_CONCURRENT_PROBES));
    let mut probes = JoinSet::new();

    for host in hosts {
        let ip: Ipv4Addr = format!("{subnet}{host}")
            .parse()
            .map_err(|e| KvittoError::Discovery(format!("bad subnet prefix {subnet:?}: {e}")))?;
        let addr = SocketAddr::new(IpAddr::V4(ip), port);
        let limit = Arc::clone(&limit);
        probes.spawn(async move {
            // The semaphore is never closed; a closed permit just skips the host.
            let Ok(_permit) = limit.acquire_owned().await else {
                return None;
            };
            probe(addr, timeout).await.then_some(addr.ip())
        });
    }

    let mut found = Vec::new();
    while let Some(joined) = probes.join_next().await {
        let outcome = joined.map_err(|e| KvittoError::Discovery(format!("probe task: {e}")))?;
        if let Some(ip) = outcome {
            info!(%ip, "printer found");
            found.push(ip);
        }
    }

    found.sort();
    info!(count = found.len(), "LAN scan finished");
    Ok(found)
}

/// Whether `addr` accepts a TCP connection within `timeout`.
async fn probe(addr: SocketAddr, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(e)) => {
            debug!(%addr, error = %e, "probe refused");
            false
        }
        Err(_) => false, // timeout — host silent
    }
}

/// Deliver a rendered ESC/POS job to a printer's raw port.
pub async fn send_raw_job(addr: SocketAddr, job: &[u8], timeout: Duration) -> Result<()> {
    info!(%addr, bytes = job.len(), "sending raw print job");

    let mut stream = tokio::time::timeout(timeout, TcpStream::connect(addr))
        .await
        .map_err(|_| KvittoError::RawJob(format!("connect to {addr} timed out")))?
        .map_err(|e| KvittoError::RawJob(format!("connect to {addr}: {e}")))?;

    stream
        .write_all(job)
        .await
        .map_err(|e| KvittoError::RawJob(format!("write to {addr}: {e}")))?;
    stream
        .shutdown()
        .await
        .map_err(|e| KvittoError::RawJob(format!("shutdown {addr}: {e}")))?;

    info!(%addr, "raw job sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[test]
    fn local_subnet_is_a_dotted_prefix() {
        let subnet = local_subnet();
        assert!(subnet.ends_with('.'));
        assert_eq!(subnet.matches('.').count(), 3);
    }

    #[tokio::test]
    async fn probe_finds_open_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(probe(addr, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn probe_rejects_closed_port() {
        // Bind-then-drop guarantees the port is closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        assert!(!probe(addr, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn raw_job_arrives_intact() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).await.unwrap();
            received
        });

        let job = b"\x1b@receipt bytes\x1dV\x00";
        send_raw_job(addr, job, Duration::from_secs(1)).await.unwrap();
        assert_eq!(server.await.unwrap(), job);
    }

    #[tokio::test]
    async fn bad_subnet_prefix_is_a_discovery_error() {
        let err = discover_lan_printers("not-a-subnet-", 9100, Duration::from_millis(10)).await;
        assert!(matches!(err, Err(KvittoError::Discovery(_))));
    }
}
