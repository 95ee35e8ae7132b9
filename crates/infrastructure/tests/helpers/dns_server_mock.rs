use super::responses::reply_to;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy)]
pub enum UdpBehavior {
    Answer,
    Truncate,
    Silent,
}

#[derive(Debug, Clone, Copy)]
pub enum TcpBehavior {
    Answer,
    /// No listener: connections are refused
    Closed,
}

/// Loopback DNS server listening on the same port for UDP and TCP.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<(&'static str, Vec<u8>)>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(
        udp: UdpBehavior,
        tcp: TcpBehavior,
        texts: &[&'static str],
    ) -> Result<Self, std::io::Error> {
        let (socket, listener) = Self::bind_pair(tcp).await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let texts: Arc<Vec<&'static str>> = Arc::new(texts.to_vec());

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let udp_received = Arc::clone(&received);
        let udp_texts = Arc::clone(&texts);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let query = buf[..len].to_vec();
                        udp_received.lock().unwrap().push(("UDP", query.clone()));

                        let response = match udp {
                            UdpBehavior::Answer => reply_to(&query, &udp_texts, false, true),
                            UdpBehavior::Truncate => reply_to(&query, &[], true, true),
                            UdpBehavior::Silent => continue,
                        };
                        let _ = socket.send_to(&response, peer).await;
                    }
                }
            }
        });

        if let Some(listener) = listener {
            let tcp_received = Arc::clone(&received);
            let tcp_texts = Arc::clone(&texts);
            tokio::spawn(async move {
                while let Ok((mut stream, _)) = listener.accept().await {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        continue;
                    }
                    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut query).await.is_err() {
                        continue;
                    }
                    tcp_received.lock().unwrap().push(("TCP", query.clone()));

                    let response = reply_to(&query, &tcp_texts, false, true);
                    let _ = stream
                        .write_all(&(response.len() as u16).to_be_bytes())
                        .await;
                    let _ = stream.write_all(&response).await;
                }
            });
        }

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Binds UDP on an ephemeral port, then TCP on the same port when asked to.
    async fn bind_pair(
        tcp: TcpBehavior,
    ) -> Result<(UdpSocket, Option<TcpListener>), std::io::Error> {
        let mut last_err = None;

        for _ in 0..20 {
            let socket = UdpSocket::bind("127.0.0.1:0").await?;
            let addr = socket.local_addr()?;

            match tcp {
                TcpBehavior::Closed => return Ok((socket, None)),
                TcpBehavior::Answer => match TcpListener::bind(addr).await {
                    Ok(listener) => return Ok((socket, Some(listener))),
                    Err(e) => last_err = Some(e),
                },
            }
        }

        Err(last_err.unwrap_or_else(|| std::io::Error::other("could not bind mock server")))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Transport name and raw bytes of every query received, in arrival order.
    pub fn received(&self) -> Vec<(&'static str, Vec<u8>)> {
        self.received.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
