//! Shared utilities for integration tests: a scriptable mock ledger
//! speaking just enough HTTP/1.1 for reqwest.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rsa::RsaPrivateKey;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use antchain_sdk::{ChainClient, ChainConfig, RsaSigner};

/// A request as seen by the mock ledger.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub content_type: Option<String>,
    pub body: Value,
}

type Handler = dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync;

/// Mock ledger bound to an ephemeral local port.
pub struct MockLedger {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockLedger {
    /// Start a ledger answering with `handler`.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
    {
        Self::start_with_delay(Duration::ZERO, handler).await
    }

    /// Start a ledger that waits `delay` before every reply.
    pub async fn start_with_delay<F>(delay: Duration, handler: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Arc<Handler> = Arc::new(handler);

        let recorded = requests.clone();
        tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((socket, _)) => {
                        let recorded = recorded.clone();
                        let handler = handler.clone();
                        tokio::spawn(async move {
                            serve(socket, recorded, handler, delay).await;
                        });
                    }
                    Err(_) => break,
                }
            }
        });

        Self { addr, requests }
    }

    /// Ledger that issues `tok-N` tokens and answers every call with `payload`.
    pub async fn succeeding(payload: &'static str) -> Self {
        let issued = AtomicU32::new(0);
        Self::start(move |req| {
            if req.path.ends_with("/shakeHand") {
                let n = issued.fetch_add(1, Ordering::SeqCst) + 1;
                envelope(true, "", &format!("tok-{}", n))
            } else {
                envelope(true, "", payload)
            }
        })
        .await
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

/// A `200` reply carrying a ledger envelope.
pub fn envelope(success: bool, code: &str, data: &str) -> (u16, String) {
    (200, json!({"success": success, "code": code, "data": data}).to_string())
}

async fn serve(
    mut socket: TcpStream,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    handler: Arc<Handler>,
    delay: Duration,
) {
    let Some(request) = read_request(&mut socket).await else {
        return;
    };
    recorded.lock().unwrap().push(request.clone());

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let (status, body) = handler(&request);
    let status_text = match status {
        200 => "200 OK",
        400 => "400 Bad Request",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        _ => "200 OK",
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let path = lines.next()?.split_whitespace().nth(1)?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().ok()?;
            } else if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }
    }

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let raw = &buf[header_end..header_end + content_length];
    let body: Value = serde_json::from_slice(raw).unwrap_or_else(|e| {
        panic!(
            "request body to {} is not JSON ({}): {}",
            path,
            e,
            String::from_utf8_lossy(raw)
        )
    });
    Some(RecordedRequest {
        path,
        content_type,
        body,
    })
}

/// Deterministic 1024-bit test key, generated once per test binary.
pub fn test_key() -> RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        RsaPrivateKey::new(&mut rng, 1024).unwrap()
    })
    .clone()
}

pub fn chain_config(endpoint: &str) -> ChainConfig {
    ChainConfig {
        biz_id: "biz-1".into(),
        endpoint: endpoint.into(),
        tenant_id: "tenant-1".into(),
        access_id: "access-1".into(),
        access_key: String::new(),
        account: "alice".into(),
        my_kms_key_id: "kms-1".into(),
    }
}

/// Client using the real reqwest executor against `ledger`.
pub fn client_for(ledger: &MockLedger) -> ChainClient {
    ChainClient::builder(chain_config(&ledger.endpoint()))
        .signer(Arc::new(RsaSigner::new(test_key())))
        .metrics(false)
        .build()
        .unwrap()
}
