//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use circuit_guard::config::GuardConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start a programmable backend on an ephemeral port and return its address.
///
/// `f` decides the status code and body for every request.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            204 => "204 No Content",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// A backend that can be switched between 200 and 503, counting hits.
#[derive(Clone)]
pub struct SwitchableBackend {
    pub addr: SocketAddr,
    pub up: Arc<AtomicBool>,
    pub hits: Arc<AtomicU32>,
}

#[allow(dead_code)]
impl SwitchableBackend {
    pub async fn start(up: bool) -> Self {
        let up = Arc::new(AtomicBool::new(up));
        let hits = Arc::new(AtomicU32::new(0));

        let (u, h) = (up.clone(), hits.clone());
        let addr = start_programmable_backend(move || {
            let (u, h) = (u.clone(), h.clone());
            async move {
                h.fetch_add(1, Ordering::SeqCst);
                if u.load(Ordering::SeqCst) {
                    (200, "{\"swagger\":\"2.0\"}".into())
                } else {
                    (503, "Service Unavailable".into())
                }
            }
        })
        .await;

        Self { addr, up, hits }
    }

    pub fn set_up(&self, up: bool) {
        self.up.store(up, Ordering::SeqCst);
    }

    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn url(&self) -> String {
        format!("http://{}/swagger/doc.json", self.addr)
    }
}

/// Config pointing at `url` with short timings for tests.
#[allow(dead_code)]
pub fn test_config(url: String) -> GuardConfig {
    let mut config = GuardConfig::default();
    config.target.url = url;
    config.target.request_timeout_ms = 1_000;
    config.breaker.failure_threshold = 3;
    config.breaker.success_threshold = 2;
    config.breaker.open_timeout_ms = 200;
    config.supervisor.interval_ms = 20;
    config
}
