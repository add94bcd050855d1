#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::api::{ExpenditureSource, ForecastPayload, LoadError};
use crate::models::ExpenditureRecord;

/// In-memory source. Failures are given as an HTTP status code.
pub(crate) struct FakeSource {
    pub(crate) actuals: Result<Vec<ExpenditureRecord>, u16>,
    pub(crate) forecast: Result<ForecastPayload, u16>,
    pub(crate) delay: Option<Duration>,
    pub(crate) finished: AtomicUsize,
}

impl FakeSource {
    pub(crate) fn new(
        actuals: Result<Vec<ExpenditureRecord>, u16>,
        forecast: Result<ForecastPayload, u16>,
    ) -> Self {
        Self {
            actuals,
            forecast,
            delay: None,
            finished: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    async fn settle<T: Clone>(&self, path: &str, result: &Result<T, u16>) -> Result<T, LoadError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.finished.fetch_add(1, Ordering::SeqCst);
        result.clone().map_err(|code| LoadError::Status {
            endpoint: path.to_string(),
            status: reqwest::StatusCode::from_u16(code).unwrap(),
        })
    }
}

impl ExpenditureSource for FakeSource {
    async fn fetch_monthly_expenditures(&self) -> Result<Vec<ExpenditureRecord>, LoadError> {
        self.settle("monthly", &self.actuals).await
    }

    async fn fetch_expenditure_forecast(&self) -> Result<ForecastPayload, LoadError> {
        self.settle("forecast", &self.forecast).await
    }
}

/// A canned response for requests whose path starts with `path`.
pub(crate) struct Route {
    pub(crate) path: &'static str,
    pub(crate) status: &'static str,
    pub(crate) body: &'static str,
}

/// Minimal HTTP/1.1 responder on an ephemeral port. Returns its base URL.
/// Unrouted paths get a 404.
pub(crate) async fn serve(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut sock, _)) = listener.accept().await {
            let mut buf = vec![0u8; 8192];
            let n = sock.read(&mut buf).await.unwrap_or(0);
            let request = String::from_utf8_lossy(&buf[..n]);
            let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

            let (status, body) = routes
                .iter()
                .find(|r| path.starts_with(r.path))
                .map_or(("404 Not Found", ""), |r| (r.status, r.body));

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = sock.write_all(response.as_bytes()).await;
            let _ = sock.shutdown().await;
        }
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub(crate) async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
