//! Blocking HTTP server for the development backend.
//!
//! `tiny_http::Server::recv` blocks, so requests are served on a dedicated
//! thread. Dropping the [`StubServer`] unblocks that thread and joins it.

use std::fmt;
use std::io::Read;
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;

use serde_json::{Value, json};
use tiny_http::{Header, Method, Request, Response};

use crate::error::StubError;
use crate::request::parse_request;
use crate::scoring::score;

/// Status line and JSON body for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn detail(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "detail": detail.into() }),
        }
    }
}

/// Route one request to its reply. The query string is ignored.
#[must_use]
pub fn route(method: &Method, url: &str, body: &str) -> Reply {
    let path = url.split('?').next().unwrap_or_default();
    match (path, method) {
        ("/", Method::Get) => Reply::ok(json!({ "message": "Salary Predictor API is running" })),
        ("/predict", Method::Post) => match parse_request(body) {
            Ok(record) => match serde_json::to_value(score(&record)) {
                Ok(value) => Reply::ok(value),
                Err(error) => Reply::detail(500, format!("Prediction error: {error}")),
            },
            Err(reason) => Reply::detail(422, reason),
        },
        ("/" | "/predict", _) => Reply::detail(405, "Method Not Allowed"),
        _ => Reply::detail(404, "Not Found"),
    }
}

/// Development backend running on a background thread.
pub struct StubServer {
    server: Arc<tiny_http::Server>,
    addr: SocketAddr,
    worker: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Bind to `addr` (use port `0` for an ephemeral port) and start serving.
    ///
    /// # Errors
    ///
    /// Returns [`StubError`] if the address cannot be bound or the serving
    /// thread cannot be spawned.
    pub fn bind(addr: &str) -> Result<Self, StubError> {
        let server = tiny_http::Server::http(addr).map_err(|e| StubError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        let bound = server.server_addr().to_ip().ok_or(StubError::NotIp)?;
        let server = Arc::new(server);

        let worker = std::thread::Builder::new()
            .name("salp-stub".into())
            .spawn({
                let server = Arc::clone(&server);
                move || serve(&server)
            })?;

        tracing::info!(addr = %bound, "development backend listening");
        Ok(Self {
            server,
            addr: bound,
            worker: Some(worker),
        })
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Full URL of the prediction endpoint.
    #[must_use]
    pub fn predict_url(&self) -> String {
        format!("http://{}/predict", self.addr)
    }
}

impl fmt::Debug for StubServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubServer")
            .field("addr", &self.addr)
            .finish_non_exhaustive()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        tracing::debug!(addr = %self.addr, "development backend stopped");
    }
}

fn serve(server: &tiny_http::Server) {
    for request in server.incoming_requests() {
        handle(request);
    }
}

fn handle(mut request: Request) {
    let mut body = String::new();
    let reply = match request.as_reader().read_to_string(&mut body) {
        Ok(_) => route(request.method(), request.url(), &body),
        Err(error) => Reply::detail(422, format!("Unreadable request body: {error}")),
    };

    if reply.status >= 400 {
        tracing::warn!(
            method = %request.method(),
            url = request.url(),
            status = reply.status,
            detail = %reply.body["detail"],
            "rejected request"
        );
    } else {
        tracing::debug!(method = %request.method(), url = request.url(), "served request");
    }

    let mut response =
        Response::from_string(reply.body.to_string()).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response.add_header(header);
    }
    if let Err(error) = request.respond(response) {
        tracing::debug!(%error, "client went away before the reply was sent");
    }
}
