//! Development backend error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StubError {
    #[error("failed to bind development backend to {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("development backend is not listening on an IP address")]
    NotIp,

    #[error("failed to start development backend thread: {0}")]
    Spawn(#[from] std::io::Error),
}
