//! # salp-stub
//!
//! Rule-based development backend speaking the prediction wire protocol.
//!
//! - `GET /` reports that the API is running
//! - `POST /predict` validates the body and answers with a deterministic,
//!   rule-based [`PredictionResult`](salp_core::PredictionResult)
//!
//! Useful for trying `salp` without a trained model and as an end-to-end
//! fixture in tests.

mod error;
mod request;
pub mod scoring;
mod server;

pub use error::StubError;
pub use request::parse_request;
pub use scoring::score;
pub use server::{Reply, StubServer, route};
