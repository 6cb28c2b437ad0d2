//! # salp-core
//!
//! Domain types shared by every salp crate:
//! - Closed vocabularies for the six categorical input fields
//! - The nine-field [`InputRecord`] and its numeric validation
//! - The static field catalog used to render and parse form input
//! - [`PredictionResult`] and the two-valued [`SalaryCategory`]
//! - JSON Schemas of the request and response bodies
//! - Cross-cutting error types

pub mod descriptor;
pub mod errors;
pub mod prediction;
pub mod record;
pub mod schema;
pub mod vocab;

pub use descriptor::{FieldDescriptor, FieldId, FieldKind, catalog};
pub use errors::CoreError;
pub use prediction::{PredictionResult, SalaryCategory};
pub use record::{FieldValue, InputRecord};
