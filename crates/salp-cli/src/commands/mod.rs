pub mod dispatch;
pub mod fields;
pub mod form;
pub mod predict;
pub mod schema;
pub mod serve;
