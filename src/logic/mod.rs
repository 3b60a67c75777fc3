//! Logic Module - Prediction Pipeline
//!
//! load artifacts -> encode submission -> align to schema -> predict.

pub mod artifacts;
pub mod encode;
pub mod form;
pub mod predict;
pub mod schema;

// Re-export common types
pub use artifacts::{ArtifactStatus, ArtifactStore};
pub use form::{FormOptions, InputRecord};
pub use schema::FeatureSchema;
