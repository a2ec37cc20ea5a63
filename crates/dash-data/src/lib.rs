//! Data handling for the dashboard builder
//!
//! Every chart reads from the same fixed sample table. The table is held as an
//! Arrow record batch so views look columns up by name the same way they would
//! against a real source.

pub mod dataset;
pub mod schema;

use arrow::error::ArrowError;
use thiserror::Error;

// Re-exports
pub use dataset::{Dataset, Record, sample_records};
pub use schema::{FieldCatalog, FieldType, display_label};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("Unsupported column type: {0}")]
    UnsupportedType(String),
}
