//! Error types for kpi-types crate.

use crate::record::SchemaKind;
use thiserror::Error;

/// Errors that can occur while decoding a KPI payload.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed {schema} payload: {source}")]
    Json {
        schema: SchemaKind,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Schema the payload was decoded against.
    pub fn schema(&self) -> SchemaKind {
        match self {
            DecodeError::Json { schema, .. } => *schema,
        }
    }
}

/// Error returned when a schema identifier does not name a known schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown KPI schema: {0}")]
pub struct ParseSchemaError(pub String);

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
