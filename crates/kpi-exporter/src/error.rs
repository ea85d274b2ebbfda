//! Error types for kpi-exporter crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("Metrics output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Topic '{topic}' is mapped to unknown schema '{schema}'")]
    UnknownSchema { topic: String, schema: String },

    #[error("Topic '{0}' is subscribed more than once")]
    DuplicateTopic(String),

    #[error("No topics configured")]
    NoTopics,
}

pub type Result<T> = std::result::Result<T, Error>;
