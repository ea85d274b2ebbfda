use thiserror::Error;

/// Error produced by a [`crate::MessageHandler`].
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    #[error("Consumer error: {0}")]
    Consumer(String),

    #[error("Message {topic}[{partition}]@{offset} has no payload")]
    EmptyPayload {
        topic: String,
        partition: i32,
        offset: i64,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to handle message from topic '{topic}': {source}")]
    Handler {
        topic: String,
        #[source]
        source: HandlerError,
    },

    #[error("Listener task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, Error>;
