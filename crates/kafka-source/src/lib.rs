//! Kafka consumption for `kafka-topic-exporter`.
//!
//! Features:
//!
//! - Shared Consumer: One librdkafka consumer (one broker connection) for every topic
//! - Topic Fan-out: Each topic's partitions are split into their own queues and
//!   consumed by an independent listener task
//! - Structured Shutdown: Listeners run in a group joined by a barrier, and a
//!   fatal error in one listener cancels the others

/// Shared consumer that assigns topics and splits their partition queues
pub mod consumer;
pub mod error;

/// Listener task group with a shutdown barrier
pub mod group;

/// Per-topic consumption loop
pub mod listener;
pub mod message;

pub use consumer::{ConsumerConfig, SharedConsumer, StartOffset, TopicStream};
pub use error::{Error, HandlerError, Result};
pub use group::ListenerGroup;
pub use listener::{run_topic_listener, ListenerStats, MessageHandler};
pub use message::RawMessage;
