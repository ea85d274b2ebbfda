use crate::error::{Error, Result};
use rdkafka::message::Message as RdkafkaMessage;

/// A message as received from Kafka, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
    pub payload: Vec<u8>,
}

impl RawMessage {
    pub fn new(topic: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            partition: 0,
            offset: 0,
            payload: payload.into(),
        }
    }

    /// Copy a librdkafka message out of the consumer's buffers.
    pub(crate) fn from_kafka<M: RdkafkaMessage>(message: &M) -> Result<Self> {
        let payload = message.payload().ok_or_else(|| Error::EmptyPayload {
            topic: message.topic().to_string(),
            partition: message.partition(),
            offset: message.offset(),
        })?;

        Ok(Self {
            topic: message.topic().to_string(),
            partition: message.partition(),
            offset: message.offset(),
            payload: payload.to_vec(),
        })
    }
}
