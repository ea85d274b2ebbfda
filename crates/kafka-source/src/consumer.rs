use crate::error::{Error, Result};
use crate::message::RawMessage;
use futures::stream::{self, BoxStream, StreamExt};
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{
    Consumer as RdkafkaConsumer, DefaultConsumerContext, StreamConsumer as RdkafkaStreamConsumer,
};
use rdkafka::consumer::stream_consumer::StreamPartitionQueue as RdkafkaPartitionQueue;
use rdkafka::message::Message as RdkafkaMessage;
use rdkafka::{Offset, TopicPartitionList};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Messages of one topic, merged across all of its partitions.
///
/// Ordering is preserved within a partition.
pub type TopicStream = BoxStream<'static, Result<RawMessage>>;

/// Where a listener starts reading when it is assigned a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartOffset {
    /// Only messages produced after startup.
    #[default]
    Latest,
    /// Everything still retained by the broker.
    Earliest,
}

impl StartOffset {
    fn offset(self) -> Offset {
        match self {
            StartOffset::Latest => Offset::End,
            StartOffset::Earliest => Offset::Beginning,
        }
    }
}

/// Configuration for the shared Kafka consumer
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Kafka brokers (comma-separated list)
    pub brokers: String,
    /// Consumer group ID
    ///
    /// Partitions are assigned manually, so the group is only used to
    /// identify the exporter to the brokers.
    pub group_id: String,
    /// Session timeout in milliseconds
    pub session_timeout_ms: String,
    /// How long to wait for broker and topic metadata
    pub metadata_timeout: Duration,
    pub start_offset: StartOffset,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            brokers: "localhost:9092".to_string(),
            group_id: "kafka-topic-exporter".to_string(),
            session_timeout_ms: "6000".to_string(),
            metadata_timeout: Duration::from_secs(10),
            start_offset: StartOffset::Latest,
        }
    }
}

/// One broker connection shared by every topic listener.
///
/// Each assigned partition gets its own queue split off the consumer, so
/// topics are consumed independently while librdkafka keeps a single
/// connection.
pub struct SharedConsumer {
    consumer: Arc<RdkafkaStreamConsumer>,
    config: ConsumerConfig,
}

impl SharedConsumer {
    /// Create the consumer and make sure the brokers answer.
    pub fn connect(config: ConsumerConfig) -> Result<Self> {
        if config.brokers.trim().is_empty() {
            return Err(Error::InvalidConfig("no Kafka brokers configured".to_string()));
        }

        let consumer: RdkafkaStreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("group.id", &config.group_id)
            .set("enable.auto.commit", "false")
            .set("session.timeout.ms", &config.session_timeout_ms)
            .set("enable.partition.eof", "false")
            .create()
            .map_err(|e| Error::Consumer(format!("Failed to create consumer: {e}")))?;

        // librdkafka connects lazily; a metadata request is the first round trip.
        let metadata = consumer
            .fetch_metadata(None, config.metadata_timeout)
            .map_err(|e| {
                Error::Consumer(format!(
                    "Failed to reach Kafka brokers at {}: {e}",
                    config.brokers
                ))
            })?;

        info!(
            brokers = %config.brokers,
            broker_count = metadata.brokers().len(),
            "Connected to Kafka"
        );

        Ok(Self {
            consumer: Arc::new(consumer),
            config,
        })
    }

    /// Partition ids of `topic` as reported by the brokers.
    ///
    /// Falls back to partition 0 when the brokers report none, which is what
    /// a topic that is about to be auto-created looks like.
    pub fn partitions(&self, topic: &str) -> Result<Vec<i32>> {
        let metadata = self
            .consumer
            .fetch_metadata(Some(topic), self.config.metadata_timeout)
            .map_err(|e| Error::Consumer(format!("Failed to fetch metadata for {topic}: {e}")))?;

        let partitions: Vec<i32> = metadata
            .topics()
            .iter()
            .filter(|t| t.name() == topic && t.error().is_none())
            .flat_map(|t| t.partitions().iter().map(|p| p.id()))
            .collect();

        if partitions.is_empty() {
            warn!(topic, "No partitions reported, consuming partition 0");
            return Ok(vec![0]);
        }
        Ok(partitions)
    }

    /// Assign every partition of `topics` and return one stream per topic,
    /// in the same order as `topics`.
    ///
    /// All topics must be assigned in a single call: a later assignment
    /// would replace this one and detach the split queues.
    pub fn split_topics(&self, topics: &[String]) -> Result<Vec<(String, TopicStream)>> {
        let mut layout = Vec::with_capacity(topics.len());
        let mut assignment = TopicPartitionList::new();
        for topic in topics {
            let partitions = self.partitions(topic)?;
            for &partition in &partitions {
                assignment
                    .add_partition_offset(topic, partition, self.config.start_offset.offset())
                    .map_err(|e| {
                        Error::Consumer(format!("Failed to assign {topic}[{partition}]: {e}"))
                    })?;
            }
            layout.push((topic.clone(), partitions));
        }

        self.consumer
            .assign(&assignment)
            .map_err(|e| Error::Consumer(format!("Failed to assign partitions: {e}")))?;

        let mut streams = Vec::with_capacity(layout.len());
        for (topic, partitions) in layout {
            let mut queues = Vec::with_capacity(partitions.len());
            for partition in partitions {
                let queue = self
                    .consumer
                    .split_partition_queue(&topic, partition)
                    .ok_or_else(|| {
                        Error::Consumer(format!("Failed to split queue for {topic}[{partition}]"))
                    })?;
                queues.push(partition_stream(queue));
            }
            debug!(topic = %topic, partitions = queues.len(), "Topic assigned");
            streams.push((topic, stream::select_all(queues).boxed()));
        }

        Ok(streams)
    }

    /// Poll the consumer's main queue until `shutdown` fires.
    ///
    /// Split partition queues only receive messages while the main queue is
    /// being polled. With every partition split off, the main queue carries
    /// only client errors and rebalance events.
    pub fn spawn_driver(&self, shutdown: CancellationToken) -> JoinHandle<()> {
        let consumer = Arc::clone(&self.consumer);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => break,
                    result = consumer.recv() => match result {
                        Ok(message) => warn!(
                            topic = message.topic(),
                            partition = message.partition(),
                            "Message arrived on the main consumer queue, skipping it"
                        ),
                        Err(e) => warn!(error = %e, "Kafka consumer error"),
                    },
                }
            }
            debug!("Consumer driver stopped");
        })
    }

    /// Drop all assignments and release the broker connection.
    pub fn close(self) {
        if let Err(e) = self.consumer.assign(&TopicPartitionList::new()) {
            warn!(error = %e, "Failed to clear partition assignment");
        }
        info!(brokers = %self.config.brokers, "Kafka consumer closed");
    }
}

fn partition_stream(
    queue: RdkafkaPartitionQueue<DefaultConsumerContext>,
) -> BoxStream<'static, Result<RawMessage>> {
    stream::unfold(queue, |queue| async move {
        let item = match queue.recv().await {
            Ok(message) => RawMessage::from_kafka(&message),
            Err(e) => Err(Error::Kafka(e)),
        };
        Some((item, queue))
    })
    .boxed()
}
