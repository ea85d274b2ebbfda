//! Schema registry and topic subscriptions.
//!
//! A subscription binds a topic name to the schema its payloads follow.
//! Subscriptions are resolved once, at startup, so that a topic without a
//! decoder/exporter pair is rejected before any message is consumed.

use crate::error::{Error, Result};
use kpi_types::SchemaKind;
use std::collections::{HashMap, HashSet};

/// A topic to consume and the schema of its payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSubscription {
    pub topic: String,
    pub schema: SchemaKind,
}

impl TopicSubscription {
    pub fn new(topic: impl Into<String>, schema: SchemaKind) -> Self {
        Self {
            topic: topic.into(),
            schema,
        }
    }
}

/// Maps schema identifiers to the schemas this build can decode and export.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, SchemaKind>,
}

impl SchemaRegistry {
    /// Registry holding every built-in schema.
    pub fn builtin() -> Self {
        Self {
            schemas: SchemaKind::ALL
                .into_iter()
                .map(|kind| (kind.as_str(), kind))
                .collect(),
        }
    }

    pub fn lookup(&self, schema: &str) -> Option<SchemaKind> {
        self.schemas.get(schema).copied()
    }

    /// Resolve `(topic, schema identifier)` pairs into subscriptions.
    ///
    /// Fails on the first unknown schema or repeated topic, or when the list
    /// is empty.
    pub fn resolve<I, T, S>(&self, entries: I) -> Result<Vec<TopicSubscription>>
    where
        I: IntoIterator<Item = (T, S)>,
        T: Into<String>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut subscriptions = Vec::new();

        for (topic, schema) in entries {
            let topic = topic.into();
            let kind = self
                .lookup(schema.as_ref())
                .ok_or_else(|| Error::UnknownSchema {
                    topic: topic.clone(),
                    schema: schema.as_ref().to_string(),
                })?;
            if !seen.insert(topic.clone()) {
                return Err(Error::DuplicateTopic(topic));
            }
            subscriptions.push(TopicSubscription::new(topic, kind));
        }

        if subscriptions.is_empty() {
            return Err(Error::NoTopics);
        }
        Ok(subscriptions)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
