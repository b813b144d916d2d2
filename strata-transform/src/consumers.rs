//! Consumer-group enrichment for dataset metadata.

use std::collections::BTreeSet;

use eyre::Result;
use indexmap::IndexMap;
use strata_core::{MetadataChangeEvent, Snapshot};
use tracing::{debug, info};

use crate::{
    config::ConsumerEnrichmentConfig, context::PipelineContext, transformer::Transformer,
};

/// Property key the consumer list is stamped under.
const CONSUMERS_PROPERTY: &str = "consumers";

/// A consumer group and the topics its members subscribe to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerGroup {
    pub group: String,
    pub topics: Vec<String>,
}

/// Source of consumer-group metadata, typically backed by a broker admin
/// client.
///
/// Implementations live outside this crate; the transformer only needs the
/// two admin answers below.
pub trait ConsumerGroupSource: Send + Sync {
    /// Ids of all known consumer groups.
    fn group_ids(&self) -> Result<Vec<String>>;

    /// Describe the given groups, including their topic subscriptions.
    fn describe_groups(&self, ids: &[String]) -> Result<Vec<ConsumerGroup>>;
}

/// Transformer that stamps the consumer groups reading a topic into the
/// dataset's custom properties.
#[derive(Debug)]
pub struct AddConsumerGroups {
    config: ConsumerEnrichmentConfig,
    topic_consumers: IndexMap<String, BTreeSet<String>>,
}

impl AddConsumerGroups {
    /// Build the transformer, fetching consumer metadata from the source.
    pub fn new(
        config: ConsumerEnrichmentConfig,
        source: &dyn ConsumerGroupSource,
    ) -> Result<Self> {
        config.validate()?;
        let topic_consumers = fetch_topic_consumers(source)?;
        info!(
            topics = topic_consumers.len(),
            "fetched consumer group subscriptions"
        );
        Ok(Self {
            config,
            topic_consumers,
        })
    }

    /// Factory entry point used by the registry.
    pub fn create(config: &toml::Value, ctx: &PipelineContext) -> Result<Self> {
        let config: ConsumerEnrichmentConfig = config.clone().try_into()?;
        let source = ctx
            .consumer_groups()
            .ok_or_else(|| eyre::eyre!("no consumer group source attached to the context"))?;
        Self::new(config, source)
    }
}

/// Fold group descriptions into topic → sorted group names.
fn fetch_topic_consumers(
    source: &dyn ConsumerGroupSource,
) -> Result<IndexMap<String, BTreeSet<String>>> {
    let ids: Vec<String> = source
        .group_ids()?
        .into_iter()
        .filter(|id| !id.is_empty())
        .collect();

    let mut topics: IndexMap<String, BTreeSet<String>> = IndexMap::new();
    for group in source.describe_groups(&ids)? {
        for topic in &group.topics {
            topics
                .entry(topic.clone())
                .or_default()
                .insert(group.group.clone());
        }
    }
    Ok(topics)
}

impl Transformer for AddConsumerGroups {
    fn name(&self) -> &'static str {
        "add_consumer_groups"
    }

    fn transform_one(&self, mut event: MetadataChangeEvent) -> Result<MetadataChangeEvent> {
        let Snapshot::Dataset(snapshot) = &mut event.proposed_snapshot else {
            return Ok(event);
        };

        match self.topic_consumers.get(snapshot.urn.name()) {
            Some(groups) => {
                let consumers = groups.iter().cloned().collect::<Vec<_>>().join(", ");
                let properties = snapshot.properties_mut();
                if self.config.replace_existing {
                    properties.custom_properties.clear();
                }
                properties
                    .custom_properties
                    .insert(CONSUMERS_PROPERTY.into(), consumers);
            }
            None => debug!(topic = snapshot.urn.name(), "no consumer info found"),
        }

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticSource {
        groups: Vec<ConsumerGroup>,
    }

    impl ConsumerGroupSource for StaticSource {
        fn group_ids(&self) -> Result<Vec<String>> {
            Ok(self.groups.iter().map(|g| g.group.clone()).collect())
        }

        fn describe_groups(&self, ids: &[String]) -> Result<Vec<ConsumerGroup>> {
            Ok(self
                .groups
                .iter()
                .filter(|g| ids.contains(&g.group))
                .cloned()
                .collect())
        }
    }

    #[test]
    fn test_topic_consumers_are_sorted_and_deduplicated() {
        let source = StaticSource {
            groups: vec![
                ConsumerGroup {
                    group: "zeta".into(),
                    topics: vec!["t1".into()],
                },
                ConsumerGroup {
                    group: "alpha".into(),
                    topics: vec!["t1".into(), "t2".into()],
                },
                ConsumerGroup {
                    group: "zeta".into(),
                    topics: vec!["t1".into()],
                },
            ],
        };

        let topics = fetch_topic_consumers(&source).unwrap();

        let t1: Vec<_> = topics["t1"].iter().map(String::as_str).collect();
        assert_eq!(t1, vec!["alpha", "zeta"]);
        assert_eq!(topics["t2"].len(), 1);
    }

    #[test]
    fn test_empty_group_ids_are_skipped() {
        struct EmptyIdSource;

        impl ConsumerGroupSource for EmptyIdSource {
            fn group_ids(&self) -> Result<Vec<String>> {
                Ok(vec!["".into(), "real".into()])
            }

            fn describe_groups(&self, ids: &[String]) -> Result<Vec<ConsumerGroup>> {
                assert_eq!(ids.len(), 1);
                assert_eq!(ids[0], "real");
                Ok(vec![])
            }
        }

        let topics = fetch_topic_consumers(&EmptyIdSource).unwrap();
        assert!(topics.is_empty());
    }
}
