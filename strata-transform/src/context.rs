//! Shared context handed to transformer factories.

use std::sync::Arc;

use crate::consumers::ConsumerGroupSource;

/// Context for a single ingestion run.
///
/// Carries the run identifier and the collaborators transformers may need
/// at construction time. Factories receive it alongside their config.
#[derive(Clone)]
pub struct PipelineContext {
    /// Identifier of the ingestion run, for diagnostics.
    pub run_id: String,
    consumer_groups: Option<Arc<dyn ConsumerGroupSource>>,
}

impl PipelineContext {
    /// Create a context with no collaborators attached.
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            consumer_groups: None,
        }
    }

    /// Attach a consumer-group source for transformers that need broker
    /// metadata.
    pub fn with_consumer_groups(mut self, source: Arc<dyn ConsumerGroupSource>) -> Self {
        self.consumer_groups = Some(source);
        self
    }

    /// The attached consumer-group source, if any.
    pub fn consumer_groups(&self) -> Option<&dyn ConsumerGroupSource> {
        self.consumer_groups.as_deref()
    }
}
