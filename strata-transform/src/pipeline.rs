//! Transformer pipeline orchestrator.

use eyre::Result;
use strata_core::MetadataChangeEvent;
use tracing::debug;

use crate::transformer::Transformer;

/// Applies transformers to metadata change events in registration order.
///
/// # Example
///
/// ```ignore
/// let pipeline = TransformerPipeline::new()
///     .transformer(AddConsumerGroups::new(config, &source)?);
///
/// let enriched = pipeline.run(events)?;
/// ```
#[derive(Default)]
pub struct TransformerPipeline {
    transformers: Vec<Box<dyn Transformer>>,
}

impl TransformerPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transformer.
    pub fn transformer(mut self, transformer: impl Transformer + 'static) -> Self {
        self.transformers.push(Box::new(transformer));
        self
    }

    /// Append an already-boxed transformer (e.g. from a registry).
    pub fn boxed(mut self, transformer: Box<dyn Transformer>) -> Self {
        self.transformers.push(transformer);
        self
    }

    /// Run every transformer over the events, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first transformer failure.
    pub fn run(&self, mut events: Vec<MetadataChangeEvent>) -> Result<Vec<MetadataChangeEvent>> {
        for transformer in &self.transformers {
            debug!(transformer = transformer.name(), "applying transformer");
            events = transformer.transform(events)?;
        }
        Ok(events)
    }
}
