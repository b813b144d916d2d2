//! Transformer trait.

use eyre::Result;
use strata_core::MetadataChangeEvent;

/// A transformer rewrites metadata change events between extraction and
/// emission.
///
/// Transformers are applied in order by the pipeline. Each one sees every
/// event; events it has no business with pass through unchanged.
pub trait Transformer: Send + Sync + std::fmt::Debug {
    /// The name of this transformer (used in registries and logging).
    fn name(&self) -> &'static str;

    /// Transform a single event.
    ///
    /// # Errors
    ///
    /// Returns an error to abort the run; events that merely don't apply
    /// should be returned unchanged instead.
    fn transform_one(&self, event: MetadataChangeEvent) -> Result<MetadataChangeEvent>;

    /// Transform a batch of events, preserving their order.
    fn transform(&self, events: Vec<MetadataChangeEvent>) -> Result<Vec<MetadataChangeEvent>> {
        events
            .into_iter()
            .map(|event| self.transform_one(event))
            .collect()
    }
}
