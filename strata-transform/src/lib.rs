//! Metadata event transformers.
//!
//! Transformers rewrite [`MetadataChangeEvent`](strata_core::MetadataChangeEvent)s
//! between extraction and emission: enriching snapshots with operational
//! metadata, stamping properties, or dropping aspects. The crate provides
//! the [`Transformer`] trait, a name-keyed [`TransformerRegistry`] of
//! factories, a [`TransformerPipeline`] that applies transformers in
//! order, and the built-in consumer-group enrichment transformer.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod consumers;
mod context;
mod error;
mod pipeline;
mod registry;
mod transformer;

pub use config::{ClientOptions, ConsumerConnection, ConsumerEnrichmentConfig};
pub use consumers::{AddConsumerGroups, ConsumerGroup, ConsumerGroupSource};
pub use context::PipelineContext;
pub use error::{Error, Result};
pub use pipeline::TransformerPipeline;
pub use registry::{TransformerFactory, TransformerRegistry};
pub use transformer::Transformer;
