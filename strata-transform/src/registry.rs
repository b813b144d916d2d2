//! Name-keyed registry of transformer factories.

use eyre::{Result, bail};
use indexmap::IndexMap;

use crate::{consumers::AddConsumerGroups, context::PipelineContext, transformer::Transformer};

/// Builds a transformer from its TOML configuration and the run context.
pub type TransformerFactory =
    fn(&toml::Value, &PipelineContext) -> Result<Box<dyn Transformer>>;

/// Registry mapping transformer names to their factories.
///
/// Ingestion recipes refer to transformers by name; the registry turns a
/// name plus its config block into a ready transformer.
#[derive(Default)]
pub struct TransformerRegistry {
    factories: IndexMap<String, TransformerFactory>,
}

impl TransformerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in transformers registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("add_consumer_groups", |config, ctx| {
            Ok(Box::new(AddConsumerGroups::create(config, ctx)?))
        });
        registry
    }

    /// Register a factory under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, factory: TransformerFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Names of all registered transformers, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the named transformer from its config.
    ///
    /// # Errors
    ///
    /// Fails if the name is unknown or the factory rejects the config.
    pub fn create(
        &self,
        name: &str,
        config: &toml::Value,
        ctx: &PipelineContext,
    ) -> Result<Box<dyn Transformer>> {
        match self.factories.get(name) {
            Some(factory) => factory(config, ctx),
            None => bail!("unknown transformer '{name}'"),
        }
    }
}
