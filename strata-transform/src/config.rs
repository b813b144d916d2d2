//! Configuration for the consumer-group enrichment transformer.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_BOOTSTRAP: &str = "localhost:9092";

/// Configuration of [`AddConsumerGroups`](crate::AddConsumerGroups).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsumerEnrichmentConfig {
    /// Broker connection settings.
    #[serde(default)]
    pub connection: ConsumerConnection,

    /// Drop any pre-existing custom properties before stamping consumers.
    #[serde(default)]
    pub replace_existing: bool,
}

impl ConsumerEnrichmentConfig {
    /// Parse and validate a config from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(Error::parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(&content)
    }

    /// Validate the config after parsing.
    pub fn validate(&self) -> Result<()> {
        self.connection.client_options().map(|_| ())
    }
}

/// Broker connection settings for the consumer admin surface.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsumerConnection {
    /// Bootstrap broker address.
    #[serde(default = "default_bootstrap")]
    pub bootstrap: String,

    /// Consumer settings, keyed by their dotted configuration names
    /// (`security.protocol`, `sasl.mechanism`, ...).
    pub consumer_config: Option<IndexMap<String, String>>,
}

impl Default for ConsumerConnection {
    fn default() -> Self {
        Self {
            bootstrap: default_bootstrap(),
            consumer_config: None,
        }
    }
}

impl ConsumerConnection {
    /// Convert the dotted consumer settings into flat client options.
    ///
    /// # Errors
    ///
    /// Fails if the `consumer_config` table is absent or lacks one of the
    /// required settings; this doubles as the config's validation.
    pub fn client_options(&self) -> Result<ClientOptions> {
        let consumer_config = self
            .consumer_config
            .as_ref()
            .ok_or_else(|| Error::missing_table("consumer_config", "connection"))?;

        let get = |key: &str| {
            consumer_config
                .get(key)
                .cloned()
                .ok_or_else(|| Error::missing_consumer_key(key))
        };

        Ok(ClientOptions {
            bootstrap_servers: self.bootstrap.clone(),
            security_protocol: get("security.protocol")?,
            sasl_mechanism: get("sasl.mechanism")?,
            sasl_plain_username: get("sasl.username")?,
            sasl_plain_password: get("sasl.password")?,
        })
    }
}

fn default_bootstrap() -> String {
    DEFAULT_BOOTSTRAP.into()
}

/// Flat connection options in the shape an admin client takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub bootstrap_servers: String,
    pub security_protocol: String,
    pub sasl_mechanism: String,
    pub sasl_plain_username: String,
    pub sasl_plain_password: String,
}
