use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for transformer configuration (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse transformer config")]
    #[diagnostic(code(strata::config::parse_error))]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("{table} is missing in {parent}")]
    #[diagnostic(
        code(strata::config::missing_table),
        help("add a [{parent}.{table}] table with the consumer settings")
    )]
    MissingTable { table: String, parent: String },

    #[error("{key} is missing in consumer_config")]
    #[diagnostic(
        code(strata::config::missing_key),
        help("set \"{key}\" in the connection's consumer_config table")
    )]
    MissingConsumerKey { key: String },
}

impl Error {
    /// Create a parse error from a toml error
    pub fn parse(source: toml::de::Error) -> Box<Self> {
        Box::new(Error::Parse { source })
    }

    /// Create a missing-table error
    pub fn missing_table(table: impl Into<String>, parent: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingTable {
            table: table.into(),
            parent: parent.into(),
        })
    }

    /// Create a missing-consumer-key error
    pub fn missing_consumer_key(key: impl Into<String>) -> Box<Self> {
        Box::new(Error::MissingConsumerKey { key: key.into() })
    }
}
