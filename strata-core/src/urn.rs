//! Typed dataset URNs.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATASET_PREFIX: &str = "urn:li:dataset:(";
const PLATFORM_PREFIX: &str = "urn:li:dataPlatform:";

/// Errors produced when parsing a dataset urn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrnError {
    #[error("'{urn}' is not a dataset urn")]
    NotADataset { urn: String },

    #[error("dataset urn '{urn}' must have platform, name, and origin parts")]
    MalformedTuple { urn: String },

    #[error("'{platform}' is not a data platform urn")]
    MalformedPlatform { platform: String },
}

/// Identifier of a dataset: the platform it lives on, its name there, and
/// the fabric it was observed in (PROD, DEV, ...).
///
/// Renders as `urn:li:dataset:(urn:li:dataPlatform:<platform>,<name>,<origin>)`
/// and parses back losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DatasetUrn {
    platform: String,
    name: String,
    origin: String,
}

impl DatasetUrn {
    pub fn new(
        platform: impl Into<String>,
        name: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            name: name.into(),
            origin: origin.into(),
        }
    }

    /// The data platform identifier (e.g. `kafka`).
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// The dataset name on its platform (e.g. a topic name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fabric the dataset was observed in (e.g. `PROD`).
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl fmt::Display for DatasetUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DATASET_PREFIX}{PLATFORM_PREFIX}{},{},{})",
            self.platform, self.name, self.origin
        )
    }
}

impl FromStr for DatasetUrn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tuple = s
            .strip_prefix(DATASET_PREFIX)
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| UrnError::NotADataset { urn: s.to_string() })?;

        let parts: Vec<&str> = tuple.split(',').collect();
        let (platform, name, origin) = match parts[..] {
            [platform, name, origin] => (platform, name, origin),
            _ => return Err(UrnError::MalformedTuple { urn: s.to_string() }),
        };

        let platform =
            platform
                .strip_prefix(PLATFORM_PREFIX)
                .ok_or_else(|| UrnError::MalformedPlatform {
                    platform: platform.to_string(),
                })?;

        Ok(Self::new(platform, name, origin))
    }
}

impl From<DatasetUrn> for String {
    fn from(urn: DatasetUrn) -> Self {
        urn.to_string()
    }
}

impl TryFrom<String> for DatasetUrn {
    type Error = UrnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
