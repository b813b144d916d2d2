//! Schema flattening and metadata event model for the strata metadata toolkit.
//!
//! The centerpiece is [`flatten_document`]: a deterministic depth-first
//! traversal that turns a parsed IDL [`Document`](strata_idl::Document)
//! into an ordered, flat list of [`FieldDescriptor`]s, each carrying a
//! fully-qualified dotted path, the declared kind verbatim, and a
//! normalized type classification. The surrounding modules assemble the
//! descriptors into metadata events and read field values back out of
//! JSON-shaped records.
//!
//! # Architecture
//!
//! ```text
//! Document (strata-idl) → flatten → [FieldDescriptor] → SchemaMetadata → MetadataChangeEvent
//! ```

mod descriptor;
mod event;
mod extract;
mod flatten;
mod urn;

pub use descriptor::{FieldDescriptor, FieldType};
pub use event::{
    Aspect, DataJobInfo, DataJobSnapshot, DatasetProperties, DatasetSnapshot, MetadataChangeEvent,
    SchemaMetadata, Snapshot, Status,
};
pub use extract::{ARRAY_WILDCARD, extract_fields, field_values, wildcard_depth};
pub use flatten::flatten_document;
pub use urn::{DatasetUrn, UrnError};
