//! Metadata event model.
//!
//! Snapshots bundle the aspects known about an entity at a point in time;
//! a [`MetadataChangeEvent`] proposes a snapshot to the catalog. The
//! schema aspect consumes the flattened field descriptors verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strata_idl::Document;

use crate::{DatasetUrn, FieldDescriptor, flatten_document};

/// Schema aspect of a dataset: the flattened field list plus naming info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaMetadata {
    /// Name of the schema as registered (e.g. a subject or file name).
    pub schema_name: String,
    /// Platform the schema was observed on.
    pub platform: String,
    /// Version of the schema on its platform.
    pub version: i64,
    /// Flattened field descriptors, in emission order.
    pub fields: Vec<FieldDescriptor>,
}

impl SchemaMetadata {
    /// Assemble the schema aspect for a parsed document.
    ///
    /// The descriptor sequence is taken from [`flatten_document`] as-is;
    /// no reordering or deduplication happens here.
    pub fn from_document(
        schema_name: impl Into<String>,
        platform: impl Into<String>,
        document: &Document,
    ) -> Self {
        Self {
            schema_name: schema_name.into(),
            platform: platform.into(),
            version: 0,
            fields: flatten_document(document),
        }
    }
}

/// Free-form dataset properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetProperties {
    /// Custom key-value properties, in insertion order.
    pub custom_properties: IndexMap<String, String>,
}

/// Soft-deletion marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub removed: bool,
}

/// An aspect attached to a dataset snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Aspect {
    Status(Status),
    Properties(DatasetProperties),
    Schema(SchemaMetadata),
}

/// Snapshot of a dataset entity: its urn and the aspects known about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub urn: DatasetUrn,
    pub aspects: Vec<Aspect>,
}

impl DatasetSnapshot {
    /// Create a snapshot with no aspects.
    pub fn new(urn: DatasetUrn) -> Self {
        Self {
            urn,
            aspects: Vec::new(),
        }
    }

    /// Attach an aspect.
    pub fn aspect(mut self, aspect: Aspect) -> Self {
        self.aspects.push(aspect);
        self
    }

    /// The properties aspect, if present.
    pub fn properties(&self) -> Option<&DatasetProperties> {
        self.aspects.iter().find_map(|aspect| match aspect {
            Aspect::Properties(properties) => Some(properties),
            _ => None,
        })
    }

    /// The properties aspect, attaching an empty one if absent.
    pub fn properties_mut(&mut self) -> &mut DatasetProperties {
        let index = self
            .aspects
            .iter()
            .position(|aspect| matches!(aspect, Aspect::Properties(_)));
        let index = match index {
            Some(index) => index,
            None => {
                self.aspects
                    .push(Aspect::Properties(DatasetProperties::default()));
                self.aspects.len() - 1
            }
        };
        match &mut self.aspects[index] {
            Aspect::Properties(properties) => properties,
            _ => unreachable!("index points at a properties aspect"),
        }
    }

    /// The schema aspect, if present.
    pub fn schema(&self) -> Option<&SchemaMetadata> {
        self.aspects.iter().find_map(|aspect| match aspect {
            Aspect::Schema(schema) => Some(schema),
            _ => None,
        })
    }
}

/// Snapshot of a data job (a task within a processing flow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataJobSnapshot {
    pub urn: String,
    pub info: Option<DataJobInfo>,
}

/// Descriptive aspect of a data job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataJobInfo {
    pub name: String,
    pub description: Option<String>,
}

/// The entity snapshot proposed by a metadata change event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Snapshot {
    Dataset(DatasetSnapshot),
    DataJob(DataJobSnapshot),
}

/// A proposed change to the catalog's view of one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataChangeEvent {
    pub proposed_snapshot: Snapshot,
}

impl MetadataChangeEvent {
    /// Event proposing a dataset snapshot.
    pub fn dataset(snapshot: DatasetSnapshot) -> Self {
        Self {
            proposed_snapshot: Snapshot::Dataset(snapshot),
        }
    }

    /// The proposed dataset snapshot, if this event carries one.
    pub fn dataset_snapshot(&self) -> Option<&DatasetSnapshot> {
        match &self.proposed_snapshot {
            Snapshot::Dataset(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use strata_idl::{FieldKind, Record};

    use super::*;

    fn topic_urn(topic: &str) -> DatasetUrn {
        DatasetUrn::new("kafka", topic, "PROD")
    }

    #[test]
    fn test_schema_metadata_consumes_flattened_fields() {
        let document = Document::new()
            .record(Record::new("test").field("field_1", FieldKind::String));

        let schema = SchemaMetadata::from_document("test-subject", "kafka", &document);

        assert_eq!(schema.fields, flatten_document(&document));
        assert_eq!(schema.fields.len(), 2);
    }

    #[test]
    fn test_properties_absent_by_default() {
        let snapshot = DatasetSnapshot::new(topic_urn("t")).aspect(Aspect::Status(Status {
            removed: false,
        }));

        assert!(snapshot.properties().is_none());
    }

    #[test]
    fn test_properties_mut_attaches_when_absent() {
        let mut snapshot = DatasetSnapshot::new(topic_urn("t"));

        snapshot
            .properties_mut()
            .custom_properties
            .insert("owner".into(), "data-platform".into());

        assert_eq!(
            snapshot.properties().unwrap().custom_properties["owner"],
            "data-platform"
        );
        assert_eq!(snapshot.aspects.len(), 1);
    }

    #[test]
    fn test_properties_mut_reuses_existing_aspect() {
        let mut snapshot = DatasetSnapshot::new(topic_urn("t"))
            .aspect(Aspect::Properties(DatasetProperties::default()));

        snapshot
            .properties_mut()
            .custom_properties
            .insert("k".into(), "v".into());
        snapshot
            .properties_mut()
            .custom_properties
            .insert("k2".into(), "v2".into());

        assert_eq!(snapshot.aspects.len(), 1);
        assert_eq!(snapshot.properties().unwrap().custom_properties.len(), 2);
    }

    #[test]
    fn test_schema_accessor() {
        let document = Document::new().record(Record::new("test"));
        let schema = SchemaMetadata::from_document("test-subject", "kafka", &document);
        let snapshot = DatasetSnapshot::new(topic_urn("t")).aspect(Aspect::Schema(schema));

        assert_eq!(snapshot.schema().unwrap().schema_name, "test-subject");
        assert_eq!(snapshot.schema().unwrap().fields.len(), 1);
    }

    #[test]
    fn test_dataset_snapshot_accessor() {
        let event = MetadataChangeEvent::dataset(DatasetSnapshot::new(topic_urn("t")));
        assert!(event.dataset_snapshot().is_some());

        let event = MetadataChangeEvent {
            proposed_snapshot: Snapshot::DataJob(DataJobSnapshot {
                urn: "urn:li:dataJob:(urn:li:dataFlow:(airflow,dag,PROD),task)".into(),
                info: None,
            }),
        };
        assert!(event.dataset_snapshot().is_none());
    }
}
