//! Flattened field descriptors and the normalized type classification.

use serde::{Deserialize, Serialize};
use strata_idl::FieldKind;

/// Normalized classification of a field, used by downstream consumers for
/// uniform handling regardless of the source IDL's kind vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Boolean,
    Number,
    Bytes,
    String,
    Record,
    Map,
    Enum,
    Union,
    /// An array type. The element kind is carried as the literal declared
    /// string, unmapped, so consumers can inspect the element type name.
    Array { nested: Vec<String> },
}

impl FieldType {
    /// Classify a declared kind.
    ///
    /// Every kind in the vocabulary has a fixed classification. A
    /// [`FieldKind::Reference`] is either a reference to a user-defined
    /// record type or a kind this model does not know about; the kind tag
    /// alone cannot distinguish the two, so both classify as `Record`.
    pub fn of_kind(kind: &FieldKind) -> Self {
        match kind {
            FieldKind::Bool => FieldType::Boolean,
            FieldKind::Int32
            | FieldKind::Int64
            | FieldKind::UInt32
            | FieldKind::UInt64
            | FieldKind::SInt32
            | FieldKind::SInt64
            | FieldKind::Fixed32
            | FieldKind::Fixed64
            | FieldKind::SFixed32
            | FieldKind::SFixed64
            | FieldKind::Float
            | FieldKind::Double => FieldType::Number,
            FieldKind::Bytes => FieldType::Bytes,
            FieldKind::String => FieldType::String,
            FieldKind::Message => FieldType::Record,
            FieldKind::Map => FieldType::Map,
            FieldKind::Enum => FieldType::Enum,
            FieldKind::Oneof => FieldType::Union,
            FieldKind::Repeated(element) => FieldType::Array {
                nested: vec![element.clone()],
            },
            FieldKind::Reference(_) => FieldType::Record,
        }
    }
}

/// A single entry in the flattened schema: a dotted path from the document
/// root plus native and normalized type information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Dot-joined chain of container names from the document root.
    pub path: String,
    /// The type label as declared in source, preserved verbatim.
    pub native_type: String,
    /// The normalized classification of this field.
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(
        path: impl Into<String>,
        native_type: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            path: path.into(),
            native_type: native_type.into(),
            field_type,
        }
    }
}
