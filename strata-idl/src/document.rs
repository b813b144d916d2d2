//! Document tree produced by an IDL parser.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::FieldKind;

/// A parsed IDL document: the top-level record definitions, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level records, keyed by name, in definition order.
    pub records: IndexMap<String, Record>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level record definition.
    pub fn record(mut self, record: Record) -> Self {
        self.records.insert(record.name.clone(), record);
        self
    }
}

/// A named record definition.
///
/// Records own their nested definitions, so a record cannot contain itself
/// and the containment tree is always finite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record name as declared.
    pub name: String,
    /// Direct fields, in declaration order.
    pub fields: Vec<Field>,
    /// Tagged unions defined in this record, in definition order.
    pub unions: IndexMap<String, TaggedUnion>,
    /// Enumerations defined in this record, in definition order.
    pub enums: IndexMap<String, Enumeration>,
    /// Nested record definitions, in definition order.
    pub records: IndexMap<String, Record>,
}

impl Record {
    /// Create an empty record with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            unions: IndexMap::new(),
            enums: IndexMap::new(),
            records: IndexMap::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(Field::new(name, kind));
        self
    }

    /// Add a tagged union definition.
    pub fn union(mut self, union: TaggedUnion) -> Self {
        self.unions.insert(union.name.clone(), union);
        self
    }

    /// Add an enumeration definition.
    pub fn enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enums.insert(enumeration.name.clone(), enumeration);
        self
    }

    /// Add a nested record definition.
    pub fn record(mut self, nested: Record) -> Self {
        self.records.insert(nested.name.clone(), nested);
        self
    }
}

/// A single field: a name and its declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A tagged union: a field group where exactly one member is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedUnion {
    /// Union name as declared.
    pub name: String,
    /// Member variants, in declaration order.
    pub fields: Vec<Field>,
}

impl TaggedUnion {
    /// Create an empty union with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a member variant.
    pub fn field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(Field::new(name, kind));
        self
    }
}

/// An enumeration: a set of named constants.
///
/// Constants are represented structurally as fields so downstream
/// consumers can treat them uniformly with record members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumeration {
    /// Enumeration name as declared.
    pub name: String,
    /// Named constants, in declaration order.
    pub constants: Vec<Field>,
}

impl Enumeration {
    /// Create an empty enumeration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constants: Vec::new(),
        }
    }

    /// Append a named constant.
    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.constants.push(Field::new(name, FieldKind::Enum));
        self
    }
}
