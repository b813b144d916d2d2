//! Field kind vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The declared kind of a field.
///
/// This is a closed representation of the kind vocabulary an IDL parser
/// emits. A tag outside the vocabulary is not an error: it is carried
/// verbatim in the [`FieldKind::Reference`] arm, which covers both
/// references to user-defined record types and kinds this model does not
/// know about. Repeated fields carry their literal element kind string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Bool,
    Int32,
    Int64,
    UInt32,
    UInt64,
    SInt32,
    SInt64,
    Fixed32,
    Fixed64,
    SFixed32,
    SFixed64,
    Float,
    Double,
    Bytes,
    String,
    Message,
    Map,
    Enum,
    Oneof,
    /// A repeated field, carrying the declared element kind verbatim.
    Repeated(String),
    /// A record reference or a kind outside the vocabulary, verbatim.
    Reference(String),
}

impl FieldKind {
    /// Map a declared kind tag to its vocabulary entry.
    ///
    /// Unknown tags map to [`FieldKind::Reference`]. A bare `repeated` tag
    /// has no element kind to carry, so it also falls through to
    /// `Reference`; pairing a repeated marker with its element is the
    /// parser's job ([`FieldKind::Repeated`] is constructed directly).
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bool" => FieldKind::Bool,
            "int32" => FieldKind::Int32,
            "int64" => FieldKind::Int64,
            "uint32" => FieldKind::UInt32,
            "uint64" => FieldKind::UInt64,
            "sint32" => FieldKind::SInt32,
            "sint64" => FieldKind::SInt64,
            "fixed32" => FieldKind::Fixed32,
            "fixed64" => FieldKind::Fixed64,
            "sfixed32" => FieldKind::SFixed32,
            "sfixed64" => FieldKind::SFixed64,
            "float" => FieldKind::Float,
            "double" => FieldKind::Double,
            "bytes" => FieldKind::Bytes,
            "string" => FieldKind::String,
            "message" => FieldKind::Message,
            "map" => FieldKind::Map,
            "enum" => FieldKind::Enum,
            "oneof" => FieldKind::Oneof,
            other => FieldKind::Reference(other.to_string()),
        }
    }
}

impl fmt::Display for FieldKind {
    /// Render the kind as it was declared in source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            FieldKind::Bool => "bool",
            FieldKind::Int32 => "int32",
            FieldKind::Int64 => "int64",
            FieldKind::UInt32 => "uint32",
            FieldKind::UInt64 => "uint64",
            FieldKind::SInt32 => "sint32",
            FieldKind::SInt64 => "sint64",
            FieldKind::Fixed32 => "fixed32",
            FieldKind::Fixed64 => "fixed64",
            FieldKind::SFixed32 => "sfixed32",
            FieldKind::SFixed64 => "sfixed64",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::Bytes => "bytes",
            FieldKind::String => "string",
            FieldKind::Message => "message",
            FieldKind::Map => "map",
            FieldKind::Enum => "enum",
            FieldKind::Oneof => "oneof",
            FieldKind::Repeated(element) => return write!(f, "repeated {element}"),
            FieldKind::Reference(name) => return f.write_str(name),
        };
        f.write_str(tag)
    }
}
