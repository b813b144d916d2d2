//! Depth-first flattening of IDL documents into field descriptors.
//!
//! The traversal is pure and total: it performs no I/O, never fails for a
//! well-formed tree, and produces the same output for the same input. The
//! emission order is a contract downstream consumers rely on for schema
//! diffing: a record's own descriptor precedes all of its children, and
//! each child category appears as a contiguous run.

use strata_idl::{Document, Enumeration, Field, Record, TaggedUnion};

use crate::{FieldDescriptor, FieldType};

/// Flatten a parsed document into an ordered list of field descriptors.
///
/// Top-level records are visited in definition order. Per record, the
/// emission order is: the record itself, its direct fields, its tagged
/// unions (each fully expanded before the next), its enumerations, then
/// its nested record definitions, recursively.
///
/// Record *references* (a field whose kind names another record) are
/// emitted as single descriptors and never expanded; only literal nested
/// record *definitions* recurse.
pub fn flatten_document(document: &Document) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();
    for record in document.records.values() {
        flatten_record(record, None, &mut fields);
    }
    fields
}

/// Dotted path of `name` under an optional parent path.
fn child_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}.{name}"),
        None => name.to_string(),
    }
}

fn flatten_record(record: &Record, parent: Option<&str>, out: &mut Vec<FieldDescriptor>) {
    let path = child_path(parent, &record.name);
    out.push(FieldDescriptor::new(
        path.clone(),
        "message",
        FieldType::Record,
    ));

    flatten_fields(&record.fields, &path, out);

    for union in record.unions.values() {
        flatten_union(union, &path, out);
    }

    for enumeration in record.enums.values() {
        flatten_enumeration(enumeration, &path, out);
    }

    for nested in record.records.values() {
        flatten_record(nested, Some(&path), out);
    }
}

fn flatten_union(union: &TaggedUnion, parent: &str, out: &mut Vec<FieldDescriptor>) {
    let path = child_path(Some(parent), &union.name);
    out.push(FieldDescriptor::new(path.clone(), "oneof", FieldType::Union));
    flatten_fields(&union.fields, &path, out);
}

fn flatten_enumeration(enumeration: &Enumeration, parent: &str, out: &mut Vec<FieldDescriptor>) {
    let path = child_path(Some(parent), &enumeration.name);
    out.push(FieldDescriptor::new(path.clone(), "enum", FieldType::Enum));
    flatten_fields(&enumeration.constants, &path, out);
}

fn flatten_fields(fields: &[Field], parent: &str, out: &mut Vec<FieldDescriptor>) {
    for field in fields {
        out.push(FieldDescriptor::new(
            format!("{parent}.{}", field.name),
            field.kind.to_string(),
            FieldType::of_kind(&field.kind),
        ));
    }
}
