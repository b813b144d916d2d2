//! Parsed IDL document model for the strata metadata toolkit.
//!
//! This crate provides the tree an IDL-parsing collaborator produces:
//! named records with fields, tagged unions, enumerations, and nested
//! record definitions. The tree is the single input of the flattening
//! pipeline in `strata-core`.
//!
//! # Architecture
//!
//! ```text
//! IDL source → parser (external) → Document (this crate) → strata-core (flattening)
//! ```
//!
//! The model is designed to be:
//! - Order-preserving (definition order in source is insertion order here)
//! - Owned (nested definitions are held by value, so a record can never
//!   contain itself and traversals always terminate)
//! - Parser-agnostic (any grammar that produces records, unions, enums,
//!   and repeated/map fields can target it)

mod document;
mod kind;

pub use document::{Document, Enumeration, Field, Record, TaggedUnion};
pub use kind::FieldKind;
