//! Read-only queries over finished documents.
//!
//! # Responsibility
//! - Structural validation of document-level fields.
//! - Ordered extraction and name lookup of object/morphism entity ids.
//! - Optional cross-reference integrity checking.
//!
//! # Invariants
//! - No function in this module mutates a document.
//! - Lookups report absence with `None`, never with an error.

pub mod integrity;
pub mod lookup;
pub mod validate;

pub use integrity::{check_references, DanglingReference, ReferenceRole};
pub use lookup::{
    find_morphism_by_name, find_object_by_name, formal_cells, morphism_ids, object_ids,
};
pub use validate::{check_document, validate_document, DocumentValidationError};
