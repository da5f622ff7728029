//! Notebook document model for categorical models and diagrams.
//!
//! # Responsibility
//! - Define identifiers, cells and documents used by builders and queries.
//! - Own the persisted JSON shape through serde derives.
//!
//! # Invariants
//! - Cell ids are unique within a document; entity ids likewise.
//! - Entity ids and cell ids are separate types and never compared.

pub mod cell;
pub mod document;
pub mod id;
