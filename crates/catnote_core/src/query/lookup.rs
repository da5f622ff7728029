//! Ordered extraction and name lookup of formal entities.

use crate::model::cell::FormalContent;
use crate::model::document::Document;
use crate::model::id::{CellId, EntityId};

/// Iterates formal cells in notebook order as `(cell id, payload)` pairs.
pub fn formal_cells(doc: &Document) -> impl Iterator<Item = (CellId, &FormalContent)> + '_ {
    doc.notebook
        .cells()
        .filter_map(|cell| cell.as_formal().map(|content| (cell.id(), content)))
}

/// Entity ids of all object cells, in notebook order.
pub fn object_ids(doc: &Document) -> Vec<EntityId> {
    formal_cells(doc)
        .filter_map(|(_, content)| match content {
            FormalContent::Object(decl) => Some(decl.id),
            FormalContent::Morphism(_) => None,
        })
        .collect()
}

/// Entity ids of all morphism cells, in notebook order.
pub fn morphism_ids(doc: &Document) -> Vec<EntityId> {
    formal_cells(doc)
        .filter_map(|(_, content)| match content {
            FormalContent::Morphism(decl) => Some(decl.id),
            FormalContent::Object(_) => None,
        })
        .collect()
}

/// First object named exactly `name` (case-sensitive), in notebook order.
pub fn find_object_by_name(doc: &Document, name: &str) -> Option<EntityId> {
    formal_cells(doc).find_map(|(_, content)| match content {
        FormalContent::Object(decl) if decl.name == name => Some(decl.id),
        _ => None,
    })
}

/// First morphism named exactly `name` (case-sensitive), in notebook order.
pub fn find_morphism_by_name(doc: &Document, name: &str) -> Option<EntityId> {
    formal_cells(doc).find_map(|(_, content)| match content {
        FormalContent::Morphism(decl) if decl.name == name => Some(decl.id),
        _ => None,
    })
}
