//! Cross-reference integrity checks.
//!
//! Builders store `dom`, `cod` and `over` verbatim. This module is the opt-in
//! check that every such reference names an object declared earlier in the
//! same notebook.

use crate::model::cell::FormalContent;
use crate::model::document::Document;
use crate::model::id::{CellId, EntityId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Which field of a formal cell holds a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceRole {
    Dom,
    Cod,
    Over,
}

impl ReferenceRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dom => "dom",
            Self::Cod => "cod",
            Self::Over => "over",
        }
    }
}

/// One integrity finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// `cellOrder` lists an id with no entry in `cellContents`.
    MissingCell { cell_id: CellId },
    /// `cellOrder` lists the same cell more than once.
    DuplicateCell { cell_id: CellId },
    /// A reference names no object declared earlier in the notebook.
    UnknownEntity {
        cell_id: CellId,
        role: ReferenceRole,
        target: EntityId,
    },
}

impl Display for DanglingReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCell { cell_id } => write!(f, "cell {cell_id} is ordered but has no content"),
            Self::DuplicateCell { cell_id } => write!(f, "cell {cell_id} is ordered twice"),
            Self::UnknownEntity {
                cell_id,
                role,
                target,
            } => write!(
                f,
                "cell {cell_id} {} references unknown object {target}",
                role.as_str()
            ),
        }
    }
}

impl Error for DanglingReference {}

/// Walks the notebook in order and reports every broken reference.
///
/// Objects become referenceable only after their own cell, so forward
/// references and self-references are reported.
pub fn check_references(doc: &Document) -> Result<(), Vec<DanglingReference>> {
    let mut findings = Vec::new();
    let mut seen_cells = HashSet::new();
    let mut known_objects = HashSet::new();

    for cell_id in &doc.notebook.cell_order {
        if !seen_cells.insert(*cell_id) {
            findings.push(DanglingReference::DuplicateCell { cell_id: *cell_id });
            continue;
        }
        let Some(cell) = doc.notebook.get(*cell_id) else {
            findings.push(DanglingReference::MissingCell { cell_id: *cell_id });
            continue;
        };
        let mut require = |role: ReferenceRole, target: EntityId, known: &HashSet<EntityId>| {
            if !known.contains(&target) {
                findings.push(DanglingReference::UnknownEntity {
                    cell_id: *cell_id,
                    role,
                    target,
                });
            }
        };

        match cell.as_formal() {
            Some(FormalContent::Object(decl)) => {
                if let Some(parent) = decl.over_id() {
                    require(ReferenceRole::Over, parent, &known_objects);
                }
                known_objects.insert(decl.id);
            }
            Some(FormalContent::Morphism(decl)) => {
                require(ReferenceRole::Dom, decl.dom_id(), &known_objects);
                require(ReferenceRole::Cod, decl.cod_id(), &known_objects);
            }
            None => {}
        }
    }

    if findings.is_empty() {
        Ok(())
    } else {
        Err(findings)
    }
}
