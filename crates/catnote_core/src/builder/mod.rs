//! Append-only document builders.
//!
//! # Responsibility
//! - Accumulate notebook cells for one model or diagram document.
//! - Return entity ids so callers can wire `dom`/`cod`/`over` references
//!   before the document is finalized.
//!
//! # Invariants
//! - Cells are appended; nothing is reordered or removed.
//! - An optional description cell is appended immediately before the formal
//!   cell it describes.
//! - `build()` allocates no identifiers and is repeatable.
//! - Cross-references are stored verbatim. Use
//!   [`crate::query::check_references`] to verify them.

pub mod diagram_builder;
pub mod model_builder;

use crate::model::cell::{Cell, FormalContent, TypeExpr};
use crate::model::document::Notebook;
use crate::model::id::{CellId, EntityId};
use log::debug;

pub use diagram_builder::DiagramBuilder;
pub use model_builder::ModelBuilder;

/// Request to append one model object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewObject {
    pub name: String,
    pub ob_type: TypeExpr,
    /// Appended as a rich-text cell before the object when non-empty.
    pub description: Option<String>,
}

impl NewObject {
    pub fn new(name: impl Into<String>, ob_type: impl Into<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            ob_type: ob_type.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request to append one model morphism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMorphism {
    pub name: String,
    /// Entity id of the domain object (not its cell id).
    pub dom: EntityId,
    /// Entity id of the codomain object (not its cell id).
    pub cod: EntityId,
    pub mor_type: TypeExpr,
    pub description: Option<String>,
}

impl NewMorphism {
    pub fn new(
        name: impl Into<String>,
        dom: EntityId,
        cod: EntityId,
        mor_type: impl Into<TypeExpr>,
    ) -> Self {
        Self {
            name: name.into(),
            dom,
            cod,
            mor_type: mor_type.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request to append one diagram object instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewObjectInstance {
    pub name: String,
    pub ob_type: TypeExpr,
    /// Entity id of the object this instance is scoped under.
    pub over: Option<EntityId>,
}

impl NewObjectInstance {
    pub fn new(name: impl Into<String>, ob_type: impl Into<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            ob_type: ob_type.into(),
            over: None,
        }
    }

    pub fn over(mut self, parent: EntityId) -> Self {
        self.over = Some(parent);
        self
    }
}

/// Request to append one diagram morphism instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMorphismInstance {
    pub name: String,
    pub dom: EntityId,
    pub cod: EntityId,
    pub mor_type: TypeExpr,
}

impl NewMorphismInstance {
    pub fn new(
        name: impl Into<String>,
        dom: EntityId,
        cod: EntityId,
        mor_type: impl Into<TypeExpr>,
    ) -> Self {
        Self {
            name: name.into(),
            dom,
            cod,
            mor_type: mor_type.into(),
        }
    }
}

/// Exclusive owner of the notebook being built.
#[derive(Debug, Clone, Default)]
pub(crate) struct NotebookWriter {
    notebook: Notebook,
}

impl NotebookWriter {
    pub(crate) fn push(&mut self, cell: Cell) -> CellId {
        let cell_id = cell.id();
        let kind = match &cell {
            Cell::RichText { .. } => "rich_text",
            Cell::Formal {
                content: FormalContent::Object(_),
                ..
            } => "object",
            Cell::Formal {
                content: FormalContent::Morphism(_),
                ..
            } => "morphism",
        };
        self.notebook.cell_order.push(cell_id);
        self.notebook.cell_contents.insert(cell_id, cell);
        debug!(
            "event=cell_append module=builder status=ok kind={} cell_id={} cells={}",
            kind,
            cell_id,
            self.notebook.len()
        );
        cell_id
    }

    pub(crate) fn push_text(&mut self, text: impl Into<String>) -> CellId {
        self.push(Cell::rich_text(text))
    }

    /// Appends a description cell unless the text is absent or empty.
    ///
    /// Whitespace-only text is kept verbatim as its own cell.
    pub(crate) fn push_description(&mut self, description: Option<&str>) {
        if let Some(text) = description.filter(|value| !value.is_empty()) {
            self.push_text(text);
        }
    }

    /// Appends a formal cell and returns the carried entity id.
    pub(crate) fn push_formal(&mut self, content: impl Into<FormalContent>) -> EntityId {
        let content = content.into();
        let entity_id = content.entity_id();
        self.push(Cell::formal(content));
        entity_id
    }

    pub(crate) fn len(&self) -> usize {
        self.notebook.len()
    }

    pub(crate) fn snapshot(&self) -> Notebook {
        self.notebook.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::NotebookWriter;
    use crate::model::cell::{ObjectDecl, TypeExpr};

    #[test]
    fn only_absent_or_empty_description_adds_no_cell() {
        let mut writer = NotebookWriter::default();
        writer.push_description(None);
        writer.push_description(Some(""));
        assert_eq!(writer.len(), 0);

        writer.push_description(Some("   "));
        writer.push_description(Some("described"));
        assert_eq!(writer.len(), 2);
    }

    #[test]
    fn push_formal_returns_entity_id_not_cell_id() {
        let mut writer = NotebookWriter::default();
        let decl = ObjectDecl::new("A", TypeExpr::basic("Entity"));
        let expected = decl.id;

        let entity_id = writer.push_formal(decl);
        assert_eq!(entity_id, expected);

        let notebook = writer.snapshot();
        let cell_id = notebook.cell_order[0];
        assert_ne!(cell_id.as_uuid(), entity_id.as_uuid());
    }
}
