//! Notebook document model.
//!
//! # Responsibility
//! - Define the persisted document shape shared by models and diagrams.
//! - Keep cell order and cell contents together in one `Notebook`.
//!
//! # Invariants
//! - `version` is the literal [`DOCUMENT_VERSION`] for every document built
//!   by this crate.
//! - Model documents carry `theory`; diagram documents carry `model`.
//! - `cell_order` preserves append order exactly; it carries no dependency
//!   semantics.

use crate::model::cell::Cell;
use crate::model::id::{CellId, DocumentId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// The only persisted document version recognized today.
pub const DOCUMENT_VERSION: &str = "1";

/// Document kind, serialized as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Model,
    Diagram,
    Analysis,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Diagram => "diagram",
            Self::Analysis => "analysis",
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable reference to another persisted document.
///
/// Diagrams use this to point at the model they populate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// `None` tracks the latest version of the target.
    #[serde(rename = "_version")]
    pub version: Option<String>,
    #[serde(rename = "_server")]
    pub server: String,
}

impl Link {
    /// Creates an unversioned reference to `id` on `server`.
    pub fn unversioned(id: DocumentId, server: impl Into<String>) -> Self {
        Self {
            id,
            version: None,
            server: server.into(),
        }
    }
}

/// Ordered cell collection of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    pub cell_contents: BTreeMap<CellId, Cell>,
    pub cell_order: Vec<CellId>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cell_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_order.is_empty()
    }

    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cell_contents.get(&id)
    }

    /// Iterates cells in notebook order.
    ///
    /// Order entries without content are skipped; `query::check_references`
    /// reports them.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cell_order
            .iter()
            .filter_map(|id| self.cell_contents.get(id))
    }
}

/// Persisted notebook document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    /// Serialized as `type` to match the external schema.
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub version: String,
    /// Theory identifier. Present on model documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theory: Option<String>,
    /// Parent model reference. Present on diagram documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Link>,
    pub notebook: Notebook,
}

impl Document {
    /// Creates a model document over `theory`.
    pub fn model(name: impl Into<String>, theory: impl Into<String>, notebook: Notebook) -> Self {
        Self {
            name: name.into(),
            kind: DocumentKind::Model,
            version: DOCUMENT_VERSION.to_string(),
            theory: Some(theory.into()),
            model: None,
            notebook,
        }
    }

    /// Creates a diagram document populating the model behind `model_ref`.
    pub fn diagram(name: impl Into<String>, model_ref: Link, notebook: Notebook) -> Self {
        Self {
            name: name.into(),
            kind: DocumentKind::Diagram,
            version: DOCUMENT_VERSION.to_string(),
            theory: None,
            model: Some(model_ref),
            notebook,
        }
    }
}
