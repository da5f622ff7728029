//! Notebook cell model.
//!
//! # Responsibility
//! - Define the tagged cell shapes stored in a notebook.
//! - Provide constructors that allocate cell and entity identifiers.
//!
//! # Invariants
//! - Every cell owns a `CellId` distinct from any `EntityId` it carries.
//! - A formal cell carries exactly one object or morphism declaration.
//! - References (`dom`, `cod`, `over`) name entity ids, never cell ids.

use crate::model::id::{CellId, EntityId};
use serde::{Deserialize, Serialize};

/// One unit of notebook content.
///
/// `==` compares full contents; a cell's identity is [`Cell::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum Cell {
    /// Free-form prose. Carries no cross-references.
    RichText { id: CellId, content: RichText },
    /// A typed categorical declaration.
    Formal { id: CellId, content: FormalContent },
}

impl Cell {
    /// Creates a rich-text cell with a freshly generated cell id.
    pub fn rich_text(text: impl Into<String>) -> Self {
        Self::RichText {
            id: CellId::generate(),
            content: RichText::new(text),
        }
    }

    /// Wraps a declaration in a formal cell with a freshly generated cell id.
    pub fn formal(content: impl Into<FormalContent>) -> Self {
        Self::Formal {
            id: CellId::generate(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> CellId {
        match self {
            Self::RichText { id, .. } | Self::Formal { id, .. } => *id,
        }
    }

    pub fn as_formal(&self) -> Option<&FormalContent> {
        match self {
            Self::Formal { content, .. } => Some(content),
            Self::RichText { .. } => None,
        }
    }

    pub fn as_rich_text(&self) -> Option<&str> {
        match self {
            Self::RichText { content, .. } => Some(content.content.as_str()),
            Self::Formal { .. } => None,
        }
    }
}

/// Rich-text payload. Serialized with its own `"tag": "rich_text"` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename = "rich_text")]
pub struct RichText {
    pub content: String,
}

impl RichText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Payload of a formal cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum FormalContent {
    Object(ObjectDecl),
    Morphism(MorphismDecl),
}

impl FormalContent {
    /// Entity id of the carried declaration.
    pub fn entity_id(&self) -> EntityId {
        match self {
            Self::Object(decl) => decl.id,
            Self::Morphism(decl) => decl.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Object(decl) => decl.name.as_str(),
            Self::Morphism(decl) => decl.name.as_str(),
        }
    }
}

impl From<ObjectDecl> for FormalContent {
    fn from(value: ObjectDecl) -> Self {
        Self::Object(value)
    }
}

impl From<MorphismDecl> for FormalContent {
    fn from(value: MorphismDecl) -> Self {
        Self::Morphism(value)
    }
}

/// Object declaration (model object or diagram object instance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDecl {
    pub id: EntityId,
    pub name: String,
    pub ob_type: TypeExpr,
    /// Parent object this instance is scoped under. Diagram documents only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over: Option<ObRef>,
}

impl ObjectDecl {
    /// Creates an object declaration with a freshly generated entity id.
    pub fn new(name: impl Into<String>, ob_type: TypeExpr) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            ob_type,
            over: None,
        }
    }

    /// Returns the entity id named by `over`, if any.
    pub fn over_id(&self) -> Option<EntityId> {
        self.over.as_ref().map(ObRef::entity_id)
    }
}

/// Morphism declaration between two object entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MorphismDecl {
    pub id: EntityId,
    pub name: String,
    pub mor_type: TypeExpr,
    pub dom: ObRef,
    pub cod: ObRef,
}

impl MorphismDecl {
    /// Creates a morphism declaration with a freshly generated entity id.
    ///
    /// `dom` and `cod` are stored verbatim; no existence check is made.
    pub fn new(
        name: impl Into<String>,
        mor_type: TypeExpr,
        dom: EntityId,
        cod: EntityId,
    ) -> Self {
        Self {
            id: EntityId::generate(),
            name: name.into(),
            mor_type,
            dom: ObRef::Basic(dom),
            cod: ObRef::Basic(cod),
        }
    }

    pub fn dom_id(&self) -> EntityId {
        self.dom.entity_id()
    }

    pub fn cod_id(&self) -> EntityId {
        self.cod.entity_id()
    }
}

/// Type expression for object and morphism types.
///
/// Only basic named types exist today. Richer expressions are expected, so
/// downstream matches must keep a fallback arm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", content = "content")]
#[non_exhaustive]
pub enum TypeExpr {
    Basic(String),
}

impl TypeExpr {
    pub fn basic(name: impl Into<String>) -> Self {
        Self::Basic(name.into())
    }

    /// Returns the type name when this is a basic type.
    pub fn as_basic(&self) -> Option<&str> {
        match self {
            Self::Basic(name) => Some(name.as_str()),
        }
    }
}

impl From<&str> for TypeExpr {
    fn from(value: &str) -> Self {
        Self::Basic(value.to_string())
    }
}

impl From<String> for TypeExpr {
    fn from(value: String) -> Self {
        Self::Basic(value)
    }
}

/// Reference to an object entity from a morphism or object instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", content = "content")]
#[non_exhaustive]
pub enum ObRef {
    Basic(EntityId),
}

impl ObRef {
    pub fn entity_id(&self) -> EntityId {
        match self {
            Self::Basic(id) => *id,
        }
    }
}

impl From<EntityId> for ObRef {
    fn from(value: EntityId) -> Self {
        Self::Basic(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, FormalContent, MorphismDecl, ObjectDecl, TypeExpr};

    #[test]
    fn formal_cell_id_differs_from_entity_id() {
        let decl = ObjectDecl::new("Agent", TypeExpr::basic("Entity"));
        let entity_id = decl.id;
        let cell = Cell::formal(decl);

        assert_ne!(cell.id().as_uuid(), entity_id.as_uuid());
        assert_eq!(
            cell.as_formal().map(FormalContent::entity_id),
            Some(entity_id)
        );
    }

    #[test]
    fn morphism_stores_references_verbatim() {
        let dom = ObjectDecl::new("A", TypeExpr::basic("Entity"));
        let cod = ObjectDecl::new("B", TypeExpr::basic("Entity"));
        let mor = MorphismDecl::new("rel", TypeExpr::basic("Hom"), dom.id, cod.id);

        assert_eq!(mor.dom_id(), dom.id);
        assert_eq!(mor.cod_id(), cod.id);
        assert_ne!(mor.id, dom.id);
    }

    #[test]
    fn equality_compares_contents_while_identity_is_cell_id() {
        let original = Cell::rich_text("draft");
        let mut edited = original.clone();
        if let Cell::RichText { content, .. } = &mut edited {
            content.content = "final".to_string();
        }

        assert_eq!(original.id(), edited.id());
        assert_ne!(original, edited);
    }

    #[test]
    fn rich_text_cell_exposes_text_only() {
        let cell = Cell::rich_text("hello");
        assert_eq!(cell.as_rich_text(), Some("hello"));
        assert!(cell.as_formal().is_none());
    }
}
