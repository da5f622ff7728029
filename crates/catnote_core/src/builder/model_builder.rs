//! Builder for `model` documents.
//!
//! # Responsibility
//! - Append objects, morphisms and prose to a model notebook.
//! - Finalize the notebook into a `Document` and hand it to the client.
//!
//! # Invariants
//! - `theory` is stored verbatim; no theory registry lookup happens here.
//! - `add_object`/`add_morphism` return entity ids; `add_text` returns a
//!   cell id.

use super::{NewMorphism, NewObject, NotebookWriter};
use crate::client::{ClientError, DocumentApi, NotebookClient};
use crate::model::cell::{MorphismDecl, ObjectDecl};
use crate::model::document::Document;
use crate::model::id::{CellId, DocumentId, EntityId};
use log::info;

/// Incremental builder for one model document.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    name: String,
    theory: String,
    writer: NotebookWriter,
}

impl ModelBuilder {
    /// Starts an empty model notebook named `name` over `theory`.
    pub fn new(name: impl Into<String>, theory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            theory: theory.into(),
            writer: NotebookWriter::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theory(&self) -> &str {
        &self.theory
    }

    /// Number of cells appended so far, description cells included.
    pub fn cell_count(&self) -> usize {
        self.writer.len()
    }

    /// Appends an object cell, preceded by its description when given.
    ///
    /// Returns the object's entity id, which is what morphisms reference.
    pub fn add_object(&mut self, request: NewObject) -> EntityId {
        let NewObject {
            name,
            ob_type,
            description,
        } = request;
        self.writer.push_description(description.as_deref());
        self.writer.push_formal(ObjectDecl::new(name, ob_type))
    }

    /// Appends a morphism cell, preceded by its description when given.
    ///
    /// `dom` and `cod` are stored verbatim without existence checks.
    pub fn add_morphism(&mut self, request: NewMorphism) -> EntityId {
        let NewMorphism {
            name,
            dom,
            cod,
            mor_type,
            description,
        } = request;
        self.writer.push_description(description.as_deref());
        self.writer
            .push_formal(MorphismDecl::new(name, mor_type, dom, cod))
    }

    /// Appends a standalone rich-text cell and returns its cell id.
    pub fn add_text(&mut self, content: impl Into<String>) -> CellId {
        self.writer.push_text(content)
    }

    /// Projects current state into a model document.
    pub fn build(&self) -> Document {
        Document::model(
            self.name.clone(),
            self.theory.clone(),
            self.writer.snapshot(),
        )
    }

    /// Builds the document and persists it through `client`.
    ///
    /// Client errors are returned unchanged; nothing is retried.
    pub async fn create<A>(&self, client: &NotebookClient<A>) -> Result<DocumentId, ClientError>
    where
        A: DocumentApi + ?Sized,
    {
        let document = self.build();
        let cells = document.notebook.len();
        let ref_id = client.create_model(document).await?;
        info!(
            "event=model_create module=builder status=ok ref_id={} cells={}",
            ref_id, cells
        );
        Ok(ref_id)
    }
}
