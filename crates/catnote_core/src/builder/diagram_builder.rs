//! Builder for `diagram` documents.
//!
//! # Responsibility
//! - Append object instances, morphism instances and prose to a diagram.
//! - Finalize the notebook into a `Document` bound to its parent model.
//!
//! # Invariants
//! - `model_ref` is stored verbatim and always present on built documents.
//! - Instance operations take no description; use `add_text` for prose.

use super::{NewMorphismInstance, NewObjectInstance, NotebookWriter};
use crate::client::{ClientError, DocumentApi, NotebookClient};
use crate::model::cell::{MorphismDecl, ObRef, ObjectDecl};
use crate::model::document::{Document, Link};
use crate::model::id::{CellId, DocumentId, EntityId};
use log::info;

/// Incremental builder for one diagram document.
#[derive(Debug, Clone)]
pub struct DiagramBuilder {
    name: String,
    model_ref: Link,
    writer: NotebookWriter,
}

impl DiagramBuilder {
    /// Starts an empty diagram notebook named `name` over `model_ref`.
    pub fn new(name: impl Into<String>, model_ref: Link) -> Self {
        Self {
            name: name.into(),
            model_ref,
            writer: NotebookWriter::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_ref(&self) -> &Link {
        &self.model_ref
    }

    pub fn cell_count(&self) -> usize {
        self.writer.len()
    }

    /// Appends an object instance and returns its entity id.
    ///
    /// `over` is stored verbatim without existence checks.
    pub fn add_object_instance(&mut self, request: NewObjectInstance) -> EntityId {
        let NewObjectInstance {
            name,
            ob_type,
            over,
        } = request;
        let mut decl = ObjectDecl::new(name, ob_type);
        decl.over = over.map(ObRef::from);
        self.writer.push_formal(decl)
    }

    /// Appends a morphism instance and returns its entity id.
    pub fn add_morphism_instance(&mut self, request: NewMorphismInstance) -> EntityId {
        let NewMorphismInstance {
            name,
            dom,
            cod,
            mor_type,
        } = request;
        self.writer
            .push_formal(MorphismDecl::new(name, mor_type, dom, cod))
    }

    /// Appends a standalone rich-text cell and returns its cell id.
    pub fn add_text(&mut self, content: impl Into<String>) -> CellId {
        self.writer.push_text(content)
    }

    /// Projects current state into a diagram document.
    pub fn build(&self) -> Document {
        Document::diagram(
            self.name.clone(),
            self.model_ref.clone(),
            self.writer.snapshot(),
        )
    }

    /// Builds the document and persists it through `client`.
    pub async fn create<A>(&self, client: &NotebookClient<A>) -> Result<DocumentId, ClientError>
    where
        A: DocumentApi + ?Sized,
    {
        let document = self.build();
        let cells = document.notebook.len();
        let ref_id = client.create_diagram(document).await?;
        info!(
            "event=diagram_create module=builder status=ok ref_id={} model_id={} cells={}",
            ref_id, self.model_ref.id, cells
        );
        Ok(ref_id)
    }
}
