//! Core notebook document logic for CatNote.
//! Builds and inspects notebooks describing categorical models and diagrams.

pub mod builder;
pub mod client;
pub mod logging;
pub mod model;
pub mod query;
pub mod workflow;

pub use builder::{
    DiagramBuilder, ModelBuilder, NewMorphism, NewMorphismInstance, NewObject, NewObjectInstance,
};
pub use client::{
    ApiError, ApiResult, ClientError, DocumentApi, InMemoryDocumentApi, LiveDocument,
    NotebookClient, PermissionLevel, Permissions, RefSearchQuery, RefStub,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::cell::{Cell, FormalContent, MorphismDecl, ObRef, ObjectDecl, RichText, TypeExpr};
pub use model::document::{Document, DocumentKind, Link, Notebook, DOCUMENT_VERSION};
pub use model::id::{new_id, CellId, DocumentId, EntityId};
pub use query::{
    check_document, check_references, find_morphism_by_name, find_object_by_name, formal_cells,
    morphism_ids, object_ids, validate_document, DanglingReference, DocumentValidationError,
    ReferenceRole,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
