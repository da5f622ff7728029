//! Kind-checked wrapper over a [`DocumentApi`].

use super::{
    ApiError, ClientError, DocumentApi, LiveDocument, PermissionLevel, Permissions,
    RefSearchQuery, RefStub,
};
use crate::model::document::{Document, DocumentKind, Link};
use crate::model::id::DocumentId;
use log::{info, warn};
use std::sync::Arc;

/// Client used by builders to persist and reopen notebook documents.
pub struct NotebookClient<A: DocumentApi + ?Sized> {
    api: Arc<A>,
}

impl<A: DocumentApi + ?Sized> Clone for NotebookClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: DocumentApi + ?Sized> NotebookClient<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Persists a model document.
    ///
    /// # Errors
    /// - `WrongDocumentKind` when `document` is not a model.
    /// - `Api` with the backend error unchanged.
    pub async fn create_model(&self, document: Document) -> Result<DocumentId, ClientError> {
        self.create_of_kind(DocumentKind::Model, document).await
    }

    /// Persists a diagram document.
    ///
    /// # Errors
    /// - `WrongDocumentKind` when `document` is not a diagram.
    /// - `Api` with the backend error unchanged.
    pub async fn create_diagram(&self, document: Document) -> Result<DocumentId, ClientError> {
        self.create_of_kind(DocumentKind::Diagram, document).await
    }

    pub async fn get_model(&self, ref_id: DocumentId) -> Result<LiveDocument, ClientError> {
        Ok(self.api.get_live_doc(ref_id, DocumentKind::Model).await?)
    }

    pub async fn get_diagram(&self, ref_id: DocumentId) -> Result<LiveDocument, ClientError> {
        Ok(self.api.get_live_doc(ref_id, DocumentKind::Diagram).await?)
    }

    pub async fn duplicate_document(&self, document: Document) -> Result<DocumentId, ClientError> {
        Ok(self.api.duplicate_doc(document).await?)
    }

    pub async fn get_permissions(&self, ref_id: DocumentId) -> Result<Permissions, ClientError> {
        Ok(self.api.get_permissions(ref_id).await?)
    }

    /// Returns an unversioned reference suitable for a diagram's `model` field.
    pub fn make_ref(&self, ref_id: DocumentId) -> Link {
        self.api.make_unversioned_ref(ref_id)
    }

    /// Returns whether the caller may write `ref_id`.
    ///
    /// A permission denial is reported as `false`; other errors propagate.
    pub async fn can_write(&self, ref_id: DocumentId) -> Result<bool, ClientError> {
        match self.api.get_permissions(ref_id).await {
            Ok(permissions) => Ok(permissions.max_level >= PermissionLevel::Write),
            Err(ApiError::PermissionDenied(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn search_refs(&self, query: &RefSearchQuery) -> Result<Vec<RefStub>, ClientError> {
        Ok(self.api.search_ref_stubs(query).await?)
    }

    pub async fn get_children(&self, ref_id: DocumentId) -> Result<Vec<RefStub>, ClientError> {
        Ok(self.api.get_ref_children_stubs(ref_id).await?)
    }

    /// Underlying API handle.
    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    async fn create_of_kind(
        &self,
        expected: DocumentKind,
        document: Document,
    ) -> Result<DocumentId, ClientError> {
        if document.kind != expected {
            warn!(
                "event=doc_create module=client status=error error_code=wrong_kind expected={} actual={}",
                expected, document.kind
            );
            return Err(ClientError::WrongDocumentKind {
                expected,
                actual: document.kind,
            });
        }

        let ref_id = self.api.create_doc(document).await?;
        info!(
            "event=doc_create module=client status=ok kind={} ref_id={}",
            expected, ref_id
        );
        Ok(ref_id)
    }
}
