//! In-process [`DocumentApi`] backed by a mutex-guarded map.
//!
//! # Invariants
//! - Every created or duplicated document gets a fresh v4 `DocumentId`.
//! - Documents created here grant `Own` until overridden.
//! - Children of a document are the diagrams whose `model` link targets it.

use super::{
    ApiError, ApiResult, DocumentApi, LiveDocument, PermissionLevel, Permissions,
    RefSearchQuery, RefStub,
};
use crate::model::document::{Document, DocumentKind};
use crate::model::id::DocumentId;
use async_trait::async_trait;
use log::{debug, error};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Default)]
struct StoreState {
    documents: BTreeMap<DocumentId, StoredDocument>,
    creation_order: Vec<DocumentId>,
}

#[derive(Debug)]
struct StoredDocument {
    document: Document,
    /// `None` means access is denied.
    permission: Option<PermissionLevel>,
}

/// Document store living in process memory.
#[derive(Debug)]
pub struct InMemoryDocumentApi {
    server_host: String,
    state: Mutex<StoreState>,
}

impl InMemoryDocumentApi {
    pub fn new(server_host: impl Into<String>) -> Self {
        Self {
            server_host: server_host.into(),
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Number of stored documents.
    ///
    /// # Errors
    /// - `Transport` when the store lock is poisoned.
    pub fn len(&self) -> ApiResult<usize> {
        Ok(self.state()?.documents.len())
    }

    pub fn is_empty(&self) -> ApiResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Returns a copy of the stored document.
    pub fn document(&self, ref_id: DocumentId) -> Option<Document> {
        let state = self.state().ok()?;
        state
            .documents
            .get(&ref_id)
            .map(|stored| stored.document.clone())
    }

    /// Overrides the caller's permission on `ref_id`; `None` denies access.
    pub fn set_permission(
        &self,
        ref_id: DocumentId,
        level: Option<PermissionLevel>,
    ) -> ApiResult<()> {
        let mut state = self.state()?;
        let stored = state
            .documents
            .get_mut(&ref_id)
            .ok_or(ApiError::NotFound(ref_id))?;
        stored.permission = level;
        Ok(())
    }

    fn state(&self) -> ApiResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| {
            error!("event=store_lock module=client status=error error_code=lock_poisoned");
            ApiError::Transport("in-memory document store lock poisoned".to_string())
        })
    }

    fn insert(&self, document: Document) -> ApiResult<DocumentId> {
        let ref_id = DocumentId::generate();
        let mut state = self.state()?;
        debug!(
            "event=doc_store module=client status=ok kind={} ref_id={} cells={}",
            document.kind,
            ref_id,
            document.notebook.len()
        );
        state.documents.insert(
            ref_id,
            StoredDocument {
                document,
                permission: Some(PermissionLevel::Own),
            },
        );
        state.creation_order.push(ref_id);
        Ok(ref_id)
    }

    fn stubs_where(&self, keep: impl Fn(&Document) -> bool) -> ApiResult<Vec<RefStub>> {
        let state = self.state()?;
        Ok(state
            .creation_order
            .iter()
            .filter_map(|ref_id| {
                let stored = state.documents.get(ref_id)?;
                if stored.permission.is_none() || !keep(&stored.document) {
                    return None;
                }
                Some(RefStub {
                    ref_id: *ref_id,
                    name: stored.document.name.clone(),
                    kind: stored.document.kind,
                })
            })
            .collect())
    }
}

#[async_trait]
impl DocumentApi for InMemoryDocumentApi {
    fn server_host(&self) -> &str {
        &self.server_host
    }

    async fn create_doc(&self, document: Document) -> ApiResult<DocumentId> {
        self.insert(document)
    }

    async fn get_live_doc(
        &self,
        ref_id: DocumentId,
        kind: DocumentKind,
    ) -> ApiResult<LiveDocument> {
        let state = self.state()?;
        let stored = state
            .documents
            .get(&ref_id)
            .ok_or(ApiError::NotFound(ref_id))?;
        if stored.permission.is_none() {
            return Err(ApiError::PermissionDenied(ref_id));
        }
        if stored.document.kind != kind {
            return Err(ApiError::Rejected(format!(
                "document {ref_id} is a {}, not a {kind}",
                stored.document.kind
            )));
        }
        Ok(LiveDocument {
            ref_id,
            document: stored.document.clone(),
        })
    }

    async fn duplicate_doc(&self, document: Document) -> ApiResult<DocumentId> {
        self.insert(document)
    }

    async fn get_permissions(&self, ref_id: DocumentId) -> ApiResult<Permissions> {
        let state = self.state()?;
        let stored = state
            .documents
            .get(&ref_id)
            .ok_or(ApiError::NotFound(ref_id))?;
        stored
            .permission
            .map(|max_level| Permissions { max_level })
            .ok_or(ApiError::PermissionDenied(ref_id))
    }

    async fn search_ref_stubs(&self, query: &RefSearchQuery) -> ApiResult<Vec<RefStub>> {
        let needle = query
            .query
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase);
        let matches = self.stubs_where(|document| {
            query.kind.map_or(true, |kind| document.kind == kind)
                && needle
                    .as_deref()
                    .map_or(true, |needle| document.name.to_lowercase().contains(needle))
        })?;

        let page_size = query
            .page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE) as usize;
        let skip = (query.page.unwrap_or(0) as usize).saturating_mul(page_size);
        Ok(matches.into_iter().skip(skip).take(page_size).collect())
    }

    async fn get_ref_children_stubs(&self, ref_id: DocumentId) -> ApiResult<Vec<RefStub>> {
        let exists = self.state()?.documents.contains_key(&ref_id);
        if !exists {
            return Err(ApiError::NotFound(ref_id));
        }
        self.stubs_where(|document| {
            document
                .model
                .as_ref()
                .is_some_and(|link| link.id == ref_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryDocumentApi;
    use crate::client::{ApiError, DocumentApi};
    use crate::model::document::{Document, Notebook};
    use std::sync::Arc;

    #[tokio::test]
    async fn len_counts_stored_documents() {
        let api = InMemoryDocumentApi::new("localhost");
        assert_eq!(api.len(), Ok(0));
        assert_eq!(api.is_empty(), Ok(true));

        api.create_doc(Document::model("m", "simple-schema", Notebook::new()))
            .await
            .expect("create should succeed");
        assert_eq!(api.len(), Ok(1));
        assert_eq!(api.is_empty(), Ok(false));
    }

    #[test]
    fn poisoned_store_reports_transport_error_instead_of_empty() {
        let api = Arc::new(InMemoryDocumentApi::new("localhost"));
        let holder = Arc::clone(&api);
        let joined = std::thread::spawn(move || {
            let _guard = holder.state.lock().expect("first lock should succeed");
            panic!("poison the store lock");
        })
        .join();
        assert!(joined.is_err());

        assert!(matches!(api.len(), Err(ApiError::Transport(_))));
        assert!(matches!(api.is_empty(), Err(ApiError::Transport(_))));
        assert!(api.document(crate::model::id::DocumentId::generate()).is_none());
    }
}
