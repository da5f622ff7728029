//! Boundary with the remote document service.
//!
//! # Responsibility
//! - Declare the [`DocumentApi`] contract consumed by builders.
//! - Wrap it in [`NotebookClient`], which enforces document-kind contracts.
//! - Provide an in-memory implementation for tests and local runs.
//!
//! # Invariants
//! - Kind mismatches are rejected before any remote call.
//! - Remote errors are propagated unchanged; nothing is retried.

mod error;
mod memory;
mod notebook_client;

pub use error::{ApiError, ApiResult, ClientError};
pub use memory::InMemoryDocumentApi;
pub use notebook_client::NotebookClient;

use crate::model::document::{Document, DocumentKind, Link};
use crate::model::id::DocumentId;
use async_trait::async_trait;

/// Access level a caller holds on one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PermissionLevel {
    Read,
    Write,
    Maintain,
    Own,
}

/// Permissions summary for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub max_level: PermissionLevel,
}

/// Writable handle to a persisted document.
///
/// Edits made here are not synchronized anywhere by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveDocument {
    pub ref_id: DocumentId,
    pub document: Document,
}

/// Summary row returned by reference searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefStub {
    pub ref_id: DocumentId,
    pub name: String,
    pub kind: DocumentKind,
}

/// Filter and pagination options for reference searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefSearchQuery {
    /// Case-insensitive name substring.
    pub query: Option<String>,
    pub kind: Option<DocumentKind>,
    /// Zero-based page index.
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Remote document service consumed by this crate.
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// Host name embedded in references produced by this API.
    fn server_host(&self) -> &str;

    async fn create_doc(&self, document: Document) -> ApiResult<DocumentId>;

    async fn get_live_doc(&self, ref_id: DocumentId, kind: DocumentKind)
        -> ApiResult<LiveDocument>;

    async fn duplicate_doc(&self, document: Document) -> ApiResult<DocumentId>;

    async fn get_permissions(&self, ref_id: DocumentId) -> ApiResult<Permissions>;

    async fn search_ref_stubs(&self, query: &RefSearchQuery) -> ApiResult<Vec<RefStub>>;

    async fn get_ref_children_stubs(&self, ref_id: DocumentId) -> ApiResult<Vec<RefStub>>;

    /// Creates a reference that always tracks the latest version of `ref_id`.
    fn make_unversioned_ref(&self, ref_id: DocumentId) -> Link {
        Link::unversioned(ref_id, self.server_host())
    }
}
