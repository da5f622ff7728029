//! Remote client error types.

use crate::model::document::DocumentKind;
use crate::model::id::DocumentId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reported by a [`super::DocumentApi`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound(DocumentId),
    PermissionDenied(DocumentId),
    /// The backend refused the request.
    Rejected(String),
    /// The backend could not be reached or its state is unusable.
    Transport(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "document not found: {id}"),
            Self::PermissionDenied(id) => write!(f, "permission denied for document: {id}"),
            Self::Rejected(message) => write!(f, "request rejected: {message}"),
            Self::Transport(message) => write!(f, "transport failure: {message}"),
        }
    }
}

impl Error for ApiError {}

/// Error returned by [`super::NotebookClient`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A kind-specific operation received a document of another kind.
    WrongDocumentKind {
        expected: DocumentKind,
        actual: DocumentKind,
    },
    /// Error raised by the remote API, passed through unchanged.
    Api(ApiError),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongDocumentKind { expected, actual } => write!(
                f,
                "document must be of type '{expected}', got '{actual}'"
            ),
            Self::Api(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            Self::WrongDocumentKind { .. } => None,
        }
    }
}

impl From<ApiError> for ClientError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}
