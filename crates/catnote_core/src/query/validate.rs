//! Structural document validation.
//!
//! Checks document-level fields only. Cell contents and cross-references are
//! not inspected here; see `query::integrity` for that.

use crate::model::document::{Document, DocumentKind, DOCUMENT_VERSION};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First structural rule a document violates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentValidationError {
    EmptyName,
    /// Only `model` and `diagram` documents are accepted.
    UnsupportedKind(DocumentKind),
    UnsupportedVersion(String),
    MissingModelReference,
}

impl Display for DocumentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "document name must not be empty"),
            Self::UnsupportedKind(kind) => {
                write!(f, "document type `{kind}` is not model or diagram")
            }
            Self::UnsupportedVersion(version) => write!(
                f,
                "document version `{version}` is unsupported; expected `{DOCUMENT_VERSION}`"
            ),
            Self::MissingModelReference => {
                write!(f, "diagram document must reference its model")
            }
        }
    }
}

impl Error for DocumentValidationError {}

/// Checks document structure, reporting the first violated rule.
///
/// The notebook's order list and content map always exist on a typed
/// `Document`, so only the remaining rules can fail.
pub fn check_document(doc: &Document) -> Result<(), DocumentValidationError> {
    if doc.name.is_empty() {
        return Err(DocumentValidationError::EmptyName);
    }
    match doc.kind {
        DocumentKind::Model | DocumentKind::Diagram => {}
        other => return Err(DocumentValidationError::UnsupportedKind(other)),
    }
    if doc.version != DOCUMENT_VERSION {
        return Err(DocumentValidationError::UnsupportedVersion(
            doc.version.clone(),
        ));
    }
    if doc.kind == DocumentKind::Diagram && doc.model.is_none() {
        return Err(DocumentValidationError::MissingModelReference);
    }
    Ok(())
}

/// Returns whether `doc` passes [`check_document`].
pub fn validate_document(doc: &Document) -> bool {
    check_document(doc).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{check_document, DocumentValidationError};
    use crate::model::document::{Document, DocumentKind, Notebook};

    #[test]
    fn analysis_kind_is_reported_with_kind() {
        let mut doc = Document::model("m", "simple-schema", Notebook::new());
        doc.kind = DocumentKind::Analysis;
        assert_eq!(
            check_document(&doc),
            Err(DocumentValidationError::UnsupportedKind(
                DocumentKind::Analysis
            ))
        );
    }

    #[test]
    fn version_error_names_expected_version() {
        let mut doc = Document::model("m", "simple-schema", Notebook::new());
        doc.version = "2".to_string();
        let err = check_document(&doc).expect_err("version 2 must be rejected");
        assert!(err.to_string().contains("expected `1`"));
    }
}
