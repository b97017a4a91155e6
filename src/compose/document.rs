//! Composed config documents.

use crate::resolve::Hierarchy;

/// Whether a document is self-contained or layered on a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// Root document: full plugin wiring plus the complete rule table.
    Full,
    /// Delta document: references the parent it layers on, by the id the
    /// parent is published under in this hierarchy.
    Delta { parent: String },
}

/// An emitted config artifact, ready for the persistence sink.
///
/// Documents are immutable values: composed once per (category, hierarchy)
/// pair and never re-read by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    /// The catalog category this document was composed from.
    pub category_id: String,
    /// The id the document is published under (alias-translated for the
    /// flat hierarchy).
    pub resolved_id: String,
    pub hierarchy: Hierarchy,
    pub kind: DocumentKind,
    /// Full textual body, including the generated-file banner.
    pub body: String,
}

impl ConfigDocument {
    /// File name within the hierarchy's output root.
    pub fn file_name(&self) -> String {
        format!("{}.js", self.resolved_id)
    }

    pub fn is_full(&self) -> bool {
        self.kind == DocumentKind::Full
    }

    /// The parent reference for delta documents.
    pub fn parent_ref(&self) -> Option<&str> {
        match &self.kind {
            DocumentKind::Full => None,
            DocumentKind::Delta { parent } => Some(parent),
        }
    }
}
