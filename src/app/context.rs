use crate::ports::{DocumentStore, GuideSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<D: DocumentStore, G: GuideSource> {
    documents: D,
    guides: G,
}

impl<D: DocumentStore, G: GuideSource> AppContext<D, G> {
    /// Create a new application context.
    pub fn new(documents: D, guides: G) -> Self {
        Self { documents, guides }
    }

    /// Get a reference to the document store.
    pub fn documents(&self) -> &D {
        &self.documents
    }

    /// Get a reference to the guide source.
    pub fn guides(&self) -> &G {
        &self.guides
    }
}
