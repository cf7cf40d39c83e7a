mod document_store;
mod guide_source;

pub use document_store::DocumentStore;
pub use guide_source::GuideSource;
