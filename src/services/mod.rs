mod document_filesystem;
mod guide_assets;

pub use document_filesystem::FilesystemDocumentStore;
pub use guide_assets::EmbeddedGuideStore;
