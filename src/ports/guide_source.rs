use crate::domain::{AppError, GuideDocument};

/// Provider of the guide document.
pub trait GuideSource {
    /// Resolve the guide to be written.
    fn guide(&self) -> Result<GuideDocument, AppError>;
}
