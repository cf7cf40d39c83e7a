use include_dir::{Dir, include_dir};

use crate::domain::{AppError, GUIDE_FILE_NAME, GuideDocument};
use crate::ports::GuideSource;

static GUIDE_ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

/// Guide source backed by assets compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedGuideStore;

impl EmbeddedGuideStore {
    pub fn new() -> Self {
        Self
    }
}

impl GuideSource for EmbeddedGuideStore {
    fn guide(&self) -> Result<GuideDocument, AppError> {
        let content = GUIDE_ASSETS
            .get_file(GUIDE_FILE_NAME)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| {
                AppError::config_error(format!("Missing guide asset: {}", GUIDE_FILE_NAME))
            })?;

        Ok(GuideDocument { file_name: GUIDE_FILE_NAME, content })
    }
}
