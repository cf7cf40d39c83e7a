pub mod error;
pub mod guide;

pub use error::AppError;
pub use guide::{GUIDE_FILE_NAME, GuideDocument, SECTION_SUMMARY};
