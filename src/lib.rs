//! mpguide: write the bundled Multipass + Podman setup guide into the current directory.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::{AppContext, commands::emit as emit_command};
use services::{EmbeddedGuideStore, FilesystemDocumentStore};

pub use app::commands::emit::EmitOutcome;
pub use domain::{AppError, GUIDE_FILE_NAME, SECTION_SUMMARY};

/// Write the Multipass setup guide to `multipass_setup_guide.md` in the
/// current directory and print a confirmation summary.
///
/// Any previous file at that path is overwritten without prompting.
pub fn emit() -> Result<EmitOutcome, AppError> {
    let documents = FilesystemDocumentStore::current()?;
    let guides = EmbeddedGuideStore::new();
    let ctx = AppContext::new(documents, guides);

    let outcome = emit_command::execute(&ctx)?;
    println!("✅ Created comprehensive Multipass setup guide: {}", GUIDE_FILE_NAME);
    println!("\nFile contains:");
    for line in SECTION_SUMMARY {
        println!("{}", line);
    }
    Ok(outcome)
}
