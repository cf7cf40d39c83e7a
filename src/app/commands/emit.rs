use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{DocumentStore, GuideSource};

/// Result of a successful emit.
#[derive(Debug, Clone)]
pub struct EmitOutcome {
    /// Path of the written guide.
    pub path: PathBuf,
}

/// Execute the emit command.
///
/// Writes the embedded guide into the document store, overwriting any
/// previous copy at the same path.
pub fn execute<D, G>(ctx: &AppContext<D, G>) -> Result<EmitOutcome, AppError>
where
    D: DocumentStore,
    G: GuideSource,
{
    let guide = ctx.guides().guide()?;
    let path = ctx.documents().write_document(guide.file_name, guide.content)?;

    Ok(EmitOutcome { path })
}
