//! Commands related to 3DS theme import.

use super::session::Session;
use crate::services::theme_archive::{self, ExtractionStatus};
use crate::types::errors::CommandResult;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub archive_path: PathBuf,
    pub theme_name: String,
    pub status: ExtractionStatus,
    pub top: Option<PathBuf>,
    pub bottom: Option<PathBuf>,
    pub scratch_dir: PathBuf,
}

/// Extract a theme archive and apply whatever it contains to `session`.
///
/// A theme with one or no matching images still succeeds; check `status`.
/// On error the session is left untouched.
pub fn import_theme_cmd(session: &mut Session, archive_path: &Path) -> CommandResult<ImportReport> {
    let extraction = theme_archive::extract_theme_images(archive_path)?;

    match extraction.status() {
        ExtractionStatus::Complete => {}
        ExtractionStatus::Partial(found) => log::warn!(
            "[Import] Only the {found} image was found in {}",
            archive_path.display()
        ),
        ExtractionStatus::Empty => log::warn!(
            "[Import] No pt_top/pt_bottom image found in {}",
            archive_path.display()
        ),
    }

    session.apply_extraction(&extraction);

    Ok(ImportReport {
        archive_path: archive_path.to_path_buf(),
        status: extraction.status(),
        theme_name: extraction.theme_name,
        top: extraction.top,
        bottom: extraction.bottom,
        scratch_dir: extraction.scratch_dir,
    })
}
