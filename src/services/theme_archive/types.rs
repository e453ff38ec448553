use crate::services::wallpaper::Screen;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Images found in a 3DS theme archive.
///
/// Either slot may be empty; a partial result is still a successful import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Archive file name without its extension.
    pub theme_name: String,
    /// Fresh directory holding the extracted entries. Never removed here.
    pub scratch_dir: PathBuf,
    pub top: Option<PathBuf>,
    pub bottom: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "found", rename_all = "snake_case")]
pub enum ExtractionStatus {
    Complete,
    Partial(Screen),
    Empty,
}

impl ExtractionResult {
    pub fn image(&self, screen: Screen) -> Option<&Path> {
        match screen {
            Screen::Top => self.top.as_deref(),
            Screen::Bottom => self.bottom.as_deref(),
        }
    }

    pub(super) fn set_image(&mut self, screen: Screen, path: PathBuf) {
        match screen {
            Screen::Top => self.top = Some(path),
            Screen::Bottom => self.bottom = Some(path),
        }
    }

    pub fn status(&self) -> ExtractionStatus {
        match (&self.top, &self.bottom) {
            (Some(_), Some(_)) => ExtractionStatus::Complete,
            (Some(_), None) => ExtractionStatus::Partial(Screen::Top),
            (None, Some(_)) => ExtractionStatus::Partial(Screen::Bottom),
            (None, None) => ExtractionStatus::Empty,
        }
    }
}

/// Classify an archive entry by its base name.
///
/// The last `/` or `\` separated segment is lower-cased and matched against
/// `pt_top*.png` and `pt_bottom*.png`. Directory depth is irrelevant.
pub fn classify_entry(entry_name: &str) -> Option<Screen> {
    let base_name = entry_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(entry_name)
        .to_lowercase();

    if !base_name.ends_with(".png") {
        return None;
    }

    Screen::ALL
        .into_iter()
        .find(|screen| base_name.starts_with(screen.theme_prefix()))
}
