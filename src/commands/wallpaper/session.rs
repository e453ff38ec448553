//! Selections made before a generation run.

use crate::services::theme_archive::ExtractionResult;
use crate::services::wallpaper::Screen;
use crate::types::errors::{CommandError, CommandResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// In-progress choices of a single adapter run.
///
/// Images can come from a theme import, from explicit picks, or a mix:
/// whichever was set last for a screen wins.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    pub top_image: Option<PathBuf>,
    pub bottom_image: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Name of the last imported theme; outputs go into a subfolder of that name.
    pub imported_theme: Option<String>,
}

/// Everything a generation run needs, guaranteed present.
#[derive(Debug, Clone, Copy)]
pub struct ReadySession<'a> {
    pub top_image: &'a Path,
    pub bottom_image: &'a Path,
    pub output_dir: &'a Path,
    pub imported_theme: Option<&'a str>,
}

impl ReadySession<'_> {
    pub fn image(&self, screen: Screen) -> &Path {
        match screen {
            Screen::Top => self.top_image,
            Screen::Bottom => self.bottom_image,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self, screen: Screen) -> Option<&Path> {
        match screen {
            Screen::Top => self.top_image.as_deref(),
            Screen::Bottom => self.bottom_image.as_deref(),
        }
    }

    pub fn set_image(&mut self, screen: Screen, path: impl Into<PathBuf>) {
        let path = path.into();
        match screen {
            Screen::Top => self.top_image = Some(path),
            Screen::Bottom => self.bottom_image = Some(path),
        }
    }

    pub fn set_output_dir(&mut self, path: impl Into<PathBuf>) {
        self.output_dir = Some(path.into());
    }

    /// Take over whatever a theme import found. Screens the theme lacks keep
    /// their current selection. The theme name is recorded even if nothing
    /// was found.
    pub fn apply_extraction(&mut self, extraction: &ExtractionResult) {
        for screen in Screen::ALL {
            if let Some(path) = extraction.image(screen) {
                self.set_image(screen, path);
            }
        }
        self.imported_theme = Some(extraction.theme_name.clone());
    }

    pub fn validate(&self) -> CommandResult<ReadySession<'_>> {
        match (
            self.top_image.as_deref(),
            self.bottom_image.as_deref(),
            self.output_dir.as_deref(),
        ) {
            (Some(top_image), Some(bottom_image), Some(output_dir)) => Ok(ReadySession {
                top_image,
                bottom_image,
                output_dir,
                imported_theme: self.imported_theme.as_deref(),
            }),
            _ => Err(CommandError::Validation(format!(
                "select both images and an output folder (missing: {})",
                self.missing().join(", ")
            ))),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.top_image.is_none() {
            missing.push("top image");
        }
        if self.bottom_image.is_none() {
            missing.push("bottom image");
        }
        if self.output_dir.is_none() {
            missing.push("output folder");
        }
        missing
    }
}
