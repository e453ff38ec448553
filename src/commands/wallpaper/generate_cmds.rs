//! Commands that produce the two panel wallpapers.

use super::session::Session;
use crate::services::config::AdapterConfig;
use crate::services::fs_utils::path_utils::resolve_output_dir;
use crate::services::wallpaper::{self, Screen, TargetSize};
use crate::types::errors::CommandResult;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScreenOutcome {
    Saved { path: PathBuf },
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenReport {
    pub screen: Screen,
    pub source: PathBuf,
    pub target: TargetSize,
    pub outcome: ScreenOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub screens: Vec<ScreenReport>,
}

impl GenerateReport {
    pub fn all_saved(&self) -> bool {
        self.screens
            .iter()
            .all(|s| matches!(s.outcome, ScreenOutcome::Saved { .. }))
    }

    pub fn screen(&self, screen: Screen) -> Option<&ScreenReport> {
        self.screens.iter().find(|s| s.screen == screen)
    }
}

/// Fit both selected images and write them to the output folder.
///
/// Fails only when the session is incomplete or the output folder cannot be
/// created. Each screen is processed independently: a broken top image does
/// not stop the bottom one, and every outcome is reported.
pub fn generate_wallpapers_cmd(
    session: &Session,
    config: &AdapterConfig,
) -> CommandResult<GenerateReport> {
    let ready = session.validate()?;

    let output_dir = resolve_output_dir(ready.output_dir, ready.imported_theme);
    fs::create_dir_all(&output_dir)?;

    let screens = Screen::ALL
        .into_iter()
        .map(|screen| {
            let screen_config = config.screen(screen);
            let source = ready.image(screen);
            let dest = output_dir.join(&screen_config.file_name);

            let outcome =
                match wallpaper::fit_and_save(source, screen_config.size, config.filter, &dest) {
                    Ok(()) => ScreenOutcome::Saved { path: dest },
                    Err(e) => {
                        log::error!("[Generate] {screen} wallpaper failed: {e}");
                        ScreenOutcome::Failed {
                            error: e.to_string(),
                        }
                    }
                };

            ScreenReport {
                screen,
                source: source.to_path_buf(),
                target: screen_config.size,
                outcome,
            }
        })
        .collect();

    Ok(GenerateReport {
        output_dir,
        screens,
    })
}
