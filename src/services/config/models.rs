use crate::services::wallpaper::{ResampleFilter, Screen, TargetSize};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub size: TargetSize,
    pub file_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AdapterConfig {
    pub top: ScreenConfig,
    pub bottom: ScreenConfig,
    pub filter: ResampleFilter,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            top: ScreenConfig {
                size: Screen::Top.default_target(),
                file_name: "ayn_thor_top_1920x1080.png".into(),
            },
            bottom: ScreenConfig {
                size: Screen::Bottom.default_target(),
                file_name: "ayn_thor_bottom_1240x1080.png".into(),
            },
            filter: ResampleFilter::Lanczos3,
        }
    }
}

impl AdapterConfig {
    pub fn screen(&self, screen: Screen) -> &ScreenConfig {
        match screen {
            Screen::Top => &self.top,
            Screen::Bottom => &self.bottom,
        }
    }
}
