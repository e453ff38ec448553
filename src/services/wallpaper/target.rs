use serde::{Deserialize, Serialize};
use std::fmt;

/// 6" top panel.
pub const TOP_TARGET: TargetSize = TargetSize::new(1920, 1080);
/// 3.92" bottom panel.
pub const BOTTOM_TARGET: TargetSize = TargetSize::new(1240, 1080);

/// Exact pixel dimensions an output wallpaper must have.
///
/// Both sides are always non-zero. A zero side is a caller bug, so
/// [`TargetSize::new`] panics instead of returning an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTargetSize")]
pub struct TargetSize {
    width: u32,
    height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "target size must be non-zero");
        Self { width, height }
    }

    pub const fn try_new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self { width, height })
        }
    }

    pub const fn width(self) -> u32 {
        self.width
    }

    pub const fn height(self) -> u32 {
        self.height
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Deserialize)]
struct RawTargetSize {
    width: u32,
    height: u32,
}

impl TryFrom<RawTargetSize> for TargetSize {
    type Error = String;

    fn try_from(raw: RawTargetSize) -> Result<Self, Self::Error> {
        Self::try_new(raw.width, raw.height)
            .ok_or_else(|| format!("Invalid target size {}x{}", raw.width, raw.height))
    }
}

/// One of the two physical panels of the destination device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Top,
    Bottom,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Top, Screen::Bottom];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Top => "top",
            Screen::Bottom => "bottom",
        }
    }

    /// Lower-case base-name prefix used by 3DS themes for this panel's art.
    pub fn theme_prefix(self) -> &'static str {
        match self {
            Screen::Top => "pt_top",
            Screen::Bottom => "pt_bottom",
        }
    }

    pub fn default_target(self) -> TargetSize {
        match self {
            Screen::Top => TOP_TARGET,
            Screen::Bottom => BOTTOM_TARGET,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
