pub mod generate_cmds;
pub mod import_cmds;
pub mod session;

pub use generate_cmds::{generate_wallpapers_cmd, GenerateReport, ScreenOutcome, ScreenReport};
pub use import_cmds::{import_theme_cmd, ImportReport};
pub use session::{ReadySession, Session};

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod session_tests;

#[cfg(test)]
#[path = "tests/wallpaper_cmds_tests.rs"]
mod wallpaper_cmds_tests;
