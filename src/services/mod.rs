pub mod config;
pub mod fs_utils;
pub mod theme_archive;
pub mod wallpaper;
