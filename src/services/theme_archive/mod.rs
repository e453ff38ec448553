//! 3DS theme archive import.
//!
//! Themes (e.g. from ThemePlaza) ship as ZIPs whose top and bottom screen
//! art is stored as `pt_top*.png` and `pt_bottom*.png` somewhere in the tree.

mod extract;
mod types;

// Re-export public API
pub use extract::{extract_theme_images, extract_theme_images_in};
pub use types::{classify_entry, ExtractionResult, ExtractionStatus};

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
