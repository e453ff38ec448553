//! Fit arbitrary wallpapers onto the two fixed panel sizes.

pub mod export;
pub mod fit;
pub mod target;

pub use export::{fit_and_save, save_png};
pub use fit::{fit, fit_file, fit_with_filter, load_image, plan_fit, FitPlan, ResampleFilter};
pub use target::{Screen, TargetSize, BOTTOM_TARGET, TOP_TARGET};
