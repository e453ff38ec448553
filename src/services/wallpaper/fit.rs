//! Aspect-preserving resize followed by a centered crop.
//!
//! The source is scaled uniformly until it covers the target on both axes
//! (one axis pinned exactly to the target, the other derived and rounded),
//! then the overflow is trimmed equally from both sides.

use super::target::TargetSize;
use crate::types::errors::ImageError;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resampling filter used for the scale step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Geometry of a single fit: the intermediate scaled size and the crop window.
///
/// Invariant: `scaled_width >= target.width()` and `scaled_height >= target.height()`,
/// so the window `(left, top, target)` always lies inside the scaled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitPlan {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub left: u32,
    pub top: u32,
    pub target: TargetSize,
}

impl FitPlan {
    /// True when the source already has the scaled size and no resample is needed.
    pub fn is_identity_scale(&self, source_width: u32, source_height: u32) -> bool {
        self.scaled_width == source_width && self.scaled_height == source_height
    }
}

/// Compute how a `source_width x source_height` image maps onto `target`.
///
/// The ratio comparison is exact (integer cross-multiplication). The derived
/// side uses `f64::round` (half away from zero); since it is mathematically at
/// least the target side and rounding is monotone, it never lands below the
/// target. The `max` only absorbs floating-point noise.
///
/// Both source sides must be non-zero.
pub fn plan_fit(source_width: u32, source_height: u32, target: TargetSize) -> FitPlan {
    debug_assert!(source_width > 0 && source_height > 0);

    let (target_width, target_height) = (target.width(), target.height());
    let source_is_wider = u64::from(source_width) * u64::from(target_height)
        > u64::from(target_width) * u64::from(source_height);

    let (scaled_width, scaled_height) = if source_is_wider {
        let width = scale_side(target_height, source_width, source_height).max(target_width);
        (width, target_height)
    } else {
        let height = scale_side(target_width, source_height, source_width).max(target_height);
        (target_width, height)
    };

    FitPlan {
        scaled_width,
        scaled_height,
        left: (scaled_width - target_width) / 2,
        top: (scaled_height - target_height) / 2,
        target,
    }
}

/// `pinned * numerator / denominator`, rounded.
fn scale_side(pinned: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = (f64::from(pinned) * f64::from(numerator) / f64::from(denominator)).round();
    // Saturating float-to-int cast.
    scaled as u32
}

/// Fit `image` to exactly `target` with the default Lanczos3 filter.
pub fn fit(image: &DynamicImage, target: TargetSize) -> Result<DynamicImage, ImageError> {
    fit_with_filter(image, target, ResampleFilter::default())
}

pub fn fit_with_filter(
    image: &DynamicImage,
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<DynamicImage, ImageError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::EmptyImage { width, height });
    }

    let plan = plan_fit(width, height, target);
    debug!(
        "[Fit] {}x{} -> scale {}x{} -> crop ({}, {}) {}",
        width, height, plan.scaled_width, plan.scaled_height, plan.left, plan.top, target
    );

    let scaled = if plan.is_identity_scale(width, height) {
        image.clone()
    } else {
        image.resize_exact(plan.scaled_width, plan.scaled_height, filter.into())
    };

    Ok(scaled.crop_imm(plan.left, plan.top, target.width(), target.height()))
}

/// Decode the image at `path`, sniffing the format from its content.
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| ImageError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    reader.decode().map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode `path` and fit it to `target`.
pub fn fit_file(
    path: &Path,
    target: TargetSize,
    filter: ResampleFilter,
) -> Result<DynamicImage, ImageError> {
    let image = load_image(path)?;
    fit_with_filter(&image, target, filter)
}

#[cfg(test)]
#[path = "tests/fit_tests.rs"]
mod tests;
