use super::fit::{fit_file, ResampleFilter};
use super::target::TargetSize;
use crate::types::errors::ImageError;
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Write `image` as PNG, whatever the destination extension says.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<(), ImageError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ImageError::Save {
            path: path.to_path_buf(),
            source,
        })
}

/// Decode `source`, fit it to `target`, and save the result as PNG at `dest`.
pub fn fit_and_save(
    source: &Path,
    target: TargetSize,
    filter: ResampleFilter,
    dest: &Path,
) -> Result<(), ImageError> {
    let fitted = fit_file(source, target, filter)?;
    save_png(&fitted, dest)?;
    log::info!(
        "[Fit] {} -> {} ({})",
        source.display(),
        dest.display(),
        target
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
