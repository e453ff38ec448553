use super::types::{classify_entry, ExtractionResult};
use crate::types::errors::ArchiveError;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

const SCRATCH_PREFIX: &str = "3ds_theme_";

/// Extract the `pt_top*.png` / `pt_bottom*.png` art from a 3DS theme ZIP.
///
/// Steps:
/// 1. Open the archive (any failure here is an [`ArchiveError`], nothing is extracted)
/// 2. Create a uniquely named scratch directory in the system temp folder
/// 3. Walk every entry name in archive order and extract only the matching ones
///
/// The scan never stops early: when several entries match the same screen,
/// the last one in archive order is the one reported. The scratch directory
/// outlives this call only when extraction succeeds.
pub fn extract_theme_images(archive_path: &Path) -> Result<ExtractionResult, ArchiveError> {
    extract_theme_images_in(archive_path, &std::env::temp_dir())
}

/// Same as [`extract_theme_images`], with the scratch directory created under `scratch_parent`.
pub fn extract_theme_images_in(
    archive_path: &Path,
    scratch_parent: &Path,
) -> Result<ExtractionResult, ArchiveError> {
    let file = fs::File::open(archive_path).map_err(|source| ArchiveError::Open {
        path: archive_path.to_path_buf(),
        source,
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|source| ArchiveError::Corrupt {
        path: archive_path.to_path_buf(),
        source,
    })?;

    // Removed on drop until the scan has finished cleanly.
    let scratch = create_scratch_dir(scratch_parent)?;
    let mut result = ExtractionResult {
        theme_name: theme_name(archive_path),
        scratch_dir: scratch.path().to_path_buf(),
        top: None,
        bottom: None,
    };

    for index in 0..archive.len() {
        // Raw access reads the header only, so entries we never extract
        // (encrypted, unsupported compression) cannot fail the import.
        let (name, is_dir) = {
            let raw = archive
                .by_index_raw(index)
                .map_err(|source| ArchiveError::Entry { index, source })?;
            (raw.name().to_string(), raw.is_dir())
        };
        if is_dir {
            continue;
        }
        let Some(screen) = classify_entry(&name) else {
            continue;
        };

        let mut entry = archive
            .by_index(index)
            .map_err(|source| ArchiveError::Entry { index, source })?;

        // Strips `..`, roots and drive prefixes so the file stays inside scratch.
        let output_path = result.scratch_dir.join(entry.mangled_name());

        write_entry(&mut entry, &output_path).map_err(|source| ArchiveError::Extract {
            name: name.clone(),
            source,
        })?;

        if let Some(previous) = result.image(screen) {
            debug!(
                "[Archive] {} overrides earlier {} match {}",
                name,
                screen,
                previous.display()
            );
        }
        result.set_image(screen, output_path);
    }

    // Cleanup belongs to the caller from here on.
    result.scratch_dir = scratch.keep();
    info!(
        "[Archive] Imported '{}': top={:?} bottom={:?} (scratch {})",
        result.theme_name,
        result.top,
        result.bottom,
        result.scratch_dir.display()
    );
    Ok(result)
}

fn create_scratch_dir(parent: &Path) -> Result<TempDir, ArchiveError> {
    tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir_in(parent)
        .map_err(ArchiveError::Scratch)
}

fn write_entry(entry: &mut impl io::Read, output_path: &Path) -> io::Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut outfile = fs::File::create(output_path)?;
    io::copy(entry, &mut outfile)?;
    Ok(())
}

fn theme_name(archive_path: &Path) -> String {
    archive_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "theme".to_string())
}
