use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use zip::unstable::write::FileOptionsExt;

static INIT: Once = Once::new();

pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Deterministic RGB gradient so resampled output is never flat.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let buf = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(buf)
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    gradient_image(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, png_bytes(width, height)).unwrap();
    path
}

/// Helper: create a ZIP with the given entries, in order.
pub fn create_test_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
    create_test_zip_encrypting(dir, name, files, &[])
}

/// Like [`create_test_zip`], but entries named in `encrypted` are written with
/// ZipCrypto so they cannot be read without a password.
pub fn create_test_zip_encrypting(
    dir: &Path,
    name: &str,
    files: &[(&str, &[u8])],
    encrypted: &[&str],
) -> PathBuf {
    let zip_path = dir.join(name);
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options =
        zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (entry_name, content) in files {
        let entry_options = if encrypted.contains(entry_name) {
            options.with_deprecated_encryption(b"secret")
        } else {
            options
        };
        writer.start_file(entry_name.to_string(), entry_options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    zip_path
}
