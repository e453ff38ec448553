use crate::types::errors::{ArchiveError, CommandError, ImageError};
use std::io;
use std::path::PathBuf;

#[test]
fn test_command_error_from_archive_error_is_transparent() {
    let archive_err = ArchiveError::Open {
        path: PathBuf::from("missing.zip"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    let cmd_err = CommandError::from(archive_err);

    match &cmd_err {
        CommandError::Archive(ArchiveError::Open { path, .. }) => {
            assert_eq!(path, &PathBuf::from("missing.zip"));
        }
        _ => panic!("Expected CommandError::Archive"),
    }
    assert!(cmd_err.to_string().starts_with("Failed to open archive 'missing.zip'"));
}

#[test]
fn test_empty_image_message() {
    let err = ImageError::EmptyImage {
        width: 0,
        height: 12,
    };
    assert_eq!(err.to_string(), "Image has no pixels (0x12)");
}

#[test]
fn test_command_error_serialization() {
    let err = CommandError::Validation("Output folder missing".to_string());

    // CommandError serializes as just its Display string
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, "\"Validation failed: Output folder missing\"");
}
