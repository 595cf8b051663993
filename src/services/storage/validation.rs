use thiserror::Error;

use super::LocalFile;

/// Maximum number of attachments per event submission.
pub const MAX_FILES: usize = 4;
/// Maximum size per attachment, in bytes.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

const VALID_EXTENSIONS: [&str; 5] = ["pdf", "jpg", "jpeg", "png", "gif"];

/// Validation failures surfaced inline next to the attachment field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("A maximum of {MAX_FILES} files can be attached (got {0})")]
    TooManyFiles(usize),
    #[error("{0} exceeds the 10 MB size limit")]
    FileTooLarge(String),
    #[error("{0}: only PDF and image files are allowed")]
    UnsupportedType(String),
}

/// Lowercased extension of a file name, if it has one.
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// Storage folder for a validated extension: PDFs and images are kept apart.
pub fn folder_for(extension: &str) -> Option<&'static str> {
    match extension {
        "pdf" => Some("pdfs"),
        "jpg" | "jpeg" | "png" | "gif" => Some("images"),
        _ => None,
    }
}

/// Check a submission's attachments before any upload is attempted.
/// Fails fast: a rejected batch makes zero collaborator calls.
pub fn validate_files(files: &[LocalFile]) -> Result<(), AttachmentError> {
    if files.len() > MAX_FILES {
        return Err(AttachmentError::TooManyFiles(files.len()));
    }

    for file in files {
        let valid_type = extension_of(&file.name)
            .map(|ext| VALID_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false);
        if !valid_type {
            return Err(AttachmentError::UnsupportedType(file.name.clone()));
        }

        if file.bytes.len() > MAX_FILE_SIZE {
            return Err(AttachmentError::FileTooLarge(file.name.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: usize) -> LocalFile {
        LocalFile {
            name: name.to_string(),
            content_type: "application/octet-stream".to_string(),
            bytes: vec![0u8; size],
        }
    }

    #[test]
    fn test_accepts_up_to_four_files() {
        let files: Vec<_> = (0..4).map(|i| file(&format!("doc{i}.pdf"), 16)).collect();
        assert!(validate_files(&files).is_ok());
    }

    #[test]
    fn test_rejects_five_files() {
        let files: Vec<_> = (0..5).map(|i| file(&format!("foto{i}.jpg"), 16)).collect();
        assert_eq!(
            validate_files(&files),
            Err(AttachmentError::TooManyFiles(5))
        );
    }

    #[test]
    fn test_rejects_oversized_file() {
        let files = vec![file("besar.png", MAX_FILE_SIZE + 1)];
        assert_eq!(
            validate_files(&files),
            Err(AttachmentError::FileTooLarge("besar.png".to_string()))
        );
    }

    #[test]
    fn test_exactly_ten_megabytes_is_allowed() {
        let files = vec![file("pas.png", MAX_FILE_SIZE)];
        assert!(validate_files(&files).is_ok());
    }

    #[test]
    fn test_rejects_unsupported_extension() {
        let files = vec![file("virus.exe", 16)];
        assert_eq!(
            validate_files(&files),
            Err(AttachmentError::UnsupportedType("virus.exe".to_string()))
        );
    }

    #[test]
    fn test_rejects_missing_extension() {
        let files = vec![file("README", 16)];
        assert!(matches!(
            validate_files(&files),
            Err(AttachmentError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let files = vec![file("SCAN.PDF", 16)];
        assert!(validate_files(&files).is_ok());
    }

    #[test]
    fn test_folder_routing() {
        assert_eq!(folder_for("pdf"), Some("pdfs"));
        assert_eq!(folder_for("jpg"), Some("images"));
        assert_eq!(folder_for("gif"), Some("images"));
        assert_eq!(folder_for("exe"), None);
    }
}
