//! File acceptance rules for uploads.
//!
//! A file is ingestable when its extension or declared media type says it is
//! text-like. No content sniffing and no PDF text extraction happens here; an
//! accepted file's bytes are read straight into a string.

use thiserror::Error;

const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "pdf"];
const SUPPORTED_MEDIA_TYPES: &[&str] = &["text/plain", "application/pdf"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("unsupported file type: {0:?} (expected .txt, .md, or .pdf)")]
    UnsupportedType(String),
    #[error("could not read file {0:?}")]
    ReadFailed(String),
}

/// Accepts `.txt`, `.md`, and `.pdf` extensions (case-insensitive) or the
/// `text/plain` / `application/pdf` media types.
pub fn is_supported(file_name: &str, media_type: Option<&str>) -> bool {
    if let Some(media_type) = media_type
        && SUPPORTED_MEDIA_TYPES.contains(&media_type)
    {
        return true;
    }
    extension_of(file_name)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// `is_supported` as a validation step, carrying the offending name on
/// rejection.
pub fn check_supported(file_name: &str, media_type: Option<&str>) -> Result<(), IngestError> {
    if is_supported(file_name, media_type) {
        Ok(())
    } else {
        Err(IngestError::UnsupportedType(file_name.to_string()))
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
