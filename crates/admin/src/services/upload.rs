//! Image upload storage.
//!
//! Uploaded files land in a local directory served back under `/uploads`.
//! The directory is created on first use. Filenames combine the form field
//! name, the current millisecond timestamp, and a random suffix - practical
//! (not cryptographic) uniqueness. No file-type validation is performed;
//! any content is stored verbatim.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

/// Per-file upload cap: 5 MiB.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// URL prefix uploaded files are served under.
const PUBLIC_PREFIX: &str = "/uploads";

/// Errors that can occur while storing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file exceeds [`MAX_UPLOAD_BYTES`].
    #[error("file of {0} bytes exceeds the {MAX_UPLOAD_BYTES} byte limit")]
    TooLarge(usize),

    /// Writing to the upload directory failed.
    #[error("upload i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes uploaded files to a local directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create an upload store rooted at `dir`.
    ///
    /// The directory is not touched until the first file is saved.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store one uploaded file and return its servable path.
    ///
    /// `field` is the multipart field name the file arrived under and
    /// `original_name` the client-supplied filename; only the extension of
    /// the latter is kept.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::TooLarge`] for files above the cap (checked
    /// before any disk access) and [`UploadError::Io`] if the directory
    /// cannot be created or the file cannot be written.
    pub async fn save(
        &self,
        field: &str,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<String, UploadError> {
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge(bytes.len()));
        }

        tokio::fs::create_dir_all(&self.dir).await?;

        let filename = unique_filename(field, original_name);
        tokio::fs::write(self.dir.join(&filename), bytes).await?;

        tracing::debug!(filename = %filename, size = bytes.len(), "upload stored");
        Ok(format!("{PUBLIC_PREFIX}/{filename}"))
    }
}

/// Build a collision-resistant filename: `<field>-<millis>-<random><ext>`.
fn unique_filename(field: &str, original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    let extension = Path::new(original_name)
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{field}-{millis}-{suffix}{extension}")
}
