//! Side-effecting services used by route handlers.

pub mod upload;

pub use upload::{MAX_UPLOAD_BYTES, UploadError, UploadStore};
