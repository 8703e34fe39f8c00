//! Image upload to object storage.
//!
//! Files are buffered by the controller while the multipart body is read, then handed to
//! `UploadService::upload_all`, which writes them concurrently and resolves each to its
//! public URL.

use axum::body::Bytes;
use chrono::Utc;
use futures_util::future::try_join_all;
use rand::Rng;

use crate::server::{error::AppError, storage::ObjectStorage};

/// Length of the random segment in generated object keys.
const KEY_SUFFIX_LENGTH: usize = 8;

/// A fully buffered file waiting to be written to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Bytes,
}

impl PendingUpload {
    /// Whether the declared content type is an image.
    pub fn is_image(content_type: &str) -> bool {
        content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

pub struct UploadService<'a> {
    storage: &'a dyn ObjectStorage,
}

impl<'a> UploadService<'a> {
    pub fn new(storage: &'a dyn ObjectStorage) -> Self {
        Self { storage }
    }

    /// Writes every file concurrently and returns their public URLs in input order.
    ///
    /// The batch is all-or-nothing from the caller's point of view: the first failure
    /// aborts the request. Objects already written by then are left in storage.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - One public URL per file
    /// - `Err(AppError::BadRequest)` - No files were given
    /// - `Err(AppError::StorageErr)` - Any single upload failed
    pub async fn upload_all(&self, files: Vec<PendingUpload>) -> Result<Vec<String>, AppError> {
        if files.is_empty() {
            return Err(AppError::BadRequest("No image files provided".to_string()));
        }

        let count = files.len();
        let uploads = files.into_iter().map(|file| async move {
            let key = object_key(&file.file_name);
            self.storage
                .upload(&key, &file.content_type, file.content)
                .await?;
            Ok::<String, AppError>(self.storage.public_url(&key))
        });

        let urls = try_join_all(uploads).await?;

        tracing::info!("Uploaded {} image(s)", count);

        Ok(urls)
    }
}

/// Builds a unique object key: `<unix-millis>-<8 random alphanumerics>-<sanitized name>`.
pub fn object_key(file_name: &str) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();
    let suffix: String = (0..KEY_SUFFIX_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();

    format!(
        "{}-{}-{}",
        Utc::now().timestamp_millis(),
        suffix,
        sanitize_file_name(file_name)
    )
}

/// Reduces a client-supplied file name to a safe key segment.
///
/// Path components are stripped and anything outside `[A-Za-z0-9._-]` becomes `_`.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim_matches('.').is_empty() {
        "file".to_string()
    } else {
        sanitized
    }
}
