//! Design file storage.
//!
//! Stores uploaded design images under a local object root and returns a
//! public URL. Callers degrade to an inline base64 data URL when the write
//! fails; that fallback lives at the route layer so validation failures
//! stay hard errors.

use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use printforge_core::UserId;

/// Maximum accepted design file size: 10 MiB.
pub const MAX_DESIGN_BYTES: usize = 10 * 1024 * 1024;

/// Accepted upload content types and their stored extensions.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/png", "png"),
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/webp", "webp"),
];

/// Errors from design storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Content type not in the allow-list.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    /// File exceeds [`MAX_DESIGN_BYTES`].
    #[error("file size must be less than {max} bytes")]
    TooLarge { max: usize },

    /// Filesystem write failed.
    #[error("storage write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A stored design blob.
#[derive(Debug, Clone)]
pub struct StoredDesign {
    /// Object key, `designs/<user>/<millis>.<ext>`.
    pub key: String,
    /// Public URL for the stored object.
    pub url: String,
}

/// Local-disk object store for design uploads.
#[derive(Debug, Clone)]
pub struct DesignStorage {
    root: PathBuf,
    public_base: String,
}

impl DesignStorage {
    /// Create a store rooted at `root`, serving objects under
    /// `<public_base>/uploads/`.
    #[must_use]
    pub fn new(root: PathBuf, public_base: &str) -> Self {
        Self {
            root,
            public_base: public_base.trim_end_matches('/').to_owned(),
        }
    }

    /// Validate an upload, returning the extension to store it under.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` or `TooLarge`; these are client errors,
    /// never candidates for the data-URL fallback.
    pub fn validate(content_type: &str, len: usize) -> Result<&'static str, StorageError> {
        let extension = ALLOWED_TYPES
            .iter()
            .find(|(mime, _)| *mime == content_type)
            .map(|(_, ext)| *ext)
            .ok_or_else(|| StorageError::UnsupportedType(content_type.to_owned()))?;

        if len > MAX_DESIGN_BYTES {
            return Err(StorageError::TooLarge {
                max: MAX_DESIGN_BYTES,
            });
        }

        Ok(extension)
    }

    /// Store a validated design blob and return its key and public URL.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory or file cannot be
    /// written.
    pub async fn store(
        &self,
        user_id: UserId,
        extension: &str,
        bytes: &[u8],
    ) -> Result<StoredDesign, StorageError> {
        let key = format!(
            "designs/{user_id}/{}.{extension}",
            Utc::now().timestamp_millis()
        );

        let path = self.root.join(&key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        let url = format!("{}/uploads/{key}", self.public_base);
        Ok(StoredDesign { key, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_allowed_types() {
        assert_eq!(DesignStorage::validate("image/png", 10).expect("png"), "png");
        assert_eq!(
            DesignStorage::validate("image/jpeg", 10).expect("jpeg"),
            "jpg"
        );
        assert_eq!(
            DesignStorage::validate("image/webp", 10).expect("webp"),
            "webp"
        );
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        assert!(matches!(
            DesignStorage::validate("image/gif", 10),
            Err(StorageError::UnsupportedType(_))
        ));
        assert!(matches!(
            DesignStorage::validate("application/pdf", 10),
            Err(StorageError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_validate_rejects_oversized() {
        assert!(matches!(
            DesignStorage::validate("image/png", MAX_DESIGN_BYTES + 1),
            Err(StorageError::TooLarge { .. })
        ));
        assert!(DesignStorage::validate("image/png", MAX_DESIGN_BYTES).is_ok());
    }

    #[tokio::test]
    async fn test_store_writes_under_user_key() {
        let root = std::env::temp_dir().join(format!(
            "printforge-storage-test-{}",
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let storage = DesignStorage::new(root.clone(), "https://shop.example.com/");

        let stored = storage
            .store(UserId::new(7), "png", b"fake-png-bytes")
            .await
            .expect("store succeeds");

        assert!(stored.key.starts_with("designs/7/"));
        assert!(stored.key.ends_with(".png"));
        assert_eq!(
            stored.url,
            format!("https://shop.example.com/uploads/{}", stored.key)
        );

        let on_disk = tokio::fs::read(root.join(&stored.key))
            .await
            .expect("file exists");
        assert_eq!(on_disk, b"fake-png-bytes");

        let _ = tokio::fs::remove_dir_all(root).await;
    }
}
