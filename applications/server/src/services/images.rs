/// Image storage service - uploaded images on disk, served under /uploads
use crate::error::{Result, ServerError};
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ImageStore {
    uploads_dir: PathBuf,
}

impl ImageStore {
    pub fn new(uploads_dir: PathBuf) -> Self {
        Self { uploads_dir }
    }

    /// Create the uploads directory
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.uploads_dir).await?;
        Ok(())
    }

    pub fn uploads_dir(&self) -> &PathBuf {
        &self.uploads_dir
    }

    /// Store an uploaded image and return its public URL
    ///
    /// The payload is sniffed for an image signature rather than trusting
    /// any client-supplied filename; stored files get generated names.
    pub async fn store(&self, data: &[u8]) -> Result<String> {
        let kind = infer::get(data)
            .filter(|kind| kind.matcher_type() == infer::MatcherType::Image)
            .ok_or_else(|| {
                ServerError::BadRequest("Uploaded file is not a supported image".to_string())
            })?;

        let filename = format!("{}.{}", Uuid::new_v4(), kind.extension());
        fs::write(self.uploads_dir.join(&filename), data).await?;

        Ok(format!("/uploads/{filename}"))
    }

    /// Best-effort removal of a previously stored image
    ///
    /// URLs that do not point into the uploads directory are ignored.
    pub async fn remove(&self, url: &str) {
        let Some(filename) = url.strip_prefix("/uploads/") else {
            return;
        };
        if filename.contains('/') || filename.contains("..") {
            return;
        }

        if let Err(err) = fs::remove_file(self.uploads_dir.join(filename)).await {
            tracing::warn!("Failed to remove uploaded image {}: {}", url, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // PNG signature followed by filler bytes
    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\nrest-of-image";

    #[tokio::test]
    async fn test_store_accepts_png() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        let url = store.store(PNG_MAGIC).await.unwrap();
        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with(".png"));

        let filename = url.strip_prefix("/uploads/").unwrap();
        assert!(temp_dir.path().join(filename).exists());
    }

    #[tokio::test]
    async fn test_store_rejects_non_image() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        let result = store.store(b"just some text, definitely not pixels").await;
        assert!(matches!(result, Err(ServerError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_remove_deletes_stored_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(temp_dir.path().to_path_buf());
        store.initialize().await.unwrap();

        let url = store.store(PNG_MAGIC).await.unwrap();
        let filename = url.strip_prefix("/uploads/").unwrap().to_string();
        assert!(temp_dir.path().join(&filename).exists());

        store.remove(&url).await;
        assert!(!temp_dir.path().join(&filename).exists());

        // Foreign URLs are left alone
        store.remove("https://example.com/image.png").await;
    }
}
