//! Object storage gateway — consumed by admin flows only.
//!
//! The SDK treats object storage as an external capability: it defines the
//! surface (presigned uploads, deletion) and ships no provider implementation.
//! Host applications bind this to S3 or a compatible store.

use crate::error::SdkError;
use std::time::Duration;

/// A presigned upload slot issued by the storage provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PresignedUpload {
    /// URL to PUT the object bytes to.
    pub url: String,
    /// Object key the upload was signed for.
    pub key: String,
    /// Public URL of the object once uploaded.
    pub object_url: String,
    /// How long the signed URL stays valid.
    pub expires_in: Duration,
}

/// Presigned-upload and delete operations against an object store.
#[allow(async_fn_in_trait)]
pub trait ObjectStorage {
    /// Sign an upload for `key` with the given content type and validity.
    async fn presigned_upload(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<PresignedUpload, SdkError>;

    /// Delete the object stored under `key`.
    async fn delete_object(&self, key: &str) -> Result<(), SdkError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Minimal provider used to pin down the trait surface.
    #[derive(Default)]
    struct StubStorage {
        deleted: Mutex<Vec<String>>,
    }

    impl ObjectStorage for StubStorage {
        async fn presigned_upload(
            &self,
            key: &str,
            _content_type: &str,
            expires_in: Duration,
        ) -> Result<PresignedUpload, SdkError> {
            Ok(PresignedUpload {
                url: format!("https://store.example.com/upload/{key}"),
                key: key.to_string(),
                object_url: format!("https://store.example.com/{key}"),
                expires_in,
            })
        }

        async fn delete_object(&self, key: &str) -> Result<(), SdkError> {
            self.deleted.lock().unwrap().push(key.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_stub_roundtrip() {
        let storage = StubStorage::default();
        let upload = storage
            .presigned_upload("menu/idli.png", "image/png", Duration::from_secs(300))
            .await
            .unwrap();
        assert_eq!(upload.key, "menu/idli.png");
        assert_eq!(upload.expires_in, Duration::from_secs(300));

        storage.delete_object(&upload.key).await.unwrap();
        assert_eq!(*storage.deleted.lock().unwrap(), vec!["menu/idli.png"]);
    }
}
