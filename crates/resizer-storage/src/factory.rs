#[cfg(feature = "storage-memory")]
use crate::ObjectStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageBackend, StorageError, StorageResult};
use resizer_core::Settings;
use std::sync::Arc;

/// Create a storage backend based on configuration
pub async fn create_storage(settings: &Settings) -> StorageResult<Arc<dyn Storage>> {
    match settings.storage_backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let region = settings.s3_region.clone().ok_or_else(|| {
                StorageError::ConfigError("S3_REGION or AWS_REGION not configured".to_string())
            })?;
            let storage = S3Storage::from_env(region, settings.s3_endpoint.clone()).await;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-memory")]
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; objects do not outlive the process");
            Ok(Arc::new(ObjectStorage::memory()))
        }

        #[cfg(not(feature = "storage-memory"))]
        StorageBackend::Memory => Err(StorageError::ConfigError(
            "Memory storage backend not available (storage-memory feature not enabled)"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(vars: &[(&'static str, &'static str)]) -> Settings {
        Settings::from_lookup(|name| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        })
    }

    #[tokio::test]
    async fn s3_requires_a_region() {
        let err = create_storage(&settings(&[("STORAGE_BACKEND", "s3")]))
            .await
            .err();
        assert!(matches!(err, Some(StorageError::ConfigError(_))));
    }

    #[tokio::test]
    async fn s3_with_region_is_created() {
        let storage = create_storage(&settings(&[("AWS_REGION", "us-east-1")])).await;
        assert!(storage.is_ok());
    }

    #[tokio::test]
    async fn memory_backend_is_created() {
        let storage = create_storage(&settings(&[("STORAGE_BACKEND", "memory")])).await;
        assert!(storage.is_ok());
    }
}
