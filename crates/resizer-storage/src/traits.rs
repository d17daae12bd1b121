//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// An object read back from storage.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Bytes,
    /// Declared `Content-Type`, if the object carries one.
    pub content_type: Option<String>,
}

/// Storage abstraction trait
///
/// The pipeline reads originals from one bucket and writes derivatives to
/// another, so every call names its bucket explicitly. Implementations own
/// their timeout and retry policy; callers never retry.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch an object's bytes and declared content type.
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<StoredObject>;

    /// Write an object, recording `content_type` when given.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()>;
}
