use async_trait::async_trait;
use bytes::Bytes;
use resizer_storage::{ObjectStorage, Storage, StorageError, StorageResult, StoredObject};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory storage that counts calls and can inject failures.
pub struct RecordingStorage {
    inner: ObjectStorage,
    gets: AtomicUsize,
    puts: AtomicUsize,
    fail_puts: AtomicBool,
    panic_keys: Mutex<HashSet<String>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self {
            inner: ObjectStorage::memory(),
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
            fail_puts: AtomicBool::new(false),
            panic_keys: Mutex::new(HashSet::new()),
        }
    }

    /// Seed an object without counting it as a call.
    pub async fn seed(&self, bucket: &str, key: &str, data: Vec<u8>, content_type: Option<&str>) {
        self.inner
            .put_object(bucket, key, Bytes::from(data), content_type)
            .await
            .expect("Failed to seed object");
    }

    pub async fn read(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.inner.get_object(bucket, key).await.ok()
    }

    pub fn get_calls(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_calls(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn fail_puts(&self) {
        self.fail_puts.store(true, Ordering::SeqCst);
    }

    /// Panic when `key` is fetched.
    pub fn panic_on(&self, key: &str) {
        self.panic_keys.lock().unwrap().insert(key.to_string());
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<StoredObject> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.panic_keys.lock().unwrap().contains(key) {
            panic!("injected panic for {}", key);
        }
        self.inner.get_object(bucket, key).await
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed("injected failure".to_string()));
        }
        self.inner.put_object(bucket, key, data, content_type).await
    }
}
