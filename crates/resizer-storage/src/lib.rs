//! Resizer Storage Library
//!
//! This crate provides the storage collaborator used by the resize pipeline:
//! the `Storage` trait, an aws-sdk-s3 implementation, an in-memory
//! implementation over object_store, and derivation of destination keys.
//!
//! Both backends address objects by the exact key they are given; keys are
//! never normalized.
//!
//! # Key format
//!
//! Derivatives are written to `resized/{basename}` in the destination bucket,
//! whatever path the source object had. Key derivation lives in the `keys`
//! module so every caller produces the same layout.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-memory")]
pub mod object;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{basename, destination_key};
#[cfg(feature = "storage-memory")]
pub use object::ObjectStorage;
pub use resizer_core::StorageBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult, StoredObject};
