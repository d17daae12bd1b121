//! Image codec module
//!
//! - Format resolution (format)
//! - Decode, resize and re-encode (transformer)

pub mod format;
pub mod transformer;

pub use format::{resolve_format, EffectiveFormat};
pub use transformer::{scaled_height, ImageTransformer, TransformOutput};

/// Codec failures. All of them are per-record and recoverable by the caller.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The bytes are not a decodable image.
    #[error("Cannot identify image file: {0}")]
    UnidentifiedImage(String),

    /// The image decoded but cannot be re-encoded in its own format.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Image encoding failed: {0}")]
    Encode(String),
}
