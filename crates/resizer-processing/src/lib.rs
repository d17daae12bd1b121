//! Resizer Processing Library
//!
//! This crate holds the two pure stages of the pipeline:
//! - Record validation (which event records are eligible)
//! - The image codec (decode, proportional resize, re-encode)

pub mod validator;

#[cfg(feature = "image")]
pub mod compression;
#[cfg(feature = "image")]
pub mod image;

pub use validator::{file_extension, EligibleRecord, RecordValidator, SkipReason};

#[cfg(feature = "image")]
pub use image::{
    resolve_format, scaled_height, CodecError, EffectiveFormat, ImageTransformer, TransformOutput,
};
