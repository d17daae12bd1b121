//! Image transformer - decode, proportional resize, re-encode
//!
//! The derivative is always encoded in the same format class as the input.
//! Decoding and format resolution happen before any pixels are touched, so
//! an unsupported input never reaches the resampler.

use crate::compression::ImageCompressor;
use crate::image::format::{resolve_format, EffectiveFormat};
use crate::image::CodecError;
use bytes::Bytes;
use image::imageops::FilterType;
use image::GenericImageView;
use std::io::Cursor;

/// Result of one transform call.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub data: Bytes,
    pub format: EffectiveFormat,
    pub width: u32,
    pub height: u32,
}

/// Height that keeps the aspect ratio when scaling `width` to `target_width`.
///
/// Rounds half away from zero and never returns 0.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return height.max(1);
    }
    let scaled = (height as f64 * (target_width as f64 / width as f64)).round();
    (scaled as u32).max(1)
}

pub struct ImageTransformer;

impl ImageTransformer {
    /// Resize `data` to `target_width` keeping the aspect ratio.
    ///
    /// `format_hint` is a file extension (`.jpg`, `png`, ...) consulted only
    /// when the bytes do not identify their own format. `quality` applies to
    /// JPEG output.
    pub fn transform(
        data: &[u8],
        target_width: u32,
        format_hint: Option<&str>,
        quality: u8,
    ) -> Result<TransformOutput, CodecError> {
        let mut reader = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| CodecError::UnidentifiedImage(e.to_string()))?;

        let format = resolve_format(reader.format(), format_hint);
        if reader.format().is_none() {
            if let Some(forced) = format.image_format() {
                reader.set_format(forced);
            }
        }

        let img = reader
            .decode()
            .map_err(|e| CodecError::UnidentifiedImage(e.to_string()))?;

        if let EffectiveFormat::Unsupported(name) = &format {
            return Err(CodecError::UnsupportedFormat(name.clone()));
        }

        let (width, height) = img.dimensions();
        if width == 0 || height == 0 || target_width == 0 {
            return Err(CodecError::UnidentifiedImage(format!(
                "degenerate dimensions {}x{} -> width {}",
                width, height, target_width
            )));
        }

        let new_height = scaled_height(width, height, target_width);
        let resized = if (target_width, new_height) == (width, height) {
            img
        } else {
            img.resize_exact(target_width, new_height, FilterType::Lanczos3)
        };

        let data = match format {
            EffectiveFormat::Jpeg => ImageCompressor::compress_jpeg(&resized, quality)?,
            EffectiveFormat::Png => ImageCompressor::compress_png(&resized)?,
            EffectiveFormat::Unsupported(name) => return Err(CodecError::UnsupportedFormat(name)),
        };

        tracing::debug!(
            original_width = width,
            original_height = height,
            width = target_width,
            height = new_height,
            size_bytes = data.len() as u64,
            "Image resized"
        );

        Ok(TransformOutput {
            data,
            format,
            width: target_width,
            height: new_height,
        })
    }
}
