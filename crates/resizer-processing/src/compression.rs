//! Format-specific encoders for resized images.

use bytes::Bytes;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, GenericImageView};

use crate::image::CodecError;

/// Main compression service
pub struct ImageCompressor;

impl ImageCompressor {
    /// Compress to JPEG using mozjpeg with optimized Huffman tables
    pub fn compress_jpeg(img: &DynamicImage, quality: u8) -> Result<Bytes, CodecError> {
        let rgb_img = img.to_rgb8();
        let (width, height) = rgb_img.dimensions();

        let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
        comp.set_size(width as usize, height as usize);
        comp.set_quality(quality.clamp(1, 100) as f32);
        comp.set_optimize_coding(true);

        let mut comp = comp
            .start_compress(Vec::new())
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        comp.write_scanlines(rgb_img.as_raw())
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        let jpeg_data = comp
            .finish()
            .map_err(|e| CodecError::Encode(e.to_string()))?;

        Ok(Bytes::from(jpeg_data))
    }

    /// Compress to PNG (lossless, best compression with adaptive filtering)
    pub fn compress_png(img: &DynamicImage) -> Result<Bytes, CodecError> {
        let (width, height) = img.dimensions();
        let mut buffer = Vec::with_capacity((width as usize) * (height as usize));

        let encoder =
            PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, PngFilterType::Adaptive);
        img.write_with_encoder(encoder)
            .map_err(|e| CodecError::Encode(e.to_string()))?;

        Ok(Bytes::from(buffer))
    }
}
