//! JPEG encoding at a fixed quality.
//!
//! The [`JpegCodec`] trait is the seam the best-size search drives; the
//! default [`ImageJpegCodec`] is backed by the `image` crate's encoder.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::raster::DecodedImage;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Per-attempt encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeConfig {
    /// JPEG quality (1-100, where 100 is highest quality)
    pub quality: u8,
}

impl EncodeConfig {
    pub const fn new(quality: u8) -> Self {
        Self { quality }
    }
}

/// A JPEG bitstream encoder.
///
/// Implementations append the encoding to `buf` and must not touch any other
/// state. They may be called many times per image with decreasing quality.
pub trait JpegCodec {
    fn encode(&self, buf: &mut Vec<u8>, image: &DecodedImage, quality: u8) -> Result<(), EncodeError>;
}

impl<C: JpegCodec + ?Sized> JpegCodec for &C {
    fn encode(&self, buf: &mut Vec<u8>, image: &DecodedImage, quality: u8) -> Result<(), EncodeError> {
        (**self).encode(buf, image, quality)
    }
}

/// Baseline JPEG codec using the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageJpegCodec;

impl JpegCodec for ImageJpegCodec {
    fn encode(&self, buf: &mut Vec<u8>, image: &DecodedImage, quality: u8) -> Result<(), EncodeError> {
        let DecodedImage {
            width,
            height,
            ref pixels,
        } = *image;

        // Validate dimensions
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimensions { width, height });
        }

        // Validate pixel data length
        let expected = image.expected_byte_size();
        if pixels.len() != expected {
            return Err(EncodeError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        // Clamp quality to valid range (1-100)
        let quality = quality.clamp(1, 100);

        JpegEncoder::new_with_quality(buf, quality)
            .write_image(pixels, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))
    }
}

/// Encode an image to JPEG bytes at `config.quality`.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, the ceiling the best-size search starts from
/// * 50-80: Medium quality, acceptable for chat previews
/// * Below 50: Low quality, visible artifacts
pub fn encode(image: &DecodedImage, config: EncodeConfig) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::new();
    encode_into(&mut buf, image, config)?;
    Ok(buf)
}

/// Encode an image into an existing buffer, appending to whatever it holds.
pub fn encode_into(buf: &mut Vec<u8>, image: &DecodedImage, config: EncodeConfig) -> Result<(), EncodeError> {
    ImageJpegCodec.encode(buf, image, config.quality)
}

/// Encode raw RGB pixel data to JPEG bytes.
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let image = DecodedImage::new(width, height, pixels.to_vec());
    encode(&image, EncodeConfig::new(quality))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=40, 1u32..=40)
    }

    proptest! {
        /// Property: Encoding always produces a framed JPEG when given valid input.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in 1u8..=100,
        ) {
            let image = DecodedImage::new(width, height, vec![128u8; (width * height * 3) as usize]);

            let jpeg_bytes = encode(&image, EncodeConfig::new(quality));
            prop_assert!(jpeg_bytes.is_ok(), "Valid input should produce valid output");

            let jpeg_bytes = jpeg_bytes.unwrap();
            let len = jpeg_bytes.len();
            prop_assert!(len >= 4, "JPEG should have at least 4 bytes");
            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8], "Should have SOI marker");
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9], "Should have EOI marker");
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let image = DecodedImage::new(width, height, vec![100u8; (width * height * 3) as usize]);

            let first = encode(&image, EncodeConfig::new(quality)).unwrap();
            let second = encode(&image, EncodeConfig::new(quality)).unwrap();

            prop_assert_eq!(first, second, "Same input should produce same output");
        }

        /// Property: Mismatched pixel data length always returns error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in dimensions_strategy(),
            delta in 1usize..=10,
            extra in any::<bool>(),
        ) {
            let expected = (width * height * 3) as usize;
            let actual = if extra { expected + delta } else { expected.saturating_sub(delta) };
            prop_assume!(actual != expected);

            let image = DecodedImage::new(width, height, vec![128u8; actual]);
            prop_assert!(
                matches!(encode(&image, EncodeConfig::new(80)), Err(EncodeError::InvalidPixelData { .. })),
                "Mismatched pixel data should return InvalidPixelData error"
            );
        }
    }
}
