//! Decoded raster images handed to the encoder.
//!
//! Decoding from source formats happens elsewhere; this crate only reads
//! the pixels it is given and never mutates them.

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// The pixel length is not checked here; the JPEG codec rejects
    /// mismatched buffers with `EncodeError::InvalidPixelData`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Number of bytes a well-formed pixel buffer holds.
    pub fn expected_byte_size(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 3
    }
}

impl From<image::RgbImage> for DecodedImage {
    fn from(img: image::RgbImage) -> Self {
        Self::from_rgb_image(img)
    }
}
