//! Image type sniffing from magic bytes.

use image::ImageFormat;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectionError {
    /// The bytes do not start with any known image signature.
    #[error("Unknown image format")]
    UnknownFormat,

    /// A recognised image format that may not be sent as a payload.
    #[error("Image format not supported: {0:?}")]
    UnsupportedFormat(ImageFormat),
}

/// Image types accepted in payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageType {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageType {
    /// Subtype used in `image/<subtype>` MIME strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpeg",
            ImageType::Png => "png",
            ImageType::Gif => "gif",
            ImageType::Webp => "webp",
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
            ImageType::Gif => "image/gif",
            ImageType::Webp => "image/webp",
        }
    }
}

impl TryFrom<ImageFormat> for ImageType {
    type Error = DetectionError;

    fn try_from(format: ImageFormat) -> Result<Self, Self::Error> {
        match format {
            ImageFormat::Jpeg => Ok(ImageType::Jpeg),
            ImageFormat::Png => Ok(ImageType::Png),
            ImageFormat::Gif => Ok(ImageType::Gif),
            ImageFormat::WebP => Ok(ImageType::Webp),
            other => Err(DetectionError::UnsupportedFormat(other)),
        }
    }
}

/// Detect the image type of a payload from its leading bytes.
pub fn detect_image_type(payload: &[u8]) -> Result<ImageType, DetectionError> {
    let format = image::guess_format(payload).map_err(|_| DetectionError::UnknownFormat)?;
    ImageType::try_from(format)
}

/// MIME subtype (`"jpeg"`, `"png"`, ...) of a payload.
pub fn get_mime_type(payload: &[u8]) -> Result<&'static str, DetectionError> {
    detect_image_type(payload).map(ImageType::as_str)
}
