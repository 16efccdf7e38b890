//! Sizefit Core - size-budgeted JPEG encoding
//!
//! This crate encodes decoded images as JPEG at the highest quality that fits
//! a size category's byte budget, and formats finished payloads as `data:`
//! URIs for inline transport.

pub mod config;
pub mod encode;
pub mod mime;
pub mod payload;
pub mod raster;

pub use config::{
    ConfigError, DimensionSizeLimits, EncoderConfig, ResizeDimension, SizeLimit, DIMENSION_SIZE_LIMITS,
    MAX_JPEG_QUALITY, MIN_JPEG_QUALITY,
};
pub use encode::{encode, encode_to_best_size, BestSizeEncoder, BestSizeError, EncodeConfig, EncodeError};
pub use mime::{get_mime_type, DetectionError, ImageType};
pub use payload::{get_payload_data_uri, get_payload_from_uri, PayloadError};
pub use raster::DecodedImage;
