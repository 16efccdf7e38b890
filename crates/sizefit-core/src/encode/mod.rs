//! JPEG encoding pipeline.
//!
//! This module provides functionality for:
//! - Encoding images to JPEG at a fixed quality
//! - Searching for the highest quality whose output fits a size category
//!
//! # Architecture
//!
//! All operations are synchronous and CPU-bound. The best-size search reuses
//! one output buffer across attempts, so the buffer must not be shared with
//! anything else until the call returns.
//!
//! # Examples
//!
//! ```ignore
//! use sizefit_core::{encode::encode_to_best_size, DecodedImage, ResizeDimension};
//!
//! let image = DecodedImage::new(80, 80, vec![128u8; 80 * 80 * 3]);
//! let mut buf = Vec::new();
//! encode_to_best_size(&mut buf, &image, ResizeDimension::Small)?;
//! println!("Encoded {} bytes", buf.len());
//! ```

mod best_size;
mod jpeg;

pub use best_size::{encode_to_best_size, BestSizeEncoder, BestSizeError};
pub use jpeg::{encode, encode_into, encode_jpeg, EncodeConfig, EncodeError, ImageJpegCodec, JpegCodec};
