//! Highest-quality JPEG that fits a size category's byte budget.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::config::{EncoderConfig, ResizeDimension};
use crate::raster::DecodedImage;

use super::jpeg::{EncodeError, ImageJpegCodec, JpegCodec};

/// Errors from [`BestSizeEncoder::encode_to_best_size`].
#[derive(Debug, Error)]
pub enum BestSizeError {
    /// The codec failed; no further qualities were tried.
    #[error(transparent)]
    Codec(#[from] EncodeError),

    /// Even the lowest quality produced an encoding at or above the category's `max`.
    #[error("image size after processing exceeds max, expect < {max} bytes, received {actual} bytes")]
    SizeExceeded { max: usize, actual: usize },
}

/// Searches descending JPEG qualities for the first encoding within budget.
///
/// Holds no per-call state, so one encoder can serve concurrent callers as
/// long as each brings its own buffer and the codec tolerates shared use.
#[derive(Debug, Clone, Default)]
pub struct BestSizeEncoder<C = ImageJpegCodec> {
    config: EncoderConfig,
    codec: C,
}

impl BestSizeEncoder<ImageJpegCodec> {
    pub fn new(config: EncoderConfig) -> Self {
        Self::with_codec(config, ImageJpegCodec)
    }
}

impl<C: JpegCodec> BestSizeEncoder<C> {
    pub fn with_codec(config: EncoderConfig, codec: C) -> Self {
        Self { config, codec }
    }

    #[inline]
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `image` into `buf` at the highest quality whose output is
    /// strictly smaller than the category's `ideal` size.
    ///
    /// If no quality reaches `ideal`, the lowest-quality encoding is kept as
    /// long as it is strictly smaller than `max`. Otherwise the call fails with
    /// [`BestSizeError::SizeExceeded`].
    ///
    /// `buf` is cleared before every attempt. On success it holds exactly the
    /// accepted encoding; on `SizeExceeded` it holds the rejected lowest-quality
    /// attempt, and after a codec error its contents are unspecified.
    pub fn encode_to_best_size(
        &self,
        buf: &mut Vec<u8>,
        image: &DecodedImage,
        dimension: ResizeDimension,
    ) -> Result<(), BestSizeError> {
        let limit = self.config.limit(dimension);
        let min_quality = self.config.min_quality;

        for quality in self.config.quality_steps() {
            buf.clear();
            self.codec.encode(buf, image, quality)?;

            let len = buf.len();
            trace!(quality, len, ideal = limit.ideal, "JPEG attempt");

            if len < limit.ideal {
                debug!(quality, len, ?dimension, "Accepted JPEG within ideal size");
                return Ok(());
            }

            if quality == min_quality {
                if len < limit.max {
                    warn!(quality, len, ideal = limit.ideal, max = limit.max, ?dimension, "Accepted JPEG above ideal size");
                    return Ok(());
                }

                warn!(len, max = limit.max, ?dimension, "JPEG exceeds max size at lowest quality");
                return Err(BestSizeError::SizeExceeded {
                    max: limit.max,
                    actual: len,
                });
            }
        }

        // only reachable with a config whose quality range is empty
        buf.clear();
        Err(BestSizeError::SizeExceeded {
            max: limit.max,
            actual: 0,
        })
    }

    /// Like [`Self::encode_to_best_size`], but returns the accepted bytes and
    /// drops any rejected attempt on failure.
    pub fn encode_best(&self, image: &DecodedImage, dimension: ResizeDimension) -> Result<Vec<u8>, BestSizeError> {
        let mut buf = Vec::new();
        self.encode_to_best_size(&mut buf, image, dimension)?;
        Ok(buf)
    }
}

/// Best-size encode with the built-in limits and the default codec.
pub fn encode_to_best_size(
    buf: &mut Vec<u8>,
    image: &DecodedImage,
    dimension: ResizeDimension,
) -> Result<(), BestSizeError> {
    BestSizeEncoder::new(EncoderConfig::default()).encode_to_best_size(buf, image, dimension)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
