//! Size budgets and quality bounds for best-size encoding.
//!
//! The default table is a `const` value and is never mutated. Hosts that need
//! different thresholds build their own [`EncoderConfig`] (or deserialize one)
//! and hand it to [`crate::encode::BestSizeEncoder`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest JPEG quality the best-size search starts from.
pub const MAX_JPEG_QUALITY: u8 = 80;

/// Lowest JPEG quality the best-size search will try.
pub const MIN_JPEG_QUALITY: u8 = 50;

/// Amount the quality drops between attempts.
pub const QUALITY_STEP: u8 = 2;

/// Size category selecting which [`SizeLimit`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDimension {
    /// Small previews such as avatars and link thumbnails.
    Small,
    /// Larger inline images.
    Large,
}

impl ResizeDimension {
    /// All categories, in ascending size order.
    pub const ALL: [ResizeDimension; 2] = [ResizeDimension::Small, ResizeDimension::Large];

    /// Longest edge, in pixels, an image in this category is expected to have.
    ///
    /// This crate does not resize; callers use the bound before encoding.
    pub const fn pixel_bound(self) -> u32 {
        match self {
            ResizeDimension::Small => 80,
            ResizeDimension::Large => 240,
        }
    }
}

impl TryFrom<u8> for ResizeDimension {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ResizeDimension::Small),
            1 => Ok(ResizeDimension::Large),
            other => Err(ConfigError::UnknownDimension(other)),
        }
    }
}

/// Byte thresholds for one size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimit {
    /// Preferred ceiling. An encoding strictly below this is accepted immediately.
    pub ideal: usize,
    /// Absolute ceiling, only consulted at the lowest quality.
    pub max: usize,
}

impl SizeLimit {
    pub const fn new(ideal: usize, max: usize) -> Self {
        Self { ideal, max }
    }
}

/// Size limits for every [`ResizeDimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionSizeLimits {
    pub small: SizeLimit,
    pub large: SizeLimit,
}

/// Built-in per-category limits.
pub const DIMENSION_SIZE_LIMITS: DimensionSizeLimits = DimensionSizeLimits {
    small: SizeLimit::new(2560, 5632),
    large: SizeLimit::new(16384, 38400),
};

impl DimensionSizeLimits {
    /// Look up the limit for a category.
    #[inline]
    pub fn get(&self, dimension: ResizeDimension) -> SizeLimit {
        match dimension {
            ResizeDimension::Small => self.small,
            ResizeDimension::Large => self.large,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (ResizeDimension, SizeLimit)> + '_ {
        ResizeDimension::ALL.into_iter().map(|dim| (dim, self.get(dim)))
    }
}

impl Default for DimensionSizeLimits {
    fn default() -> Self {
        DIMENSION_SIZE_LIMITS
    }
}

/// Errors reported by [`EncoderConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid quality range: min ({min}) must be non-zero and below max ({max}), max must be at most 100")]
    InvalidQualityRange { min: u8, max: u8 },

    #[error("Invalid size limit for {dimension:?}: ideal ({ideal}) exceeds max ({max})")]
    IdealExceedsMax {
        dimension: ResizeDimension,
        ideal: usize,
        max: usize,
    },

    #[error("Unknown size category: {0}")]
    UnknownDimension(u8),
}

/// Read-only configuration for the best-size search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncoderConfig {
    /// First quality attempted.
    pub max_quality: u8,
    /// Last quality attempted; the `max` threshold is only checked here.
    pub min_quality: u8,
    /// Per-category byte thresholds.
    pub limits: DimensionSizeLimits,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_quality: MAX_JPEG_QUALITY,
            min_quality: MIN_JPEG_QUALITY,
            limits: DIMENSION_SIZE_LIMITS,
        }
    }
}

impl EncoderConfig {
    /// Check the invariants the search relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_quality == 0 || self.max_quality > 100 || self.min_quality >= self.max_quality {
            return Err(ConfigError::InvalidQualityRange {
                min: self.min_quality,
                max: self.max_quality,
            });
        }

        for (dimension, limit) in self.limits.iter() {
            if limit.ideal > limit.max {
                return Err(ConfigError::IdealExceedsMax {
                    dimension,
                    ideal: limit.ideal,
                    max: limit.max,
                });
            }
        }

        Ok(())
    }

    #[inline]
    pub fn limit(&self, dimension: ResizeDimension) -> SizeLimit {
        self.limits.get(dimension)
    }

    /// Qualities the search attempts, in order.
    pub fn quality_steps(&self) -> QualitySteps {
        QualitySteps::new(self.max_quality, self.min_quality)
    }
}

/// Descending quality schedule: `max, max - 2, ...`, always ending exactly at `min`.
///
/// When `max - min` is odd the step would jump over `min`, so the final
/// attempt is clamped to `min` instead.
#[derive(Debug, Clone)]
pub struct QualitySteps {
    next: Option<u8>,
    min: u8,
}

impl QualitySteps {
    pub fn new(max: u8, min: u8) -> Self {
        Self {
            next: (max >= min).then_some(max),
            min,
        }
    }
}

impl Iterator for QualitySteps {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let quality = self.next?;

        self.next = if quality <= self.min {
            None
        } else {
            Some(quality.saturating_sub(QUALITY_STEP).max(self.min))
        };

        Some(quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EncoderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_quality, 80);
        assert_eq!(config.min_quality, 50);
    }

    #[test]
    fn test_limit_lookup() {
        let config = EncoderConfig::default();
        assert_eq!(config.limit(ResizeDimension::Small), SizeLimit::new(2560, 5632));
        assert_eq!(config.limit(ResizeDimension::Large), SizeLimit::new(16384, 38400));
    }

    #[test]
    fn test_pixel_bounds() {
        assert_eq!(ResizeDimension::Small.pixel_bound(), 80);
        assert_eq!(ResizeDimension::Large.pixel_bound(), 240);
    }

    #[test]
    fn test_dimension_try_from_u8() {
        assert_eq!(ResizeDimension::try_from(0), Ok(ResizeDimension::Small));
        assert_eq!(ResizeDimension::try_from(1), Ok(ResizeDimension::Large));
        assert_eq!(ResizeDimension::try_from(7), Err(ConfigError::UnknownDimension(7)));
        assert_eq!(
            ResizeDimension::try_from(255).unwrap_err().to_string(),
            "Unknown size category: 255"
        );
    }

    #[test]
    fn test_default_schedule() {
        let steps: Vec<u8> = EncoderConfig::default().quality_steps().collect();
        let expected: Vec<u8> = (50..=80).rev().step_by(2).collect();
        assert_eq!(steps, expected);
        assert_eq!(steps.first(), Some(&80));
        assert_eq!(steps.last(), Some(&50));
    }

    #[test]
    fn test_schedule_with_odd_gap_ends_at_min() {
        let steps: Vec<u8> = QualitySteps::new(81, 50).collect();
        assert_eq!(steps[..3], [81, 79, 77]);
        assert_eq!(steps[steps.len() - 2..], [51, 50]);
    }

    #[test]
    fn test_schedule_single_step() {
        assert_eq!(QualitySteps::new(50, 50).collect::<Vec<_>>(), vec![50]);
        assert_eq!(QualitySteps::new(51, 50).collect::<Vec<_>>(), vec![51, 50]);
    }

    #[test]
    fn test_schedule_inverted_range_is_empty() {
        assert_eq!(QualitySteps::new(40, 50).count(), 0);
    }

    #[test]
    fn test_schedule_reaches_quality_one() {
        let steps: Vec<u8> = QualitySteps::new(4, 1).collect();
        assert_eq!(steps, vec![4, 2, 1]);
    }

    #[test]
    fn test_validate_rejects_bad_quality_range() {
        let mut config = EncoderConfig::default();
        config.min_quality = 80;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidQualityRange { min: 80, max: 80 })
        );

        let mut config = EncoderConfig::default();
        config.min_quality = 0;
        assert!(config.validate().is_err());

        let mut config = EncoderConfig::default();
        config.max_quality = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_ideal_above_max() {
        let mut config = EncoderConfig::default();
        config.limits.large = SizeLimit::new(10_000, 9_999);
        assert_eq!(
            config.validate(),
            Err(ConfigError::IdealExceedsMax {
                dimension: ResizeDimension::Large,
                ideal: 10_000,
                max: 9_999,
            })
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::IdealExceedsMax {
            dimension: ResizeDimension::Small,
            ideal: 2,
            max: 1,
        };
        assert_eq!(err.to_string(), "Invalid size limit for Small: ideal (2) exceeds max (1)");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
