//! Fixed-length striding segmentation
//!
//! Emits uniform windows every `stride` candles. Unlike the CUSUM
//! segmenters the windows may overlap and a trailing partial window is
//! not emitted, so no coverage guarantee applies.

use common::Candle;
use serde::{Deserialize, Serialize};

use crate::{SegmentationError, Segmenter};

/// Configuration for fixed-length striding windows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StridingConfig {
    /// Window length in candles
    pub length: usize,
    /// Candles to advance between windows
    pub stride: usize,
}

impl Default for StridingConfig {
    fn default() -> Self {
        Self {
            length: 10,
            stride: 8,
        }
    }
}

/// Uniform-window segmenter for featurization workloads
#[derive(Debug, Clone, Default)]
pub struct StridingSegmenter {
    config: StridingConfig,
}

impl StridingSegmenter {
    pub fn new(config: StridingConfig) -> Self {
        Self { config }
    }
}

impl Segmenter for StridingSegmenter {
    fn segment<'a>(&self, candles: &'a [Candle]) -> Result<Vec<&'a [Candle]>, SegmentationError> {
        if self.config.length == 0 {
            return Err(SegmentationError::InvalidConfig(
                "window length must be positive".to_string(),
            ));
        }
        if self.config.stride == 0 {
            return Err(SegmentationError::InvalidConfig(
                "stride must be positive".to_string(),
            ));
        }

        let mut segments = Vec::new();
        let mut start = 0;
        while start + self.config.length <= candles.len() {
            segments.push(&candles[start..start + self.config.length]);
            start += self.config.stride;
        }
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn candles(n: usize) -> Vec<Candle> {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        (0..n)
            .map(|i| Candle::new(ts, i as f64, i as f64, i as f64, i as f64, 0.0))
            .collect()
    }

    #[test]
    fn test_windows_advance_by_stride() {
        let series = candles(30);
        let segmenter = StridingSegmenter::new(StridingConfig {
            length: 10,
            stride: 8,
        });

        let segments = segmenter.segment(&series).unwrap();
        // Starts at 0, 8, 16; 24 + 10 > 30 so the partial tail is dropped
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| s.len() == 10));
        assert_eq!(segments[1][0].close, 8.0);
        assert_eq!(segments[2][0].close, 16.0);
    }

    #[test]
    fn test_series_shorter_than_window_yields_nothing() {
        let series = candles(5);
        let segmenter = StridingSegmenter::default();

        let segments = segmenter.segment(&series).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_zero_stride_is_rejected() {
        let series = candles(20);
        let segmenter = StridingSegmenter::new(StridingConfig {
            length: 10,
            stride: 0,
        });

        assert!(matches!(
            segmenter.segment(&series),
            Err(SegmentationError::InvalidConfig(_))
        ));
    }
}
