//! CUSUM change-point detection over log returns

use common::Candle;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{SegmentationError, Segmenter};

/// Configuration for CUSUM change-point detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CusumConfig {
    /// Threshold multiplier applied to the return standard deviation.
    ///
    /// Values <= 0 are accepted but degenerate: every step becomes a
    /// change point.
    pub threshold: f64,
}

impl Default for CusumConfig {
    fn default() -> Self {
        Self { threshold: 2.0 }
    }
}

/// CUSUM change-point segmenter
///
/// Monitors the cumulative sum of demeaned log returns and records a
/// change point whenever the sum drifts more than `threshold` standard
/// deviations from its last reset. Prices are assumed positive.
#[derive(Debug, Clone, Default)]
pub struct CusumSegmenter {
    config: CusumConfig,
}

impl CusumSegmenter {
    pub fn new(config: CusumConfig) -> Self {
        Self { config }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            config: CusumConfig { threshold },
        }
    }

    /// Detect change points in a scalar signal.
    ///
    /// Returned indices are positions in the log-return series (one
    /// shorter than the signal) and double as row indices at which the
    /// original series is split. A flat signal has zero return standard
    /// deviation; no change point is detectable there and an empty list
    /// is returned.
    pub fn change_points(&self, signal: &[f64]) -> Result<Vec<usize>, SegmentationError> {
        if signal.len() < 2 {
            return Err(SegmentationError::InsufficientData {
                required: 2,
                actual: signal.len(),
            });
        }

        let returns: Vec<f64> = signal.windows(2).map(|w| w[1].ln() - w[0].ln()).collect();

        // Global statistics, computed once up front (not per segment)
        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        if std_dev == 0.0 {
            debug!("flat return series, no change points detectable");
            return Ok(Vec::new());
        }

        let limit = self.config.threshold * std_dev;

        let mut change_points = Vec::new();
        let mut cusum = 0.0;
        // Additive reset: the running sum keeps its pre-reset drift and
        // deviations are measured against the value at the last change point.
        let mut offset = 0.0;

        for (i, r) in returns.iter().enumerate() {
            cusum += r - mean;
            if (cusum - offset).abs() > limit {
                change_points.push(i);
                offset = cusum;
            }
        }

        debug!(
            count = change_points.len(),
            threshold = self.config.threshold,
            "cusum scan complete"
        );
        Ok(change_points)
    }

    /// Segment a candle series on an arbitrary scalar projection.
    pub fn segment_with<'a, F>(
        &self,
        candles: &'a [Candle],
        signal: F,
    ) -> Result<Vec<&'a [Candle]>, SegmentationError>
    where
        F: Fn(&Candle) -> f64,
    {
        let values: Vec<f64> = candles.iter().map(signal).collect();
        let change_points = self.change_points(&values)?;
        Ok(split_at(candles, &change_points))
    }
}

impl Segmenter for CusumSegmenter {
    /// Segment on the close-price signal.
    fn segment<'a>(&self, candles: &'a [Candle]) -> Result<Vec<&'a [Candle]>, SegmentationError> {
        self.segment_with(candles, |c| c.close)
    }
}

/// Split a series at the given ascending indices.
///
/// A change point at index 0 produces a leading empty segment; the
/// pieces always concatenate back to the input.
fn split_at<'a>(candles: &'a [Candle], indices: &[usize]) -> Vec<&'a [Candle]> {
    let mut segments = Vec::with_capacity(indices.len() + 1);
    let mut prev = 0;
    for &idx in indices {
        segments.push(&candles[prev..idx]);
        prev = idx;
    }
    segments.push(&candles[prev..]);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        closes
            .iter()
            .map(|&c| Candle::new(ts, c, c, c, c, 0.0))
            .collect()
    }

    fn assert_round_trip(candles: &[Candle], segments: &[&[Candle]]) {
        let rebuilt: Vec<Candle> = segments.iter().flat_map(|s| s.iter().cloned()).collect();
        assert_eq!(rebuilt, candles);
    }

    #[test]
    fn test_rejects_short_series() {
        let segmenter = CusumSegmenter::default();
        let err = segmenter.change_points(&[100.0]).unwrap_err();
        assert_eq!(
            err,
            SegmentationError::InsufficientData {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_infinite_threshold_yields_single_segment() {
        let candles = candles_from_closes(&[100.0, 101.0, 99.0, 103.0, 98.0, 104.0]);
        let segmenter = CusumSegmenter::with_threshold(f64::INFINITY);

        let segments = segmenter.segment(&candles).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0], candles.as_slice());
    }

    #[test]
    fn test_flat_series_has_no_change_points() {
        let candles = candles_from_closes(&[50.0; 8]);
        let segmenter = CusumSegmenter::default();

        let segments = segmenter.segment(&candles).unwrap();
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_negative_threshold_degenerates_to_per_step_segments() {
        let candles = candles_from_closes(&[1.0, 2.0, 1.0, 2.0, 1.0]);
        let segmenter = CusumSegmenter::with_threshold(-1.0);

        let segments = segmenter.segment(&candles).unwrap();
        // Change point at every return index, leading segment empty
        assert_eq!(segments.len(), candles.len());
        assert!(segments[0].is_empty());
        assert_round_trip(&candles, &segments);
    }

    #[test]
    fn test_detects_level_shift() {
        let closes = [1.0, 1.0, 1.0, 1.0, 1.0, 10.0, 10.0, 10.0, 10.0, 10.0];
        let candles = candles_from_closes(&closes);
        let segmenter = CusumSegmenter::with_threshold(1.0);

        let change_points = segmenter.change_points(&common::closes(&candles)).unwrap();
        // The jump sits between rows 4 and 5; its return index must be flagged
        assert!(change_points.contains(&4));

        let segments = segmenter.segment(&candles).unwrap();
        assert!(segments.len() > 1);
        assert_round_trip(&candles, &segments);
    }

    #[test]
    fn test_segments_are_contiguous_and_cover_input() {
        let closes = [
            100.0, 100.5, 101.0, 100.2, 130.0, 131.0, 129.5, 130.5, 90.0, 89.5, 91.0,
        ];
        let candles = candles_from_closes(&closes);
        let segmenter = CusumSegmenter::with_threshold(0.5);

        let segments = segmenter.segment(&candles).unwrap();
        assert_round_trip(&candles, &segments);
    }

    #[test]
    fn test_segment_with_custom_projection() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let candles: Vec<Candle> = [1.0, 1.0, 1.0, 1.0, 10.0, 10.0, 10.0]
            .iter()
            .map(|&v| Candle::new(ts, v, v * 2.0, v, 5.0, 0.0))
            .collect();

        // Close is constant here; the shift only shows up in the highs
        let segmenter = CusumSegmenter::with_threshold(1.0);
        assert_eq!(segmenter.segment(&candles).unwrap().len(), 1);

        let segments = segmenter.segment_with(&candles, |c| c.high).unwrap();
        assert!(segments.len() > 1);
    }
}
