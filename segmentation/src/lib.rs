//! Numeric-series segmentation
//!
//! Splits a candle series into contiguous regimes. The main tool is a
//! CUSUM change-point detector over log returns, applied once or
//! recursively; a fixed-length striding segmenter is provided for
//! featurization workloads that want uniform windows instead.

mod cusum;
mod recursive;
mod striding;

pub use cusum::{CusumConfig, CusumSegmenter};
pub use recursive::{RecursiveCusumSegmenter, SegmentTree};
pub use striding::{StridingConfig, StridingSegmenter};

use common::Candle;
use thiserror::Error;

/// Segmentation failure taxonomy
///
/// All failures are surfaced immediately to the caller; nothing in this
/// crate retries or logs-and-continues.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SegmentationError {
    /// The input series is too short to derive the required statistics
    #[error("insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Recursion depth below the minimum of 1
    #[error("recursion depth must be at least 1, got {depth}")]
    InvalidDepth { depth: usize },

    /// Rejected before any computation begins
    #[error("invalid segmenter configuration: {0}")]
    InvalidConfig(String),
}

/// A strategy for splitting a candle series into sub-series
pub trait Segmenter {
    fn segment<'a>(&self, candles: &'a [Candle]) -> Result<Vec<&'a [Candle]>, SegmentationError>;
}
