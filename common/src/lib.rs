//! Shared market-data types
//!
//! The segmentation and tokenization crates both consume in-memory price
//! history; this crate holds the candle type they agree on. Data loading
//! (broker APIs, flat files) lives upstream and is out of scope here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar timestamp (open time)
    pub timestamp: DateTime<Utc>,

    /// Opening price
    pub open: f64,

    /// Highest traded price in the bar
    pub high: f64,

    /// Lowest traded price in the bar
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Traded volume
    pub volume: f64,
}

impl Candle {
    pub fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// High-low range of the bar
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Did the bar close above its open?
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Extract the close-price signal from a candle series
pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
