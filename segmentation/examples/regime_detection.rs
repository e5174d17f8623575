//! Example: detecting price regimes with CUSUM segmentation

use chrono::{Duration, TimeZone, Utc};
use common::Candle;
use segmentation::{
    CusumConfig, CusumSegmenter, RecursiveCusumSegmenter, Segmenter, StridingSegmenter,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Synthetic daily closes: a quiet regime, a jump, then a sell-off
    let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    let mut closes = Vec::new();
    closes.extend((0..30).map(|i| 100.0 + (i % 3) as f64 * 0.4));
    closes.extend((0..30).map(|i| 140.0 + (i % 4) as f64 * 0.5));
    closes.extend((0..30).map(|i| 110.0 - (i % 3) as f64 * 0.3));

    let candles: Vec<Candle> = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            Candle::new(
                start + Duration::days(i as i64),
                c,
                c + 0.5,
                c - 0.5,
                c,
                1_000_000.0,
            )
        })
        .collect();

    info!("=== Single-pass CUSUM segmentation ===");
    let segmenter = CusumSegmenter::new(CusumConfig { threshold: 2.0 });
    let segments = segmenter.segment(&candles)?;
    println!("detected {} regimes:", segments.len());
    for (i, segment) in segments.iter().enumerate() {
        if let (Some(first), Some(last)) = (segment.first(), segment.last()) {
            println!(
                "  regime {}: {} candles, close {:.1} -> {:.1}",
                i,
                segment.len(),
                first.close,
                last.close
            );
        }
    }

    info!("=== Recursive CUSUM (depth 2) ===");
    let recursive = RecursiveCusumSegmenter::new(CusumConfig { threshold: 2.0 }, 2);
    let tree = recursive.segment(&candles)?;
    let leaves: Vec<_> = tree.iter().flat_map(|node| node.flatten()).collect();
    println!(
        "depth-2 pass produced {} top-level regimes, {} leaf segments",
        tree.len(),
        leaves.len()
    );

    info!("=== Striding windows for featurization ===");
    let striding = StridingSegmenter::default();
    let windows = striding.segment(&candles)?;
    println!("{} fixed-length windows of 10 candles", windows.len());

    Ok(())
}
