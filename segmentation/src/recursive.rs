//! Recursive CUSUM segmentation
//!
//! Re-applies the CUSUM pass to each detected regime so that coarse
//! splits on large histories get refined into finer sub-regimes.

use common::Candle;
use tracing::debug;

use crate::cusum::{CusumConfig, CusumSegmenter};
use crate::{SegmentationError, Segmenter};

/// Nested segmentation result
///
/// Nesting depth mirrors the configured recursion depth: a depth-1 run
/// produces leaves only, a depth-2 run produces nodes of leaves, and so
/// on.
#[derive(Debug, Clone)]
pub enum SegmentTree<'a> {
    Leaf(&'a [Candle]),
    Node(Vec<SegmentTree<'a>>),
}

impl<'a> SegmentTree<'a> {
    /// Leaf segments in series order.
    pub fn flatten(&self) -> Vec<&'a [Candle]> {
        match self {
            SegmentTree::Leaf(segment) => vec![segment],
            SegmentTree::Node(children) => {
                children.iter().flat_map(|child| child.flatten()).collect()
            }
        }
    }
}

/// Applies CUSUM segmentation recursively to a fixed depth
#[derive(Debug, Clone)]
pub struct RecursiveCusumSegmenter {
    config: CusumConfig,
    depth: usize,
}

impl Default for RecursiveCusumSegmenter {
    fn default() -> Self {
        Self {
            config: CusumConfig::default(),
            depth: 2,
        }
    }
}

impl RecursiveCusumSegmenter {
    pub fn new(config: CusumConfig, depth: usize) -> Self {
        Self { config, depth }
    }

    /// Segment the series, re-segmenting each regime `depth` times in
    /// total with the same threshold.
    ///
    /// Depth 0 is rejected up front. A sub-segment too short to derive
    /// returns from (< 2 candles) is kept whole as a leaf rather than
    /// failing the recursion.
    pub fn segment<'a>(
        &self,
        candles: &'a [Candle],
    ) -> Result<Vec<SegmentTree<'a>>, SegmentationError> {
        if self.depth < 1 {
            return Err(SegmentationError::InvalidDepth { depth: self.depth });
        }

        let segmenter = CusumSegmenter::new(self.config.clone());
        let tree = recurse(&segmenter, candles, self.depth)?;
        debug!(depth = self.depth, top_level = tree.len(), "recursive segmentation complete");
        Ok(tree)
    }
}

fn recurse<'a>(
    segmenter: &CusumSegmenter,
    candles: &'a [Candle],
    depth: usize,
) -> Result<Vec<SegmentTree<'a>>, SegmentationError> {
    let segments = segmenter.segment(candles)?;

    if depth == 1 {
        return Ok(segments.into_iter().map(SegmentTree::Leaf).collect());
    }

    let mut nodes = Vec::with_capacity(segments.len());
    for segment in segments {
        if segment.len() < 2 {
            nodes.push(SegmentTree::Leaf(segment));
        } else {
            nodes.push(SegmentTree::Node(recurse(segmenter, segment, depth - 1)?));
        }
    }
    Ok(nodes)
}
