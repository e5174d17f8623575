//! Sliding-window mutual-information tokenizer

use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::boundary::BoundaryScorer;
use crate::distribution::SymbolDistribution;
use crate::TokenizationError;

/// Configuration for the sliding-window tokenizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidingWindowConfig {
    /// Length of the analysis window
    pub window_size: usize,
    /// Symbols to advance between windows
    pub step_size: usize,
    /// Minimum length of an emitted token; also the minimum side length
    /// during split search, which keeps scorer inputs non-empty
    pub min_token_length: usize,
}

impl Default for SlidingWindowConfig {
    fn default() -> Self {
        Self {
            window_size: 500,
            step_size: 50,
            min_token_length: 3,
        }
    }
}

impl SlidingWindowConfig {
    pub fn validate(&self) -> Result<(), TokenizationError> {
        if self.window_size == 0 {
            return Err(TokenizationError::InvalidConfig(
                "window size must be positive".to_string(),
            ));
        }
        if self.step_size == 0 {
            return Err(TokenizationError::InvalidConfig(
                "step size must be positive".to_string(),
            ));
        }
        if self.min_token_length == 0 {
            return Err(TokenizationError::InvalidConfig(
                "minimum token length must be at least 1".to_string(),
            ));
        }
        if self.min_token_length >= self.window_size {
            return Err(TokenizationError::InvalidConfig(
                "minimum token length must be smaller than window size".to_string(),
            ));
        }
        Ok(())
    }
}

/// A contiguous span of the input sequence emitted as one unit
#[derive(Debug, Clone, PartialEq)]
pub struct Token<S> {
    /// Symbols of the span, owned by the caller
    pub symbols: Vec<S>,
    /// Start index into the input sequence (inclusive)
    pub start: usize,
    /// End index into the input sequence (exclusive)
    pub end: usize,
}

impl<S> Token<S> {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Tokenizer output: the kept tokens plus the full boundary list
///
/// Boundaries are strictly increasing and include the sentinels 0 and
/// the sequence length. Tokens shorter than the configured minimum are
/// dropped, so the tokens need not cover the whole sequence.
#[derive(Debug, Clone)]
pub struct Tokenization<S> {
    pub tokens: Vec<Token<S>>,
    pub boundaries: Vec<usize>,
}

/// Sliding-window tokenizer
///
/// Scans the sequence with overlapping windows, finds the strongest
/// split point per window with the configured boundary scorer, merges
/// the candidates and cuts the sequence at the merged boundaries.
#[derive(Debug, Clone)]
pub struct SlidingWindowTokenizer<B> {
    config: SlidingWindowConfig,
    scorer: B,
}

impl<B> SlidingWindowTokenizer<B> {
    /// Build a tokenizer, rejecting invalid configuration up front.
    pub fn new(config: SlidingWindowConfig, scorer: B) -> Result<Self, TokenizationError> {
        config.validate()?;
        Ok(Self { config, scorer })
    }

    pub fn config(&self) -> &SlidingWindowConfig {
        &self.config
    }

    /// Tokenize a symbol sequence.
    ///
    /// Windows start every `step_size` symbols and only full windows are
    /// analyzed; a sequence shorter than the window contributes no
    /// candidate boundaries and comes back as a single token (if long
    /// enough to keep).
    pub fn tokenize<S>(&self, symbols: &[S]) -> Tokenization<S>
    where
        S: Eq + Hash + Copy,
        B: BoundaryScorer<S>,
    {
        let n = symbols.len();
        let window_size = self.config.window_size;
        let step_size = self.config.step_size;
        let min_len = self.config.min_token_length;

        let mut boundaries = vec![0, n];
        let mut start = 0;
        while start + window_size <= n {
            let window = &symbols[start..start + window_size];
            if let Some(split) = self.best_split(window) {
                boundaries.push(start + split);
            }
            start += step_size;
        }

        boundaries.sort_unstable();
        boundaries.dedup();

        let mut tokens = Vec::new();
        for pair in boundaries.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            // Residual spans shorter than the minimum are dropped, so the
            // output is lossy by policy
            if to - from >= min_len {
                tokens.push(Token {
                    symbols: symbols[from..to].to_vec(),
                    start: from,
                    end: to,
                });
            }
        }

        debug!(
            tokens = tokens.len(),
            boundaries = boundaries.len(),
            dropped = boundaries.len() - 1 - tokens.len(),
            "sliding window tokenization complete"
        );

        Tokenization { tokens, boundaries }
    }

    /// Best split point of one window, or None when the window is too
    /// short to give both sides the minimum length.
    ///
    /// The exhaustive search advances the left/right distributions one
    /// symbol at a time, so each candidate costs O(alphabet) instead of
    /// O(window).
    fn best_split<S>(&self, window: &[S]) -> Option<usize>
    where
        S: Eq + Hash + Copy,
        B: BoundaryScorer<S>,
    {
        let n = window.len();
        let min_len = self.config.min_token_length;
        if n < 2 * min_len {
            return None;
        }

        let mut left = SymbolDistribution::from_symbols(&window[..min_len]);
        let mut right = SymbolDistribution::from_symbols(&window[min_len..]);

        let mut best_score = f64::NEG_INFINITY;
        let mut best_split = None;

        for split in min_len..=n - min_len {
            let score = self.scorer.score(&left, &right);
            if score > best_score {
                best_score = score;
                best_split = Some(split);
            }
            if split < n - min_len {
                left.add(window[split]);
                right.remove(window[split]);
            }
        }

        best_split
    }
}
