//! Boundary scorers for split-point search
//!
//! Both scorers rate how strong a boundary between two adjacent symbol
//! subsequences is; higher means stronger. They are deliberately NOT
//! true information-theoretic divergences: terms whose probabilities
//! would make the log undefined are skipped silently, which matches the
//! tokenization output this crate is built to reproduce. Correcting the
//! formulas would change every downstream token stream, so any such
//! change has to be a conscious one.

use std::collections::HashSet;
use std::hash::Hash;

use crate::distribution::SymbolDistribution;

/// Scores the boundary between two adjacent symbol subsequences
///
/// Both sides must be non-empty; the tokenizer guarantees this through
/// its minimum-token-length configuration.
pub trait BoundaryScorer<S> {
    fn score(&self, left: &SymbolDistribution<S>, right: &SymbolDistribution<S>) -> f64;

    fn score_slices(&self, left: &[S], right: &[S]) -> f64
    where
        S: Eq + Hash + Copy,
    {
        self.score(
            &SymbolDistribution::from_symbols(left),
            &SymbolDistribution::from_symbols(right),
        )
    }
}

/// Entropy plus one-sided KL-style divergence
///
/// `-(H(left) + H(right)) + sum(p_left * log2(p_left / p_right))`, the
/// divergence accumulated only where both sides have positive
/// probability. Asymmetric zero-probability terms are dropped, so two
/// pure, fully distinct sides score 0 while a pure side facing a mixed
/// one can score higher. Favors boundaries between internally coherent
/// segments that still differ from each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyKlScorer;

impl<S: Eq + Hash + Copy> BoundaryScorer<S> for EntropyKlScorer {
    fn score(&self, left: &SymbolDistribution<S>, right: &SymbolDistribution<S>) -> f64 {
        let coherence = -(left.entropy() + right.entropy());

        // Only symbols present on the left can have p > 0
        let mut divergence = 0.0;
        for &symbol in left.symbols() {
            let p = left.probability(symbol);
            let q = right.probability(symbol);
            if p > 0.0 && q > 0.0 {
                divergence += p * (p / q).log2();
            }
        }

        coherence + divergence
    }
}

/// Symmetric Jensen-Shannon-style divergence
///
/// For each symbol present on either side, with `m = (p + q) / 2`:
/// accumulates `0.5 * p * log2(p / m)` and `0.5 * q * log2(q / m)`
/// whenever the respective numerator and `m` are positive. True JS
/// divergence is bounded in [0, 1] bits; this variant only sums the
/// defined terms, so callers must not rely on that bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct JensenShannonScorer;

impl<S: Eq + Hash + Copy> BoundaryScorer<S> for JensenShannonScorer {
    fn score(&self, left: &SymbolDistribution<S>, right: &SymbolDistribution<S>) -> f64 {
        let all_symbols: HashSet<S> = left.symbols().chain(right.symbols()).copied().collect();

        let mut divergence = 0.0;
        for &symbol in &all_symbols {
            let p = left.probability(symbol);
            let q = right.probability(symbol);
            let m = (p + q) / 2.0;

            if p > 0.0 && m > 0.0 {
                divergence += 0.5 * p * (p / m).log2();
            }
            if q > 0.0 && m > 0.0 {
                divergence += 0.5 * q * (q / m).log2();
            }
        }

        divergence
    }
}
