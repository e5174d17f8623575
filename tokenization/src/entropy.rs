//! Shannon entropy of discrete symbol sequences

use std::hash::Hash;

use crate::distribution::SymbolDistribution;

/// Shannon entropy of a symbol sequence, in bits.
///
/// Computed over the empirical symbol distribution as `-sum(p * log2(p))`.
/// An empty sequence has entropy 0.0. A symbol with probability 1
/// contributes exactly 0, so heavily skewed distributions stay stable.
pub fn entropy<S: Eq + Hash + Copy>(symbols: &[S]) -> f64 {
    SymbolDistribution::from_symbols(symbols).entropy()
}
