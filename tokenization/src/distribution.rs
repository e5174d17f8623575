//! Empirical symbol distributions with incremental updates

use std::collections::HashMap;
use std::hash::Hash;

/// Symbol counts over a subsequence
///
/// Supports moving one symbol at a time between adjacent distributions,
/// so a split-point search can advance a candidate boundary without
/// re-counting either side.
#[derive(Debug, Clone, Default)]
pub struct SymbolDistribution<S> {
    counts: HashMap<S, usize>,
    total: usize,
}

impl<S: Eq + Hash + Copy> SymbolDistribution<S> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    pub fn from_symbols(symbols: &[S]) -> Self {
        let mut dist = Self::new();
        for &symbol in symbols {
            dist.add(symbol);
        }
        dist
    }

    /// Count one more occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
        self.total += 1;
    }

    /// Remove one occurrence of `symbol`; a no-op if it is not present.
    pub fn remove(&mut self, symbol: S) {
        if let Some(count) = self.counts.get_mut(&symbol) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&symbol);
            }
            self.total -= 1;
        }
    }

    /// Empirical probability of `symbol` (0.0 when the distribution is empty).
    pub fn probability(&self, symbol: S) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.counts.get(&symbol).copied().unwrap_or(0) as f64 / self.total as f64
    }

    /// Number of observations counted so far.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Distinct symbols currently present.
    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.counts.keys()
    }

    /// Shannon entropy in bits; 0.0 for an empty distribution.
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.counts
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_keep_counts_consistent() {
        let mut dist = SymbolDistribution::from_symbols(&['a', 'a', 'b']);
        assert_eq!(dist.total(), 3);
        assert_eq!(dist.probability('a'), 2.0 / 3.0);

        dist.add('b');
        assert_eq!(dist.probability('b'), 0.5);

        dist.remove('a');
        dist.remove('a');
        assert_eq!(dist.probability('a'), 0.0);
        assert_eq!(dist.total(), 2);
    }

    #[test]
    fn test_removing_absent_symbol_is_a_noop() {
        let mut dist = SymbolDistribution::from_symbols(&['x']);
        dist.remove('y');
        assert_eq!(dist.total(), 1);
    }

    #[test]
    fn test_incremental_matches_recount() {
        let symbols = ['a', 'b', 'a', 'c', 'b', 'a'];
        let mut left = SymbolDistribution::from_symbols(&symbols[..2]);
        let mut right = SymbolDistribution::from_symbols(&symbols[2..]);

        // Advance the split point one symbol at a time
        for split in 2..symbols.len() {
            left.add(symbols[split]);
            right.remove(symbols[split]);

            let recounted_left = SymbolDistribution::from_symbols(&symbols[..=split]);
            assert_eq!(left.total(), recounted_left.total());
            for &s in ['a', 'b', 'c'].iter() {
                assert_eq!(left.probability(s), recounted_left.probability(s));
                assert_eq!(
                    right.probability(s),
                    SymbolDistribution::from_symbols(&symbols[split + 1..]).probability(s)
                );
            }
        }
    }
}
