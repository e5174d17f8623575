//! Symbol-sequence tokenization
//!
//! Converts a discrete symbol sequence (cluster labels assigned upstream
//! to windows of market data) into variable-length tokens. Candidate
//! token boundaries come from a sliding-window search that scores every
//! split point with an information-theoretic boundary scorer and keeps
//! the strongest one per window.

mod boundary;
mod distribution;
mod entropy;
mod sliding_window;

pub use boundary::{BoundaryScorer, EntropyKlScorer, JensenShannonScorer};
pub use distribution::SymbolDistribution;
pub use entropy::entropy;
pub use sliding_window::{SlidingWindowConfig, SlidingWindowTokenizer, Token, Tokenization};

use thiserror::Error;

/// Tokenization failure taxonomy
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TokenizationError {
    /// Rejected at construction time, before any computation begins
    #[error("invalid tokenizer configuration: {0}")]
    InvalidConfig(String),
}
