//! Example: tokenizing a cluster-label sequence

use tokenization::{
    EntropyKlScorer, JensenShannonScorer, SlidingWindowConfig, SlidingWindowTokenizer,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Stand-in for the encoded sequence an upstream classifier emits:
    // alternating market regimes with a noisy stretch in the middle
    let sequence: Vec<char> = "AAAAAAABBBBBBBAABABABBBBCCCCCCCCAAAAAAA"
        .chars()
        .collect();

    let config = SlidingWindowConfig {
        window_size: 12,
        step_size: 4,
        min_token_length: 3,
    };

    info!("=== Jensen-Shannon boundary scorer ===");
    let tokenizer = SlidingWindowTokenizer::new(config.clone(), JensenShannonScorer)?;
    let result = tokenizer.tokenize(&sequence);
    println!("boundaries: {:?}", result.boundaries);
    for token in &result.tokens {
        let text: String = token.symbols.iter().collect();
        println!("  [{:2}, {:2}) {}", token.start, token.end, text);
    }

    info!("=== Entropy + KL boundary scorer ===");
    let tokenizer = SlidingWindowTokenizer::new(config, EntropyKlScorer)?;
    let result = tokenizer.tokenize(&sequence);
    println!("boundaries: {:?}", result.boundaries);
    for token in &result.tokens {
        let text: String = token.symbols.iter().collect();
        println!("  [{:2}, {:2}) {}", token.start, token.end, text);
    }

    Ok(())
}
