use tiktoken_rs::CoreBPE;
use tracing::warn;

enum Strategy {
    Bpe(Box<CoreBPE>),
    CharEstimate,
}

/// Token counter backed by the `cl100k_base` BPE encoding.
///
/// If the encoding cannot be constructed, the counter permanently falls back
/// to a character-count heuristic (one token per four characters) and logs a
/// warning once. Counting itself never fails.
pub struct TokenCounter {
    strategy: Strategy,
}

impl TokenCounter {
    /// Builds a counter, preferring the real BPE encoding.
    pub fn new() -> Self {
        match tiktoken_rs::cl100k_base() {
            Ok(bpe) => Self {
                strategy: Strategy::Bpe(Box::new(bpe)),
            },
            Err(e) => {
                warn!("cl100k_base tokenizer unavailable ({e}); token counts will be estimated");
                Self::approximate()
            }
        }
    }

    /// Builds a counter that always uses the character-count heuristic.
    pub fn approximate() -> Self {
        Self {
            strategy: Strategy::CharEstimate,
        }
    }

    /// True when counts come from the heuristic rather than the BPE.
    pub fn is_approximate(&self) -> bool {
        matches!(self.strategy, Strategy::CharEstimate)
    }

    /// Number of tokens in `text`. Empty input is always zero tokens.
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        match &self.strategy {
            Strategy::Bpe(bpe) => bpe.encode_ordinary(text).len(),
            Strategy::CharEstimate => text.chars().count() / 4,
        }
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}
