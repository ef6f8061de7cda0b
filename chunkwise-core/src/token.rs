//! Token service abstraction
//!
//! The packer never tokenizes on its own. It measures and slices text through
//! a [`TokenService`], which is expected to be deterministic for a given
//! encoding and to round-trip well-formed text.

/// Identifier of a single token
pub type TokenId = u32;

/// Encoder/decoder pair used to measure and slice text
pub trait TokenService: Send + Sync {
    /// Encode text into token ids
    fn encode(&self, text: &str) -> Vec<TokenId>;

    /// Decode token ids back into text.
    ///
    /// Ids that cannot be decoded on their own (a multi-byte character split
    /// across the slice edge) may be dropped from the result.
    fn decode(&self, tokens: &[TokenId]) -> String;

    /// Name of the encoding, used in logs and output metadata
    fn name(&self) -> &str;
}

/// Reversible tokenizer mapping every Unicode scalar value to one token.
///
/// Useful offline and in tests: token counts equal `text.chars().count()` and
/// `decode(encode(t)) == t` for every string.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTokenizer;

impl CharTokenizer {
    /// Registry name of this tokenizer
    pub const NAME: &'static str = "char";

    /// Create a new character tokenizer
    pub fn new() -> Self {
        Self
    }
}

impl TokenService for CharTokenizer {
    fn encode(&self, text: &str) -> Vec<TokenId> {
        text.chars().map(TokenId::from).collect()
    }

    fn decode(&self, tokens: &[TokenId]) -> String {
        tokens.iter().filter_map(|&id| char::from_u32(id)).collect()
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
