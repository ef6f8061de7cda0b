//! Output chunk type

/// A closed, immutable unit of packed text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// Chunk content, trimmed of surrounding whitespace
    pub text: String,
    /// Tokens in the chunk, including overlap carried from the previous chunk
    pub token_count: usize,
    /// Tokens at the head of `text` duplicated from the previous chunk
    pub overlap_token_count: usize,
    /// Whole paragraphs contributed to this chunk
    pub paragraph_count: usize,
    /// Sentences contributed to this chunk
    pub sentence_count: usize,
}

impl Chunk {
    /// Whether this chunk exceeds the given window.
    ///
    /// Only a chunk holding a single sentence larger than the window can
    /// overflow; it is still emitted whole.
    pub fn is_overflow(&self, context_window_size: usize) -> bool {
        self.token_count > context_window_size
    }

    /// Whether the chunk was produced by splitting a single paragraph
    pub fn is_sentence_split(&self) -> bool {
        self.paragraph_count == 0
    }
}
