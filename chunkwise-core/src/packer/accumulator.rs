//! In-progress chunk state
//!
//! Token ids and text are appended side by side. Text is only re-derived from
//! ids when an overlap seed is cut from a closed chunk.

use crate::chunk::Chunk;
use crate::token::{TokenId, TokenService};

/// Text joined between two placed items, with its token encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    text: &'static str,
    tokens: Vec<TokenId>,
}

impl Separator {
    /// Encode `text` once with the given service
    pub fn new(text: &'static str, service: &dyn TokenService) -> Self {
        Self {
            text,
            tokens: service.encode(text),
        }
    }

    /// Separator length in tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the separator encodes to no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// State of the chunk currently being filled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkAccumulator {
    tokens: Vec<TokenId>,
    text: String,
    paragraph_count: usize,
    sentence_count: usize,
    overlap_len: usize,
}

impl ChunkAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator whose head is an overlap seed
    pub fn seeded(tokens: Vec<TokenId>, text: String) -> Self {
        let overlap_len = tokens.len();
        Self {
            tokens,
            text,
            overlap_len,
            ..Self::default()
        }
    }

    /// Accumulated token ids, seed included
    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }

    /// Accumulated text, seed included, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of accumulated tokens
    pub fn token_len(&self) -> usize {
        self.tokens.len()
    }

    /// Number of seed tokens at the head
    pub fn overlap_len(&self) -> usize {
        self.overlap_len
    }

    /// Whole paragraphs placed so far
    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    /// Sentences placed so far
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Whether nothing, not even a seed, has been accumulated
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.text.is_empty()
    }

    /// Whether anything beyond the overlap seed has been placed
    pub fn has_content(&self) -> bool {
        self.paragraph_count > 0 || self.sentence_count > 0
    }

    /// Tokens the accumulator would hold after placing an item of `item_len`
    pub fn cost_with(&self, separator: &Separator, item_len: usize) -> usize {
        let separator_len = if self.tokens.is_empty() {
            0
        } else {
            separator.len()
        };
        self.tokens.len() + separator_len + item_len
    }

    /// Whether an item of `item_len` tokens still fits in `budget`
    pub fn fits(&self, separator: &Separator, item_len: usize, budget: usize) -> bool {
        self.cost_with(separator, item_len) <= budget
    }

    /// Place a whole paragraph
    pub fn push_paragraph(
        &mut self,
        paragraph: &str,
        tokens: &[TokenId],
        separator: &Separator,
        sentence_count: usize,
    ) {
        self.push(paragraph, tokens, separator);
        self.paragraph_count += 1;
        self.sentence_count += sentence_count;
    }

    /// Place a single sentence of a paragraph that did not fit whole
    pub fn push_sentence(&mut self, sentence: &str, tokens: &[TokenId], separator: &Separator) {
        self.push(sentence, tokens, separator);
        self.sentence_count += 1;
    }

    fn push(&mut self, text: &str, tokens: &[TokenId], separator: &Separator) {
        if !self.tokens.is_empty() {
            self.tokens.extend_from_slice(&separator.tokens);
            self.text.push_str(separator.text);
        }
        self.tokens.extend_from_slice(tokens);
        self.text.push_str(text);
    }

    /// Shorten the seed to its last `keep` tokens.
    ///
    /// Only meaningful before any content is placed.
    pub fn shrink_seed(&mut self, keep: usize, service: &dyn TokenService) {
        debug_assert!(!self.has_content(), "seed shrunk after content was placed");
        if keep >= self.tokens.len() {
            return;
        }
        if keep == 0 {
            *self = Self::new();
            return;
        }

        let start = self.tokens.len() - keep;
        self.tokens.drain(..start);
        self.text = service.decode(&self.tokens);
        self.overlap_len = self.tokens.len();
    }

    /// Snapshot the accumulator as a closed chunk
    pub fn to_chunk(&self, overlap_token_count: usize) -> Chunk {
        Chunk {
            text: self.text.trim().to_string(),
            token_count: self.tokens.len(),
            overlap_token_count,
            paragraph_count: self.paragraph_count,
            sentence_count: self.sentence_count,
        }
    }

    /// Seed for the chunk after this one: the trailing `overlap_tokens` ids
    pub fn next_seed(&self, overlap_tokens: usize, service: &dyn TokenService) -> Self {
        if overlap_tokens == 0 || self.tokens.is_empty() {
            return Self::new();
        }

        let start = self.tokens.len().saturating_sub(overlap_tokens);
        let tokens = self.tokens[start..].to_vec();
        let text = service.decode(&tokens);
        Self::seeded(tokens, text)
    }
}
