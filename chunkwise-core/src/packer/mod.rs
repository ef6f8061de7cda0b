//! Greedy chunk packing with overlap carry-forward
//!
//! Paragraphs are packed whole while they fit. A paragraph that fits the
//! window but not beside the overlap seed shortens the seed instead. Only a
//! paragraph larger than the window is split into sentences and packed
//! sentence by sentence. A sentence larger than the window is never
//! subdivided: it gets a chunk of its own and that chunk exceeds the budget.
//!
//! Chunks closed in the middle of a paragraph report an
//! `overlap_token_count` of zero even though the next chunk is seeded; chunks
//! closed on paragraph boundaries report the seed they actually carry.

mod accumulator;
mod config;

#[cfg(test)]
mod tests;

pub use accumulator::{ChunkAccumulator, Separator};
pub use config::PackConfig;

use crate::chunk::Chunk;
use crate::paragraph::split_paragraphs;
use crate::sentence::{count_sentences, split_sentences};
use crate::token::{TokenId, TokenService};
use log::{debug, trace};

/// Text placed between two whole paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Text placed between two sentences of a split paragraph
pub const SENTENCE_SEPARATOR: &str = " ";

/// Pack a document into chunks with the given token service
pub fn pack(document: &str, config: &PackConfig, service: &dyn TokenService) -> Vec<Chunk> {
    Packer::new(*config, service).pack(document)
}

/// Reusable packer bound to one token service
pub struct Packer<'a> {
    config: PackConfig,
    service: &'a dyn TokenService,
    paragraph_separator: Separator,
    sentence_separator: Separator,
}

/// Output collected so far plus the chunk being filled
#[derive(Debug, Default)]
struct PackState {
    chunks: Vec<Chunk>,
    current: ChunkAccumulator,
}

impl<'a> Packer<'a> {
    /// Create a packer, encoding the separators once
    pub fn new(config: PackConfig, service: &'a dyn TokenService) -> Self {
        Self {
            config,
            service,
            paragraph_separator: Separator::new(PARAGRAPH_SEPARATOR, service),
            sentence_separator: Separator::new(SENTENCE_SEPARATOR, service),
        }
    }

    /// Configuration this packer runs with
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Pack a document into chunks in document order
    pub fn pack(&self, document: &str) -> Vec<Chunk> {
        let mut state = PackState::default();

        for paragraph in split_paragraphs(document) {
            self.place_paragraph(&mut state, &paragraph);
        }

        if state.current.has_content() && !state.current.text().trim().is_empty() {
            let overlap = state.current.overlap_len();
            state.chunks.push(state.current.to_chunk(overlap));
        }

        debug!(
            "packed {} chunks with {} ({} token window, {} token overlap)",
            state.chunks.len(),
            self.service.name(),
            self.config.context_window_size(),
            self.config.overlap_tokens()
        );
        state.chunks
    }

    fn place_paragraph(&self, state: &mut PackState, paragraph: &str) {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            return;
        }

        let tokens = self.service.encode(paragraph);
        loop {
            if state.current.fits(
                &self.paragraph_separator,
                tokens.len(),
                self.config.context_window_size(),
            ) {
                trace!("placing paragraph of {} tokens", tokens.len());
                state.current.push_paragraph(
                    paragraph,
                    &tokens,
                    &self.paragraph_separator,
                    count_sentences(paragraph),
                );
                return;
            }

            if state.current.has_content() {
                let overlap = state.current.overlap_len();
                self.roll_over(state, overlap);
                continue;
            }

            if tokens.len() <= self.config.context_window_size() {
                self.shrink_seed_for(state, tokens.len(), &self.paragraph_separator);
                trace!("placing paragraph of {} tokens after a shortened seed", tokens.len());
                state.current.push_paragraph(
                    paragraph,
                    &tokens,
                    &self.paragraph_separator,
                    count_sentences(paragraph),
                );
                return;
            }

            debug!(
                "paragraph of {} tokens exceeds the window, splitting into sentences",
                tokens.len()
            );
            self.place_sentences(state, paragraph);
            return;
        }
    }

    fn place_sentences(&self, state: &mut PackState, paragraph: &str) {
        for sentence in split_sentences(paragraph) {
            let tokens = self.service.encode(&sentence);
            loop {
                if state.current.fits(
                    &self.sentence_separator,
                    tokens.len(),
                    self.config.context_window_size(),
                ) {
                    trace!("placing sentence of {} tokens", tokens.len());
                    state
                        .current
                        .push_sentence(&sentence, &tokens, &self.sentence_separator);
                    break;
                }

                if state.current.has_content() {
                    self.roll_over(state, 0);
                    continue;
                }

                self.place_oversized(state, &sentence, &tokens);
                break;
            }
        }
    }

    /// Place a sentence that does not fit next to the current seed.
    ///
    /// The seed keeps as many trailing tokens as still fit beside the
    /// sentence. A sentence larger than the window is placed alone.
    fn place_oversized(&self, state: &mut PackState, sentence: &str, tokens: &[TokenId]) {
        self.shrink_seed_for(state, tokens.len(), &self.sentence_separator);

        let window = self.config.context_window_size();
        if tokens.len() > window {
            debug!(
                "sentence of {} tokens exceeds the {} token window, placing it alone",
                tokens.len(),
                window
            );
        }
        state
            .current
            .push_sentence(sentence, tokens, &self.sentence_separator);
    }

    /// Cut the seed down to the trailing tokens that still fit beside an
    /// item of `item_len` tokens joined by `separator`.
    fn shrink_seed_for(&self, state: &mut PackState, item_len: usize, separator: &Separator) {
        let window = self.config.context_window_size();
        let room = window.saturating_sub(item_len + separator.len());
        let keep = room.min(state.current.overlap_len());
        if keep < state.current.overlap_len() {
            debug!(
                "shortening overlap seed from {} to {} tokens",
                state.current.overlap_len(),
                keep
            );
        }
        state.current.shrink_seed(keep, self.service);
    }

    /// Close the current chunk and seed the next one with its trailing tokens
    fn roll_over(&self, state: &mut PackState, reported_overlap: usize) {
        let chunk = state.current.to_chunk(reported_overlap);
        let seed = if self.config.overlap_enabled() {
            state
                .current
                .next_seed(self.config.overlap_tokens(), self.service)
        } else {
            ChunkAccumulator::new()
        };

        debug!(
            "closed chunk {} ({} tokens), seeding {} overlap tokens",
            state.chunks.len() + 1,
            chunk.token_count,
            seed.token_len()
        );
        state.chunks.push(chunk);
        state.current = seed;
    }
}
