//! Tokenizer registry
//!
//! Resolves tokenizer identifiers to token services. Encodings are built once
//! per identifier and shared process-wide; they are immutable, so every
//! caller can hold the same instance.

use crate::error::{ApiError, Result};
use chunkwise_core::{CharTokenizer, TokenId, TokenService};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer};
use tiktoken_rs::{get_bpe_from_tokenizer, CoreBPE};

/// Tokenizer used when none is configured
pub const DEFAULT_TOKENIZER: &str = "gpt-4";

/// Encoding names accepted in addition to model names
pub const ENCODING_NAMES: &[&str] = &[
    "o200k_base",
    "cl100k_base",
    "p50k_base",
    "p50k_edit",
    "r50k_base",
];

/// A few well-known model names; any model tiktoken knows is accepted
pub const MODEL_NAMES: &[&str] = &["gpt-4o", "gpt-4", "gpt-3.5-turbo", "text-davinci-003"];

/// Ids trimmed from each edge of a slice when it does not decode as UTF-8
const MAX_PARTIAL_EDGE_TOKENS: usize = 3;

type Registry = RwLock<HashMap<String, Arc<dyn TokenService>>>;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Get the token service for an identifier, building it on first use
pub fn get_token_service(name: &str) -> Result<Arc<dyn TokenService>> {
    let registry = REGISTRY.get_or_init(Registry::default);

    if let Some(service) = registry
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
    {
        return Ok(Arc::clone(service));
    }

    let service = build_service(name)?;
    let mut services = registry.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(services.entry(name.to_string()).or_insert(service)))
}

/// Whether an identifier names a known tokenizer, without building it
pub fn is_known_tokenizer(name: &str) -> bool {
    name == CharTokenizer::NAME || resolve_tokenizer(name).is_some()
}

/// All identifiers worth advertising, encodings first
pub fn available_tokenizers() -> Vec<&'static str> {
    ENCODING_NAMES
        .iter()
        .chain(MODEL_NAMES)
        .copied()
        .chain(std::iter::once(CharTokenizer::NAME))
        .collect()
}

fn build_service(name: &str) -> Result<Arc<dyn TokenService>> {
    if name == CharTokenizer::NAME {
        return Ok(Arc::new(CharTokenizer::new()));
    }

    let tokenizer = resolve_tokenizer(name).ok_or_else(|| ApiError::UnknownTokenizer {
        name: name.to_string(),
    })?;
    let bpe = get_bpe_from_tokenizer(tokenizer).map_err(|e| ApiError::TokenizerUnavailable {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    log::info!("loaded tokenizer '{name}'");
    Ok(Arc::new(TiktokenService::new(name, bpe)))
}

fn resolve_tokenizer(name: &str) -> Option<Tokenizer> {
    match name {
        "o200k_base" => Some(Tokenizer::O200kBase),
        "cl100k_base" => Some(Tokenizer::Cl100kBase),
        "p50k_base" => Some(Tokenizer::P50kBase),
        "p50k_edit" => Some(Tokenizer::P50kEdit),
        "r50k_base" => Some(Tokenizer::R50kBase),
        model => get_tokenizer(model),
    }
}

/// Token service backed by a tiktoken BPE encoding
pub struct TiktokenService {
    name: String,
    bpe: CoreBPE,
}

impl TiktokenService {
    /// Wrap a BPE encoding under the given identifier
    pub fn new(name: impl Into<String>, bpe: CoreBPE) -> Self {
        Self {
            name: name.into(),
            bpe,
        }
    }

    fn try_decode(&self, tokens: &[TokenId]) -> Option<String> {
        self.bpe
            .decode(tokens.iter().map(|&id| id as _).collect())
            .ok()
    }
}

impl fmt::Debug for TiktokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TiktokenService")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl TokenService for TiktokenService {
    fn encode(&self, text: &str) -> Vec<TokenId> {
        self.bpe
            .encode_ordinary(text)
            .into_iter()
            .map(|rank| rank as TokenId)
            .collect()
    }

    // A slice cut at an arbitrary token can start or end inside a multi-byte
    // character. Drop the fewest edge ids that make it decodable.
    fn decode(&self, tokens: &[TokenId]) -> String {
        if let Some(text) = self.try_decode(tokens) {
            return text;
        }

        for dropped in 1..=2 * MAX_PARTIAL_EDGE_TOKENS {
            for lead in 0..=dropped.min(MAX_PARTIAL_EDGE_TOKENS) {
                let trail = dropped - lead;
                if trail > MAX_PARTIAL_EDGE_TOKENS || dropped > tokens.len() {
                    continue;
                }
                if let Some(text) = self.try_decode(&tokens[lead..tokens.len() - trail]) {
                    log::warn!(
                        "dropped {dropped} undecodable edge tokens while decoding with '{}'",
                        self.name
                    );
                    return text;
                }
            }
        }

        log::warn!(
            "could not decode {} tokens with '{}'",
            tokens.len(),
            self.name
        );
        String::new()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
