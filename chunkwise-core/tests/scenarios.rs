//! End-to-end packing scenarios through the public API

use chunkwise_core::{pack, CharTokenizer, CoreError, PackConfig, Packer, TokenId, TokenService};

/// One token per UTF-8 byte
struct ByteTokenizer;

impl TokenService for ByteTokenizer {
    fn encode(&self, text: &str) -> Vec<TokenId> {
        text.bytes().map(TokenId::from).collect()
    }

    fn decode(&self, tokens: &[TokenId]) -> String {
        let bytes: Vec<u8> = tokens.iter().filter_map(|&t| u8::try_from(t).ok()).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn name(&self) -> &str {
        "bytes"
    }
}

#[test]
fn test_degenerate_documents() {
    let config = PackConfig::default();
    assert!(pack("", &config, &CharTokenizer).is_empty());
    assert!(pack("\n\n\n", &config, &CharTokenizer).is_empty());
    assert!(pack("   \r\n  \r\n", &config, &CharTokenizer).is_empty());
}

#[test]
fn test_short_document_is_one_chunk() {
    let config = PackConfig::default();
    let text = "Rust is a systems language.\n\nIt focuses on safety and speed.";
    let chunks = pack(text, &config, &CharTokenizer);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].paragraph_count, 2);
    assert_eq!(chunks[0].sentence_count, 2);
}

#[test]
fn test_long_paragraph_is_split_by_sentences() {
    let sentence = "Every sentence here is roughly forty chars. ";
    let paragraph = sentence.repeat(10);
    let config = PackConfig::new(100, 10).unwrap();
    let chunks = pack(&paragraph, &config, &CharTokenizer);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert_eq!(chunk.paragraph_count, 0);
        assert!(chunk.sentence_count >= 1);
        assert!(chunk.token_count <= 100);
    }
    for pair in chunks.windows(2) {
        let previous: Vec<char> = pair[0].text.chars().collect();
        let tail: String = previous[previous.len() - 10..].iter().collect();
        assert!(pair[1].text.starts_with(tail.trim_start()));
    }
}

#[test]
fn test_oversized_sentence_is_not_an_error() {
    let config = PackConfig::new(10, 200).unwrap();
    let chunks = pack("fifteen-tokens!", &config, &CharTokenizer);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].token_count, 15);
    assert!(chunks[0].is_overflow(config.context_window_size()));
}

#[test]
fn test_zero_window_is_rejected() {
    assert_eq!(
        PackConfig::new(0, 10).unwrap_err(),
        CoreError::InvalidContextWindow
    );
}

#[test]
fn test_custom_token_service() {
    let config = PackConfig::new(18, 4).unwrap();
    let packer = Packer::new(config, &ByteTokenizer);
    let chunks = packer.pack("First part.\n\nSecond part.");

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "First part.");
    assert_eq!(chunks[0].token_count, 11);
    assert_eq!(chunks[1].text, "art.\n\nSecond part.");
    assert_eq!(chunks[1].overlap_token_count, 4);
    assert_eq!(chunks[1].token_count, 4 + 2 + 12);
}

#[test]
fn test_crlf_documents_pack_like_lf_documents() {
    let config = PackConfig::new(40, 5).unwrap();
    let lf = pack("One paragraph.\n\nAnother one here.", &config, &CharTokenizer);
    let crlf = pack("One paragraph.\r\n\r\nAnother one here.", &config, &CharTokenizer);

    assert_eq!(lf, crlf);
}
