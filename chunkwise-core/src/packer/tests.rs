use super::*;
use crate::token::CharTokenizer;

fn pack_chars(document: &str, window: usize, overlap: usize) -> Vec<Chunk> {
    let config = PackConfig::new(window, overlap).unwrap();
    pack(document, &config, &CharTokenizer)
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_empty_document() {
    assert!(pack_chars("", 100, 10).is_empty());
}

#[test]
fn test_blank_lines_only() {
    assert!(pack_chars("\n\n \r\n\t\n\n", 100, 10).is_empty());
}

#[test]
fn test_two_short_paragraphs_share_one_chunk() {
    let chunks = pack_chars("First paragraph here.\n\nSecond paragraph here.", 1000, 200);

    assert_eq!(chunks.len(), 1);
    let chunk = &chunks[0];
    assert_eq!(chunk.text, "First paragraph here.\n\nSecond paragraph here.");
    assert_eq!(chunk.paragraph_count, 2);
    assert_eq!(chunk.sentence_count, 2);
    assert_eq!(chunk.overlap_token_count, 0);
    assert_eq!(chunk.token_count, chunk.text.chars().count());
}

#[test]
fn test_whole_paragraph_sentence_counts() {
    let chunks = pack_chars("One. Two. Three.\n\nFour!", 1000, 0);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].paragraph_count, 2);
    assert_eq!(chunks[0].sentence_count, 4);
}

#[test]
fn test_cross_paragraph_split_carries_overlap() {
    let document = "aaaa bbbb cccc dddd.\n\neeee ffff gggg hhhh.";
    let chunks = pack_chars(document, 30, 5);

    assert_eq!(chunks.len(), 2);

    assert_eq!(chunks[0].text, "aaaa bbbb cccc dddd.");
    assert_eq!(chunks[0].token_count, 20);
    assert_eq!(chunks[0].overlap_token_count, 0);
    assert_eq!(chunks[0].paragraph_count, 1);

    assert_eq!(chunks[1].text, "dddd.\n\neeee ffff gggg hhhh.");
    assert_eq!(chunks[1].token_count, 27);
    assert_eq!(chunks[1].overlap_token_count, 5);
    assert_eq!(chunks[1].paragraph_count, 1);
    assert_eq!(chunks[1].sentence_count, 1);
}

#[test]
fn test_cross_paragraph_split_without_overlap() {
    let document = "aaaa bbbb cccc dddd.\n\neeee ffff gggg hhhh.";
    let chunks = pack_chars(document, 30, 0);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1].text, "eeee ffff gggg hhhh.");
    assert_eq!(chunks[1].token_count, 20);
    assert!(chunks.iter().all(|c| c.overlap_token_count == 0));
}

#[test]
fn test_oversized_paragraph_falls_back_to_sentences() {
    let document = "Alpha beta gamma. Delta epsilon zeta. Eta theta iota. Kappa lambda mu.";
    let chunks = pack_chars(document, 40, 4);

    assert_eq!(chunks.len(), 2);

    assert_eq!(chunks[0].text, "Alpha beta gamma. Delta epsilon zeta.");
    assert_eq!(chunks[0].token_count, 37);
    assert_eq!(chunks[0].overlap_token_count, 0);

    assert_eq!(chunks[1].text, "eta. Eta theta iota. Kappa lambda mu.");
    assert_eq!(chunks[1].token_count, 37);

    for chunk in &chunks {
        assert_eq!(chunk.paragraph_count, 0);
        assert_eq!(chunk.sentence_count, 2);
        assert!(chunk.token_count <= 40);
    }
}

#[test]
fn test_single_oversized_sentence_overflows() {
    let chunks = pack_chars("abcdefghijklmno", 10, 200);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].token_count, 15);
    assert!(chunks[0].is_overflow(10));
    assert_eq!(chunks[0].paragraph_count, 0);
    assert_eq!(chunks[0].sentence_count, 1);
    assert_eq!(chunks[0].overlap_token_count, 0);
}

#[test]
fn test_oversized_sentence_gets_its_own_chunk() {
    let document = "Hi there. abcdefghijklmnopqrstuvwxyz. Ok.";
    let chunks = pack_chars(document, 12, 3);

    assert_eq!(chunks.len(), 3);

    assert_eq!(chunks[0].text, "Hi there.");
    assert_eq!(chunks[1].text, "abcdefghijklmnopqrstuvwxyz.");
    assert_eq!(chunks[1].token_count, 27);
    assert!(chunks[1].is_overflow(12));
    assert_eq!(chunks[2].text, "yz. Ok.");
    assert_eq!(chunks[2].token_count, 7);

    assert!(!chunks[0].is_overflow(12));
    assert!(!chunks[2].is_overflow(12));
}

#[test]
fn test_seed_shrinks_to_make_room() {
    let document = "abcdefghijklmnopqr\n\nFifteen chars!!";
    let chunks = pack_chars(document, 20, 10);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, "abcdefghijklmnopqr");
    assert_eq!(chunks[1].text, "pqr\n\nFifteen chars!!");
    assert_eq!(chunks[1].token_count, 20);
    assert_eq!(chunks[1].overlap_token_count, 3);
    assert_eq!(chunks[1].paragraph_count, 1);
    assert_eq!(chunks[1].sentence_count, 1);
}

#[test]
fn test_paragraph_fitting_window_stays_whole_after_seed() {
    let first = format!("{}.", "a".repeat(89));
    let second = "Twenty-nine chars sentence A. \
                  Twenty-nine chars sentence B. \
                  Twenty-nine chars sentence C.";
    assert_eq!(second.chars().count(), 89);

    let chunks = pack_chars(&format!("{first}\n\n{second}"), 100, 20);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].text, first);
    assert_eq!(chunks[0].paragraph_count, 1);

    let chunk = &chunks[1];
    assert_eq!(chunk.text, format!("aaaaaaaa.\n\n{second}"));
    assert_eq!(chunk.token_count, 100);
    assert_eq!(chunk.overlap_token_count, 9);
    assert_eq!(chunk.paragraph_count, 1);
    assert_eq!(chunk.sentence_count, 3);
    assert!(!chunk.is_sentence_split());
}

#[test]
fn test_seed_dropped_when_paragraph_fills_window() {
    let chunks = pack_chars("First block.\n\n0123456789", 12, 5);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1].text, "0123456789");
    assert_eq!(chunks[1].overlap_token_count, 0);
    assert_eq!(chunks[1].paragraph_count, 1);
}

#[test]
fn test_overlap_larger_than_window_terminates() {
    let chunks = pack_chars("aaaa.\n\nbbbb.\n\ncccc.", 10, 200);

    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].text, "aaaa.");
    assert_eq!(chunks[1].text, "aa.\n\nbbbb.");
    assert_eq!(chunks[2].text, "bb.\n\ncccc.");
    assert!(chunks.iter().all(|c| c.token_count <= 10));
    assert!(chunks.iter().all(|c| c.paragraph_count == 1));
}

#[test]
fn test_chunks_keep_document_order_without_overlap() {
    let document = "The quick brown fox. Jumps over the dog.\n\n\
                    A second paragraph! With two sentences?\n\n\
                    Third one is short.\n\n\
                    Fourth paragraph has a much longer body. It keeps going for a while. \
                    Then it stops.";
    let chunks = pack_chars(document, 45, 0);

    assert!(chunks.len() > 1);
    let rebuilt: String = chunks.iter().map(|c| without_whitespace(&c.text)).collect();
    assert_eq!(rebuilt, without_whitespace(document));
}

#[test]
fn test_packer_is_reusable_and_deterministic() {
    let config = PackConfig::new(25, 3).unwrap();
    let packer = Packer::new(config, &CharTokenizer);
    let document = "Some text here. More text there.\n\nAnother block of words.";

    let first = packer.pack(document);
    let second = packer.pack(document);
    assert_eq!(first, second);
    assert_eq!(packer.config().context_window_size(), 25);
}

#[test]
fn test_paragraph_exactly_filling_window() {
    let chunks = pack_chars("0123456789\n\nabc", 10, 0);

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].token_count, 10);
    assert_eq!(chunks[0].paragraph_count, 1);
    assert_eq!(chunks[1].text, "abc");
}
