//! End-to-end encode/decode round trips.
//!
//! The core contract: for text containing no sentinel characters and
//! annotations with in-bounds anchors, decoding the encoded text restores
//! the whitespace-normalized original and every annotation's fields.

use sentmark::{Annotation, InlineDecoder, InlineEncoder, TokenSpan, Tokenizer, WhitespaceTokenizer};

#[test]
fn basic_encode_decode_flow() {
    let text = "The movie was great";
    let encoder = InlineEncoder::new();
    let decoder = InlineDecoder::new();

    // "great" is token 3: positive, intensity 4, joy.
    let annotation = Annotation::new(3, 1, 2, 4, 0, 1);

    let encoded = encoder.encode(text, &[annotation]).unwrap();
    let decoded = decoder.decode(&encoded).unwrap();

    assert_eq!(decoded.clean_text, text);
    assert_eq!(decoded.records.len(), 1);

    let record = &decoded.records[0].record;
    assert_eq!(record.polarity, 2);
    assert_eq!(record.intensity, 4);
    assert_eq!(record.context, 0);
    assert_eq!(record.emotion, 1);
    assert_eq!(record.reserved, 0);
    assert_eq!(decoded.records[0].span, TokenSpan::new(3, 1));
}

#[test]
fn multi_annotation_scenario() {
    let text = "I loved the performance but the ending felt rushed";
    let encoder = InlineEncoder::new();
    let decoder = InlineDecoder::new();

    let annotations = [
        // "loved": positive, strong, joy.
        Annotation::new(1, 1, 2, 6, 0, 1),
        // "felt rushed": negative, contextual, sadness.
        Annotation::new(7, 2, 1, 5, 1, 4),
    ];

    let encoded = encoder.encode(text, &annotations).unwrap();
    let decoded = decoder.decode(&encoded).unwrap();

    assert_eq!(decoded.clean_text, text);
    assert_eq!(decoded.records.len(), 2);

    // Discovery order follows token order.
    assert_eq!(decoded.records[0].span, TokenSpan::new(1, 1));
    assert_eq!(decoded.records[1].span, TokenSpan::new(7, 2));

    assert_eq!(decoded.records[0].record.polarity, 2);
    assert_eq!(decoded.records[1].record.polarity, 1);
    assert_eq!(decoded.records[1].record.context, 1);
}

#[test]
fn field_fidelity_with_truncation() {
    // polarity 7 exceeds the 2-bit width and must come back as 3; the
    // in-range fields come back untouched.
    let encoder = InlineEncoder::new();
    let decoder = InlineDecoder::new();

    let annotation = Annotation::new(0, 1, 7, 7, 1, 7).with_reserved(1);
    let encoded = encoder.encode("word", &[annotation]).unwrap();
    let record = decoder.decode(&encoded).unwrap().records[0].record;

    assert_eq!(record.polarity, 3);
    assert_eq!(record.intensity, 7);
    assert_eq!(record.context, 1);
    assert_eq!(record.emotion, 7);
    assert_eq!(record.reserved, 1);
}

#[test]
fn round_trip_equals_normalized_detokenization() {
    let text = "irregular   spacing\tis  normalized";
    let tokenizer = WhitespaceTokenizer;
    let encoder = InlineEncoder::new();
    let decoder = InlineDecoder::new();

    let encoded = encoder
        .encode(text, &[Annotation::new(2, 1, 0, 0, 0, 0)])
        .unwrap();
    let decoded = decoder.decode(&encoded).unwrap();

    assert_eq!(
        decoded.clean_text,
        tokenizer.detokenize(&tokenizer.tokenize(text))
    );
}

#[test]
fn shared_anchor_discovery_order() {
    // Markers on a shared anchor stack outward from the word, so decode
    // discovers them in reverse list order.
    let encoder = InlineEncoder::new();
    let decoder = InlineDecoder::new();

    let first = Annotation::new(0, 1, 1, 1, 0, 1);
    let second = Annotation::new(0, 1, 2, 2, 0, 2);

    let encoded = encoder.encode("word", &[first, second]).unwrap();
    let decoded = decoder.decode(&encoded).unwrap();

    assert_eq!(decoded.records.len(), 2);
    assert_eq!(decoded.records[0].record.polarity, 2);
    assert_eq!(decoded.records[1].record.polarity, 1);
    assert_eq!(decoded.clean_text, "word");
}

#[test]
fn span_lengths_survive_round_trip() {
    let text = "one two three four five six seven eight";
    let encoder = InlineEncoder::new();
    let decoder = InlineDecoder::new();

    // Maximum storable coverage: 8 tokens (stored span 7).
    let annotation = Annotation::new(0, 8, 1, 2, 0, 3);
    let encoded = encoder.encode(text, &[annotation]).unwrap();
    let decoded = decoder.decode(&encoded).unwrap();

    assert_eq!(decoded.records[0].span, TokenSpan::new(0, 8));
    assert_eq!(decoded.clean_text, text);
}
