//! Embed several annotations, including a multi-token span, then decode.
//!
//! Run: cargo run --example multi_annotation

use sentmark::{Annotation, InlineDecoder, InlineEncoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "I loved the performance but the ending felt rushed";
    let encoder = InlineEncoder::new();
    let decoder = InlineDecoder::new();

    let annotations = [
        // "loved": positive, strong, joy.
        Annotation::new(1, 1, 2, 6, 0, 1),
        // "felt rushed": negative, context-dependent, sadness.
        Annotation::new(7, 2, 1, 5, 1, 4),
    ];

    let encoded = encoder.encode(text, &annotations)?;
    println!("Encoded text with multiple annotations:");
    println!("{encoded}");

    let decoded = decoder.decode(&encoded)?;
    println!("\nRecovered {} records:", decoded.records.len());
    for inline in &decoded.records {
        println!(
            " - anchor {} covering {} token(s): polarity={} intensity={} context={} emotion={}",
            inline.span.anchor,
            inline.span.length,
            inline.record.polarity,
            inline.record.intensity,
            inline.record.context,
            inline.record.emotion,
        );
    }
    println!("\nClean text matches original: {}", decoded.clean_text == text);
    Ok(())
}
