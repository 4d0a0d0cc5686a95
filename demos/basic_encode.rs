//! Embed a single annotation into a sentence.
//!
//! Run: cargo run --example basic_encode

use sentmark::{Annotation, InlineEncoder};

fn main() -> Result<(), sentmark::EncodeError> {
    let text = "The movie was absolutely amazing";
    let encoder = InlineEncoder::new();

    // "absolutely amazing" (tokens 3-4): positive, intensity 5, joy.
    let annotation = Annotation::new(3, 2, 2, 5, 0, 1);

    let encoded = encoder.encode(text, &[annotation])?;
    println!("Original: {text}");
    println!("Encoded:  {encoded}");
    println!("(the marker is invisible in most terminals; pipe through `xxd` to see it)");
    Ok(())
}
