//! Inspect the error variants the codec surfaces.
//!
//! Run: cargo run --example error_handling

use sentmark::{Annotation, EncodeError, InlineDecoder, InlineEncoder, DEFAULT_PREFIX};

fn main() {
    let text = "This is a short text";
    let encoder = InlineEncoder::new();
    let decoder = InlineDecoder::new();

    // Anchor 50 cannot address any of the 5 tokens.
    let bad_anchor = Annotation::new(50, 1, 1, 3, 0, 2);
    match encoder.encode(text, &[bad_anchor]) {
        Err(err @ EncodeError::AnchorOutOfBounds { .. }) => {
            println!("Caught encoding error: {err}");
        }
        other => println!("Unexpected outcome: {other:?}"),
    }

    // Covering 12 tokens overflows the 3-bit span field.
    let bad_span = Annotation::new(0, 12, 1, 3, 0, 2);
    match encoder.encode(text, &[bad_span]) {
        Err(err) => println!("Caught encoding error: {err}"),
        Ok(_) => println!("Unexpectedly encoded"),
    }

    // A prefix sentinel with no suffix anywhere in the token.
    let malformed = format!("broken {DEFAULT_PREFIX}0282text");
    match decoder.decode(&malformed) {
        Err(err) => println!("Caught decoding error: {err}"),
        Ok(_) => println!("Unexpectedly decoded"),
    }
}
