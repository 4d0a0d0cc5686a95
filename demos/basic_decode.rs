//! Strip markers from encoded text read on stdin and report the records.
//!
//! Run: cargo run --example basic_encode | cargo run --example basic_decode

use std::io::{self, BufRead};

use sentmark::InlineDecoder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let decoder = InlineDecoder::new();

    for line in io::stdin().lock().lines() {
        let line = line?;
        // Only the encoded line decodes to anything interesting; plain
        // lines come back unchanged with zero records.
        let decoded = decoder.decode(&line)?;
        if decoded.records.is_empty() {
            continue;
        }

        println!("Clean text: {}", decoded.clean_text);
        println!("Tokens:     {:?}", decoded.clean_tokens);
        println!("\nDecoded records:");
        for inline in &decoded.records {
            println!(" - hex:       {}", inline.record.to_hex()?);
            println!("   span:      {:?}", inline.span);
            println!("   polarity:  {}", inline.record.polarity);
            println!("   intensity: {}", inline.record.intensity);
            println!("   emotion:   {}", inline.record.emotion);
        }
    }
    Ok(())
}
