// ============================================================================
// Basic Usage Example
// ============================================================================

use chinese_numeral::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Chinese Numeral Example ===\n");

    // Render a few amounts in every style
    println!("Encoding...");
    for n in [0u64, 11, 1001, 2021, 20001, 123_456_789] {
        let amount = Chinese::new(n);
        print!("  {:>10}", n);
        for style in NumeralStyle::ALL {
            let text = amount.encode_to_string(style.descriptor()).unwrap();
            print!("  {}={}", style, text);
        }
        println!();
    }

    // Decode numerals written with synonyms and mixed scripts
    println!("\nDecoding...");
    for text in ["两万零一", "廿一", "２３", "壹佰贰拾叁", "一百斤"] {
        let (amount, consumed) = Chinese::decode_str(text);
        println!(
            "  {} -> {} (consumed {} of {} bytes)",
            text,
            amount.value(),
            consumed,
            text.len()
        );
    }

    // Strict parsing rejects trailing text
    println!("\n=== Strict Parsing ===");
    match "一百斤".parse::<Chinese>() {
        Ok(amount) => println!("  parsed {}", amount.value()),
        Err(err) => println!("  rejected: {}", err),
    }

    // Absent destination
    println!("\n=== Decode Into ===");
    match decode_into(None, "一".as_bytes()) {
        Ok(consumed) => println!("  consumed {}", consumed),
        Err(err) => println!("  error: {}", err),
    }

    // Wraparound
    println!("\n=== Wraparound ===");
    let x = Chinese::new(42);
    let wrapped = x + (Chinese::ZERO - x);
    println!("  42 + (0 - 42) = {}", wrapped);
    println!("  MAX = {}", Chinese::MAX);
}
