//! k-Mismatch DNA Search Example
//!
//! Demonstrates searching a sequence for a motif with up to k substitutions.
//!
//! ```bash
//! cargo run --example dna_search
//! ```

use alice_hamming::{search, Alphabet, HammingSearcher};

fn main() {
    println!("=== ALICE-Hamming k-Mismatch Demo ===\n");

    let text = b"GATTACAGATCACAGGTTACATTTTNNGATTACCGATTACA";
    let alphabet = Alphabet::new(b"ACGT");

    println!("Text ({} bytes):", text.len());
    println!("  \"{}\"", String::from_utf8_lossy(text));

    println!("\n--- Search Results ---\n");

    for k in 0..3 {
        let searcher = HammingSearcher::new(alphabet.clone(), b"GATTACA", k);
        println!("  \"GATTACA\" with k = {} -> {} matches", k, searcher.count(text));
        for m in searcher.find_iter(text) {
            println!("    {}", m);
        }
    }

    // Bytes outside the alphabet ('N') never match a pattern symbol
    println!("\n--- Unknown Symbols ---\n");
    for m in search(&alphabet, b"TTTTAA", 2, text) {
        println!("    {}", m);
    }

    // Lazy iteration: stop at the first hit
    println!("\n--- First Match Only ---\n");
    match search(&alphabet, b"GATTACA", 1, text).next() {
        Some(m) => println!("  first: {}", m),
        None => println!("  not found"),
    }
}
