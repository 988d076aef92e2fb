//! Pattern & Window Encoding
//!
//! Turns byte strings into one [`Mask`] per alphabet symbol.
//! - P (pattern table): built once, read-only during the scan
//! - T (window table): seeded with the first m-1 text bytes, then slid

extern crate alloc;
use alloc::vec::Vec;

use crate::alphabet::Alphabet;
use crate::bitvec::Mask;

/// Build the pattern table P.
///
/// `P[j]` has bit i set iff `pattern[i]` is the j-th alphabet symbol.
/// Pattern bytes outside the alphabet set no bit at all.
///
/// Panics if `M` cannot hold `pattern.len()` bits (e.g. `u64` for m > 64).
pub fn encode_pattern<M: Mask>(alphabet: &Alphabet, pattern: &[u8]) -> Vec<M> {
    let m = pattern.len();
    let mut table = alloc::vec![M::zeroed(m); alphabet.len()];

    for (i, &c) in pattern.iter().enumerate() {
        if let Some(j) = alphabet.index_of(c) {
            table[j].set(i);
        }
    }

    table
}

/// Build the initial window table T from the first `m - 1` text bytes.
///
/// The m-th byte is appended by the first scan step. A text shorter than
/// `m - 1` only encodes what is there.
///
/// Panics if `M` cannot hold `m` bits.
pub fn encode_window<M: Mask>(alphabet: &Alphabet, text: &[u8], m: usize) -> Vec<M> {
    let mut table = alloc::vec![M::zeroed(m); alphabet.len()];
    let prefix = m.saturating_sub(1).min(text.len());

    for (i, &c) in text[..prefix].iter().enumerate() {
        if let Some(j) = alphabet.index_of(c) {
            table[j].set(i);
        }
    }

    table
}
