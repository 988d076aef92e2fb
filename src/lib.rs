//! # ALICE-Hamming
//!
//! **Linear time k-mismatch search under the Hamming distance**
//!
//! > "Compare every symbol at once. One word per symbol, one step per byte."
//!
//! ## Architecture
//!
//! - **Pattern Table**: one bit mask per alphabet symbol, bit i = pattern offset i
//! - **Sliding Window Table**: same layout over the text, appended at bit m-1 and shifted right
//! - **Popcount Scoring**: `Σ popcount((P ^ T) & P)` is the Hamming distance of the alignment
//! - **Lazy Matches**: iterator, stop consuming whenever you like
//!
//! ## Performance
//!
//! | Pattern length | Mask | Time | Space |
//! |----------------|------|------|-------|
//! | m <= 64 | `u64` | **O(n·σ)** | O(σ) words |
//! | m > 64 | [`WideMask`] | O(n·σ·⌈m/64⌉) | O(σ·⌈m/64⌉) words |
//!
//! ## Example
//!
//! ```
//! use alice_hamming::{search, Alphabet};
//!
//! let alphabet = Alphabet::new(b"ACGT");
//! let hits: Vec<_> = search(&alphabet, b"ACGT", 1, b"ACCTACGA")
//!     .map(|m| (m.position, m.mismatches, m.text))
//!     .collect();
//!
//! assert_eq!(hits, vec![(0, 1, &b"ACCT"[..]), (4, 1, &b"ACGA"[..])]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod alphabet;
pub mod bitvec;
pub mod encode;
pub mod error;
pub mod report;
pub mod search;

pub use alphabet::Alphabet;
pub use bitvec::{Mask, WideMask};
pub use error::{validate, SearchError};
pub use search::{search, search_checked, HammingSearcher, Match, Matches};

#[cfg(feature = "std")]
pub use report::write_matches;

#[cfg(feature = "cli")]
pub mod cli;

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
