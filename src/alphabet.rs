//! Alphabet (Symbol Index Lookup)
//!
//! **Direct-Indexed Table**: one `usize` slot per byte value.
//! `index_of` is a single load, O(1) regardless of alphabet size.

extern crate alloc;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Marker for bytes that are not part of the alphabet
const ABSENT: usize = usize::MAX;

/// Ordered set of symbols recognised by a search.
///
/// The alphabet keeps its symbols in the order given. Duplicated symbols
/// resolve to their first position, like a left-to-right scan would.
#[derive(Clone)]
pub struct Alphabet {
    /// Symbols as supplied (σ = symbols.len())
    symbols: Box<[u8]>,
    /// byte -> first index in `symbols`, or ABSENT
    lookup: [usize; 256],
}

impl Alphabet {
    /// Build an alphabet from an explicit symbol list.
    pub fn new(symbols: &[u8]) -> Self {
        let mut lookup = [ABSENT; 256];

        for (i, &c) in symbols.iter().enumerate() {
            let slot = &mut lookup[c as usize];
            if *slot == ABSENT {
                *slot = i;
            }
        }

        Self {
            symbols: symbols.into(),
            lookup,
        }
    }

    /// Build an alphabet from the distinct bytes of `pattern`, in first-seen order.
    ///
    /// Text bytes outside the pattern can never match a pattern position, so
    /// searching with this alphabet gives the same results as searching with
    /// any alphabet that covers the pattern.
    pub fn from_pattern(pattern: &[u8]) -> Self {
        let mut seen = [false; 256];
        let mut symbols = Vec::new();

        for &c in pattern {
            if !seen[c as usize] {
                seen[c as usize] = true;
                symbols.push(c);
            }
        }

        Self::new(&symbols)
    }

    /// Position of `c` in the alphabet, or `None` when `c` is not a symbol.
    #[inline(always)]
    pub fn index_of(&self, c: u8) -> Option<usize> {
        match self.lookup[c as usize] {
            ABSENT => None,
            j => Some(j),
        }
    }

    #[inline]
    pub fn contains(&self, c: u8) -> bool {
        self.lookup[c as usize] != ABSENT
    }

    /// Alphabet size σ (duplicates included)
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet")
            .field(&alloc::string::String::from_utf8_lossy(&self.symbols))
            .finish()
    }
}
