//! Linear Time Hamming Search (Bit-Parallel)
//!
//! **Architecture**:
//! - Pattern table P: one mask per symbol, built once
//! - Window table T: one mask per symbol, slid one text byte per step
//! - Scan: lazy iterator, one alignment per `next()` step, no backtracking
//!
//! **Core Step** (text index i, from m-1 to n-1):
//! 1. Append `text[i]` at bit m-1 of its symbol mask
//! 2. `s = Σ_j popcount((P[j] ^ T[j]) & P[j])`, shifting every `T[j]` right by one
//! 3. Emit `(i - m + 1, s)` when `s <= k`
//!
//! Complexity: O(n·σ) word operations for m <= 64, O(n·σ·⌈m/64⌉) above.

extern crate alloc;
use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use log::{debug, trace};

use crate::alphabet::Alphabet;
use crate::bitvec::{Mask, WideMask, NARROW_BITS};
use crate::encode::{encode_pattern, encode_window};
use crate::error::{validate, SearchError};

/// One alignment within the mismatch threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match<'a> {
    /// Start offset in the text
    pub position: usize,
    /// Hamming distance of this alignment
    pub mismatches: usize,
    /// `text[position..position + m]`
    pub text: &'a [u8],
}

impl<'a> Match<'a> {
    /// End offset (exclusive) in the text
    #[inline]
    pub fn end(&self) -> usize {
        self.position + self.text.len()
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.text
    }
}

/// P table, sized by pattern length
#[derive(Clone)]
enum PatternTable {
    Narrow(Vec<u64>),
    Wide(Vec<WideMask>),
}

impl PatternTable {
    fn build(alphabet: &Alphabet, pattern: &[u8]) -> Self {
        if pattern.len() <= NARROW_BITS {
            PatternTable::Narrow(encode_pattern(alphabet, pattern))
        } else {
            PatternTable::Wide(encode_pattern(alphabet, pattern))
        }
    }

    fn is_wide(&self) -> bool {
        matches!(self, PatternTable::Wide(_))
    }
}

/// Prepared k-mismatch searcher.
///
/// Builds the pattern table once and reuses it for every text. Each search
/// gets its own window table, so a searcher can serve any number of scans.
///
/// # Example
/// ```
/// use alice_hamming::{Alphabet, HammingSearcher};
///
/// let searcher = HammingSearcher::new(Alphabet::new(b"ACGT"), b"ACGT", 1);
/// let hits: Vec<_> = searcher
///     .find_iter(b"ACCTACGA")
///     .map(|m| (m.position, m.mismatches))
///     .collect();
/// assert_eq!(hits, vec![(0, 1), (4, 1)]);
/// ```
#[derive(Clone)]
pub struct HammingSearcher {
    alphabet: Alphabet,
    table: PatternTable,
    pattern_len: usize,
    max_mismatches: usize,
}

impl HammingSearcher {
    /// Prepare a searcher for `pattern` with at most `k` mismatches.
    ///
    /// Pattern bytes outside `alphabet` set no bit and are never counted as
    /// mismatches. `k >= pattern.len()` is allowed and matches every alignment.
    pub fn new(alphabet: Alphabet, pattern: &[u8], k: usize) -> Self {
        let table = PatternTable::build(&alphabet, pattern);
        debug!(
            "prepared pattern: m={} sigma={} k={} wide={}",
            pattern.len(),
            alphabet.len(),
            k,
            table.is_wide()
        );

        Self {
            alphabet,
            table,
            pattern_len: pattern.len(),
            max_mismatches: k,
        }
    }

    /// Lazily yield every alignment of `text` within the threshold, in
    /// increasing position order.
    ///
    /// A text shorter than the pattern yields nothing.
    pub fn find_iter<'a>(&'a self, text: &'a [u8]) -> Matches<'a> {
        let (m, k) = (self.pattern_len, self.max_mismatches);
        let inner = match &self.table {
            PatternTable::Narrow(p) => {
                MatchesInner::Narrow(Scan::new(&self.alphabet, Cow::Borrowed(p.as_slice()), m, k, text))
            }
            PatternTable::Wide(p) => {
                MatchesInner::Wide(Scan::new(&self.alphabet, Cow::Borrowed(p.as_slice()), m, k, text))
            }
        };
        Matches { inner }
    }

    /// Collect every match (convenience over [`find_iter`](Self::find_iter))
    pub fn find_all<'a>(&'a self, text: &'a [u8]) -> Vec<Match<'a>> {
        self.find_iter(text).collect()
    }

    /// Number of alignments within the threshold
    pub fn count(&self, text: &[u8]) -> usize {
        self.find_iter(text).count()
    }

    /// Stops at the first match.
    pub fn is_match(&self, text: &[u8]) -> bool {
        self.find_iter(text).next().is_some()
    }

    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    #[inline]
    pub fn max_mismatches(&self) -> usize {
        self.max_mismatches
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Whether the pattern needed multi-word masks (m > 64)
    #[inline]
    pub fn is_wide(&self) -> bool {
        self.table.is_wide()
    }
}

/// Search `text` for `pattern` with at most `k` mismatches.
///
/// Assumes `0 < pattern.len() <= text.len()` and `k < pattern.len()`; use
/// [`search_checked`] when the input comes from outside. An empty pattern or
/// a pattern longer than the text yields an empty sequence.
///
/// # Example
/// ```
/// use alice_hamming::{search, Alphabet};
///
/// let alphabet = Alphabet::new(b"ACGT");
/// let hits: Vec<_> = search(&alphabet, b"ACGT", 0, b"TTACGTTT").collect();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].position, 2);
/// assert_eq!(hits[0].text, b"ACGT");
/// ```
pub fn search<'a>(alphabet: &'a Alphabet, pattern: &[u8], k: usize, text: &'a [u8]) -> Matches<'a> {
    let m = pattern.len();
    debug!("search: m={} n={} sigma={} k={}", m, text.len(), alphabet.len(), k);

    let inner = match PatternTable::build(alphabet, pattern) {
        PatternTable::Narrow(p) => MatchesInner::Narrow(Scan::new(alphabet, Cow::Owned(p), m, k, text)),
        PatternTable::Wide(p) => MatchesInner::Wide(Scan::new(alphabet, Cow::Owned(p), m, k, text)),
    };
    Matches { inner }
}

/// [`search`] with the input contract checked first.
pub fn search_checked<'a>(
    alphabet: &'a Alphabet,
    pattern: &[u8],
    k: usize,
    text: &'a [u8],
) -> Result<Matches<'a>, SearchError> {
    validate(pattern.len(), text.len(), i64::try_from(k).unwrap_or(i64::MAX))?;
    Ok(search(alphabet, pattern, k, text))
}

/// The sliding matcher over one mask width.
///
/// Owns the window table T; borrows or owns the pattern table P.
struct Scan<'a, M: Mask> {
    alphabet: &'a Alphabet,
    pattern: Cow<'a, [M]>,
    window: Vec<M>,
    text: &'a [u8],
    m: usize,
    k: usize,
    /// Next text index to append
    i: usize,
}

impl<'a, M: Mask> Scan<'a, M> {
    fn new(alphabet: &'a Alphabet, pattern: Cow<'a, [M]>, m: usize, k: usize, text: &'a [u8]) -> Self {
        let window = encode_window(alphabet, text, m);
        // m == 0 has no alignment to evaluate
        let i = if m == 0 { text.len() } else { m - 1 };

        Self {
            alphabet,
            pattern,
            window,
            text,
            m,
            k,
            i,
        }
    }

    /// Append `text[i]`, score the alignment ending at i, age the window.
    #[inline(always)]
    fn step(&mut self, i: usize) -> usize {
        if let Some(x) = self.alphabet.index_of(self.text[i]) {
            self.window[x].set(self.m - 1);
        }

        let mut s = 0;
        for (p, t) in self.pattern.iter().zip(self.window.iter_mut()) {
            s += p.missing_from(t);
            t.shift_right();
        }
        s
    }
}

impl<'a, M: Mask> Iterator for Scan<'a, M> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.text.len() {
            let i = self.i;
            self.i += 1;

            let s = self.step(i);
            if s <= self.k {
                let text = self.text;
                let position = i + 1 - self.m;
                trace!("match at {} ({} mismatches)", position, s);
                return Some(Match {
                    position,
                    mismatches: s,
                    text: &text[position..=i],
                });
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len().saturating_sub(self.i)))
    }
}

impl<'a, M: Mask> FusedIterator for Scan<'a, M> {}

enum MatchesInner<'a> {
    Narrow(Scan<'a, u64>),
    Wide(Scan<'a, WideMask>),
}

/// Lazy, finite sequence of [`Match`]es in increasing position order.
///
/// Dropping it early is fine: each search owns its window table.
pub struct Matches<'a> {
    inner: MatchesInner<'a>,
}

impl<'a> Iterator for Matches<'a> {
    type Item = Match<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            MatchesInner::Narrow(scan) => scan.next(),
            MatchesInner::Wide(scan) => scan.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            MatchesInner::Narrow(scan) => scan.size_hint(),
            MatchesInner::Wide(scan) => scan.size_hint(),
        }
    }
}

impl<'a> FusedIterator for Matches<'a> {}
