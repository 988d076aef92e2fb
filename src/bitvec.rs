//! Alignment Bit Masks
//!
//! One mask per alphabet symbol, one bit per pattern offset.
//! Bit `i` is pattern/window offset `i`; bit `m - 1` is the newest text byte.
//!
//! - `u64`: single register, used whenever m <= 64
//! - [`WideMask`]: `[u64]` words (LSB word first) with carry-aware shift

extern crate alloc;
use alloc::boxed::Box;
use alloc::vec;

/// Widest pattern a single `u64` mask can hold
pub const NARROW_BITS: usize = u64::BITS as usize;

/// Bit-vector of at least `width` bits used for the P and T tables.
pub trait Mask: Clone {
    /// All-zero mask able to hold `width` bits.
    ///
    /// Panics if the representation is narrower than `width`.
    fn zeroed(width: usize) -> Self;

    /// Set bit `bit` (must be < width).
    fn set(&mut self, bit: usize);

    /// Read bit `bit`.
    fn get(&self, bit: usize) -> bool;

    /// Shift right by one: offset 0 ages out, every other offset moves down.
    fn shift_right(&mut self);

    /// popcount((self XOR window) AND self)
    ///
    /// With `self` = P[j] and `window` = T[j], this is the number of pattern
    /// offsets that expect symbol j but where the window holds something else.
    fn missing_from(&self, window: &Self) -> usize;
}

impl Mask for u64 {
    #[inline(always)]
    fn zeroed(width: usize) -> Self {
        assert!(
            width <= NARROW_BITS,
            "u64 mask holds {} bits, {} requested",
            NARROW_BITS,
            width
        );
        0
    }

    #[inline(always)]
    fn set(&mut self, bit: usize) {
        *self |= 1 << bit;
    }

    #[inline(always)]
    fn get(&self, bit: usize) -> bool {
        (*self >> bit) & 1 != 0
    }

    #[inline(always)]
    fn shift_right(&mut self) {
        *self >>= 1;
    }

    #[inline(always)]
    fn missing_from(&self, window: &Self) -> usize {
        ((*self ^ *window) & *self).count_ones() as usize
    }
}

/// Multi-word mask for patterns longer than 64 bytes.
///
/// Words are little-endian: `words[0]` holds offsets 0..64.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideMask {
    words: Box<[u64]>,
}

impl WideMask {
    /// Number of backing words
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl Mask for WideMask {
    fn zeroed(width: usize) -> Self {
        let n = width.div_ceil(NARROW_BITS).max(1);
        Self {
            words: vec![0u64; n].into_boxed_slice(),
        }
    }

    #[inline]
    fn set(&mut self, bit: usize) {
        self.words[bit / NARROW_BITS] |= 1 << (bit % NARROW_BITS);
    }

    #[inline]
    fn get(&self, bit: usize) -> bool {
        (self.words[bit / NARROW_BITS] >> (bit % NARROW_BITS)) & 1 != 0
    }

    /// Carry the low bit of each higher word into the top of the word below.
    #[inline]
    fn shift_right(&mut self) {
        let n = self.words.len();

        for w in 0..n {
            let carry = if w + 1 < n { self.words[w + 1] << 63 } else { 0 };
            self.words[w] = (self.words[w] >> 1) | carry;
        }
    }

    #[inline]
    fn missing_from(&self, window: &Self) -> usize {
        self.words
            .iter()
            .zip(window.words.iter())
            .map(|(&p, &t)| ((p ^ t) & p).count_ones() as usize)
            .sum()
    }
}
