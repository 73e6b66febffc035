//! Reflected binary Gray code.
//!
//! Walking `0, 1, .., 2^n - 1` in Gray order visits every subset of an
//! n-element set while changing exactly one member per step. Consumers
//! that maintain incremental sums over the subset (Ryser's permanent)
//! only need the index of the flipped bit, which is what
//! [`GrayCodeFlips`] yields.

/// Converts a binary number to its Gray code.
#[must_use]
pub const fn to_gray(x: u64) -> u64 {
    x ^ (x >> 1)
}

/// Converts a Gray code back to the binary number it encodes.
#[must_use]
pub const fn from_gray(mut g: u64) -> u64 {
    let mut shift = 1;
    while shift < u64::BITS {
        g ^= g >> shift;
        shift <<= 1;
    }
    g
}

/// Iterator over the bit flips of an n-bit Gray-code walk.
///
/// Yields exactly `2^n` indices. Step `t` for `1 <= t < 2^n` flips bit
/// `t.trailing_zeros()`, moving from `to_gray(t - 1)` to `to_gray(t)`.
/// The last step flips bit `n - 1`, which closes the cycle back to the
/// empty set. For `n = 0` nothing is yielded.
#[derive(Clone, Debug)]
pub struct GrayCodeFlips {
    step: u64,
    bits: u32,
    finished: bool,
}

impl GrayCodeFlips {
    /// Creates the walk over `bits`-bit codes.
    ///
    /// # Panics
    ///
    /// Panics if `bits >= 64`.
    #[must_use]
    pub fn new(bits: u32) -> Self {
        assert!(bits < u64::BITS, "Gray code walk limited to 63 bits");
        Self {
            step: 1,
            bits,
            finished: bits == 0,
        }
    }

    /// Number of bits in each code.
    #[must_use]
    pub fn bits(&self) -> u32 {
        self.bits
    }
}

impl Iterator for GrayCodeFlips {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.finished {
            return None;
        }
        if self.step >> self.bits != 0 {
            // close the cycle
            self.finished = true;
            return Some(self.bits as usize - 1);
        }
        let bit = self.step.trailing_zeros() as usize;
        self.step += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let total = 1u64 << self.bits;
        let remaining = usize::try_from(total - self.step + 1).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
