//! Least-significant-digit radix sort, base 10.
//!
//! Each step moves one value into its digit bucket. The buckets live in the
//! already-scanned prefix of the sequence, ordered by digit, so placing a value
//! is one stable shift to the end of its bucket. There is no digit limit: the
//! machine keeps making passes until the completion oracle fires.

use super::Stepper;
use crate::sequence::Sequence;

/// Number of buckets per pass
pub const RADIX: usize = 10;

/// The `place`-th decimal digit of `value`, counted from 1 at the least
/// significant end; zero past the last digit.
#[must_use]
pub fn digit(value: u32, place: u32) -> usize {
    10_u32
        .checked_pow(place.saturating_sub(1))
        .map_or(0, |divisor| (value / divisor % 10) as usize)
}

/// Current digit place, scan cursor and bucket fill counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixState {
    len: usize,
    on_digit: u32,
    cursor: usize,
    buckets: [usize; RADIX],
}

impl RadixState {
    /// First pass over the ones digit
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            on_digit: 1,
            cursor: 0,
            buckets: [0; RADIX],
        }
    }

    /// Digit place of the running pass, starting at 1
    #[must_use]
    pub const fn on_digit(&self) -> u32 {
        self.on_digit
    }

    /// Values placed in each bucket so far this pass
    #[must_use]
    pub const fn buckets(&self) -> &[usize; RADIX] {
        &self.buckets
    }
}

impl Stepper for RadixState {
    fn step(&mut self, seq: &mut Sequence) {
        if self.cursor >= self.len {
            return;
        }

        let bucket = digit(seq[self.cursor], self.on_digit);
        let target: usize = self.buckets[..=bucket].iter().sum();
        seq.shift(self.cursor, target);
        self.buckets[bucket] += 1;
        self.cursor += 1;

        if self.cursor == self.len {
            self.on_digit += 1;
            self.cursor = 0;
            self.buckets = [0; RADIX];
        }
    }

    fn looking_at(&self) -> Vec<usize> {
        if self.cursor < self.len {
            vec![self.cursor]
        } else {
            Vec::new()
        }
    }

    fn completed_indices(&self) -> Vec<usize> {
        Vec::new()
    }
}
