//! Comb sort.
//!
//! The gap starts at `len` and is shrunk once before the first comparison,
//! so the opening pass compares pairs `floor(len / 1.3)` apart. A gap of
//! `len` would only ever compare `(0, len - 1)`.

use super::{swap_if_greater, Stepper};
use crate::sequence::Sequence;

/// Gap shrink factor per pass
pub const SHRINK_FACTOR: f64 = 1.3;

/// Next gap: divide by the shrink factor, floored, never below 1
fn shrink(gap: usize) -> usize {
    ((gap as f64 / SHRINK_FACTOR).floor() as usize).max(1)
}

/// Bubble sort over pairs `gap` apart; the gap shrinks after each pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombState {
    len: usize,
    gap: usize,
    cursor: usize,
}

impl CombState {
    /// State before the first comparison; the first gap is `len / 1.3`
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            gap: shrink(len),
            cursor: 0,
        }
    }

    /// Current comparison distance
    #[must_use]
    pub const fn gap(&self) -> usize {
        self.gap
    }

    fn has_pair(&self) -> bool {
        self.cursor + self.gap < self.len
    }
}

impl Stepper for CombState {
    fn step(&mut self, seq: &mut Sequence) {
        if !self.has_pair() {
            return;
        }
        swap_if_greater(seq, self.cursor, self.cursor + self.gap);
        self.cursor += 1;

        if !self.has_pair() {
            self.cursor = 0;
            self.gap = shrink(self.gap);
        }
    }

    fn looking_at(&self) -> Vec<usize> {
        if self.has_pair() {
            vec![self.cursor, self.cursor + self.gap]
        } else {
            Vec::new()
        }
    }

    fn completed_indices(&self) -> Vec<usize> {
        Vec::new()
    }
}
