//! Bubble sort.

use super::{swap_if_greater, Stepper};
use crate::sequence::Sequence;

/// Single cursor sweeping the unlocked prefix; each pass locks the tail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleState {
    len: usize,
    cursor: usize,
    locked: usize,
}

impl BubbleState {
    /// State before the first comparison
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            cursor: 0,
            locked: 0,
        }
    }

    /// Number of tail positions proven final
    #[must_use]
    pub const fn locked(&self) -> usize {
        self.locked
    }

    /// Exclusive bound for the left index of the next comparison
    fn bound(&self) -> usize {
        self.len.saturating_sub(self.locked + 1)
    }
}

impl Stepper for BubbleState {
    fn step(&mut self, seq: &mut Sequence) {
        if self.cursor >= self.bound() {
            return;
        }
        swap_if_greater(seq, self.cursor, self.cursor + 1);
        self.cursor += 1;

        // End of pass: the largest unlocked value has reached the tail
        if self.cursor >= self.bound() {
            self.locked += 1;
            self.cursor = 0;
        }
    }

    fn looking_at(&self) -> Vec<usize> {
        if self.cursor < self.bound() {
            vec![self.cursor, self.cursor + 1]
        } else {
            Vec::new()
        }
    }

    fn completed_indices(&self) -> Vec<usize> {
        (self.len - self.locked.min(self.len)..self.len).collect()
    }
}
