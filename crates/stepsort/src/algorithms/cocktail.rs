//! Cocktail shaker sort.

use super::{swap_if_greater, Stepper};
use crate::sequence::Sequence;

/// Bidirectional bubble sort between two settled boundaries.
///
/// `[0, low)` and `[high, len)` hold final values. Ascending passes compare
/// `(cursor, cursor + 1)`; descending passes compare `(cursor - 1, cursor)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CocktailState {
    len: usize,
    low: usize,
    high: usize,
    cursor: usize,
    ascending: bool,
}

impl CocktailState {
    /// State before the first ascending comparison
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            low: 0,
            high: len,
            cursor: 0,
            ascending: true,
        }
    }

    /// Whether the current pass runs towards the end
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        self.ascending
    }

    fn unsettled(&self) -> usize {
        self.high.saturating_sub(self.low)
    }
}

impl Stepper for CocktailState {
    fn step(&mut self, seq: &mut Sequence) {
        if self.unsettled() < 2 {
            return;
        }

        if self.ascending {
            swap_if_greater(seq, self.cursor, self.cursor + 1);
            self.cursor += 1;
            if self.cursor + 1 >= self.high {
                self.high -= 1;
                self.ascending = false;
                self.cursor = self.high - 1;
            }
        } else {
            swap_if_greater(seq, self.cursor - 1, self.cursor);
            self.cursor -= 1;
            if self.cursor <= self.low {
                self.low += 1;
                self.ascending = true;
                self.cursor = self.low;
            }
        }
    }

    fn looking_at(&self) -> Vec<usize> {
        if self.unsettled() < 2 {
            Vec::new()
        } else if self.ascending {
            vec![self.cursor, self.cursor + 1]
        } else {
            vec![self.cursor - 1, self.cursor]
        }
    }

    fn completed_indices(&self) -> Vec<usize> {
        (0..self.low).chain(self.high..self.len).collect()
    }
}
