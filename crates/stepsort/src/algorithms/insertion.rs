//! Insertion sort.
//!
//! The nested loop is unrolled into two cursors: `up_to_column` marks the end
//! of the ordered prefix and `looking_at` is the position of the value
//! currently sinking into it.

use super::Stepper;
use crate::sequence::Sequence;

/// Ordered-prefix boundary plus the index of the value being inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionState {
    len: usize,
    up_to_column: usize,
    looking_at: usize,
}

impl InsertionState {
    /// State before the first comparison
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            up_to_column: 0,
            looking_at: 1,
        }
    }

    /// Last index of the ordered prefix
    #[must_use]
    pub const fn up_to_column(&self) -> usize {
        self.up_to_column
    }

    fn extend_prefix(&mut self) {
        self.up_to_column += 1;
        self.looking_at = self.up_to_column + 1;
    }
}

impl Stepper for InsertionState {
    fn step(&mut self, seq: &mut Sequence) {
        let current = self.looking_at;
        if current >= self.len {
            return;
        }

        if seq[current - 1] < seq[current] {
            self.extend_prefix();
            return;
        }

        seq.swap(current - 1, current);
        self.looking_at -= 1;
        if self.looking_at == 0 {
            self.extend_prefix();
        }
    }

    fn looking_at(&self) -> Vec<usize> {
        if self.looking_at < self.len {
            vec![self.looking_at - 1, self.looking_at]
        } else {
            Vec::new()
        }
    }

    fn completed_indices(&self) -> Vec<usize> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{reversed, run};
    use crate::algorithms::{Algorithm, SortMachine};

    #[test]
    fn test_in_order_pair_extends_prefix() {
        let mut seq = Sequence::from_values(vec![1, 3, 2]);
        let mut state = InsertionState::new(3);
        state.step(&mut seq);
        assert_eq!(state.up_to_column(), 1);
        assert_eq!(state.looking_at(), vec![1, 2]);
        assert_eq!(seq.mutation_count(), 0);
    }

    #[test]
    fn test_value_sinks_one_position_per_step() {
        let mut seq = Sequence::from_values(vec![2, 3, 1]);
        let mut state = InsertionState::new(3);
        state.step(&mut seq); // 2 < 3
        state.step(&mut seq); // 3 > 1: swap
        assert_eq!(seq.as_slice(), &[2, 1, 3]);
        assert_eq!(state.looking_at(), vec![0, 1]);
        state.step(&mut seq); // 2 > 1: swap, reaches the front
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
        assert_eq!(state.up_to_column(), 2);
    }

    #[test]
    fn test_sorted_input_completes_on_first_advance() {
        let mut seq = Sequence::identity(8);
        let mut machine = SortMachine::for_sequence(Algorithm::Insertion, &seq);
        assert!(machine.advance(&mut seq).unwrap());
        assert_eq!(seq.mutation_count(), 0);
    }

    #[test]
    fn test_reversed_operation_count() {
        // Every value sinks all the way to the front: one swap per inversion
        let (values, ops) = run(Algorithm::Insertion, reversed(6));
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ops, 15);
    }
}
