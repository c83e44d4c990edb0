//! Single-pivot quicksort with an explicit locked set instead of a call stack.
//!
//! The pivot is the rightmost unlocked index of the active segment. Values
//! greater than the pivot are rotated past it, so the pivot drifts left until
//! the scan pointer meets it; at that point it sits at its final position and
//! is locked. The next segment is found by scanning down from the old segment
//! end around the locked indices.

use super::Stepper;
use crate::sequence::Sequence;
use std::collections::BTreeSet;

/// Pivot, scan pointer and the set of indices known to be final
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleQuickState {
    locked: BTreeSet<usize>,
    pivot: Option<usize>,
    left: usize,
    segment_end: usize,
}

impl SimpleQuickState {
    /// Partitions the whole sequence first
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut state = Self {
            locked: BTreeSet::new(),
            pivot: None,
            left: 0,
            segment_end: 0,
        };
        state.select_segment(len.checked_sub(1));
        state
    }

    /// Current pivot index, `None` once every index is locked
    #[must_use]
    pub const fn pivot(&self) -> Option<usize> {
        self.pivot
    }

    /// Number of locked indices
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.locked.len()
    }

    /// Picks the highest unlocked segment at or below `upper`.
    ///
    /// Every index above the returned segment is locked. Single-index
    /// segments are locked on the way down since they need no partitioning.
    fn select_segment(&mut self, mut upper: Option<usize>) {
        while let Some(p) = upper {
            upper = p.checked_sub(1);
            if self.locked.contains(&p) {
                continue;
            }
            let lo = self.locked.range(..p).next_back().map_or(0, |&i| i + 1);
            if lo == p {
                self.locked.insert(p);
                continue;
            }
            self.pivot = Some(p);
            self.left = lo;
            self.segment_end = p;
            return;
        }
        self.pivot = None;
    }
}

impl Stepper for SimpleQuickState {
    fn step(&mut self, seq: &mut Sequence) {
        let Some(mut pivot) = self.pivot else {
            return;
        };

        if seq[self.left] > seq[pivot] {
            // The larger value lands where the pivot was; the pivot moves left
            seq.shift(self.left, pivot);
            pivot -= 1;
        } else {
            self.left += 1;
        }
        self.pivot = Some(pivot);

        if self.left >= pivot {
            self.locked.insert(pivot);
            self.select_segment(Some(self.segment_end));
        }
    }

    fn looking_at(&self) -> Vec<usize> {
        self.pivot
            .map(|pivot| vec![self.left, pivot])
            .unwrap_or_default()
    }

    fn completed_indices(&self) -> Vec<usize> {
        self.locked.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::{reversed, run, scrambled};
    use crate::algorithms::Algorithm;

    #[test]
    fn test_initial_pivot_is_rightmost() {
        let state = SimpleQuickState::new(5);
        assert_eq!(state.pivot(), Some(4));
        assert_eq!(state.looking_at(), vec![0, 4]);
        assert!(state.completed_indices().is_empty());
    }

    #[test]
    fn test_single_value_is_locked_immediately() {
        let state = SimpleQuickState::new(1);
        assert_eq!(state.pivot(), None);
        assert_eq!(state.completed_indices(), vec![0]);
    }

    #[test]
    fn test_larger_value_rotates_past_pivot() {
        let mut seq = Sequence::from_values(vec![5, 1, 3]);
        let mut state = SimpleQuickState::new(3);
        state.step(&mut seq);
        assert_eq!(seq.as_slice(), &[1, 3, 5]);
        assert_eq!(state.looking_at(), vec![0, 1]);
    }

    #[test]
    fn test_pivot_locks_at_final_position() {
        let mut seq = Sequence::from_values(vec![1, 4, 2, 3]);
        let mut state = SimpleQuickState::new(4);
        // 1 <= 3: advance left; 4 > 3: rotate; 2 <= 3: meet the pivot
        for _ in 0..3 {
            state.step(&mut seq);
        }
        assert_eq!(seq.as_slice(), &[1, 2, 3, 4]);
        assert!(state.completed_indices().contains(&2));
        for index in state.completed_indices() {
            assert_eq!(seq[index] as usize, index + 1);
        }
    }

    #[test]
    fn test_right_segment_is_selected_after_lock() {
        // Pivot 1 sweeps everything to its right
        let mut seq = Sequence::from_values(vec![3, 2, 1]);
        let mut state = SimpleQuickState::new(3);
        state.step(&mut seq);
        state.step(&mut seq);
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
        assert_eq!(state.completed_indices(), vec![0]);
        assert_eq!(state.looking_at(), vec![1, 2]);
    }

    #[test]
    fn test_sorts() {
        for n in [2_u32, 7, 16, 33] {
            let expected: Vec<u32> = (1..=n).collect();
            assert_eq!(run(Algorithm::SimpleQuick, reversed(n)).0, expected);
            assert_eq!(run(Algorithm::SimpleQuick, scrambled(n)).0, expected);
        }
    }
}
