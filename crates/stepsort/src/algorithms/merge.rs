//! Bottom-up merge sort, one element taken per step.
//!
//! The sequence is covered by sorted runs (initially singletons). Runs are
//! merged pairwise in place: the merged prefix of a pair grows by one element
//! per step, taking the smaller of the two heads. Taking the left head needs no
//! data movement; taking the right head is a single shift into the prefix.
//! When every pair of a pass is merged, the merged runs become the new run
//! list. An odd run count is rebalanced by splitting the middle run in two.

use super::Stepper;
use crate::sequence::Sequence;

/// Contiguous sorted region of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// First index of the run
    pub start: usize,
    /// Number of values in the run
    pub size: usize,
}

impl Run {
    const fn end(self) -> usize {
        self.start + self.size
    }
}

/// Run list, merged-run buffer and progress within the current pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeState {
    runs: Vec<Run>,
    merged: Vec<Run>,
    pair: usize,
    taken_left: usize,
    taken_right: usize,
}

impl MergeState {
    /// One singleton run per value
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut state = Self {
            runs: (0..len).map(|start| Run { start, size: 1 }).collect(),
            merged: Vec::new(),
            pair: 0,
            taken_left: 0,
            taken_right: 0,
        };
        state.balance();
        state
    }

    /// Runs of the current pass
    #[must_use]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    fn current_pair(&self) -> Option<(Run, Run)> {
        let left = 2 * self.pair;
        let right = left + 1;
        (right < self.runs.len()).then(|| (self.runs[left], self.runs[right]))
    }

    /// Index of the left head and right head of the active pair
    fn heads(&self, left: Run, right: Run) -> (usize, usize) {
        let a = left.start + self.taken_left + self.taken_right;
        let b = right.start + self.taken_right;
        (a, b)
    }

    /// Splits the middle run when the run count is odd. Singleton middles
    /// (only possible for odd lengths) are left alone; the unpaired last run
    /// is then carried into the next pass instead.
    fn balance(&mut self) {
        let count = self.runs.len();
        if count < 2 || count % 2 == 0 {
            return;
        }
        let mid = count / 2;
        let run = self.runs[mid];
        if run.size < 2 {
            return;
        }
        let half = run.size / 2;
        self.runs[mid] = Run {
            start: run.start,
            size: half,
        };
        self.runs.insert(
            mid + 1,
            Run {
                start: run.start + half,
                size: run.size - half,
            },
        );
    }

    fn finish_pair(&mut self, left: Run, right: Run) {
        self.merged.push(Run {
            start: left.start,
            size: left.size + right.size,
        });
        self.pair += 1;
        self.taken_left = 0;
        self.taken_right = 0;

        if 2 * self.pair + 1 >= self.runs.len() {
            if self.runs.len() % 2 == 1 {
                if let Some(&carried) = self.runs.last() {
                    self.merged.push(carried);
                }
            }
            self.runs = std::mem::take(&mut self.merged);
            self.pair = 0;
            self.balance();
        }
    }
}

impl Stepper for MergeState {
    fn step(&mut self, seq: &mut Sequence) {
        let Some((left, right)) = self.current_pair() else {
            return;
        };
        let (a, b) = self.heads(left, right);

        if seq[a] <= seq[b] {
            self.taken_left += 1;
        } else {
            seq.shift(b, a);
            self.taken_right += 1;
        }

        // Once either side is drained the remainder is already in place
        if self.taken_left == left.size || self.taken_right == right.size {
            debug_assert_eq!(left.end(), right.start);
            self.finish_pair(left, right);
        }
    }

    fn looking_at(&self) -> Vec<usize> {
        self.current_pair()
            .map(|(left, right)| {
                let (a, b) = self.heads(left, right);
                vec![a, b]
            })
            .unwrap_or_default()
    }

    fn completed_indices(&self) -> Vec<usize> {
        Vec::new()
    }
}
