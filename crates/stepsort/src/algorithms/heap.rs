//! Heapsort over an implicit max-heap occupying `[0, heap_size)`.
//!
//! Build phase: admit one value at a time and sift it up one level per step.
//! Extract phase: pop the root into the tail, then sift the new root down one
//! level per step. Both phases share the `sift` cursor.

use super::Stepper;
use crate::sequence::Sequence;

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Heap boundary, phase flag and the index currently being sifted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapState {
    len: usize,
    heap_size: usize,
    extracting: bool,
    sift: Option<usize>,
    child: Option<usize>,
}

impl HeapState {
    /// A one-element heap; the rest is admitted during the build phase
    #[must_use]
    pub fn new(len: usize) -> Self {
        let mut state = Self {
            len,
            heap_size: len.min(1),
            extracting: false,
            sift: None,
            child: None,
        };
        state.settle_phase();
        state
    }

    /// Size of the heap prefix
    #[must_use]
    pub const fn heap_size(&self) -> usize {
        self.heap_size
    }

    /// Whether the build phase has finished
    #[must_use]
    pub const fn is_extracting(&self) -> bool {
        self.extracting
    }

    /// Larger child of `index` inside the heap
    fn larger_child(&self, seq: &Sequence, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        let right = left + 1;
        if left >= self.heap_size {
            None
        } else if right < self.heap_size && seq[right] > seq[left] {
            Some(right)
        } else {
            Some(left)
        }
    }

    fn step_build(&mut self, seq: &mut Sequence) {
        let current = match self.sift {
            Some(current) => current,
            None if self.heap_size < self.len => {
                self.heap_size += 1;
                self.heap_size - 1
            }
            None => return,
        };

        let up = parent(current);
        if seq[current] > seq[up] {
            seq.swap(current, up);
            self.sift = (up > 0).then_some(up);
        } else {
            self.sift = None;
        }
    }

    fn step_extract(&mut self, seq: &mut Sequence) {
        if let Some(current) = self.sift {
            match self.larger_child(seq, current) {
                Some(child) if seq[child] > seq[current] => {
                    seq.swap(current, child);
                    self.sift = Some(child);
                }
                _ => self.sift = None,
            }
        } else if self.heap_size > 1 {
            seq.swap(0, self.heap_size - 1);
            self.heap_size -= 1;
            self.sift = Some(0);
        }
    }

    /// Applies phase transitions that need no comparison
    fn settle_phase(&mut self) {
        if !self.extracting && self.sift.is_none() && self.heap_size >= self.len {
            self.extracting = true;
        }
        if self.extracting {
            if self.sift.is_some_and(|index| 2 * index + 1 >= self.heap_size) {
                self.sift = None;
            }
            if self.sift.is_none() && self.heap_size <= 1 {
                self.heap_size = 0;
            }
        }
    }
}

impl Stepper for HeapState {
    fn step(&mut self, seq: &mut Sequence) {
        if self.extracting {
            self.step_extract(seq);
        } else {
            self.step_build(seq);
        }
        self.settle_phase();
        self.child = match self.sift {
            Some(index) if self.extracting => self.larger_child(seq, index),
            _ => None,
        };
    }

    fn looking_at(&self) -> Vec<usize> {
        if !self.extracting {
            let current = self.sift.unwrap_or(self.heap_size);
            if current == 0 || current >= self.len {
                return Vec::new();
            }
            return vec![parent(current), current];
        }
        match (self.sift, self.child) {
            (Some(index), Some(child)) => vec![index, child],
            (None, _) if self.heap_size > 1 => vec![0, self.heap_size - 1],
            _ => Vec::new(),
        }
    }

    fn completed_indices(&self) -> Vec<usize> {
        if self.extracting {
            (self.heap_size..self.len).collect()
        } else {
            Vec::new()
        }
    }
}
