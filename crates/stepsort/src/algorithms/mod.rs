//! Resumable sorting state machines.
//!
//! Each algorithm is encoded as a small struct of integer cursors and flags
//! that [`Stepper::step`] advances by exactly one primitive operation: one
//! comparison decision plus at most one swap or shift. The set of algorithms
//! is closed; [`SortState`] is the tagged union over them and
//! [`SortMachine`] adds the completion oracle and the freeze-on-completion
//! rule on top.
//!
//! | Algorithm | Cursors | Completed set |
//! |-----------|---------|---------------|
//! | Bubble | scan index, locked tail count | locked tail |
//! | Comb | gap, scan index | none |
//! | Insertion | sorted boundary, sinking index | none |
//! | Cocktail | direction, settled low/high bounds | both settled ends |
//! | Merge | run list, merged buffer, pair progress | none |
//! | Simple quick | pivot, left scan, locked pivots | locked pivots |
//! | Heap | heap size, phase flag, sift index | extracted tail |
//! | Radix | digit, scan index, bucket sizes | none |

mod bubble;
mod cocktail;
mod comb;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;

pub use bubble::BubbleState;
pub use cocktail::CocktailState;
pub use comb::CombState;
pub use heap::HeapState;
pub use insertion::InsertionState;
pub use merge::{MergeState, Run};
pub use quick::SimpleQuickState;
pub use radix::RadixState;

use crate::oracle;
use crate::result::{SortError, SortResult};
use crate::sequence::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One resumable sorting algorithm.
///
/// Implementations hold only cursors into the sequence, never the values.
pub trait Stepper {
    /// Performs exactly one primitive operation
    fn step(&mut self, seq: &mut Sequence);

    /// Indices currently under examination (one or two)
    fn looking_at(&self) -> Vec<usize>;

    /// Indices proven to hold their final value, ascending
    fn completed_indices(&self) -> Vec<usize>;
}

/// Swaps `lo` and `hi` when they are out of order
pub(crate) fn swap_if_greater(seq: &mut Sequence, lo: usize, hi: usize) {
    if seq[lo] > seq[hi] {
        seq.swap(lo, hi);
    }
}

/// The closed set of supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Bubble sort
    #[default]
    Bubble,
    /// Comb sort (shrinking-gap bubble sort)
    Comb,
    /// Insertion sort
    Insertion,
    /// Cocktail shaker sort (bidirectional bubble sort)
    Cocktail,
    /// Bottom-up merge sort over doubling runs
    Merge,
    /// Single-pivot quicksort with a rightmost pivot
    SimpleQuick,
    /// Max-heap sort
    Heap,
    /// Least-significant-digit radix sort
    Radix,
}

/// Registry entry: identity, naming and constructor of an algorithm
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    /// Algorithm identity
    pub algorithm: Algorithm,
    /// Short machine-friendly key (`"simple_quick"`)
    pub key: &'static str,
    /// Display name (`"Simple Quick Sort"`)
    pub name: &'static str,
    /// Whether the item count must be even
    pub requires_even_count: bool,
    build: fn(usize) -> SortState,
}

/// Immutable algorithm registry, indexed by `Algorithm as usize`
pub static REGISTRY: [Registration; 8] = [
    Registration {
        algorithm: Algorithm::Bubble,
        key: "bubble",
        name: "Bubble Sort",
        requires_even_count: false,
        build: |len| SortState::Bubble(BubbleState::new(len)),
    },
    Registration {
        algorithm: Algorithm::Comb,
        key: "comb",
        name: "Comb Sort",
        requires_even_count: false,
        build: |len| SortState::Comb(CombState::new(len)),
    },
    Registration {
        algorithm: Algorithm::Insertion,
        key: "insertion",
        name: "Insertion Sort",
        requires_even_count: false,
        build: |len| SortState::Insertion(InsertionState::new(len)),
    },
    Registration {
        algorithm: Algorithm::Cocktail,
        key: "cocktail",
        name: "Cocktail Shaker Sort",
        requires_even_count: false,
        build: |len| SortState::Cocktail(CocktailState::new(len)),
    },
    Registration {
        algorithm: Algorithm::Merge,
        key: "merge",
        name: "Merge Sort",
        requires_even_count: true,
        build: |len| SortState::Merge(MergeState::new(len)),
    },
    Registration {
        algorithm: Algorithm::SimpleQuick,
        key: "simple_quick",
        name: "Simple Quick Sort",
        requires_even_count: false,
        build: |len| SortState::SimpleQuick(SimpleQuickState::new(len)),
    },
    Registration {
        algorithm: Algorithm::Heap,
        key: "heap",
        name: "Heap Sort",
        requires_even_count: false,
        build: |len| SortState::Heap(HeapState::new(len)),
    },
    Registration {
        algorithm: Algorithm::Radix,
        key: "radix",
        name: "Radix Sort",
        requires_even_count: false,
        build: |len| SortState::Radix(RadixState::new(len)),
    },
];

impl Algorithm {
    /// Every algorithm, in registry order
    pub const ALL: [Self; 8] = [
        Self::Bubble,
        Self::Comb,
        Self::Insertion,
        Self::Cocktail,
        Self::Merge,
        Self::SimpleQuick,
        Self::Heap,
        Self::Radix,
    ];

    /// Registry entry for this algorithm
    #[must_use]
    pub fn registration(self) -> &'static Registration {
        &REGISTRY[self as usize]
    }

    /// Display name
    #[must_use]
    pub fn name(self) -> &'static str {
        self.registration().name
    }

    /// Short key accepted by [`FromStr`]
    #[must_use]
    pub fn key(self) -> &'static str {
        self.registration().key
    }

    /// Adjusts an item count to satisfy the algorithm's structural
    /// preconditions. Merge sort rounds odd counts up to the next even number.
    #[must_use]
    pub fn validate_count(self, count: usize) -> usize {
        if self.registration().requires_even_count && count % 2 == 1 {
            count + 1
        } else {
            count
        }
    }

    /// Fresh state positioned before the first operation
    #[must_use]
    pub fn initial_state(self, len: usize) -> SortState {
        (self.registration().build)(len)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts the key (`"simple_quick"`), the display name
    /// (`"Simple Quick Sort"`) or the key with dashes, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        REGISTRY
            .iter()
            .find(|reg| reg.key == wanted || reg.name.eq_ignore_ascii_case(s.trim()))
            .map(|reg| reg.algorithm)
            .ok_or_else(|| SortError::unknown_algorithm(s))
    }
}

/// Per-algorithm resumable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortState {
    /// Bubble sort state
    Bubble(BubbleState),
    /// Comb sort state
    Comb(CombState),
    /// Insertion sort state
    Insertion(InsertionState),
    /// Cocktail shaker sort state
    Cocktail(CocktailState),
    /// Merge sort state
    Merge(MergeState),
    /// Simple quicksort state
    SimpleQuick(SimpleQuickState),
    /// Heap sort state
    Heap(HeapState),
    /// Radix sort state
    Radix(RadixState),
}

impl SortState {
    fn stepper(&self) -> &dyn Stepper {
        match self {
            Self::Bubble(s) => s,
            Self::Comb(s) => s,
            Self::Insertion(s) => s,
            Self::Cocktail(s) => s,
            Self::Merge(s) => s,
            Self::SimpleQuick(s) => s,
            Self::Heap(s) => s,
            Self::Radix(s) => s,
        }
    }

    fn stepper_mut(&mut self) -> &mut dyn Stepper {
        match self {
            Self::Bubble(s) => s,
            Self::Comb(s) => s,
            Self::Insertion(s) => s,
            Self::Cocktail(s) => s,
            Self::Merge(s) => s,
            Self::SimpleQuick(s) => s,
            Self::Heap(s) => s,
            Self::Radix(s) => s,
        }
    }
}

impl Stepper for SortState {
    fn step(&mut self, seq: &mut Sequence) {
        self.stepper_mut().step(seq);
    }

    fn looking_at(&self) -> Vec<usize> {
        self.stepper().looking_at()
    }

    fn completed_indices(&self) -> Vec<usize> {
        self.stepper().completed_indices()
    }
}

/// An algorithm state bound to a sequence length, with completion tracking.
///
/// After the oracle reports sorted order the machine is frozen: every index
/// counts as completed and further [`advance`](Self::advance) calls fail with
/// [`SortError::MachineCompleted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortMachine {
    algorithm: Algorithm,
    state: SortState,
    len: usize,
    completed: bool,
    operations: u64,
}

impl SortMachine {
    /// Creates a machine for a sequence of `len` values
    #[must_use]
    pub fn new(algorithm: Algorithm, len: usize) -> Self {
        Self {
            algorithm,
            state: algorithm.initial_state(len),
            len,
            completed: false,
            operations: 0,
        }
    }

    /// Creates a machine sized for `seq`
    #[must_use]
    pub fn for_sequence(algorithm: Algorithm, seq: &Sequence) -> Self {
        Self::new(algorithm, seq.len())
    }

    /// Performs one primitive operation, then consults the oracle.
    ///
    /// Returns `Ok(true)` when this operation completed the sort.
    pub fn advance(&mut self, seq: &mut Sequence) -> SortResult<bool> {
        if self.completed {
            return Err(SortError::MachineCompleted {
                algorithm: self.algorithm.name(),
            });
        }
        debug_assert_eq!(seq.len(), self.len, "machine bound to another sequence");

        self.state.step(seq);
        self.operations += 1;

        if oracle::is_sorted(seq) {
            self.completed = true;
            tracing::debug!(
                algorithm = self.algorithm.key(),
                operations = self.operations,
                "sequence sorted"
            );
        }
        Ok(self.completed)
    }

    /// Indices under examination; empty once completed
    #[must_use]
    pub fn looking_at(&self) -> Vec<usize> {
        if self.completed {
            Vec::new()
        } else {
            self.state.looking_at()
        }
    }

    /// Indices holding their final value; every index once completed
    #[must_use]
    pub fn completed_indices(&self) -> Vec<usize> {
        if self.completed {
            (0..self.len).collect()
        } else {
            self.state.completed_indices()
        }
    }

    /// Whether the oracle has confirmed sorted order
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Number of successful `advance()` calls
    #[must_use]
    pub const fn operations(&self) -> u64 {
        self.operations
    }

    /// The algorithm this machine runs
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Length of the sequence this machine was built for
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when bound to an empty sequence
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the underlying algorithm state
    #[must_use]
    pub const fn state(&self) -> &SortState {
        &self.state
    }
}
