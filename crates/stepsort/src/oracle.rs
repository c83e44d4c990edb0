//! Completion oracle.
//!
//! Sequences are always permutations of `1..=n`, so "every neighbour is
//! exactly one larger" is equivalent to "this is the identity permutation".
//! The check is linear and allocation-free; it runs after every operation.

use crate::sequence::Sequence;

/// True when `values` is `1..=expected_len` in order
#[must_use]
pub fn is_identity(values: &[u32], expected_len: usize) -> bool {
    values.len() == expected_len && values.windows(2).all(|pair| pair[0] + 1 == pair[1])
}

/// True when the sequence is fully sorted
#[must_use]
pub fn is_sorted(seq: &Sequence) -> bool {
    is_identity(seq.as_slice(), seq.len())
}
