//! The shared value array every sorting machine operates on.
//!
//! A [`Sequence`] always holds a permutation of `1..=n`. Machines never keep
//! their own copy of the values; they address the sequence by index and mutate
//! it only through [`Sequence::swap`] and [`Sequence::shift`], so the multiset
//! of values can never change.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::ops::Index;

/// Receiver for "value touched" notifications.
///
/// Fired once per written index with the value now stored there. Renderers and
/// audio feedback hang off this hook.
pub trait TouchObserver {
    /// Called after `index` was overwritten with `value`
    fn on_touch(&mut self, index: usize, value: u32);
}

impl<F> TouchObserver for F
where
    F: FnMut(usize, u32),
{
    fn on_touch(&mut self, index: usize, value: u32) {
        self(index, value);
    }
}

/// Ordered permutation of `1..=n` mutated by swap and move primitives
pub struct Sequence {
    items: Vec<u32>,
    observer: Option<Box<dyn TouchObserver>>,
    mutations: u64,
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("items", &self.items)
            .field("observer", &self.observer.is_some())
            .field("mutations", &self.mutations)
            .finish()
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::identity(0)
    }
}

impl Sequence {
    /// Creates the sorted sequence `1..=n`
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_values((1..=n as u32).collect())
    }

    /// Creates a sequence from explicit values.
    ///
    /// The caller is responsible for passing a permutation of `1..=len`; the
    /// completion oracle assumes it.
    #[must_use]
    pub fn from_values(items: Vec<u32>) -> Self {
        Self {
            items,
            observer: None,
            mutations: 0,
        }
    }

    /// Creates a uniformly shuffled permutation of `1..=n`
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut seq = Self::identity(n);
        seq.items.shuffle(rng);
        seq
    }

    /// Replaces the contents with a fresh shuffle of `1..=n`.
    ///
    /// The observer survives; the mutation counter restarts.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        self.items = (1..=n as u32).collect();
        self.items.shuffle(rng);
        self.mutations = 0;
    }

    /// Replaces the contents with explicit values, keeping the observer
    pub fn replace_values(&mut self, items: Vec<u32>) {
        self.items = items;
        self.mutations = 0;
    }

    /// Installs the touch observer, replacing any previous one
    pub fn set_observer(&mut self, observer: impl TouchObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Installs a closure as the touch observer
    pub fn on_touch<F>(&mut self, callback: F)
    where
        F: FnMut(usize, u32) + 'static,
    {
        self.set_observer(callback);
    }

    /// Removes the touch observer
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Number of values
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the sequence holds no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the values in order
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.items
    }

    /// Owned copy of the values in order
    #[must_use]
    pub fn snapshot(&self) -> Vec<u32> {
        self.items.clone()
    }

    /// Number of swap/shift primitives applied since the last regenerate
    #[must_use]
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// Exchanges the values at `a` and `b`.
    ///
    /// Swapping an index with itself is not counted as a mutation.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.items.swap(a, b);
        self.mutations += 1;
        self.notify(a);
        self.notify(b);
    }

    /// Moves the value at `from` to `to`, sliding the values in between by one.
    ///
    /// This is the single "move" primitive used by merge and radix sort to
    /// append into an output region without a chain of swaps.
    pub fn shift(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let (lo, hi) = if from < to { (from, to) } else { (to, from) };
        if from < to {
            self.items[lo..=hi].rotate_left(1);
        } else {
            self.items[lo..=hi].rotate_right(1);
        }
        self.mutations += 1;
        for index in lo..=hi {
            self.notify(index);
        }
    }

    fn notify(&mut self, index: usize) {
        let value = self.items[index];
        if let Some(observer) = self.observer.as_mut() {
            observer.on_touch(index, value);
        }
    }
}

impl Index<usize> for Sequence {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}
