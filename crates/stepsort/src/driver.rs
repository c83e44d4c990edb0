//! Frame-clocked orchestration of a single sorting machine.
//!
//! The [`Driver`] owns the [`Sequence`] and the active [`SortMachine`] and is
//! the only public way to mutate either. An external clock calls
//! [`Driver::tick`] once per rendered frame; the driver performs one primitive
//! operation every `frames_per_op` frames, or drains the machine in one tick
//! when `frames_per_op` is 0.
//!
//! Control methods never fail on bad timing. Requests that are not valid in the
//! current lifecycle state (regenerating mid-sort, starting a finished run) are
//! ignored and report `false`.
//!
//! ```
//! use stepsort::{Algorithm, Driver, EngineConfig};
//!
//! let config = EngineConfig::default().with_items(16).with_seed(1);
//! let mut driver = Driver::new(config).unwrap();
//! driver.select_algorithm(Algorithm::Heap);
//! driver.set_frames_per_op(0);
//! driver.start();
//! driver.tick().unwrap();
//! assert!(driver.is_completed());
//! assert_eq!(driver.sequence_snapshot(), (1..=16).collect::<Vec<u32>>());
//! ```

use crate::algorithms::{Algorithm, SortMachine};
use crate::config::EngineConfig;
use crate::result::{SortError, SortResult};
use crate::sequence::Sequence;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Point-in-time telemetry for a driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStats {
    /// Active algorithm
    pub algorithm: Algorithm,
    /// Length of the sequence
    pub item_count: usize,
    /// Frames ticked since the last `start()`
    pub frame_num: u64,
    /// Operations performed on the current sequence
    pub operation_num: u64,
    /// Frames since the last operation
    pub frames_since_op: u32,
    /// Frames between operations (0 = instant)
    pub frames_per_op: u32,
    /// Whether ticks currently advance the machine
    pub started: bool,
    /// Whether the sequence has been confirmed sorted
    pub completed: bool,
    /// Swaps and shifts applied to the current sequence
    pub mutations: u64,
}

/// Owns the sequence and the active machine and paces them against a clock
#[derive(Debug)]
pub struct Driver {
    config: EngineConfig,
    rng: StdRng,
    sequence: Sequence,
    machine: SortMachine,
    frames_per_op: u32,
    started: bool,
    completed: bool,
    frame_num: u64,
    frames_since_op: u32,
}

impl Default for Driver {
    fn default() -> Self {
        Self::build(EngineConfig::default())
    }
}

impl Driver {
    /// Create a driver with a freshly shuffled sequence.
    ///
    /// # Errors
    /// Returns [`SortError::InvalidConfig`] if the configuration is inconsistent
    pub fn new(config: EngineConfig) -> SortResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let algorithm = config.algorithm;
        let mut driver = Self {
            frames_per_op: config.default_frames_per_op,
            machine: SortMachine::new(algorithm, 0),
            sequence: Sequence::default(),
            config,
            rng,
            started: false,
            completed: false,
            frame_num: 0,
            frames_since_op: 0,
        };
        let count = driver.normalize_count(driver.config.default_items);
        driver.reset_sequence(count);
        driver
    }

    // ===== Control =====

    /// Replace the sequence with a fresh shuffle of `1..=count`.
    ///
    /// The count is clamped to the configured bounds and then adjusted to the
    /// active algorithm's structural preconditions. Ignored while sorting.
    pub fn generate(&mut self, count: usize) -> bool {
        if self.started {
            tracing::debug!(count, "generate ignored while sorting");
            return false;
        }
        let count = self.normalize_count(count);
        self.reset_sequence(count);
        tracing::debug!(
            algorithm = self.machine.algorithm().key(),
            count,
            "generated sequence"
        );
        true
    }

    /// Reshuffle at the current item count
    pub fn regenerate(&mut self) -> bool {
        self.generate(self.sequence.len())
    }

    /// Change the item count; same as [`generate`](Self::generate)
    pub fn set_item_count(&mut self, count: usize) -> bool {
        self.generate(count)
    }

    /// Load explicit values instead of a shuffle.
    ///
    /// Ignored (returns `Ok(false)`) while sorting.
    ///
    /// # Errors
    /// Returns [`SortError::InvalidConfig`] unless `values` is a permutation of
    /// `1..=values.len()` whose length the active algorithm accepts
    pub fn load_values(&mut self, values: Vec<u32>) -> SortResult<bool> {
        if self.started {
            tracing::debug!("load ignored while sorting");
            return Ok(false);
        }
        let len = values.len();
        let mut seen = vec![false; len];
        for &value in &values {
            let slot = (value as usize).checked_sub(1).filter(|&i| i < len);
            match slot {
                Some(i) if !seen[i] => seen[i] = true,
                _ => {
                    return Err(SortError::invalid_config(format!(
                        "values must be a permutation of 1..={len}"
                    )))
                }
            }
        }
        let algorithm = self.machine.algorithm();
        if algorithm.validate_count(len) != len {
            return Err(SortError::invalid_config(format!(
                "{algorithm} cannot sort {len} values"
            )));
        }

        self.sequence.replace_values(values);
        self.rebind_machine(algorithm);
        Ok(true)
    }

    /// Switch algorithms and regenerate. Ignored while sorting.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if self.started {
            tracing::debug!(
                algorithm = algorithm.key(),
                "algorithm change ignored while sorting"
            );
            return false;
        }
        self.machine = SortMachine::new(algorithm, self.sequence.len());
        tracing::info!(algorithm = algorithm.key(), "selected algorithm");
        self.regenerate()
    }

    /// Switch algorithms by registry key or display name.
    ///
    /// # Errors
    /// Returns [`SortError::UnknownAlgorithm`] if the name is not registered
    pub fn select_algorithm_by_name(&mut self, name: &str) -> SortResult<bool> {
        let algorithm: Algorithm = name.parse()?;
        Ok(self.select_algorithm(algorithm))
    }

    /// Change the cadence, clamped to the configured bounds. Takes effect
    /// immediately, even mid-sort. Returns the applied value.
    pub fn set_frames_per_op(&mut self, frames: u32) -> u32 {
        self.frames_per_op = self.config.clamp_frames_per_op(frames);
        self.frames_per_op
    }

    /// Begin or resume sorting.
    ///
    /// Ignored when already running or when the sequence is already sorted.
    /// The frame counter restarts and the first tick performs an operation.
    pub fn start(&mut self) -> bool {
        if self.started || self.completed {
            tracing::debug!(
                started = self.started,
                completed = self.completed,
                "start ignored"
            );
            return false;
        }
        self.started = true;
        self.frame_num = 0;
        self.frames_since_op = self.frames_per_op;
        tracing::info!(
            algorithm = self.machine.algorithm().key(),
            items = self.sequence.len(),
            frames_per_op = self.frames_per_op,
            "sorting started"
        );
        true
    }

    /// Pause. The machine resumes exactly where it stopped on the next start.
    pub fn stop(&mut self) -> bool {
        if !self.started {
            return false;
        }
        self.started = false;
        tracing::info!(operations = self.machine.operations(), "sorting paused");
        true
    }

    /// Start again, regenerating first if the last run finished
    pub fn restart(&mut self) -> bool {
        if self.started {
            return false;
        }
        if self.completed {
            self.regenerate();
        }
        self.start()
    }

    /// Advance the clock by one frame.
    ///
    /// Returns the number of operations performed during this frame.
    ///
    /// # Errors
    /// Only propagates machine precondition failures, which the lifecycle
    /// checks make unreachable
    pub fn tick(&mut self) -> SortResult<u64> {
        if !self.started || self.completed {
            return Ok(0);
        }
        self.frame_num += 1;

        if self.frames_per_op == 0 {
            let before = self.machine.operations();
            while !self.machine.advance(&mut self.sequence)? {}
            self.complete();
            return Ok(self.machine.operations() - before);
        }

        self.frames_since_op += 1;
        if self.frames_since_op < self.frames_per_op {
            return Ok(0);
        }
        self.frames_since_op = 0;
        if self.machine.advance(&mut self.sequence)? {
            self.complete();
        }
        Ok(1)
    }

    /// Install a callback fired for every index a swap or shift writes
    pub fn on_touch<F>(&mut self, callback: F)
    where
        F: FnMut(usize, u32) + 'static,
    {
        self.sequence.on_touch(callback);
    }

    // ===== Queries =====

    /// Copy of the current values
    #[must_use]
    pub fn sequence_snapshot(&self) -> Vec<u32> {
        self.sequence.snapshot()
    }

    /// Borrow the sequence
    #[must_use]
    pub const fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Indices the active machine is examining
    #[must_use]
    pub fn looking_at_indices(&self) -> Vec<usize> {
        self.machine.looking_at()
    }

    /// Indices holding their final value
    #[must_use]
    pub fn completed_indices(&self) -> Vec<usize> {
        self.machine.completed_indices()
    }

    /// Whether the current sequence has been confirmed sorted
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether ticks currently advance the machine
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Operations performed on the current sequence
    #[must_use]
    pub const fn operation_count(&self) -> u64 {
        self.machine.operations()
    }

    /// Frames ticked since the last start
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_num
    }

    /// Frames between operations
    #[must_use]
    pub const fn frames_per_op(&self) -> u32 {
        self.frames_per_op
    }

    /// Length of the sequence
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sequence.len()
    }

    /// Active algorithm
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.machine.algorithm()
    }

    /// Configuration the driver was built with
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Telemetry snapshot
    #[must_use]
    pub fn stats(&self) -> DriverStats {
        DriverStats {
            algorithm: self.machine.algorithm(),
            item_count: self.sequence.len(),
            frame_num: self.frame_num,
            operation_num: self.machine.operations(),
            frames_since_op: self.frames_since_op,
            frames_per_op: self.frames_per_op,
            started: self.started,
            completed: self.completed,
            mutations: self.sequence.mutation_count(),
        }
    }

    // ===== Internals =====

    /// Clamp to the configured bounds, then apply the algorithm's count rule.
    /// If the rule pushes past `max_items` the count is adjusted downwards
    /// instead. When no adjusted count fits the bounds the clamped count is
    /// kept as is; the merge machine still sorts odd lengths.
    fn normalize_count(&self, requested: usize) -> usize {
        let algorithm = self.machine.algorithm();
        let clamped = self.config.clamp_items(requested);
        let mut count = algorithm.validate_count(clamped);
        if count > self.config.max_items {
            count = algorithm.validate_count(clamped.saturating_sub(1));
        }
        if count < self.config.min_items || count > self.config.max_items {
            count = clamped;
        }
        if count != clamped {
            tracing::warn!(
                algorithm = algorithm.key(),
                requested,
                applied = count,
                "item count adjusted to satisfy algorithm precondition"
            );
        } else if count != requested {
            tracing::debug!(requested, applied = count, "item count clamped");
        }
        count
    }

    fn reset_sequence(&mut self, count: usize) {
        self.sequence.regenerate(count, &mut self.rng);
        self.rebind_machine(self.machine.algorithm());
    }

    fn rebind_machine(&mut self, algorithm: Algorithm) {
        self.machine = SortMachine::for_sequence(algorithm, &self.sequence);
        self.completed = false;
        self.frame_num = 0;
        self.frames_since_op = 0;
    }

    fn complete(&mut self) {
        self.started = false;
        self.completed = true;
        tracing::info!(
            algorithm = self.machine.algorithm().key(),
            operations = self.machine.operations(),
            frames = self.frame_num,
            "sorting completed"
        );
    }
}
