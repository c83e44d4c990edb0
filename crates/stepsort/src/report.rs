//! Headless runs.
//!
//! Drive a [`Driver`] to completion without a frame clock and summarize the
//! outcome. Used by the CLI and by benchmarks.

use crate::algorithms::Algorithm;
use crate::config::EngineConfig;
use crate::driver::Driver;
use crate::result::SortResult;
use serde::{Deserialize, Serialize};

/// Outcome of one completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Algorithm that ran
    pub algorithm: Algorithm,
    /// Length of the sorted sequence
    pub item_count: usize,
    /// Primitive operations performed
    pub operations: u64,
    /// Swaps and shifts among those operations
    pub mutations: u64,
    /// Frames ticked until completion
    pub frames: u64,
    /// Whether the final sequence is `1..=item_count`
    pub sorted: bool,
}

impl RunReport {
    /// Share of operations that moved data
    #[must_use]
    pub fn mutation_ratio(&self) -> f64 {
        if self.operations == 0 {
            0.0
        } else {
            self.mutations as f64 / self.operations as f64
        }
    }
}

/// Sort one shuffled sequence with `algorithm` using the configured cadence.
///
/// With a cadence of 0 this is a single tick. Otherwise the driver is ticked
/// frame by frame, so `frames` reflects what an animated run would take.
///
/// # Errors
/// Returns error if the configuration is invalid
pub fn run_to_completion(config: &EngineConfig, algorithm: Algorithm) -> SortResult<RunReport> {
    let mut driver = Driver::new(config.clone().with_algorithm(algorithm))?;
    drive(&mut driver)
}

/// Tick an idle driver until its current sequence is sorted
///
/// # Errors
/// Propagates machine precondition failures from [`Driver::tick`]
pub fn drive(driver: &mut Driver) -> SortResult<RunReport> {
    driver.start();
    while !driver.is_completed() {
        driver.tick()?;
    }

    let stats = driver.stats();
    let snapshot = driver.sequence_snapshot();
    let report = RunReport {
        algorithm: stats.algorithm,
        item_count: stats.item_count,
        operations: stats.operation_num,
        mutations: stats.mutations,
        frames: stats.frame_num,
        sorted: crate::oracle::is_identity(&snapshot, stats.item_count),
    };
    tracing::debug!(
        algorithm = report.algorithm.key(),
        operations = report.operations,
        "run finished"
    );
    Ok(report)
}

/// Pin the seed so repeated runs see the same shuffle.
///
/// Keeps a configured seed; otherwise draws one.
#[must_use]
pub fn with_shared_seed(config: &EngineConfig) -> EngineConfig {
    let seed = config.seed.unwrap_or_else(rand::random);
    config.clone().with_seed(seed)
}

/// Run every registered algorithm on the same seed.
///
/// Without a configured seed one is drawn so all algorithms still see the
/// same input. Merge sort may see one more item than the others when the
/// configured count is odd.
///
/// # Errors
/// Returns error if the configuration is invalid
pub fn compare_all(config: &EngineConfig) -> SortResult<Vec<RunReport>> {
    let config = with_shared_seed(config);
    Algorithm::ALL
        .iter()
        .map(|&algorithm| run_to_completion(&config, algorithm))
        .collect()
}
