//! Stepsort: Incremental Sorting Engine
//!
//! Classical sorting algorithms encoded as resumable state machines that
//! advance by exactly one primitive operation per call, so an external clock
//! can animate them frame by frame.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   STEPSORT Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Frame      │    │ Driver     │    │ SortMachine│            │
//! │   │ clock      │───►│ (cadence,  │───►│ (state +   │            │
//! │   │ (tick)     │    │ lifecycle) │    │  oracle)   │            │
//! │   └────────────┘    └─────┬──────┘    └─────┬──────┘            │
//! │                           │   owns          │ swap / shift      │
//! │                           ▼                 ▼                   │
//! │                     ┌──────────────────────────┐                │
//! │                     │ Sequence (1..=n)         │──► on_touch    │
//! │                     └──────────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use stepsort::prelude::*;
//!
//! let mut driver = Driver::new(EngineConfig::default().with_items(8).with_seed(3)).unwrap();
//! driver.select_algorithm(Algorithm::Cocktail);
//! driver.set_frames_per_op(1);
//! driver.start();
//! while !driver.is_completed() {
//!     driver.tick().unwrap();
//! }
//! assert_eq!(driver.sequence_snapshot(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Resumable sorting state machines and the algorithm registry
pub mod algorithms;

/// Engine configuration
pub mod config;

/// Frame-clocked driver
pub mod driver;

/// Completion oracle
pub mod oracle;

/// Headless runs and reports
pub mod report;

mod result;

/// Value sequence and touch notifications
pub mod sequence;

pub use algorithms::{Algorithm, SortMachine, SortState, Stepper, REGISTRY};
pub use config::EngineConfig;
pub use driver::{Driver, DriverStats};
pub use report::{compare_all, run_to_completion, with_shared_seed, RunReport};
pub use result::{SortError, SortResult};
pub use sequence::{Sequence, TouchObserver};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::algorithms::{Algorithm, SortMachine, Stepper};
    pub use super::config::EngineConfig;
    pub use super::driver::{Driver, DriverStats};
    pub use super::report::{compare_all, run_to_completion, RunReport};
    pub use super::result::{SortError, SortResult};
    pub use super::sequence::Sequence;
}
