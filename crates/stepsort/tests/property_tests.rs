//! Property-based tests for stepsort.
//!
//! Uses proptest to verify the machine contract over arbitrary permutations.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use stepsort::prelude::*;

/// A permutation of `1..=n` where `n` suits `algorithm`
fn case(max_len: usize) -> impl Strategy<Value = (Algorithm, Vec<u32>)> {
    (prop::sample::select(Algorithm::ALL.to_vec()), 0..max_len).prop_flat_map(
        |(algorithm, n)| {
            let n = algorithm.validate_count(n) as u32;
            (Just(algorithm), Just((1..=n).collect::<Vec<u32>>()).prop_shuffle())
        },
    )
}

fn step_cap(len: usize) -> u64 {
    (4 * len * len + 64) as u64
}

// === Machine Property Tests ===

proptest! {
    /// Every machine terminates with `1..=n`.
    #[test]
    fn prop_terminates_sorted((algorithm, values) in case(48)) {
        let n = values.len();
        let mut seq = Sequence::from_values(values);
        let mut machine = SortMachine::for_sequence(algorithm, &seq);
        while !machine.advance(&mut seq).unwrap() {
            prop_assert!(machine.operations() < step_cap(n), "{} did not terminate", algorithm);
        }
        let expected: Vec<u32> = (1..=n as u32).collect();
        prop_assert_eq!(seq.snapshot(), expected);
    }

    /// One operation per advance, at most one mutation, values only permuted.
    #[test]
    fn prop_single_step_discipline((algorithm, values) in case(32)) {
        let mut sorted_input = values.clone();
        sorted_input.sort_unstable();
        let mut seq = Sequence::from_values(values);
        let mut machine = SortMachine::for_sequence(algorithm, &seq);
        loop {
            let ops = machine.operations();
            let mutations = seq.mutation_count();
            let done = machine.advance(&mut seq).unwrap();
            prop_assert_eq!(machine.operations(), ops + 1);
            prop_assert!(seq.mutation_count() - mutations <= 1);
            let mut current = seq.snapshot();
            current.sort_unstable();
            prop_assert_eq!(&current, &sorted_input);
            if done {
                break;
            }
        }
    }

    /// Completed indices always hold their final value; looking-at stays in range.
    #[test]
    fn prop_projections_consistent((algorithm, values) in case(32)) {
        let n = values.len();
        let mut seq = Sequence::from_values(values);
        let mut machine = SortMachine::for_sequence(algorithm, &seq);
        loop {
            for index in machine.completed_indices() {
                prop_assert_eq!(seq[index] as usize, index + 1);
            }
            let looking = machine.looking_at();
            prop_assert!(looking.len() <= 2);
            prop_assert!(looking.iter().all(|&i| i < n));
            if machine.advance(&mut seq).unwrap() {
                break;
            }
        }
        prop_assert!(machine.advance(&mut seq).is_err());
    }

    /// Bubble sort on reversed input takes exactly n(n-1)/2 operations.
    #[test]
    fn prop_bubble_reversed_closed_form(n in 2_u32..80) {
        let mut seq = Sequence::from_values((1..=n).rev().collect());
        let mut machine = SortMachine::for_sequence(Algorithm::Bubble, &seq);
        while !machine.advance(&mut seq).unwrap() {}
        let n = u64::from(n);
        prop_assert_eq!(machine.operations(), n * (n - 1) / 2);
    }
}

// === Driver Property Tests ===

proptest! {
    /// Ticks after stop() change nothing.
    #[test]
    fn prop_no_mutation_while_paused(
        seed in any::<u64>(),
        items in 3_usize..100,
        running in 0_u32..50,
        paused in 1_u32..50,
    ) {
        let config = EngineConfig::default().with_items(items).with_seed(seed);
        let mut driver = Driver::new(config).unwrap();
        driver.set_frames_per_op(1);
        driver.start();
        for _ in 0..running {
            driver.tick().unwrap();
        }
        driver.stop();
        let snapshot = driver.sequence_snapshot();
        let ops = driver.operation_count();
        for _ in 0..paused {
            prop_assert_eq!(driver.tick().unwrap(), 0);
        }
        prop_assert_eq!(driver.sequence_snapshot(), snapshot);
        prop_assert_eq!(driver.operation_count(), ops);
    }

    /// Item counts always land inside the configured bounds, even for merge.
    #[test]
    fn prop_item_count_within_bounds(
        algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
        requested in 0_usize..2_000,
    ) {
        let mut driver = Driver::new(EngineConfig::default().with_seed(5)).unwrap();
        driver.select_algorithm(algorithm);
        driver.set_item_count(requested);
        let count = driver.item_count();
        prop_assert!((3..=500).contains(&count));
        prop_assert_eq!(algorithm.validate_count(count), count);
    }

    /// Instant mode sorts in a single tick for any algorithm.
    #[test]
    fn prop_instant_mode_single_tick(
        algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
        seed in any::<u64>(),
        items in 3_usize..64,
    ) {
        let config = EngineConfig::default()
            .with_items(items)
            .with_seed(seed)
            .with_frames_per_op(0)
            .with_algorithm(algorithm);
        let mut driver = Driver::new(config).unwrap();
        driver.start();
        driver.tick().unwrap();
        prop_assert!(driver.is_completed());
        prop_assert_eq!(driver.frame_count(), 1);
    }
}
