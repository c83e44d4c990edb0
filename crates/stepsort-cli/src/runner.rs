//! Command handlers.
//!
//! Each handler returns the text destined for stdout so it can be tested
//! without capturing the process output. Status lines go to the reporter.

use stepsort::report::drive;
use stepsort::{run_to_completion, with_shared_seed, Algorithm, Driver, RunReport};

use crate::commands::{CompareArgs, ListArgs, RunArgs};
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{
    render_algorithms, render_comparison, render_run, render_step, OutputFormat, ProgressReporter,
};

/// `stepsort list`
pub fn list(args: &ListArgs) -> CliResult<String> {
    render_algorithms(args.format.into())
}

/// `stepsort run`
pub fn run(config: &CliConfig, args: &RunArgs, reporter: &ProgressReporter) -> CliResult<String> {
    let format: OutputFormat = args.format.into();
    if args.steps && format == OutputFormat::Json {
        return Err(CliError::invalid_argument(
            "--steps cannot be combined with --format json",
        ));
    }

    let mut engine = config.engine_with(args.items, args.frames_per_op, args.seed);
    if let Some(algorithm) = args.algorithm {
        engine.algorithm = algorithm;
    }
    tracing::debug!(?engine, "resolved engine config");
    let mut driver = Driver::new(engine)?;
    reporter.info(&format!(
        "Sorting {} items with {}",
        driver.item_count(),
        driver.algorithm()
    ));

    let mut out = String::new();
    if args.steps {
        out.push_str(&render_step(
            0,
            driver.sequence().as_slice(),
            &driver.looking_at_indices(),
        ));
        out.push('\n');
        driver.start();
        while !driver.is_completed() {
            if driver.tick()? > 0 {
                out.push_str(&render_step(
                    driver.operation_count(),
                    driver.sequence().as_slice(),
                    &driver.looking_at_indices(),
                ));
                out.push('\n');
            }
        }
    }

    let report = drive(&mut driver)?;
    finish(&report, config, reporter);
    out.push_str(&render_run(&report, format, config.use_color())?);
    Ok(out)
}

/// `stepsort compare`
pub fn compare(
    config: &CliConfig,
    args: &CompareArgs,
    reporter: &mut ProgressReporter,
) -> CliResult<String> {
    // Cadence is irrelevant to operation counts; run every algorithm instantly
    let engine = with_shared_seed(&config.engine_with(args.items, Some(0), args.seed));
    tracing::debug!(?engine, "resolved engine config");

    reporter.start_progress(Algorithm::ALL.len() as u64, "comparing");
    let mut reports = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        reporter.set_message(algorithm.name());
        match run_to_completion(&engine, algorithm) {
            Ok(report) => reports.push(report),
            Err(e) => {
                reporter.finish();
                return Err(e.into());
            }
        }
        reporter.increment(1);
    }
    reporter.finish();

    for report in &reports {
        finish(report, config, reporter);
    }
    render_comparison(&reports, args.format.into(), config.use_color())
}

fn finish(report: &RunReport, config: &CliConfig, reporter: &ProgressReporter) {
    if report.sorted {
        reporter.success(&format!(
            "{} sorted {} items in {} operations",
            report.algorithm, report.item_count, report.operations
        ));
    } else {
        reporter.failure(&format!("{} finished unsorted", report.algorithm));
    }
    if config.verbosity.is_verbose() {
        reporter.info(&format!(
            "{}: {} mutations ({:.1}% of operations) over {} frames",
            report.algorithm.key(),
            report.mutations,
            report.mutation_ratio() * 100.0,
            report.frames
        ));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::commands::FormatArg;

    fn quiet() -> ProgressReporter {
        ProgressReporter::new(false, true)
    }

    fn plain_config() -> CliConfig {
        CliConfig::new().with_color(crate::config::ColorChoice::Never)
    }

    fn run_args(algorithm: Algorithm, items: usize) -> RunArgs {
        RunArgs {
            algorithm: Some(algorithm),
            items: Some(items),
            seed: Some(1),
            frames_per_op: Some(0),
            steps: false,
            format: FormatArg::Json,
        }
    }

    #[test]
    fn test_list() {
        let out = list(&ListArgs {
            format: FormatArg::Text,
        })
        .unwrap();
        assert!(out.contains("bubble"));
        assert!(out.contains("Radix Sort"));
    }

    #[test]
    fn test_run_json() {
        let out = run(&plain_config(), &run_args(Algorithm::Merge, 9), &quiet()).unwrap();
        let report: RunReport = serde_json::from_str(&out).unwrap();
        assert_eq!(report.algorithm, Algorithm::Merge);
        assert_eq!(report.item_count, 10);
        assert!(report.sorted);
    }

    #[test]
    fn test_run_clamps_items() {
        let out = run(&plain_config(), &run_args(Algorithm::Comb, 1), &quiet()).unwrap();
        let report: RunReport = serde_json::from_str(&out).unwrap();
        assert_eq!(report.item_count, 3);
    }

    #[test]
    fn test_run_steps() {
        let mut args = run_args(Algorithm::Bubble, 5);
        args.steps = true;
        args.format = FormatArg::Text;
        args.frames_per_op = Some(1);
        let out = run(&plain_config(), &args, &quiet()).unwrap();
        let step_lines = out.lines().filter(|line| line.contains(": ")).count();
        assert!(step_lines >= 2);
        assert!(out.contains("=== Bubble Sort ==="));
        assert!(out.contains("sorted      yes"));
    }

    #[test]
    fn test_run_steps_rejects_json() {
        let mut args = run_args(Algorithm::Bubble, 5);
        args.steps = true;
        let err = run(&plain_config(), &args, &quiet()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
    }

    #[test]
    fn test_compare() {
        let args = CompareArgs {
            items: Some(16),
            seed: Some(4),
            format: FormatArg::Json,
        };
        let out = compare(&plain_config(), &args, &mut quiet()).unwrap();
        let reports: Vec<RunReport> = serde_json::from_str(&out).unwrap();
        assert_eq!(reports.len(), 8);
        assert!(reports.iter().all(|report| report.sorted));
        assert!(reports.iter().all(|report| report.frames == 1));
    }

    #[test]
    fn test_compare_matches_single_runs() {
        let args = CompareArgs {
            items: Some(12),
            seed: Some(9),
            format: FormatArg::Json,
        };
        let out = compare(&plain_config(), &args, &mut quiet()).unwrap();
        let reports: Vec<RunReport> = serde_json::from_str(&out).unwrap();

        let engine = plain_config().engine_with(Some(12), Some(0), Some(9));
        for algorithm in Algorithm::ALL {
            let single = run_to_completion(&engine, algorithm).unwrap();
            let compared = reports.iter().find(|r| r.algorithm == algorithm).unwrap();
            assert_eq!(compared, &single, "{algorithm}");
        }
    }

    #[test]
    fn test_compare_verbose() {
        let config = plain_config().with_verbosity(crate::config::Verbosity::Verbose);
        let args = CompareArgs {
            items: Some(8),
            seed: Some(1),
            format: FormatArg::Text,
        };
        let out = compare(&config, &args, &mut quiet()).unwrap();
        assert!(out.contains("Merge Sort"));
    }
}
