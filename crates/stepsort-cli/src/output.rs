//! Output formatting and progress reporting

use console::{style, Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use stepsort::{Algorithm, RunReport};

use crate::error::CliResult;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Progress reporter writing status lines to stderr
#[derive(Debug)]
pub struct ProgressReporter {
    term: Term,
    progress_bar: Option<ProgressBar>,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl ProgressReporter {
    /// Create a new progress reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            progress_bar: None,
            use_color,
            quiet,
        }
    }

    /// Start a progress bar over `total` runs
    pub fn start_progress(&mut self, total: u64, message: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message(message.to_string());
        self.progress_bar = Some(pb);
    }

    /// Increment progress
    pub fn increment(&self, delta: u64) {
        if let Some(ref pb) = self.progress_bar {
            pb.inc(delta);
        }
    }

    /// Update progress message
    pub fn set_message(&self, message: &str) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_message(message.to_string());
        }
    }

    /// Remove the progress bar
    pub fn finish(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // Always print failures, even in quiet mode
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "FAIL".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }
}

/// Render the algorithm registry
pub fn render_algorithms(format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = Algorithm::ALL
                .iter()
                .map(|algorithm| {
                    serde_json::json!({
                        "key": algorithm.key(),
                        "name": algorithm.name(),
                        "requires_even_count": algorithm.registration().requires_even_count,
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&entries)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for algorithm in Algorithm::ALL {
                let note = if algorithm.registration().requires_even_count {
                    "  (even item counts)"
                } else {
                    ""
                };
                let _ = writeln!(out, "{:<14}{}{note}", algorithm.key(), algorithm.name());
            }
            Ok(out)
        }
    }
}

/// Render a single run
pub fn render_run(report: &RunReport, format: OutputFormat, use_color: bool) -> CliResult<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let title = if use_color {
        style(report.algorithm.name()).bold().underlined().to_string()
    } else {
        format!("=== {} ===", report.algorithm.name())
    };
    let sorted = sorted_label(report.sorted, use_color);

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "items       {}", report.item_count);
    let _ = writeln!(out, "operations  {}", report.operations);
    let _ = writeln!(
        out,
        "mutations   {} ({:.1}%)",
        report.mutations,
        report.mutation_ratio() * 100.0
    );
    let _ = writeln!(out, "frames      {}", report.frames);
    let _ = writeln!(out, "sorted      {sorted}");
    Ok(out)
}

/// Render a comparison table, fewest operations first
pub fn render_comparison(
    reports: &[RunReport],
    format: OutputFormat,
    use_color: bool,
) -> CliResult<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(reports)?);
    }

    let mut ranked: Vec<&RunReport> = reports.iter().collect();
    ranked.sort_by_key(|report| report.operations);
    let best = ranked.first().map(|report| report.operations);

    let header = format!(
        "{:<22}{:>7}{:>12}{:>11}  {}",
        "Algorithm", "Items", "Operations", "Mutations", "Sorted"
    );
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        if use_color {
            Style::new().bold().apply_to(&header).to_string()
        } else {
            header
        }
    );
    for report in ranked {
        let operations = format!("{:>12}", report.operations);
        let operations = if use_color && Some(report.operations) == best {
            style(operations).green().to_string()
        } else {
            operations
        };
        let _ = writeln!(
            out,
            "{:<22}{:>7}{operations}{:>11}  {}",
            report.algorithm.name(),
            report.item_count,
            report.mutations,
            sorted_label(report.sorted, use_color)
        );
    }
    Ok(out)
}

/// One line of `--steps` output
#[must_use]
pub fn render_step(operation: u64, values: &[u32], looking_at: &[usize]) -> String {
    let cells: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if looking_at.contains(&index) {
                format!("[{value}]")
            } else {
                value.to_string()
            }
        })
        .collect();
    format!("{operation:>6}: {}", cells.join(" "))
}

fn sorted_label(sorted: bool, use_color: bool) -> String {
    match (sorted, use_color) {
        (true, true) => style("yes").green().to_string(),
        (false, true) => style("no").red().bold().to_string(),
        (true, false) => "yes".to_string(),
        (false, false) => "no".to_string(),
    }
}
