//! Operator-facing banners and summaries (owo-colors).

use std::io::{self, Write};
use std::time::Duration;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::process::Outcome;
use crate::sequencer::BatchReport;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy)]
pub struct BannerPrinter {
    pub color: bool,
}

impl BannerPrinter {
    /// `forced` overrides terminal detection on stdout.
    pub fn new(forced: Option<bool>) -> Self {
        Self {
            color: forced.unwrap_or_else(|| std::io::stdout().is_terminal()),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn plan(&self, out: &mut dyn Write, names: &[String]) -> io::Result<()> {
        writeln!(out, "{}", self.plan_line(names))
    }

    pub fn plan_line(&self, names: &[String]) -> String {
        format!(
            "\nWill run {} scraper(s): {}\n",
            names.len(),
            names.join(", ")
        )
    }

    /// Flushed so the banner lands before the child's own output.
    pub fn started(&self, out: &mut dyn Write, name: &str) -> io::Result<()> {
        let rule = rule();
        let title = format!("Starting {name} scraper...");
        if self.color {
            writeln!(out, "\n{rule}\n{}\n{rule}\n", title.cyan())?;
        } else {
            writeln!(out, "\n{rule}\n{title}\n{rule}\n")?;
        }
        out.flush()
    }

    /// Launch errors go to stderr, exit statuses to `out`.
    pub fn finished(
        &self,
        out: &mut dyn Write,
        name: &str,
        outcome: &Outcome,
        elapsed: Duration,
    ) -> io::Result<()> {
        let line = self.outcome_line(name, outcome, elapsed);
        match outcome {
            Outcome::LaunchError(_) => writeln!(io::stderr().lock(), "\n{line}\n"),
            _ => writeln!(out, "\n{line}\n"),
        }
    }

    pub fn outcome_line(&self, name: &str, outcome: &Outcome, elapsed: Duration) -> String {
        let secs = elapsed.as_secs_f64();
        let text = match outcome {
            Outcome::Success => {
                format!("{name} scraper completed successfully ({secs:.1}s)")
            }
            Outcome::Failed(code) => {
                format!("{name} scraper failed with code {code} ({secs:.1}s)")
            }
            Outcome::LaunchError(cause) => {
                format!("Failed to start {name} scraper: {cause}")
            }
        };
        match (self.color, outcome.is_success()) {
            (false, _) => text,
            (true, true) => format!("{}", text.green()),
            (true, false) => format!("{}", text.red()),
        }
    }

    pub fn summary(&self, out: &mut dyn Write, report: &BatchReport) -> io::Result<()> {
        let rule = rule();
        writeln!(out, "\n{rule}")?;
        writeln!(out, "{}", self.summary_line(report))?;
        for run in report.failures() {
            writeln!(out, "  - {}", self.outcome_line(&run.name, &run.outcome, run.elapsed))?;
        }
        writeln!(out, "{rule}\n")?;
        out.flush()
    }

    pub fn summary_line(&self, report: &BatchReport) -> String {
        let text = format!(
            "All scrapers completed! {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        if !self.color {
            return text;
        }
        if report.failed() == 0 {
            format!("{}", text.green())
        } else {
            format!("{}", text.yellow())
        }
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
