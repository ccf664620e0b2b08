//! Batch sequencing: validate every requested name, then run them one by one.

use std::io::{self, Write};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::error::RunnerError;
use crate::printer::BannerPrinter;
use crate::process::{Launch, Outcome};
use crate::registry::Registry;

/// Token that selects every registered scraper when given first.
pub const ALL_TOKEN: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunRequest {
    All,
    Named(Vec<String>),
}

impl RunRequest {
    /// Only the first argument is checked for `all`; anything after it is ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = args.into_iter().map(Into::into).collect();
        if names.first().map(String::as_str) == Some(ALL_TOKEN) {
            RunRequest::All
        } else {
            RunRequest::Named(names)
        }
    }

    /// Names to run, in order, duplicates kept.
    pub fn effective_names(&self, registry: &Registry) -> Vec<String> {
        match self {
            RunRequest::All => registry.names().map(str::to_string).collect(),
            RunRequest::Named(names) => names.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperRun {
    pub name: String,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub runs: Vec<ScraperRun>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.runs.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.runs.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScraperRun> {
        self.runs.iter().filter(|r| !r.outcome.is_success())
    }

    pub fn names(&self) -> Vec<&str> {
        self.runs.iter().map(|r| r.name.as_str()).collect()
    }
}

pub struct Sequencer<'a, L> {
    registry: &'a Registry,
    launcher: L,
    printer: BannerPrinter,
    out: Mutex<Box<dyn Write + Send>>,
}

impl<'a, L: Launch> Sequencer<'a, L> {
    pub fn new(registry: &'a Registry, launcher: L, printer: BannerPrinter) -> Self {
        Self {
            registry,
            launcher,
            printer,
            out: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Sends progress banners somewhere other than stdout.
    pub fn with_output(mut self, out: Box<dyn Write + Send>) -> Self {
        self.out = Mutex::new(out);
        self
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Fails before launching anything if any name is unknown.
    pub fn validate(&self, names: &[String]) -> Result<(), RunnerError> {
        let unknown: Vec<String> = names
            .iter()
            .filter(|n| !self.registry.contains(n))
            .cloned()
            .collect();
        if unknown.is_empty() {
            return Ok(());
        }
        Err(RunnerError::UnknownScrapers {
            names: unknown,
            available: self.registry.names().map(str::to_string).collect(),
        })
    }

    fn write_progress<F>(&self, write: F) -> Result<(), RunnerError>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        write(&mut **out)?;
        Ok(())
    }

    /// Scraper failures are recorded in the report, never returned as errors.
    /// An error here means the runner itself could not report progress.
    pub async fn run(&self, request: &RunRequest) -> Result<BatchReport, RunnerError> {
        let names = request.effective_names(self.registry);
        self.validate(&names)?;

        self.write_progress(|out| self.printer.plan(out, &names))?;
        info!(count = names.len(), "starting batch");

        let mut report = BatchReport::default();
        for name in names {
            // validated above
            let Some(target) = self.registry.resolve(&name) else {
                continue;
            };

            self.write_progress(|out| self.printer.started(out, &name))?;
            let started = Instant::now();
            let outcome = self.launcher.launch(target).await;
            let elapsed = started.elapsed();
            self.write_progress(|out| self.printer.finished(out, &name, &outcome, elapsed))?;

            if !outcome.is_success() {
                warn!(scraper = %name, ?outcome, "scraper did not succeed, continuing");
            }
            report.runs.push(ScraperRun {
                name,
                outcome,
                elapsed,
            });
        }

        self.write_progress(|out| self.printer.summary(out, &report))?;
        Ok(report)
    }
}
