use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use scrapers::{
    cli::{self, Cli},
    config::Config,
    error::RunnerError,
    logging,
    printer::BannerPrinter,
    process::ProcessLauncher,
    registry::Registry,
    sequencer::{RunRequest, Sequencer},
};
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let args = match Cli::try_parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<ExitCode> {
    let cfg = Config::load();
    debug!(config = %cfg.config_path.display(), "configuration loaded");
    let scripts_dir = cfg.scripts_dir();
    let registry = Registry::builtin(&scripts_dir);

    if args.scrapers.is_empty() {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", cli::usage(&registry, &scripts_dir))
            .and_then(|_| stdout.flush())
            .context("printing usage")?;
        return Ok(ExitCode::SUCCESS);
    }

    let launcher = ProcessLauncher::new(cfg.interpreter());
    let sequencer = Sequencer::new(&registry, launcher, BannerPrinter::new(cfg.color()));
    let request = RunRequest::from_args(args.scrapers);

    match sequencer.run(&request).await {
        Ok(report) => {
            debug!(succeeded = report.succeeded(), failed = report.failed(), "batch finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(RunnerError::UnknownScrapers { names, available }) => {
            for name in &names {
                eprintln!("Unknown scraper: {}", name);
            }
            eprintln!("Available scrapers: {}", available.join(", "));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("running scraper batch"),
    }
}
