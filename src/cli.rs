use std::path::Path;

use clap::Parser;

use crate::registry::Registry;
use crate::sequencer::ALL_TOKEN;

pub const BIN_NAME: &str = "run-scrapers";

/// Every token is a scraper name; there are no flags, so `--help` is just an unknown name.
#[derive(Parser, Debug, Clone)]
#[command(
    name = BIN_NAME,
    about = "Run scraper scripts one after another",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Scrapers to run, in order. Use `all` to run every registered scraper.
    #[arg(
        value_name = "SCRAPER",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub scrapers: Vec<String>,
}

pub fn usage(registry: &Registry, scripts_dir: &Path) -> String {
    let mut out = format!("Usage: {BIN_NAME} <scraper1> <scraper2> ...\n\nAvailable scrapers:\n");
    for name in registry.names() {
        out.push_str(&format!("  - {name}\n"));
    }
    out.push_str("\nExamples:\n");
    out.push_str(&format!("  {BIN_NAME} accessories bags women\n"));
    out.push_str(&format!("  {BIN_NAME} {ALL_TOKEN}  (runs all scrapers)\n"));
    out.push_str(&format!(
        "\nScripts are read from {} (set SCRAPERS_DIR to change).\n",
        scripts_dir.display()
    ));
    out
}
