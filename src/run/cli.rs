use anyhow::{anyhow, bail, Context, Result};
use std::sync::Arc;

use crate::api::HttpSource;
use crate::config::{Config, API_URL_VAR, TIMEOUT_VAR};
use crate::loader::{spawn_load, ViewState};
use crate::series::MonthSeries;
use crate::ui::util::format_amount;

pub(crate) async fn as_cli(args: &[String], config: &Config) -> Result<()> {
    match args[1].as_str() {
        "series" | "s" => {
            let series = fetch_series(config).await?;
            print!("{}", format_series(&series));
            Ok(())
        }
        "json" | "j" => {
            let series = fetch_series(config).await?;
            let json =
                serde_json::to_string_pretty(&series).context("Failed to serialize series")?;
            println!("{json}");
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendview {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendView — monthly expenditures and forecast in the terminal");
    println!();
    println!("Usage: spendview [--api-url <url>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  series, s                     Print each month's categories and totals");
    println!("  json, j                       Print the month series as JSON");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  {API_URL_VAR:<29} Base URL of the expenditure API");
    println!("  {TIMEOUT_VAR:<29} Request timeout in seconds");
    println!("  {:<29} Log filter (default: warn)", "RUST_LOG");
}

/// One-shot load. Partial data is still printed; nothing at all is an error.
async fn fetch_series(config: &Config) -> Result<MonthSeries> {
    let source = Arc::new(HttpSource::new(config)?);
    let outcome = spawn_load(source)
        .wait()
        .await
        .ok_or_else(|| anyhow!("Load task ended without a result"))?;
    if outcome.failures() == 2 {
        bail!("Failed to load expenditures from {}", config.api_url);
    }

    let mut state = ViewState::default();
    state.apply(outcome);
    Ok(state.series().clone())
}

pub(super) fn format_series(series: &MonthSeries) -> String {
    if series.is_empty() {
        return "No expenditure data.\n".to_string();
    }

    let name_width = series
        .categories()
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut out = String::new();
    for (i, entry) in series.entries().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", entry.label()));
        for (category, amount) in entry.amounts() {
            out.push_str(&format!(
                "  {category:<name_width$}  {:>14}\n",
                format_amount(*amount)
            ));
        }
        out.push_str(&format!(
            "  {:<name_width$}  {:>14}\n",
            "Total",
            format_amount(entry.total())
        ));
    }
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
