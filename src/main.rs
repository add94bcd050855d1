mod api;
mod config;
mod loader;
mod logging;
mod models;
mod run;
mod series;
mod ui;

#[cfg(test)]
mod test_support;

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load(&args)?;
    let args = config::strip_global_flags(&args);

    match args.len() {
        1 => {
            let _logger = logging::init_file_logging()?;
            run::as_tui(&config)
        }
        2.. => {
            let _logger = logging::init_stderr_logging()?;
            run::as_cli(&args, &config).await
        }
        _ => {
            eprintln!("Usage: spendview [command]");
            Ok(())
        }
    }
}
