mod config;
mod ledger;
mod logging;
mod models;
mod run;
mod seed;
mod snapshot;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (settings, command) = config::Settings::from_args(args.get(1..).unwrap_or_default())?;

    if command.is_empty() {
        // The TUI owns the terminal, so it can only log to a file.
        let notice = match config::log_file_path().and_then(|path| logging::init_file(&path)) {
            Ok(()) => None,
            Err(e) => {
                eprintln!("Warning: logging disabled: {e:#}");
                Some(format!("Logging disabled: {e:#}"))
            }
        };
        let mut ledger = settings.load_ledger()?;
        tracing::info!(
            transactions = ledger.transaction_count(),
            budgets = ledger.budgets().len(),
            "starting TUI"
        );
        run::as_tui(&mut ledger, settings, notice)
    } else {
        logging::init_stderr();
        let ledger = settings.load_ledger()?;
        run::as_cli(&command, &ledger, &settings)
    }
}
