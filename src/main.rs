mod categorize;
mod config;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

use crate::config::Settings;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (settings, command) = Settings::from_args(&args)?;

    if command.is_empty() {
        if let Some(path) = &settings.log_file {
            logging::init_file(path)?;
        }
        run::as_tui(&settings)
    } else {
        logging::init_stderr();
        run::as_cli(&command)
    }
}
