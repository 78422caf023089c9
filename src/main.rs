use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tally_cli::config::{Settings, TallyPaths};
use tally_cli::input::Prompter;
use tally_cli::storage::{InitOutcome, LedgerStore};
use tally_cli::{app, TallyError};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "tally is a terminal-based personal finance ledger. It records \
                  dated income and expense transactions into a CSV file, and \
                  answers date-range queries with summaries, category breakdowns, \
                  and a daily chart."
)]
struct Cli {
    /// Ledger file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let ledger_path = cli.file.unwrap_or_else(|| paths.ledger_file());
    let store = LedgerStore::new(ledger_path);

    match store.initialize() {
        Ok(InitOutcome::Created) => {
            println!("Created new ledger at {}", store.path().display());
        }
        Ok(InitOutcome::Resorted) => {}
        // A corrupt row blocks the startup resort but not the session;
        // the operator is told and can fix the file externally.
        Err(err @ TallyError::CorruptRow { .. }) => {
            eprintln!("{}", err);
            eprintln!("The ledger file was left unchanged. Fix it to restore sorting.");
        }
        Err(err) => return Err(err.into()),
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    app::run(&store, &settings, &mut prompter)?;

    Ok(())
}
