use std::io::stdout;
use std::process::ExitCode;

use employee_tracker::cli::Cli;
use employee_tracker::{Session, SqliteStore, TerminalPrompter, TrackerError};

const BANNER: &str = r"
 _____                 _
| ____|_ __ ___  _ __ | | ___  _   _  ___  ___
|  _| | '_ ` _ \| '_ \| |/ _ \| | | |/ _ \/ _ \
| |___| | | | | | |_) | | (_) | |_| |  __/  __/
|_____|_| |_| |_| .__/|_|\___/ \__, |\___|\___|
 _____          |_|            |___/
|_   _| __ __ _  ___| | _____ _ __
  | || '__/ _` |/ __| |/ / _ \ '__|
  | || | | (_| | (__|   <  __/ |
  |_||_|  \__,_|\___|_|\_\___|_|
";

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let mut store = match SqliteStore::open(&cli.database) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Database connection failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Connected to the database at {}", cli.database.display());

    if cli.seed {
        match store.seed() {
            Ok(true) => log::info!("Seeded the database with sample records"),
            Ok(false) => log::info!("Database already has departments, skipping seed"),
            Err(e) => log::error!("Failed to seed the database: {}", e),
        }
    }

    if !cli.no_banner {
        println!("{}", BANNER);
    }

    let mut session = Session::new(store, TerminalPrompter::new(), stdout());
    let outcome = session.run();

    if let Err(e) = session.close() {
        log::error!("Failed to close the database connection: {}", e);
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(TrackerError::Interrupted) => {
            log::info!("Interrupted");
            ExitCode::from(130)
        }
        Err(e) => {
            log::error!("Session ended: {}", e);
            ExitCode::FAILURE
        }
    }
}
