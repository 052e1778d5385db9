use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "employee-tracker")]
#[command(author, version, about = "Interactive menu for managing departments, roles and employees")]
pub struct Cli {
    /// Path to the SQLite database file (":memory:" for a throwaway session)
    #[arg(short, long, default_value = "employee_tracker.db")]
    pub database: PathBuf,

    /// Fill an empty database with sample departments, roles and employees
    #[arg(long)]
    pub seed: bool,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG refines it
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["employee-tracker"]);
        assert_eq!(cli.database, PathBuf::from("employee_tracker.db"));
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert!(!cli.seed);
        assert!(!cli.no_banner);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "employee-tracker",
            "-d",
            "hr.db",
            "--seed",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.database, PathBuf::from("hr.db"));
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert!(cli.seed);
    }
}
