use clap::{ArgAction, Parser};
use crossterm::tty::IsTty;
use itertools::Itertools;
use quizdrill::{
    bank::Bank,
    config::Config,
    loader::load_pool,
    pool::Pool,
    present::Presenter,
    session::Session,
    QuizError,
};
use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// multiple-choice quiz trainer for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Asks every question from the chosen banks once, in random order with shuffled answers, then prints your score. Answer with 'quit' or 'q' to stop early."
)]
pub struct Cli {
    /// question bank to include (repeat for several; default: all)
    #[clap(short = 'b', long = "bank", value_enum)]
    banks: Vec<Bank>,

    /// read <bank>.json files from this directory instead of the built-in banks
    #[clap(short = 'd', long)]
    data_dir: Option<PathBuf>,

    /// seed for question and answer order (default: current time)
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// JSON config file with banks, data_dir and seed; flags override it
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// more log output on stderr (-v info, -vv debug)
    #[clap(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Config file (if any) with command line flags applied on top
    fn to_config(&self) -> Result<Config, QuizError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if !self.banks.is_empty() {
            config.banks = self.banks.iter().copied().unique().collect();
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_tty())
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), QuizError> {
    let mut config = cli.to_config()?;
    let presenter = Presenter::for_stdout();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "Let's do the learning thing")?;
    writeln!(stdout)?;
    writeln!(stdout, "{}", presenter.heading("Loading question bank..."))?;
    writeln!(stdout, "Banks: {}", config.banks.iter().join(", "))?;

    let seed = config.seed_or_now();
    config.seed = Some(seed);
    debug!(seed, banks = %config.banks.iter().join(", "), "loading");
    let mut rng = config.rng();

    let questions = load_pool(&config.sources(), &mut rng)?;
    info!(total = questions.len(), "question pool ready");
    writeln!(stdout, "{}", presenter.loaded(questions.len()))?;

    writeln!(stdout)?;
    writeln!(
        stdout,
        "{}",
        presenter.heading("Starting the questions... (answer with 'quit' at any time to leave)")
    )?;

    let mut session = Session::new(Pool::new(questions), rng, presenter);
    let mut stdin = io::stdin().lock();
    session.run(&mut stdin, &mut stdout)?;

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["quizdrill"]);

        assert!(cli.banks.is_empty());
        assert!(cli.data_dir.is_none());
        assert!(cli.seed.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.to_config().unwrap(), Config::default());
    }

    #[test]
    fn test_cli_banks() {
        let cli = Cli::parse_from(["quizdrill", "-b", "ports", "--bank", "acronyms", "-b", "ports"]);

        assert_eq!(cli.banks, vec![Bank::Ports, Bank::Acronyms, Bank::Ports]);
        assert_eq!(cli.to_config().unwrap().banks, vec![Bank::Ports, Bank::Acronyms]);
    }

    #[test]
    fn test_cli_rejects_unknown_bank() {
        assert!(Cli::try_parse_from(["quizdrill", "--bank", "cooking"]).is_err());
    }

    #[test]
    fn test_cli_seed_and_data_dir() {
        let cli = Cli::parse_from(["quizdrill", "-s", "42", "-d", "/tmp/banks"]);
        let config = cli.to_config().unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/banks")));
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("quizdrill.json");
        fs::write(&path, r#"{ "banks": ["webservers"], "seed": 1 }"#).unwrap();
        let path_arg = path.to_str().unwrap();

        let from_file = Cli::parse_from(["quizdrill", "-c", path_arg]).to_config().unwrap();
        assert_eq!(from_file.banks, vec![Bank::Webservers]);
        assert_eq!(from_file.seed, Some(1));

        let overridden = Cli::parse_from(["quizdrill", "-c", path_arg, "-s", "7", "-b", "ports"])
            .to_config()
            .unwrap();
        assert_eq!(overridden.banks, vec![Bank::Ports]);
        assert_eq!(overridden.seed, Some(7));
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(Cli::parse_from(["quizdrill"]).log_level(), "warn");
        assert_eq!(Cli::parse_from(["quizdrill", "-v"]).log_level(), "info");
        assert_eq!(Cli::parse_from(["quizdrill", "-vvv"]).log_level(), "debug");
    }
}
