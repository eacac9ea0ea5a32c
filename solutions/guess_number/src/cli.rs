use clap::Parser;
use log::LevelFilter;

/// Command line arguments. None are required; a bare invocation just plays.
#[derive(Parser, Debug)]
#[command(name = "guess_number")]
#[command(about = "Guess a secret number between 1 and 100")]
#[command(version)]
pub struct Cli {
    /// Seed for the secret number, for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = clap::value_parser!(LevelFilter))]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level)
            .init();
    }
}
