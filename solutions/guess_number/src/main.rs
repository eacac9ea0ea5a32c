use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use guess_number_solution::cli::Cli;
use guess_number_solution::{Game, Outcome, SecretNumber, TerminalReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logger();

    let secret = match cli.seed {
        Some(seed) => SecretNumber::random(&mut StdRng::seed_from_u64(seed)),
        None => SecretNumber::random(&mut rand::rng()),
    };
    log::trace!("secret number is {}", secret.value());

    let mut game = Game::new(secret);
    let mut reader = TerminalReader::stdio();
    let mut stdout = tokio::io::stdout();

    match game.play(&mut reader, &mut stdout).await? {
        Outcome::Won { attempts } => log::info!("finished in {attempts} attempts"),
        // Giving up is a normal way to leave; report it and exit cleanly
        Outcome::Interrupted(err) => eprintln!("{err}"),
    }

    Ok(())
}
