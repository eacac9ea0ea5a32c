//! The guessing game itself: the secret, the comparison, and the loop that
//! asks for guesses until the player wins or gives up.

use std::cmp::Ordering;
use std::fmt;

use rand::Rng;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{GameError, Result};
use crate::reader::LineSource;

pub const LOWEST: i32 = 1;
pub const HIGHEST: i32 = 100;

pub const WELCOME: &str = "Guess the number!";
pub const ASK: &str = "Please input your guess.";

/// The number the player has to find. Always within `LOWEST..=HIGHEST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretNumber(i32);

impl SecretNumber {
    pub fn new(value: i32) -> Result<Self> {
        if (LOWEST..=HIGHEST).contains(&value) {
            Ok(SecretNumber(value))
        } else {
            Err(GameError::SecretOutOfRange(value))
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        SecretNumber(rng.random_range(LOWEST..HIGHEST + 1))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Interrupted,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::AwaitingGuess)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    TooSmall,
    TooBig,
    Win,
    NotANumber,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Feedback::TooSmall => "Too small!",
            Feedback::TooBig => "Too big!",
            Feedback::Win => "You win!",
            Feedback::NotANumber => "Please type a number!",
        };
        f.write_str(text)
    }
}

#[derive(Debug)]
pub enum Outcome {
    Won { attempts: u32 },
    Interrupted(GameError),
}

pub fn parse_guess(line: &str) -> Option<i32> {
    line.trim().parse().ok()
}

/// One round of the game. Owns its secret.
#[derive(Debug)]
pub struct Game {
    secret: SecretNumber,
    state: GameState,
    attempts: u32,
}

impl Game {
    pub fn new(secret: SecretNumber) -> Self {
        Game {
            secret,
            state: GameState::AwaitingGuess,
            attempts: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn guess(&mut self, guess: i32) -> Result<Feedback> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }

        self.attempts += 1;

        let feedback = match guess.cmp(&self.secret.value()) {
            Ordering::Less => Feedback::TooSmall,
            Ordering::Greater => Feedback::TooBig,
            Ordering::Equal => {
                self.state = GameState::Won;
                Feedback::Win
            }
        };

        log::debug!("attempt {}: guessed {guess}, {feedback:?}", self.attempts);
        Ok(feedback)
    }

    /// Prompt, wait for one line, answer, repeat until the player wins or
    /// the source reports an interrupt.
    pub async fn play<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<Outcome>
    where
        S: LineSource,
        W: AsyncWrite + Unpin,
    {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }

        write_line(out, WELCOME).await?;

        loop {
            write_line(out, ASK).await?;

            let line = match source.read_line().await {
                Ok(line) => line,
                Err(err) if err.is_interrupt() => {
                    self.state = GameState::Interrupted;
                    log::info!("game interrupted after {} attempts", self.attempts);
                    return Ok(Outcome::Interrupted(err));
                }
                Err(err) => return Err(err),
            };

            let Some(guess) = parse_guess(&line) else {
                log::debug!("not a number: {line:?}");
                write_line(out, &Feedback::NotANumber.to_string()).await?;
                continue;
            };

            write_line(out, &format!("You guessed: {guess}")).await?;

            let feedback = self.guess(guess)?;
            write_line(out, &feedback.to_string()).await?;

            if feedback == Feedback::Win {
                log::info!("game won after {} attempts", self.attempts);
                return Ok(Outcome::Won {
                    attempts: self.attempts,
                });
            }
        }
    }
}

// Flushed per line so game output and the reader's prompt stay in order
async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, line: &str) -> Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}
