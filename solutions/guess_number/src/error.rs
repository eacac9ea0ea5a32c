use std::io;

use thiserror::Error;

// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors that can end or reject a step of the game.
#[derive(Error, Debug)]
pub enum GameError {
    /// The user pressed Ctrl+C while a guess was pending
    #[error("Received SIGINT")]
    Interrupted,

    /// Standard input closed before a line was submitted
    #[error("Reached end of input")]
    EndOfInput,

    /// An explicit secret was outside the playable range
    #[error("secret number {0} is outside 1..=100")]
    SecretOutOfRange(i32),

    /// A guess was evaluated after the game had already finished
    #[error("the game is already over")]
    GameOver,

    /// Reading stdin or writing stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GameError {
    // Both ways the user can walk away from the prompt end the game the same way
    pub fn is_interrupt(&self) -> bool {
        matches!(self, GameError::Interrupted | GameError::EndOfInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupt_kinds() {
        assert!(GameError::Interrupted.is_interrupt());
        assert!(GameError::EndOfInput.is_interrupt());
        assert!(!GameError::GameOver.is_interrupt());
        assert!(!GameError::SecretOutOfRange(0).is_interrupt());

        let io_err = GameError::from(io::Error::other("broken pipe"));
        assert!(!io_err.is_interrupt());
    }

    #[test]
    fn messages() {
        assert_eq!(GameError::Interrupted.to_string(), "Received SIGINT");
        assert_eq!(
            GameError::SecretOutOfRange(101).to_string(),
            "secret number 101 is outside 1..=100"
        );
    }
}
