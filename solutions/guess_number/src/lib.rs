//! A number guessing game played on the terminal.
//!
//! The [`game`] module owns the secret and the guess loop; [`reader`]
//! supplies one line at a time from stdin, or an interrupt when the player
//! presses Ctrl+C or closes the input.

pub mod cli;
pub mod error;
pub mod game;
pub mod reader;

pub use error::{GameError, Result};
pub use game::{Feedback, Game, GameState, Outcome, SecretNumber};
pub use reader::{LineSource, TerminalReader};
