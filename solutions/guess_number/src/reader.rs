//! Line reading for the guessing loop.
//!
//! A read either yields one submitted line or reports that the user walked
//! away (Ctrl+C or a closed stdin). Only one read can be pending at a time:
//! `read_line` borrows the source mutably until it resolves.

use std::future::Future;
use std::io::{self, BufRead, BufReader, Read};
use std::sync::Arc;
use std::thread;

use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::{Notify, mpsc};

use crate::error::{GameError, Result};

pub const PROMPT: &str = "> ";

/// Anything the game can pull guesses from.
pub trait LineSource {
    /// Wait for the next submitted line, or for the user to give up.
    fn read_line(&mut self) -> impl Future<Output = Result<String>>;
}

/// A signal that cancels the pending read when it fires.
pub trait Interrupt {
    fn wait(&mut self) -> impl Future<Output = io::Result<()>>;
}

/// Process-level Ctrl+C, listened for over the whole game.
pub struct CtrlC {
    received: Arc<Notify>,
}

impl CtrlC {
    // Must be called from inside the runtime
    pub fn listen() -> Self {
        let received = Arc::new(Notify::new());
        let notify = Arc::clone(&received);

        tokio::spawn(async move {
            loop {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log::warn!("failed to listen for Ctrl+C: {}", e);
                    break;
                }
                // Stores a permit when no read is pending, so nothing is lost between reads
                notify.notify_one();
            }
        });

        CtrlC { received }
    }
}

impl Interrupt for CtrlC {
    async fn wait(&mut self) -> io::Result<()> {
        self.received.notified().await;
        Ok(())
    }
}

/// Reads guesses from an input stream, echoing a prompt to an output stream.
pub struct TerminalReader<W, I = CtrlC> {
    lines: mpsc::Receiver<io::Result<String>>,
    output: W,
    interrupt: I,
}

impl TerminalReader<Stdout, CtrlC> {
    pub fn stdio() -> Self {
        TerminalReader::new(io::stdin(), tokio::io::stdout(), CtrlC::listen())
    }
}

impl<W, I> TerminalReader<W, I>
where
    W: AsyncWrite + Unpin,
    I: Interrupt,
{
    pub fn new<R>(input: R, output: W, interrupt: I) -> Self
    where
        R: Read + Send + 'static,
    {
        TerminalReader {
            lines: spawn_line_thread(input),
            output,
            interrupt,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

// Blocking reads can't be cancelled, so they run on their own thread. It is
// never joined: a read stuck waiting on the terminal must not keep the
// process alive once the game is over.
fn spawn_line_thread<R>(input: R) -> mpsc::Receiver<io::Result<String>>
where
    R: Read + Send + 'static,
{
    let (sender, receiver) = mpsc::channel(1);

    thread::spawn(move || {
        for line in BufReader::new(input).lines() {
            let failed = line.is_err();

            // The reader was dropped, nobody wants more lines
            if sender.blocking_send(line).is_err() || failed {
                break;
            }
        }
    });

    receiver
}

impl<W, I> LineSource for TerminalReader<W, I>
where
    W: AsyncWrite + Unpin,
    I: Interrupt,
{
    async fn read_line(&mut self) -> Result<String> {
        self.output.write_all(PROMPT.as_bytes()).await?;
        self.output.flush().await?;

        let line = tokio::select! {
            biased;

            signal = self.interrupt.wait() => {
                signal?;
                log::debug!("interrupt received while waiting for a guess");

                // Move off the prompt line before the error gets printed
                self.output.write_all(b"\n").await?;
                self.output.flush().await?;
                return Err(GameError::Interrupted);
            }
            line = self.lines.recv() => line,
        };

        match line {
            Some(line) => Ok(line?),
            None => {
                log::debug!("stdin closed while waiting for a guess");
                Err(GameError::EndOfInput)
            }
        }
    }
}
