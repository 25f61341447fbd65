//! Line-oriented console I/O.
//!
//! [`Console`] pairs a buffered reader with a writer so the game loop runs
//! against the real terminal in production and against scripted buffers in
//! tests.

use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Buffered line I/O over an input/output pair
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// Attach to the process's stdin and stdout
    pub fn attach() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line to the player
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print a question, then block for the player's answer
    pub fn prompt(&mut self, text: impl Display) -> io::Result<String> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line, without the trailing newline
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Direct access to the output for multi-line rendering
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }
}
