//! Output side of the command line: results, diagnostics and help text.

use std::io::{self, Write};

use crate::engine::EvalError;
use crate::help;

/// Writes to a stdout-like and a stderr-like stream.
///
/// `main` uses the process streams; tests pass `Vec<u8>` and read the bytes
/// back with [`Reporter::into_inner`].
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl Reporter<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Print an evaluation result.  Empty results print nothing, not a blank
    /// line.
    pub fn result(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{text}")
    }

    /// Report a failed evaluation of the command that ended at argument
    /// `arg` (1-based).
    pub fn failure(&mut self, arg: usize, error: &EvalError) -> io::Result<()> {
        match error.line {
            Some(line) => writeln!(self.err, "arg {arg}, line {line}: {}", error.message)?,
            None => writeln!(self.err, "arg {arg}: {}", error.message)?,
        }
        if let Some(trace) = &error.trace {
            writeln!(self.err, "{}", trace.trim_end())?;
        }
        self.err.flush()
    }

    pub fn insufficient_arguments(&mut self) -> io::Result<()> {
        writeln!(self.err, "Not enough arguments given.")
    }

    pub fn usage(&mut self) -> io::Result<()> {
        write!(self.out, "{}", help::usage_text())
    }

    pub fn examples(&mut self) -> io::Result<()> {
        write!(self.out, "{}", help::EXAMPLES)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
