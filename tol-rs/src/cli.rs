//! Command-line argument classification.
//!
//! Usage:
//!   tol ?arg ...?
//!
//! Options and script text are interleaved freely and processed strictly left
//! to right, so this module does not build a parsed-args struct: it only tells
//! the processor what a single argument is.  Only the exact spellings below
//! are options; anything else (including `-x` for an unknown `x`, or `-print`)
//! is script text.

use std::ffi::OsString;

use thiserror::Error;

// ── Public types ──────────────────────────────────────────────────────────────

/// A recognised option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opt {
    /// `-c`: the following text may be an incomplete command.
    Continue,
    /// `-e`: print usage examples.
    Examples,
    /// `-i`: ignore errors from the next command.
    IgnoreErrors,
    /// `-p`: print the result of the next command.
    PrintResult,
    /// `-r`: reset the interpreter.
    Reset,
    /// `-s var val`: assign a variable.  Consumes the next two arguments.
    Set,
    /// `-v` / `-h`: print version and usage.
    Usage,
}

impl Opt {
    /// Number of following arguments the option consumes.
    pub fn operands(self) -> usize {
        match self {
            Opt::Set => 2,
            _ => 0,
        }
    }

    pub fn spelling(self) -> &'static str {
        match self {
            Opt::Continue => "-c",
            Opt::Examples => "-e",
            Opt::IgnoreErrors => "-i",
            Opt::PrintResult => "-p",
            Opt::Reset => "-r",
            Opt::Set => "-s",
            Opt::Usage => "-v",
        }
    }
}

/// What a single argument means to the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Empty string; skipped.
    Empty,
    Option(Opt),
    /// Script text to append to the command buffer.
    Text(&'a str),
}

// ── Classification ────────────────────────────────────────────────────────────

/// Classify one argument.
pub fn classify(arg: &str) -> Token<'_> {
    let opt = match arg {
        "" => return Token::Empty,
        "-c" => Opt::Continue,
        "-e" => Opt::Examples,
        "-i" => Opt::IgnoreErrors,
        "-p" => Opt::PrintResult,
        "-r" => Opt::Reset,
        "-s" => Opt::Set,
        "-v" | "-h" => Opt::Usage,
        text => return Token::Text(text),
    };
    Token::Option(opt)
}

/// An argument that is not valid UTF-8.  Arguments are never converted
/// lossily.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("arg {position} is not valid UTF-8")]
pub struct ArgError {
    /// 1-based position, program name excluded.
    pub position: usize,
}

/// Collect the process arguments, without the program name.
pub fn process_args() -> Result<Vec<String>, ArgError> {
    collect_args(std::env::args_os().skip(1))
}

/// Convert raw arguments to strings, failing on the first non-UTF-8 one
/// (exposed for testing).
pub fn collect_args(raw: impl IntoIterator<Item = OsString>) -> Result<Vec<String>, ArgError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, arg)| arg.into_string().map_err(|_| ArgError { position: i + 1 }))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
