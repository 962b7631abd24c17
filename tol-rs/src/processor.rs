//! The argument-scanning state machine.
//!
//! Arguments are read left to right.  Options either act at once (`-e`, `-r`,
//! `-s`, `-v`) or set a flag for the next command (`-c`, `-i`, `-p`).  Text
//! arguments are appended to the [`CommandBuffer`], which is evaluated as soon
//! as it is ready:
//!
//! ```text
//!            text, no -c / complete            evaluate, reset flags
//!   Idle ─────────────────────────────────────────────────────────▶ Idle
//!     │
//!     │ text with -c, incomplete (flags reset)
//!     ▼
//!   Accumulating ── text with -c, still incomplete (flags reset) ──┐
//!     │       ▲                                                    │
//!     │       └────────────────────────────────────────────────────┘
//!     │ text without -c, or complete
//!     ▼
//!   evaluate, reset flags ─▶ Idle
//! ```
//!
//! A buffer still pending after the last argument is evaluated as-is.
//!
//! Every flag is dropped when an incomplete `-c` step ends, not just
//! `Continue`: in `-i -c 'set l [list' 'a]'` the `-i` never reaches the
//! evaluation.  Users put `-i`/`-p` in front of the last piece instead.

use std::io::Write;

use tracing::{debug, trace};

use crate::buffer::CommandBuffer;
use crate::cli::{self, Opt, Token};
use crate::engine::{Engine, Session};
use crate::error::TolError;
use crate::flags::{Flag, FlagSet};
use crate::report::Reporter;

/// Whether a command is being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Accumulating,
}

/// Owns the engine, the live session and the per-command working state.
pub struct Processor<E: Engine, O: Write, W: Write> {
    engine: E,
    session: E::Session,
    /// Number of sessions created so far; the first one is 1.
    generation: usize,
    flags: FlagSet,
    buffer: CommandBuffer,
    /// 1-based position of the last text argument appended to `buffer`.
    last_text: usize,
    reporter: Reporter<O, W>,
}

impl<E: Engine, O: Write, W: Write> Processor<E, O, W> {
    /// Start the first session.
    pub fn new(mut engine: E, reporter: Reporter<O, W>) -> Self {
        let session = engine.create_session();
        debug!(engine = engine.name(), "interpreter created");
        Self {
            engine,
            session,
            generation: 1,
            flags: FlagSet::default(),
            buffer: CommandBuffer::new(),
            last_text: 0,
            reporter,
        }
    }

    #[cfg(test)]
    fn state(&self) -> State {
        if self.buffer.is_empty() {
            State::Idle
        } else {
            State::Accumulating
        }
    }

    #[cfg(test)]
    fn flags(&self) -> FlagSet {
        self.flags
    }

    #[cfg(test)]
    fn pending(&self) -> &str {
        self.buffer.as_str()
    }

    #[cfg(test)]
    fn generation(&self) -> usize {
        self.generation
    }

    pub fn into_reporter(self) -> Reporter<O, W> {
        self.reporter
    }

    // ── Scanning ──────────────────────────────────────────────────────────────

    /// Process every argument, then evaluate whatever is left in the buffer.
    ///
    /// Stops at the first fatal error; its diagnostic has already been
    /// reported when this returns.
    pub fn run(&mut self, args: &[String]) -> Result<(), TolError> {
        let mut i = 0;
        while i < args.len() {
            let pos = i + 1;
            match cli::classify(&args[i]) {
                Token::Empty => trace!(arg = pos, "empty argument skipped"),
                Token::Option(opt) => {
                    trace!(arg = pos, option = opt.spelling());
                    self.option(opt, pos, &args[i + 1..])?;
                    i += opt.operands();
                }
                Token::Text(text) => self.text(text, pos)?,
            }
            i += 1;
        }
        self.finish()
    }

    /// Apply one option.  `rest` holds the arguments after it.
    fn option(&mut self, opt: Opt, pos: usize, rest: &[String]) -> Result<(), TolError> {
        match opt {
            Opt::Continue => self.flags.insert(Flag::Continue),
            Opt::IgnoreErrors => self.flags.insert(Flag::IgnoreErrors),
            Opt::PrintResult => self.flags.insert(Flag::PrintResult),
            Opt::Examples => self.reporter.examples()?,
            Opt::Usage => self.reporter.usage()?,
            Opt::Reset => self.reset_session(),
            Opt::Set => {
                let Some([name, value]) = rest.get(..2) else {
                    self.reporter.insufficient_arguments()?;
                    return Err(TolError::InsufficientArguments {
                        option: opt.spelling(),
                        arg: pos,
                        needed: opt.operands(),
                    });
                };
                debug!(arg = pos, name = %name, value = %value, "set variable");
                if let Err(source) = self.session.set_var(name, value) {
                    self.reporter.failure(pos, &source)?;
                    return Err(TolError::Evaluation { arg: pos, source });
                }
            }
        }
        Ok(())
    }

    /// Append a text argument and evaluate the buffer if it is ready.
    ///
    /// The flags are consumed here whether or not anything is evaluated.
    fn text(&mut self, text: &str, pos: usize) -> Result<(), TolError> {
        let flags = std::mem::take(&mut self.flags);
        self.buffer.push(text);
        self.last_text = pos;

        if flags.contains(Flag::Continue) && !self.engine.is_complete(self.buffer.as_str()) {
            trace!(arg = pos, pending = self.buffer.as_str(), ?flags, "incomplete, accumulating");
            return Ok(());
        }
        self.evaluate(flags)
    }

    fn finish(&mut self) -> Result<(), TolError> {
        if !self.buffer.is_empty() {
            debug!(pending = self.buffer.as_str(), "evaluating unfinished command");
            let flags = std::mem::take(&mut self.flags);
            self.evaluate(flags)?;
        }
        self.reporter.flush()?;
        Ok(())
    }

    // ── Evaluation ────────────────────────────────────────────────────────────

    fn evaluate(&mut self, flags: FlagSet) -> Result<(), TolError> {
        let command = self.buffer.take();
        let arg = self.last_text;
        debug!(arg, command = %command, ?flags, "evaluating");

        match self.session.eval(&command) {
            Ok(result) => {
                if flags.contains(Flag::PrintResult) {
                    self.reporter.result(&result)?;
                }
                Ok(())
            }
            Err(error) if flags.contains(Flag::IgnoreErrors) => {
                debug!(arg, %error, "error ignored");
                Ok(())
            }
            Err(source) => {
                self.reporter.failure(arg, &source)?;
                Err(TolError::Evaluation { arg, source })
            }
        }
    }

    /// Replace the session with a fresh one.  The old interpreter is dropped
    /// here; flags and the pending buffer are left alone.
    fn reset_session(&mut self) {
        let fresh = self.engine.create_session();
        drop(std::mem::replace(&mut self.session, fresh));
        self.generation += 1;
        debug!(engine = self.engine.name(), generation = self.generation, "interpreter reset");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
