//! Embedded interpreter seam.
//!
//! The processor never talks to an interpreter crate directly.  It holds an
//! [`Engine`], which creates [`Session`]s and answers completeness questions,
//! and exactly one live session at a time.  Dropping a session destroys the
//! interpreter state behind it.
//!
//! | Backend | Crate  | Feature |
//! |---------|--------|---------|
//! | [`TclEngine`] | `molt` | always |
//! | `LuaEngine`   | `mlua` | `lua`  |

use thiserror::Error;

mod tcl;
pub use tcl::{TclEngine, TclSession};

#[cfg(feature = "lua")]
mod lua;
#[cfg(feature = "lua")]
pub use lua::{LuaEngine, LuaSession};

/// Failure reported by an interpreter while evaluating or assigning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    /// The interpreter's error text.
    pub message: String,
    /// Line within the script where the error was raised, if the backend
    /// tracks it.
    pub line: Option<usize>,
    /// Stack trace lines following the message, if any.
    pub trace: Option<String>,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            trace: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a trace; blank traces are dropped.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        let trace = trace.into();
        self.trace = (!trace.trim().is_empty()).then_some(trace);
        self
    }
}

/// One interpreter instance and its variables/commands.
pub trait Session {
    /// Bind a global variable.
    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EvalError>;

    /// Evaluate `script`, returning its result as a string.
    fn eval(&mut self, script: &str) -> Result<String, EvalError>;
}

/// Factory for sessions of one scripting language.
pub trait Engine {
    type Session: Session;

    /// Short name for logs and configuration (`"tcl"`, `"lua"`).
    fn name(&self) -> &'static str;

    /// Create a fresh interpreter with no user state.
    fn create_session(&mut self) -> Self::Session;

    /// Whether `fragment` is a syntactically complete command on its own.
    ///
    /// Purely syntactic: must not depend on or change any session's state.
    fn is_complete(&mut self, fragment: &str) -> bool;
}

// ── Tests ─────────────────────────────────────────────────────────────────────
