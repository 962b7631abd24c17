//! Tcl backend built on the `molt` interpreter.

use molt::types::*;
use molt::Interp;

use super::{Engine, EvalError, Session};

/// Creates `molt` interpreters.
///
/// Keeps a private scratch interpreter for [`Engine::is_complete`]: the check
/// only parses, so it never sees or touches a session's variables.
pub struct TclEngine {
    scratch: Interp,
}

impl TclEngine {
    pub fn new() -> Self {
        Self {
            scratch: Interp::new(),
        }
    }
}

impl Default for TclEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for TclEngine {
    type Session = TclSession;

    fn name(&self) -> &'static str {
        "tcl"
    }

    fn create_session(&mut self) -> TclSession {
        TclSession {
            interp: Interp::new(),
        }
    }

    fn is_complete(&mut self, fragment: &str) -> bool {
        self.scratch.complete(fragment)
    }
}

/// One `molt` interpreter with the standard command set.
pub struct TclSession {
    interp: Interp,
}

impl Session for TclSession {
    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EvalError> {
        self.interp
            .set_scalar(name, Value::from(value))
            .map_err(|e| exception_to_error(&e))?;
        Ok(())
    }

    fn eval(&mut self, script: &str) -> Result<String, EvalError> {
        match self.interp.eval(script) {
            Ok(value) => Ok(value.as_str().to_owned()),
            Err(exception) => Err(exception_to_error(&exception)),
        }
    }
}

/// `errorInfo` starts with the message itself; keep only what follows it as
/// the trace.
fn exception_to_error(exception: &Exception) -> EvalError {
    let message = exception.value().as_str().to_owned();
    if !exception.is_error() {
        return EvalError::new(message);
    }
    let info = exception.error_info();
    let info = info.as_str();
    let trace = info
        .strip_prefix(message.as_str())
        .unwrap_or(info)
        .trim_start_matches('\n');
    EvalError::new(message.clone()).with_trace(trace)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
