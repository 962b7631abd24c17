//! Errors that end a run.

use std::io;

use thiserror::Error;

use crate::engine::EvalError;

/// Why [`Processor::run`](crate::processor::Processor::run) stopped early.
///
/// Every variant maps to exit code 1.  By the time one is returned the
/// user-facing diagnostic has already been written through the reporter,
/// except for [`TolError::Io`].
#[derive(Debug, Error)]
pub enum TolError {
    /// `-s` without both a name and a value.
    #[error("option {option} at arg {arg} needs {needed} arguments")]
    InsufficientArguments {
        option: &'static str,
        arg: usize,
        needed: usize,
    },

    /// An evaluation (or `-s` assignment) failed without `-i`.
    #[error("arg {arg}: {source}")]
    Evaluation {
        arg: usize,
        #[source]
        source: EvalError,
    },

    /// Writing results or diagnostics failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),
}
