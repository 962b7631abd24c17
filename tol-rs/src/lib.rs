//! Tcl one-liner: evaluate scripts given as command-line arguments.
//!
//! ```text
//! tol 'set a 2' -p 'expr {$a * 21}'
//! 42
//! ```
//!
//! Each argument is either an option or a piece of script.  The
//! [`processor::Processor`] walks them left to right against one embedded
//! interpreter session (see [`engine`]), printing results and diagnostics
//! through a [`report::Reporter`].
//!
//! # Quick start
//!
//! ```rust
//! use tol::engine::TclEngine;
//! use tol::processor::Processor;
//! use tol::report::Reporter;
//!
//! let args: Vec<String> = ["-s", "x", "20", "-p", "expr {$x + 1}"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut p = Processor::new(TclEngine::new(), Reporter::new(Vec::new(), Vec::new()));
//! p.run(&args).unwrap();
//! let (out, _) = p.into_reporter().into_inner();
//! assert_eq!(out, b"21\n");
//! ```

pub mod buffer;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod flags;
pub mod help;
pub mod processor;
pub mod report;
