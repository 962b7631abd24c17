//! Optional Lua 5.4 backend via the `mlua` crate.
//!
//! Enabled with the `lua` Cargo feature and selected with `TOL_ENGINE=lua`:
//! ```text
//! cargo build --features lua
//! TOL_ENGINE=lua tol -s n 4 -p 'n * 2'
//! ```
//!
//! Lua differs from Tcl in two places the command line relies on, so every
//! session is adjusted:
//!
//! - Reading an undeclared global is an error instead of `nil`, so that `-r`
//!   makes earlier `-s` bindings fail loudly.
//! - A fragment is first compiled as an expression (`return <fragment>`) and
//!   only then as a block, so `-p '1 + 2'` prints `3`.

use mlua::prelude::*;

use super::{Engine, EvalError, Session};

/// Chunk name given to every fragment; error messages start with `tol:<line>:`.
const CHUNK_NAME: &str = "=tol";
const LOCATION_PREFIX: &str = "tol:";

const STRICT_GLOBALS: &str = r#"
setmetatable(_G, {
    __index = function(_, name)
        error("variable '" .. tostring(name) .. "' is not declared", 2)
    end,
})
"#;

// ── LuaEngine ─────────────────────────────────────────────────────────────────

/// Creates Lua states; keeps a scratch state for completeness checks.
pub struct LuaEngine {
    scratch: Lua,
}

impl LuaEngine {
    pub fn new() -> Self {
        Self { scratch: Lua::new() }
    }
}

impl Default for LuaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for LuaEngine {
    type Session = LuaSession;

    fn name(&self) -> &'static str {
        "lua"
    }

    fn create_session(&mut self) -> LuaSession {
        let lua = Lua::new();
        if let Err(e) = lua.load(STRICT_GLOBALS).set_name("=strict").exec() {
            tracing::warn!("lua: strict globals not installed: {e}");
        }
        LuaSession { lua }
    }

    /// Incomplete when either the expression or the block reading runs out
    /// of input.  Other syntax errors count as complete so that evaluation
    /// reports them.
    fn is_complete(&mut self, fragment: &str) -> bool {
        let expr = format!("return {fragment}");
        match self.scratch.load(expr.as_str()).into_function() {
            Ok(_) => true,
            Err(e) if is_incomplete(&e) => false,
            Err(_) => match self.scratch.load(fragment).into_function() {
                Ok(_) => true,
                Err(e) => !is_incomplete(&e),
            },
        }
    }
}

// ── LuaSession ────────────────────────────────────────────────────────────────

/// A Lua 5.4 state with the standard libraries and strict globals.
pub struct LuaSession {
    lua: Lua,
}

impl LuaSession {
    fn compile(&self, script: &str) -> LuaResult<LuaFunction> {
        let expr = format!("return {script}");
        match self.lua.load(expr.as_str()).set_name(CHUNK_NAME).into_function() {
            Ok(func) => Ok(func),
            Err(_) => self.lua.load(script).set_name(CHUNK_NAME).into_function(),
        }
    }
}

impl Session for LuaSession {
    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EvalError> {
        self.lua
            .globals()
            .raw_set(name, value)
            .map_err(|e| lua_to_error(&e))
    }

    fn eval(&mut self, script: &str) -> Result<String, EvalError> {
        let run = || -> LuaResult<String> {
            let values: LuaMultiValue = self.compile(script)?.call(())?;
            let tostring: LuaFunction = self.lua.globals().raw_get("tostring")?;
            let mut parts = Vec::new();
            for value in values {
                parts.push(tostring.call::<String>(value)?);
            }
            Ok(parts.join("\t"))
        };
        run().map_err(|e| lua_to_error(&e))
    }
}

// ── Error conversion ──────────────────────────────────────────────────────────

fn is_incomplete(err: &LuaError) -> bool {
    matches!(err, LuaError::SyntaxError { incomplete_input: true, .. })
}

fn lua_to_error(err: &LuaError) -> EvalError {
    let text = match err {
        LuaError::SyntaxError { message, .. } => message.clone(),
        LuaError::RuntimeError(message) => message.clone(),
        other => other.to_string(),
    };
    let (head, trace) = match text.split_once("\nstack traceback:") {
        Some((head, rest)) => (head, Some(format!("stack traceback:{rest}"))),
        None => (text.as_str(), None),
    };
    let mut out = match split_location(head) {
        Some((line, message)) => EvalError::new(message).with_line(line),
        None => EvalError::new(head),
    };
    if let Some(trace) = trace {
        out = out.with_trace(trace);
    }
    out
}

/// Split `tol:<line>: message` into its line number and message.
fn split_location(text: &str) -> Option<(usize, &str)> {
    let rest = text.strip_prefix(LOCATION_PREFIX)?;
    let (digits, message) = rest.split_once(':')?;
    let line = digits.parse().ok()?;
    Some((line, message.trim_start()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
