//! Process configuration read from the environment.
//!
//! | Variable     | Meaning                                   | Default |
//! |--------------|-------------------------------------------|---------|
//! | `TOL_ENGINE` | interpreter to embed: `tcl` or `lua`      | `tcl`   |
//! | `TOL_LOG`    | `tracing` filter for diagnostics (stderr) | `warn`  |
//!
//! Nothing here is read from the command line: every argument belongs to the
//! script stream.

use thiserror::Error;

pub const ENGINE_VAR: &str = "TOL_ENGINE";
pub const LOG_VAR: &str = "TOL_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Which interpreter backend to embed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngineKind {
    #[default]
    Tcl,
    Lua,
}

impl EngineKind {
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "tcl" => Ok(EngineKind::Tcl),
            "lua" if cfg!(feature = "lua") => Ok(EngineKind::Lua),
            "lua" => Err(ConfigError::EngineNotBuilt("lua")),
            _ => Err(ConfigError::UnknownEngine(name.to_owned())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown engine '{0}' in TOL_ENGINE (expected tcl or lua)")]
    UnknownEngine(String),

    #[error("engine '{0}' is not built in; rebuild with --features {0}")]
    EngineNotBuilt(&'static str),
}

/// Settings that shape a run but are not part of the argument stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub engine: EngineKind,
    /// Filter directive handed to `tracing_subscriber::EnvFilter`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (exposed for testing).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        if let Some(name) = lookup(ENGINE_VAR) {
            config.engine = EngineKind::parse(&name)?;
        }
        if let Some(filter) = lookup(LOG_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
