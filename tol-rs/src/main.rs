use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tol::cli;
use tol::config::{Config, EngineKind, DEFAULT_LOG_FILTER};
use tol::engine::{Engine, TclEngine};
use tol::error::TolError;
use tol::processor::Processor;
use tol::report::Reporter;

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tol: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);

    // No arguments: nothing to do, not even an interpreter to start.
    let args = match cli::process_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("tol: {e}");
            return ExitCode::FAILURE;
        }
    };
    if args.is_empty() {
        return ExitCode::SUCCESS;
    }

    let result = match config.engine {
        EngineKind::Tcl => run(TclEngine::new(), &args),
        #[cfg(feature = "lua")]
        EngineKind::Lua => run(tol::engine::LuaEngine::new(), &args),
        #[cfg(not(feature = "lua"))]
        EngineKind::Lua => {
            eprintln!("tol: {}", tol::config::ConfigError::EngineNotBuilt("lua"));
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(TolError::Io(e)) => {
            eprintln!("tol: {e}");
            ExitCode::FAILURE
        }
        // Already reported on stderr by the processor.
        Err(e) => {
            tracing::debug!("run stopped: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run<E: Engine>(engine: E, args: &[String]) -> Result<(), TolError> {
    let mut processor = Processor::new(engine, Reporter::stdio());
    processor.run(args)
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .init();
}
