//! Sample application - Entry Point
//!
//! Sets up logging, parses arguments, and runs the application.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Prints a startup banner and the result of adding 10 and 20.
#[derive(Parser, Debug)]
#[command(name = "sample-app")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!("invalid log level: {}", other),
        }
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    // RUST_LOG wins over --log-level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sample_app={level}")));

    // Logs go to stderr; stdout carries only the program output
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.parse_log_level()?;
    init_tracing(log_level)?;

    let stdout = std::io::stdout();
    sample_app::app::run(&mut stdout.lock()).context("failed to write program output")?;

    info!("application finished");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_log_level() {
        let args = Args {
            log_level: "DEBUG".to_string(),
        };
        assert_eq!(args.parse_log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_args_reject_unknown_log_level() {
        let args = Args {
            log_level: "verbose".to_string(),
        };
        let err = args.parse_log_level().unwrap_err();
        assert!(err.to_string().contains("invalid log level: verbose"));
    }

    #[test]
    fn test_args_default_log_level() {
        let args = Args::try_parse_from(["sample-app"]).unwrap();
        assert_eq!(args.parse_log_level().unwrap(), Level::WARN);
    }
}
