//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::configuration::LOG_ENV_VAR;
use crate::io::error::{ArtGridError, Result};

/// How much diagnostic output to emit when no filter is set in the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Nothing at all
    Quiet,
    /// Warnings and errors
    #[default]
    Normal,
    /// Everything down to debug events
    Verbose,
}

impl Verbosity {
    /// Pick a level from the quiet and verbose flags, quiet wins
    pub const fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Filter directive used when the environment sets none
    pub const fn default_directive(self) -> &'static str {
        match self {
            Self::Quiet => "off",
            Self::Normal => "warn",
            Self::Verbose => "debug",
        }
    }
}

/// Build the event filter, preferring `ARTGRID_LOG` over the verbosity default
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_directive()))
}

/// Install the global subscriber writing to stderr
///
/// # Errors
///
/// Returns `LoggingSetup` if a global subscriber is already installed
pub fn init_logging(verbosity: Verbosity) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| ArtGridError::LoggingSetup {
            reason: e.to_string(),
        })
}
