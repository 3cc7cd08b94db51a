//! Diagnostic logging.
//!
//! `tracing` output goes to stderr so that stdout carries only the
//! conversion report (`Input file: ...`, `Successfully converted ...`).
//! Scripts that capture stdout therefore see the same lines at every `-v`
//! level.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much diagnostic output to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only (`-q`).
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Per-conversion debug output (`-v`).
    Verbose,
    /// Per-feature trace output (`-vv` and up).
    Trace,
}

impl Verbosity {
    /// Map the command-line flags to a level. `quiet` wins over any `-v`.
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, _) => Self::Trace,
        }
    }

    /// The most detailed level emitted at this verbosity.
    #[must_use]
    pub fn max_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// `EnvFilter` directive limiting output to this crate at [`Self::max_level`].
    #[must_use]
    pub fn directive(self) -> String {
        format!("geosplit={}", self.max_level())
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG`, when set, replaces the directive derived from `verbosity`.
/// Calling this more than once is harmless; later calls are ignored.
///
/// ```no_run
/// use geosplit::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::from_flags(false, 2));
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}

/// Quiet subscriber routed through the test harness.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("geosplit=warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(false, 9), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);
    }

    #[test]
    fn test_max_level() {
        assert_eq!(Verbosity::Quiet.max_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.max_level(), Level::INFO);
        assert_eq!(Verbosity::Verbose.max_level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.max_level(), Level::TRACE);
    }

    #[test]
    fn test_directive_targets_crate() {
        assert_eq!(Verbosity::Verbose.directive(), "geosplit=DEBUG");
        assert_eq!(Verbosity::default().directive(), "geosplit=INFO");
    }

    #[test]
    fn test_repeated_init_is_ignored() {
        init_logging(Verbosity::Quiet);
        init_logging(Verbosity::Trace);
        init_test_logging();
    }
}
