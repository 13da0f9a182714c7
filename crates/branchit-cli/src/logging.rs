//! Logging setup for the `branchit` binary.
//!
//! `RUST_LOG` wins when set and no verbosity flag is given; otherwise the
//! level follows `-v`/`-q` (default `warn`). Logs go to stderr so frame
//! output on stdout stays machine-readable.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps the `-v`/`-q` counts to a level.
pub fn level_from_flags(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(verbose: u8, quiet: bool) {
    let level = level_from_flags(verbose, quiet);
    let filter = if verbose == 0 && !quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| build_filter(level))
    } else {
        build_filter(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Our crates at `level`, everything else at warn.
fn build_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_lowercase();
    EnvFilter::new(format!(
        "warn,branchit={level},branchit_core={level},branchit_application={level}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level_from_flags(0, false), Level::WARN);
        assert_eq!(level_from_flags(1, false), Level::INFO);
        assert_eq!(level_from_flags(2, false), Level::DEBUG);
        assert_eq!(level_from_flags(5, false), Level::TRACE);
        assert_eq!(level_from_flags(3, true), Level::ERROR);
    }
}
