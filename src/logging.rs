//! Structured logging setup for the command-line front end.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "LINKNOTES_LOG";

/// Maps `-v` occurrences to a filter directive for this crate.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "linknotes=warn",
        1 => "linknotes=debug",
        _ => "linknotes=trace",
    }
}

/// Initializes logging to stderr.
///
/// `RUST_LOG` or `LINKNOTES_LOG` take precedence over the verbosity flag.
pub fn init_tracing(verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "linknotes=warn");
        assert_eq!(level_for_verbosity(1), "linknotes=debug");
        assert_eq!(level_for_verbosity(5), "linknotes=trace");
    }
}
