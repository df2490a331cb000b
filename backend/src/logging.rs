//! Logging bootstrap for the preview binary.
//!
//! Library code logs through the `log` facade; the fmt subscriber installed
//! here also picks those records up.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::{CalendarError, CalendarResult};

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Calling this more than once is harmless; later calls keep the first
/// subscriber.
pub fn init_logging(default_level: &str) -> CalendarResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| CalendarError::Config(format!("invalid log filter: {}", e)))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        assert!(init_logging("info").is_ok());
        assert!(init_logging("debug").is_ok());
    }
}
