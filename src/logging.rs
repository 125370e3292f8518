//! Logging initialization.
//!
//! The library only emits `tracing` events; binaries call [`init`] once to
//! install a subscriber.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Installs a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` (e.g. `"debug"`) applies to
/// this crate only. Later calls are no-ops.
pub fn init(level: &str) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("audit_diff={}", level)));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init("warn");
        init("debug");
    }
}
