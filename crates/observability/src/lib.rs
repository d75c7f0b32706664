//! Tracing and logging (shared setup).

/// Environment-driven settings.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, ObservabilityError};

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), ObservabilityError> {
    let config = ObservabilityConfig::from_env()?;
    tracing::init(&config);
    Ok(())
}
