//! Tether Services Layer
//!
//! Platform-facing services the runtime boots before the object registry:
//! currently settings loading.

pub mod settings;

use std::path::Path;

pub use settings::{RuntimeSettings, Settings, SettingsError};

/// Load service settings and report what the registry will be built with.
pub fn init_services(settings_path: &Path) -> Result<Settings, SettingsError> {
    let settings = Settings::load(settings_path)?;
    tracing::info!(
        initial_capacity = settings.registry.initial_capacity,
        verify_after_compaction = settings.registry.verify_after_compaction,
        "services initialized"
    );
    Ok(settings)
}
