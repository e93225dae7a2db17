use serde::{Deserialize, Serialize};

/// Tunables for an [`ObjectRegistry`](crate::object::ObjectRegistry).
///
/// Embedded in the engine settings file, so every field has a default and
/// missing keys fall back to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Slots pre-allocated in the object array.
    pub initial_capacity: usize,

    /// Run `verify_integrity` after every compaction and log violations.
    pub verify_after_compaction: bool,
}

impl RegistryConfig {
    const DEFAULT_CAPACITY: usize = 1024;
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_CAPACITY,
            verify_after_compaction: cfg!(debug_assertions),
        }
    }
}
