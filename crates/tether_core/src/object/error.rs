use crate::object::ClassId;
use thiserror::Error;

/// Errors surfaced by the object registry.
///
/// Stale handles are not errors: deleting or validating an object that is
/// already gone is a quiet no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("class '{class}' has no registered constructor")]
    UnregisteredClass { class: &'static str },

    #[error("class id {id} is already registered as '{existing}', cannot register '{requested}'")]
    ClassIdConflict {
        id: ClassId,
        existing: &'static str,
        requested: &'static str,
    },

    #[error("object array slot {index} is inconsistent: {reason}")]
    IntegrityViolation { index: usize, reason: String },
}
