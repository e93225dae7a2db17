//! Tether Engine Core
//!
//! Contains the object layer every engine subsystem builds on:
//! - Runtime class descriptors and constructor registration
//! - The global object array with generation-tagged handles
//! - Two-phase object destruction and explicit slot compaction

pub mod object;

pub use object::{
    ClassDescriptor, Object, ObjectBase, ObjectClass, ObjectHandle, ObjectRegistry,
    RegistryConfig, RegistryError, OBJECT_CLASS,
};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
