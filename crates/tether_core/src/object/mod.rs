//! Engine object registry.
//!
//! Every engine object (actors, components, resources) is created, cast and
//! destroyed through [`ObjectRegistry`]. The registry
//!
//! - builds objects from their runtime [`ClassDescriptor`],
//! - gives each one a slot in the object array and a unique display name,
//! - destroys them in two phases (`begin_destroy`, then `finish_destroy`),
//! - reclaims tombstoned slots only when explicitly asked to.
//!
//! Objects are addressed through generation-tagged [`ObjectHandle`]s, so a
//! validity check is O(1) and a handle to a destroyed object stays stale
//! forever.

mod base;
mod class;
mod config;
mod constructor;
mod error;
mod handle;
mod name_table;
mod object_array;
mod registry;

pub use base::{Object, ObjectBase, ObjectClass, ObjectCore};
pub(crate) use base::construct_boxed;
pub use class::{ClassDescriptor, ClassId, OBJECT_CLASS};
pub use config::RegistryConfig;
pub use constructor::{
    register_static, register_static_class, static_classes, ConstructorRegistry, ObjectFactory,
};
pub use error::RegistryError;
pub use handle::ObjectHandle;
pub(crate) use handle::HandleTable;
pub use name_table::NameCounterTable;
pub use object_array::ObjectArray;
pub use registry::ObjectRegistry;
