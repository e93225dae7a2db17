// constructor.rs - Runtime class -> factory registration
//
// Every registry carries its own `ConstructorRegistry`. Classes registered
// during startup can also go into the process-wide static catalog, which
// `ObjectRegistry::with_static_classes` copies from.

use crate::object::{
    construct_boxed, ClassDescriptor, ClassId, Object, ObjectClass, RegistryError,
};
use once_cell::sync::Lazy;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Zero-argument constructor producing a not-yet-admitted object.
pub type ObjectFactory = fn() -> Box<dyn Object>;

#[derive(Debug, Clone, Copy)]
struct RegisteredClass {
    descriptor: &'static ClassDescriptor,
    factory: ObjectFactory,
}

/// Mapping from class descriptor to factory function.
#[derive(Debug, Clone, Default)]
pub struct ConstructorRegistry {
    classes: HashMap<ClassId, RegisteredClass>,
}

impl ConstructorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the factory for a class. Re-registering the same descriptor
    /// replaces its factory; last registration wins. Any other descriptor
    /// claiming a taken id is a conflict, even one with the same name.
    pub fn register_class_type(
        &mut self,
        descriptor: &'static ClassDescriptor,
        factory: ObjectFactory,
    ) -> Result<(), RegistryError> {
        match self.classes.entry(descriptor.id()) {
            Entry::Occupied(mut o) => {
                let existing = o.get().descriptor;
                if !std::ptr::eq(existing, descriptor) {
                    return Err(RegistryError::ClassIdConflict {
                        id: descriptor.id(),
                        existing: existing.name(),
                        requested: descriptor.name(),
                    });
                }
                debug!(class = descriptor.name(), "replacing class constructor");
                o.insert(RegisteredClass { descriptor, factory });
            }
            Entry::Vacant(v) => {
                v.insert(RegisteredClass { descriptor, factory });
            }
        }
        Ok(())
    }

    /// Register a zero-argument [`ObjectClass`] type.
    pub fn register<T: ObjectClass>(&mut self) -> Result<(), RegistryError> {
        self.register_class_type(T::class(), construct_boxed::<T>)
    }

    /// Build a fresh instance of `descriptor`. `None` if the class has no
    /// registered factory.
    pub fn construct_object(&self, descriptor: &ClassDescriptor) -> Option<Box<dyn Object>> {
        let class = self.classes.get(&descriptor.id())?;
        Some((class.factory)())
    }

    pub fn is_registered(&self, descriptor: &ClassDescriptor) -> bool {
        self.classes.contains_key(&descriptor.id())
    }

    /// Look up a registered class by its base name.
    pub fn class_by_name(&self, name: &str) -> Option<&'static ClassDescriptor> {
        self.classes
            .values()
            .map(|class| class.descriptor)
            .find(|descriptor| descriptor.name() == name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Process-wide catalog filled by startup registration.
static STATIC_CLASSES: Lazy<RwLock<ConstructorRegistry>> =
    Lazy::new(|| RwLock::new(ConstructorRegistry::new()));

/// Add a class to the static catalog.
pub fn register_static_class(
    descriptor: &'static ClassDescriptor,
    factory: ObjectFactory,
) -> Result<(), RegistryError> {
    STATIC_CLASSES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register_class_type(descriptor, factory)
}

/// Add a zero-argument [`ObjectClass`] type to the static catalog.
pub fn register_static<T: ObjectClass>() -> Result<(), RegistryError> {
    register_static_class(T::class(), construct_boxed::<T>)
}

/// Snapshot of the static catalog.
pub fn static_classes() -> ConstructorRegistry {
    STATIC_CLASSES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
