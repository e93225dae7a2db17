// base.rs - The common object trait and the bookkeeping every object embeds
//
// The registry owns objects as `Box<dyn Object>`. Each object carries an
// `ObjectBase` (slot index, display name, handle, class) that only the
// registry writes.

use super::{ClassDescriptor, ObjectHandle, ObjectRegistry, OBJECT_CLASS};
use std::any::Any;

/// Registry bookkeeping embedded in every managed object.
#[derive(Debug)]
pub struct ObjectBase {
    internal_index: usize,
    name: String,
    handle: ObjectHandle,
    class: &'static ClassDescriptor,
    pending_kill: bool,
}

impl ObjectBase {
    pub fn new() -> Self {
        Self {
            internal_index: usize::MAX,
            name: String::new(),
            handle: ObjectHandle::INVALID,
            class: &OBJECT_CLASS,
            pending_kill: false,
        }
    }

    /// Slot this object occupies in the object array.
    #[inline]
    pub fn internal_index(&self) -> usize {
        self.internal_index
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    /// Class the object was admitted under.
    #[inline]
    pub fn class(&self) -> &'static ClassDescriptor {
        self.class
    }

    /// Set once the object's `begin_destroy` hook has run.
    #[inline]
    pub fn is_pending_kill(&self) -> bool {
        self.pending_kill
    }

    pub fn is_admitted(&self) -> bool {
        self.handle != ObjectHandle::INVALID
    }

    pub(crate) fn admit(
        &mut self,
        index: usize,
        handle: ObjectHandle,
        class: &'static ClassDescriptor,
        name: String,
    ) {
        self.internal_index = index;
        self.handle = handle;
        self.class = class;
        self.name = name;
    }

    pub(crate) fn set_internal_index(&mut self, index: usize) {
        self.internal_index = index;
    }

    pub(crate) fn mark_pending_kill(&mut self) {
        self.pending_kill = true;
    }
}

impl Default for ObjectBase {
    fn default() -> Self {
        Self::new()
    }
}

/// Bookkeeping accessors, normally generated with [`define_object!`].
///
/// [`define_object!`]: crate::define_object
pub trait ObjectCore: Any {
    fn base(&self) -> &ObjectBase;
    fn base_mut(&mut self) -> &mut ObjectBase;

    /// Descriptor of the concrete Rust type.
    fn static_class(&self) -> &'static ClassDescriptor;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Trait for every registry-managed object.
///
/// Both hooks run while the registry is fully usable, so they may look up,
/// create or destroy other objects.
pub trait Object: ObjectCore {
    /// Composite teardown, phase one of `delete_all(true)`.
    ///
    /// Release references to other objects here (an actor destroying the
    /// components it owns, for example). The object itself stays alive until
    /// phase two. While the hook runs the object is checked out of its slot:
    /// it is still valid, but `registry.get(self_handle)` returns `None`.
    fn begin_destroy(&mut self, _registry: &mut ObjectRegistry) {}

    /// Final teardown. Runs after the object's slot has been vacated, right
    /// before the object is dropped.
    fn finish_destroy(&mut self, _registry: &mut ObjectRegistry) {}
}

impl dyn Object {
    #[inline]
    pub fn name(&self) -> &str {
        self.base().name()
    }

    #[inline]
    pub fn internal_index(&self) -> usize {
        self.base().internal_index()
    }

    #[inline]
    pub fn handle(&self) -> ObjectHandle {
        self.base().handle()
    }

    #[inline]
    pub fn class(&self) -> &'static ClassDescriptor {
        self.base().class()
    }

    /// True if the object's class is `class` or derives from it.
    pub fn is_a(&self, class: &ClassDescriptor) -> bool {
        self.class().is_child_of(class)
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Object>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Object types that can be built without arguments.
///
/// Implementing this lets `ObjectRegistry::register::<T>()` derive the
/// factory function for the type.
pub trait ObjectClass: Object + Sized {
    fn class() -> &'static ClassDescriptor;
    fn construct() -> Self;
}

pub(crate) fn construct_boxed<T: ObjectClass>() -> Box<dyn Object> {
    Box::new(T::construct())
}

/// Helper macro to implement [`ObjectCore`] for a struct with a
/// `base: ObjectBase` field.
///
/// The three-argument form also implements [`ObjectClass`] through
/// `Default`.
///
/// # Example
/// ```ignore
/// static FOO_CLASS: ClassDescriptor = ClassDescriptor::new(1, "Foo", Some(&OBJECT_CLASS));
///
/// #[derive(Default)]
/// struct Foo { base: ObjectBase, hp: i32 }
///
/// define_object!(Foo, FOO_CLASS, default);
/// impl Object for Foo {}
/// ```
#[macro_export]
macro_rules! define_object {
    ($ty:ty, $class:path) => {
        impl $crate::object::ObjectCore for $ty {
            fn base(&self) -> &$crate::object::ObjectBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::object::ObjectBase {
                &mut self.base
            }

            fn static_class(&self) -> &'static $crate::object::ClassDescriptor {
                &$class
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
    ($ty:ty, $class:path, default) => {
        $crate::define_object!($ty, $class);

        impl $crate::object::ObjectClass for $ty {
            fn class() -> &'static $crate::object::ClassDescriptor {
                &$class
            }

            fn construct() -> Self {
                <$ty as ::std::default::Default>::default()
            }
        }
    };
}
