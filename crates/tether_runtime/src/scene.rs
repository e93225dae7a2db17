//! Demo scene classes driven by the runtime loop.
//!
//! Actors own a handful of components. An actor releases its components
//! when it begins destruction, and again on final teardown for actors
//! destroyed one at a time (which skips the begin phase).

use tether_core::object::{register_static, RegistryError};
use tether_core::{
    define_object, ClassDescriptor, Object, ObjectBase, ObjectHandle, ObjectRegistry,
    OBJECT_CLASS,
};
use tracing::debug;

pub static ACTOR_CLASS: ClassDescriptor = ClassDescriptor::new(100, "Actor", Some(&OBJECT_CLASS));
pub static CAMERA_CLASS: ClassDescriptor = ClassDescriptor::new(101, "Camera", Some(&ACTOR_CLASS));
pub static COMPONENT_CLASS: ClassDescriptor =
    ClassDescriptor::new(200, "SceneComponent", Some(&OBJECT_CLASS));

#[derive(Default)]
pub struct Actor {
    base: ObjectBase,
    components: Vec<ObjectHandle>,
}
define_object!(Actor, ACTOR_CLASS, default);

impl Actor {
    fn release_components(&mut self, registry: &mut ObjectRegistry) {
        for component in self.components.drain(..) {
            registry.delete_object(component);
        }
    }
}

impl Object for Actor {
    fn begin_destroy(&mut self, registry: &mut ObjectRegistry) {
        self.release_components(registry);
    }

    fn finish_destroy(&mut self, registry: &mut ObjectRegistry) {
        self.release_components(registry);
    }
}

#[derive(Default)]
pub struct Camera {
    base: ObjectBase,
}
define_object!(Camera, CAMERA_CLASS, default);
impl Object for Camera {}

/// Built by its owner with the owner's handle, so it has no factory.
pub struct SceneComponent {
    base: ObjectBase,
    pub owner: ObjectHandle,
}
define_object!(SceneComponent, COMPONENT_CLASS);

impl Object for SceneComponent {
    fn finish_destroy(&mut self, registry: &mut ObjectRegistry) {
        if !registry.is_valid_object(self.owner) {
            debug!(component = self.base.name(), "owner already gone");
        }
    }
}

/// Register every factory-built scene class with the static catalog.
pub fn register_classes() -> Result<(), RegistryError> {
    register_static::<Actor>()?;
    register_static::<Camera>()?;
    Ok(())
}

/// Spawn an actor together with `component_count` owned components.
pub fn spawn_actor(
    registry: &mut ObjectRegistry,
    component_count: usize,
) -> Result<ObjectHandle, RegistryError> {
    let actor = registry.new_object(&ACTOR_CLASS)?;
    let components: Vec<_> = (0..component_count)
        .map(|_| {
            registry.add_to_registry(
                &COMPONENT_CLASS,
                Box::new(SceneComponent {
                    base: ObjectBase::new(),
                    owner: actor,
                }),
            )
        })
        .collect();

    if let Some(owner) = registry.cast_mut::<Actor>(actor) {
        owner.components = components;
    }
    Ok(actor)
}
