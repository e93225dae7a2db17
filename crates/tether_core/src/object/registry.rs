// registry.rs - Construct, admit, destroy, compact and validate objects
//
// The registry is a single owned value driven from the main update loop.
// Teardown hooks receive `&mut ObjectRegistry` and may re-enter any
// operation here; destructive sweeps therefore re-read the array bounds and
// slot contents on every step instead of iterating a snapshot.

use crate::object::{
    construct_boxed, static_classes, ClassDescriptor, ConstructorRegistry, NameCounterTable,
    Object, ObjectArray, ObjectClass, ObjectFactory, ObjectHandle, RegistryConfig, RegistryError,
};
use tether_metrics::Counter;
use tracing::{debug, error, info, warn};

/// Owner of every engine object.
pub struct ObjectRegistry {
    constructors: ConstructorRegistry,
    names: NameCounterTable,
    objects: ObjectArray,
    config: RegistryConfig,
    counters: Counter,
    in_delete_all: bool,
}

impl ObjectRegistry {
    /// Reverse sweeps `delete_all` runs with hooks before dropping whatever
    /// hooks keep admitting.
    pub const HOOK_SWEEP_PASSES: usize = 4;

    /// Create an empty registry with default settings.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            constructors: ConstructorRegistry::new(),
            names: NameCounterTable::new(),
            objects: ObjectArray::with_capacity(config.initial_capacity),
            config,
            counters: Counter::new(),
            in_delete_all: false,
        }
    }

    /// Create a registry whose constructors start as a copy of the static
    /// class catalog.
    pub fn with_static_classes(config: RegistryConfig) -> Self {
        let mut registry = Self::with_config(config);
        registry.constructors = static_classes();
        debug!(
            classes = registry.constructors.len(),
            "registry seeded from static class catalog"
        );
        registry
    }

    /// Lifecycle counters (all zero when built without the `metrics` feature).
    pub fn counters(&self) -> &Counter {
        &self.counters
    }

    // ------------------------------------------------------------------
    // Class registration
    // ------------------------------------------------------------------

    pub fn register_class_type(
        &mut self,
        descriptor: &'static ClassDescriptor,
        factory: ObjectFactory,
    ) -> Result<(), RegistryError> {
        self.constructors.register_class_type(descriptor, factory)
    }

    pub fn register<T: ObjectClass>(&mut self) -> Result<(), RegistryError> {
        self.register_class_type(T::class(), construct_boxed::<T>)
    }

    // ------------------------------------------------------------------
    // Admission
    // ------------------------------------------------------------------

    /// Construct an object of `descriptor` and take ownership of it.
    pub fn new_object(
        &mut self,
        descriptor: &'static ClassDescriptor,
    ) -> Result<ObjectHandle, RegistryError> {
        let object = self
            .constructors
            .construct_object(descriptor)
            .ok_or(RegistryError::UnregisteredClass {
                class: descriptor.name(),
            })?;
        Ok(self.admit(descriptor, object))
    }

    /// Typed [`new_object`](Self::new_object) for a registered [`ObjectClass`].
    pub fn new_object_of<T: ObjectClass>(&mut self) -> Result<ObjectHandle, RegistryError> {
        self.new_object(T::class())
    }

    /// Admit an object built outside the constructor registry, e.g. one that
    /// needs constructor arguments.
    pub fn add_to_registry(
        &mut self,
        descriptor: &'static ClassDescriptor,
        object: Box<dyn Object>,
    ) -> ObjectHandle {
        self.admit(descriptor, object)
    }

    /// Typed [`add_to_registry`](Self::add_to_registry).
    pub fn add<T: ObjectClass>(&mut self, object: T) -> ObjectHandle {
        self.admit(T::class(), Box::new(object))
    }

    fn admit(
        &mut self,
        descriptor: &'static ClassDescriptor,
        object: Box<dyn Object>,
    ) -> ObjectHandle {
        if !object.static_class().is_child_of(descriptor) {
            warn!(
                class = descriptor.name(),
                actual = object.static_class().name(),
                "admitting object under a class it does not derive from"
            );
        }
        debug_assert!(
            !object.base().is_admitted(),
            "object '{}' already carries registry state",
            object.name()
        );

        let name = self.names.mint(descriptor);
        let handle = self.objects.push(descriptor, object, name);
        self.counters.increment("objects.admitted", 1);
        debug!(%handle, index = self.objects.len() - 1, class = descriptor.name(), "object admitted");
        handle
    }

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------

    /// True iff `handle` names an object the registry still owns.
    pub fn is_valid_object(&self, handle: ObjectHandle) -> bool {
        self.objects.find(handle).is_some()
    }

    /// Borrow an object. `None` if the handle is stale, or while the object
    /// is checked out to one of its own hooks.
    pub fn get(&self, handle: ObjectHandle) -> Option<&dyn Object> {
        let index = self.objects.find(handle)?;
        self.objects.get_at(index)
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut dyn Object> {
        let index = self.objects.slot_of(handle)?;
        self.objects.get_at_mut(index)
    }

    /// Checked downcast: the object's class must derive from `T`'s class.
    pub fn cast<T: ObjectClass>(&self, handle: ObjectHandle) -> Option<&T> {
        let object = self.get(handle)?;
        if !object.is_a(T::class()) {
            return None;
        }
        object.downcast_ref::<T>()
    }

    pub fn cast_mut<T: ObjectClass>(&mut self, handle: ObjectHandle) -> Option<&mut T> {
        let object = self.get_mut(handle)?;
        if !object.is_a(T::class()) {
            return None;
        }
        object.downcast_mut::<T>()
    }

    /// True if the live object's class is `class` or derives from it.
    pub fn is_a(&self, handle: ObjectHandle, class: &ClassDescriptor) -> bool {
        self.get(handle).is_some_and(|object| object.is_a(class))
    }

    pub fn find_object_by_name(&self, name: &str) -> Option<ObjectHandle> {
        self.objects
            .iter()
            .find(|object| object.name() == name)
            .map(|object| object.handle())
    }

    /// Handles of live objects whose class derives from `class`, in slot
    /// order. A snapshot, so the caller may destroy objects while walking it.
    pub fn handles_of_class(&self, class: &ClassDescriptor) -> Vec<ObjectHandle> {
        self.objects
            .iter()
            .filter(|object| object.is_a(class))
            .map(|object| object.handle())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Object> + '_ {
        self.objects.iter()
    }

    /// Slot count, tombstones included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.objects.live_count()
    }

    pub fn tombstone_count(&self) -> usize {
        self.objects.tombstone_count()
    }

    /// Objects of `class` named so far in this registry's lifetime.
    pub fn instance_count(&self, class: &ClassDescriptor) -> u64 {
        self.names.count(class)
    }

    // ------------------------------------------------------------------
    // Destruction
    // ------------------------------------------------------------------

    /// Destroy one object.
    ///
    /// The slot is vacated before the object's `finish_destroy` hook runs,
    /// so re-entrant code never observes a half-destroyed object. Returns
    /// false (and does nothing) for stale handles.
    pub fn delete_object(&mut self, handle: ObjectHandle) -> bool {
        let Some(index) = self.objects.slot_of(handle) else {
            return false;
        };
        self.destroy_slot(index);
        true
    }

    /// Run the composite teardown hook of one object, if it has not run yet.
    ///
    /// Returns false for stale handles and objects already pending kill.
    pub fn begin_destroy_object(&mut self, handle: ObjectHandle) -> bool {
        match self.objects.slot_of(handle) {
            Some(index) => self.begin_destroy_slot(index),
            None => false,
        }
    }

    /// Destroy everything, newest slot first.
    ///
    /// With `run_begin_destroy`, every object first gets its `begin_destroy`
    /// hook so references between objects are released before anything is
    /// freed. Objects admitted by hooks during the sweep are destroyed too.
    pub fn delete_all(&mut self, run_begin_destroy: bool) {
        if self.in_delete_all {
            warn!("delete_all called from inside a teardown hook, ignoring");
            return;
        }
        self.in_delete_all = true;

        let live = self.objects.live_count();
        info!(live, slots = self.objects.len(), run_begin_destroy, "destroying all objects");

        if run_begin_destroy {
            let mut index = self.objects.len();
            while index > 0 {
                index -= 1;
                if index < self.objects.len() {
                    self.begin_destroy_slot(index);
                }
            }
        }

        // Hooks may admit new objects, so sweep again for those, up to a limit.
        let mut passes = 0;
        while self.objects.live_count() > 0 && passes < Self::HOOK_SWEEP_PASSES {
            passes += 1;
            let mut index = self.objects.len();
            while index > 0 {
                index -= 1;
                if self.objects.is_occupied(index) {
                    self.destroy_slot(index);
                }
            }
        }

        let leftover = self.objects.live_count();
        if leftover > 0 {
            warn!(
                leftover,
                passes, "teardown hooks kept admitting objects, dropping the rest without hooks"
            );
            self.drop_remaining();
        }

        self.objects.release_storage();
        self.counters.increment("sweeps.delete_all", 1);
        self.in_delete_all = false;
        info!(passes, "object array torn down");
    }

    /// Vacate every live slot and drop its object without running hooks.
    fn drop_remaining(&mut self) {
        for index in 0..self.objects.len() {
            if self.objects.vacate(index).is_some() {
                self.counters.increment("objects.destroyed", 1);
            }
        }
    }

    fn begin_destroy_slot(&mut self, index: usize) -> bool {
        match self.objects.get_at(index) {
            Some(object) if !object.base().is_pending_kill() => {}
            _ => return false,
        }
        let Some((handle, mut object)) = self.objects.check_out(index) else {
            return false;
        };

        debug!(%handle, name = object.name(), "begin destroy");
        object.base_mut().mark_pending_kill();
        object.begin_destroy(self);
        self.return_checked_out(handle, object);
        true
    }

    /// Put a hooked object back, or finish it off if the hook destroyed it.
    fn return_checked_out(&mut self, handle: ObjectHandle, object: Box<dyn Object>) {
        if let Err(object) = self.objects.check_in(handle, object) {
            debug!(%handle, "object destroyed during its own hook");
            self.teardown(object);
        }
    }

    fn destroy_slot(&mut self, index: usize) {
        let Some(slot) = self.objects.vacate(index) else {
            return;
        };
        match slot.object {
            Some(object) => self.teardown(object),
            // Checked out: whoever holds it finishes it on check-in.
            None => debug!(handle = %slot.handle, "destroy deferred until hook returns"),
        }
    }

    fn teardown(&mut self, mut object: Box<dyn Object>) {
        debug!(handle = %object.handle(), name = object.name(), "finish destroy");
        object.finish_destroy(self);
        self.counters.increment("objects.destroyed", 1);
    }

    // ------------------------------------------------------------------
    // Maintenance
    // ------------------------------------------------------------------

    /// Reclaim tombstoned slots, moving live objects down and updating their
    /// cached indices. Never called implicitly: run it between frames, not
    /// while anything iterates the array by index.
    ///
    /// Returns the number of slots reclaimed.
    pub fn compact_null_slots(&mut self) -> usize {
        if self.in_delete_all {
            warn!("compaction requested during delete_all, skipping");
            return 0;
        }

        let reclaimed = self.objects.compact();
        self.counters.increment("slots.reclaimed", reclaimed);
        if reclaimed > 0 {
            info!(reclaimed, slots = self.objects.len(), "compacted object array");
        }

        if self.config.verify_after_compaction {
            if let Err(err) = self.verify_integrity() {
                error!(%err, "object array inconsistent after compaction");
            }
        }
        reclaimed
    }

    /// Check that every live slot agrees with its object's cached index and
    /// handle.
    pub fn verify_integrity(&self) -> Result<(), RegistryError> {
        self.objects.verify()
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ObjectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectRegistry")
            .field("classes", &self.constructors.len())
            .field("objects", &self.objects)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_object;
    use crate::object::{HandleTable, ObjectBase, ObjectCore, OBJECT_CLASS};
    use std::cell::RefCell;
    use std::rc::Rc;

    static ACTOR_CLASS: ClassDescriptor = ClassDescriptor::new(950, "Actor", Some(&OBJECT_CLASS));
    static CAMERA_CLASS: ClassDescriptor = ClassDescriptor::new(951, "Camera", Some(&ACTOR_CLASS));
    static PROBE_CLASS: ClassDescriptor = ClassDescriptor::new(952, "Probe", Some(&OBJECT_CLASS));
    static MISSING_CLASS: ClassDescriptor = ClassDescriptor::new(953, "Missing", Some(&OBJECT_CLASS));
    static RESPAWNER_CLASS: ClassDescriptor = ClassDescriptor::new(954, "Respawner", Some(&OBJECT_CLASS));

    #[derive(Default)]
    struct Actor {
        base: ObjectBase,
        health: i32,
    }
    define_object!(Actor, ACTOR_CLASS, default);
    impl Object for Actor {}

    #[derive(Default)]
    struct Camera {
        base: ObjectBase,
        fov: f32,
    }
    define_object!(Camera, CAMERA_CLASS, default);
    impl Object for Camera {}

    /// Puts a fresh copy of itself back into the registry whenever it dies.
    #[derive(Default)]
    struct Respawner {
        base: ObjectBase,
    }
    define_object!(Respawner, RESPAWNER_CLASS, default);

    impl Object for Respawner {
        fn finish_destroy(&mut self, registry: &mut ObjectRegistry) {
            registry.add(Respawner::default());
        }
    }

    type Log = Rc<RefCell<Vec<String>>>;

    /// Test object whose hooks are scripted per instance.
    #[derive(Default)]
    struct Probe {
        base: ObjectBase,
        log: Log,
        on_begin: Vec<Action>,
        on_finish: Vec<Action>,
    }
    define_object!(Probe, PROBE_CLASS);

    #[derive(Clone, Copy)]
    enum Action {
        Delete(ObjectHandle),
        DeleteSelf,
        SpawnProbe,
        Compact,
        DeleteAll,
    }

    impl Probe {
        fn new(log: &Log) -> Self {
            Self {
                log: log.clone(),
                ..Default::default()
            }
        }

        fn run(&self, actions: &[Action], registry: &mut ObjectRegistry) {
            for action in actions {
                match *action {
                    Action::Delete(handle) => {
                        registry.delete_object(handle);
                    }
                    Action::DeleteSelf => {
                        registry.delete_object(self.base.handle());
                    }
                    Action::SpawnProbe => {
                        registry.add_to_registry(&PROBE_CLASS, Box::new(Probe::new(&self.log)));
                    }
                    Action::Compact => {
                        registry.compact_null_slots();
                    }
                    Action::DeleteAll => registry.delete_all(true),
                }
            }
        }
    }

    impl Object for Probe {
        fn begin_destroy(&mut self, registry: &mut ObjectRegistry) {
            self.log.borrow_mut().push(format!("begin {}", self.base.name()));
            let actions = std::mem::take(&mut self.on_begin);
            self.run(&actions, registry);
        }

        fn finish_destroy(&mut self, registry: &mut ObjectRegistry) {
            self.log.borrow_mut().push(format!("finish {}", self.base.name()));
            let actions = std::mem::take(&mut self.on_finish);
            self.run(&actions, registry);
        }
    }

    fn probe(registry: &mut ObjectRegistry, log: &Log) -> ObjectHandle {
        registry.add_to_registry(&PROBE_CLASS, Box::new(Probe::new(log)))
    }

    fn set_begin(registry: &mut ObjectRegistry, handle: ObjectHandle, actions: Vec<Action>) {
        registry
            .get_mut(handle)
            .and_then(|o| o.downcast_mut::<Probe>())
            .unwrap()
            .on_begin = actions;
    }

    fn set_finish(registry: &mut ObjectRegistry, handle: ObjectHandle, actions: Vec<Action>) {
        registry
            .get_mut(handle)
            .and_then(|o| o.downcast_mut::<Probe>())
            .unwrap()
            .on_finish = actions;
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn test_new_object_unregistered_class() {
        let mut registry = ObjectRegistry::new();
        assert_eq!(
            registry.new_object(&MISSING_CLASS),
            Err(RegistryError::UnregisteredClass { class: "Missing" })
        );
        assert!(registry.is_empty());
        assert_eq!(registry.instance_count(&MISSING_CLASS), 0);
    }

    #[test]
    fn test_new_object_admits_and_names() {
        let mut registry = ObjectRegistry::new();
        registry.register::<Actor>().unwrap();

        let a = registry.new_object(&ACTOR_CLASS).unwrap();
        let b = registry.new_object_of::<Actor>().unwrap();

        let first = registry.get(a).unwrap();
        assert_eq!(first.name(), "Actor_1");
        assert_eq!(first.internal_index(), 0);
        assert_eq!(first.handle(), a);
        assert_eq!(first.class(), &ACTOR_CLASS);
        assert_eq!(registry.get(b).unwrap().name(), "Actor_2");
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn test_cast_respects_class_chain() {
        let mut registry = ObjectRegistry::new();
        let actor = registry.add(Actor { health: 10, ..Default::default() });
        let camera = registry.add(Camera { fov: 90.0, ..Default::default() });

        assert_eq!(registry.cast::<Actor>(actor).map(|a| a.health), Some(10));
        assert!(registry.cast::<Camera>(actor).is_none());
        assert_eq!(registry.cast::<Camera>(camera).map(|c| c.fov), Some(90.0));

        assert!(registry.is_a(camera, &ACTOR_CLASS));
        assert!(registry.is_a(camera, &OBJECT_CLASS));
        assert!(!registry.is_a(actor, &CAMERA_CLASS));

        if let Some(a) = registry.cast_mut::<Actor>(actor) {
            a.health -= 3;
        }
        assert_eq!(registry.cast::<Actor>(actor).map(|a| a.health), Some(7));
    }

    #[test]
    fn test_handles_of_class_and_lookup_by_name() {
        let mut registry = ObjectRegistry::new();
        let actor = registry.add(Actor::default());
        let camera = registry.add(Camera::default());
        let log = Log::default();
        probe(&mut registry, &log);

        assert_eq!(registry.handles_of_class(&ACTOR_CLASS), vec![actor, camera]);
        assert_eq!(registry.handles_of_class(&CAMERA_CLASS), vec![camera]);
        assert_eq!(registry.handles_of_class(&OBJECT_CLASS).len(), 3);
        assert_eq!(registry.find_object_by_name("Camera_1"), Some(camera));
        assert_eq!(registry.find_object_by_name("Camera_2"), None);
    }

    #[test]
    fn test_delete_runs_finish_hook_once() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let handle = probe(&mut registry, &log);

        assert!(registry.delete_object(handle));
        assert!(!registry.delete_object(handle));
        assert_eq!(entries(&log), vec!["finish Probe_1"]);
        assert!(registry.get(handle).is_none());
    }

    #[test]
    fn test_finish_hook_sees_own_slot_vacated() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let a = probe(&mut registry, &log);
        // Deleting itself again from its own teardown must be a no-op.
        set_finish(&mut registry, a, vec![Action::DeleteSelf]);

        assert!(registry.delete_object(a));
        assert_eq!(entries(&log), vec!["finish Probe_1"]);
        assert_eq!(registry.tombstone_count(), 1);
    }

    #[test]
    fn test_begin_destroy_object_runs_once() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let handle = probe(&mut registry, &log);

        assert!(registry.begin_destroy_object(handle));
        assert!(!registry.begin_destroy_object(handle));
        assert!(registry.get(handle).unwrap().base().is_pending_kill());
        assert!(registry.is_valid_object(handle));
        assert_eq!(entries(&log), vec!["begin Probe_1"]);
    }

    #[test]
    fn test_hook_deleting_its_own_object() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let handle = probe(&mut registry, &log);
        set_begin(&mut registry, handle, vec![Action::DeleteSelf]);

        assert!(registry.begin_destroy_object(handle));
        assert!(!registry.is_valid_object(handle));
        assert_eq!(entries(&log), vec!["begin Probe_1", "finish Probe_1"]);
        assert!(registry.verify_integrity().is_ok());
    }

    #[test]
    fn test_compaction_inside_hook_keeps_checked_out_index() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let victim = probe(&mut registry, &log);
        let hooked = probe(&mut registry, &log);
        set_begin(&mut registry, hooked, vec![Action::Delete(victim), Action::Compact]);

        registry.begin_destroy_object(hooked);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(hooked).unwrap().internal_index(), 0);
        assert!(registry.verify_integrity().is_ok());
    }

    #[test]
    fn test_nested_delete_all_is_ignored() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let a = probe(&mut registry, &log);
        let b = probe(&mut registry, &log);
        set_begin(&mut registry, b, vec![Action::DeleteAll]);

        registry.delete_all(true);

        assert!(!registry.is_valid_object(a));
        assert!(!registry.is_valid_object(b));
        assert_eq!(
            entries(&log),
            vec!["begin Probe_2", "begin Probe_1", "finish Probe_2", "finish Probe_1"]
        );
    }

    #[test]
    fn test_delete_all_sweeps_objects_spawned_by_hooks() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let spawner = probe(&mut registry, &log);
        set_finish(&mut registry, spawner, vec![Action::SpawnProbe]);

        registry.delete_all(false);

        assert!(registry.is_empty());
        assert_eq!(registry.live_count(), 0);
        assert_eq!(entries(&log), vec!["finish Probe_1", "finish Probe_2"]);
    }

    #[test]
    fn test_compaction_skipped_during_delete_all() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let a = probe(&mut registry, &log);
        probe(&mut registry, &log);
        set_finish(&mut registry, a, vec![Action::Compact]);

        registry.delete_all(false);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_stale_handle_stays_stale_after_slot_reuse() {
        let mut registry = ObjectRegistry::new();
        let old = registry.add(Actor::default());
        registry.delete_all(true);

        let fresh = registry.add(Actor::default());
        assert_eq!(fresh.index(), old.index());
        assert!(!registry.is_valid_object(old));
        assert!(registry.is_valid_object(fresh));
        assert_eq!(registry.get(fresh).unwrap().name(), "Actor_2");
    }

    #[test]
    fn test_begin_destroy_object_then_delete_all_runs_each_hook_once() {
        let mut registry = ObjectRegistry::new();
        let log = Log::default();
        let h = probe(&mut registry, &log);

        assert!(registry.begin_destroy_object(h));
        registry.delete_all(true);

        assert_eq!(entries(&log), ["begin Probe_1", "finish Probe_1"]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_delete_all_stops_sweeping_respawning_objects() {
        let mut registry = ObjectRegistry::new();
        registry.add(Respawner::default());

        registry.delete_all(true);

        assert!(registry.is_empty());
        assert_eq!(registry.live_count(), 0);
        assert_eq!(
            registry.instance_count(&RESPAWNER_CLASS),
            1 + ObjectRegistry::HOOK_SWEEP_PASSES as u64
        );

        // Still usable afterwards.
        let next = registry.add(Actor::default());
        assert!(registry.is_valid_object(next));
        assert_eq!(registry.verify_integrity(), Ok(()));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "already carries registry state")]
    fn test_admitting_an_admitted_object_panics_in_debug() {
        let mut registry = ObjectRegistry::new();
        let mut actor = Actor::default();
        let handle = HandleTable::new().allocate(0);
        actor
            .base_mut()
            .admit(0, handle, &ACTOR_CLASS, "Actor_1".to_string());

        registry.add(actor);
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn test_lifecycle_counters() {
        let mut registry = ObjectRegistry::new();
        let a = registry.add(Actor::default());
        registry.add(Actor::default());
        registry.delete_object(a);
        registry.compact_null_slots();
        registry.delete_all(true);

        let counters = registry.counters();
        assert_eq!(counters.get("objects.admitted"), 2);
        assert_eq!(counters.get("objects.destroyed"), 2);
        assert_eq!(counters.get("slots.reclaimed"), 1);
        assert_eq!(counters.get("sweeps.delete_all"), 1);
    }
}
