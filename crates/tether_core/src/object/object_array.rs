// object_array.rs - The owning store behind the object registry
//
// Slots are append-only between compactions: destroying an object leaves a
// tombstone (`None`) so every other object keeps its index. A live slot may
// have its object "checked out" while a teardown hook runs on it; the slot
// keeps its handle and still counts as live.

use crate::object::{ClassDescriptor, HandleTable, Object, ObjectHandle, RegistryError};
use tracing::warn;

pub(crate) struct Slot {
    pub handle: ObjectHandle,
    /// `None` while the object is checked out to a hook.
    pub object: Option<Box<dyn Object>>,
}

/// Index-addressable, nullable sequence of owned objects.
pub struct ObjectArray {
    slots: Vec<Option<Slot>>,
    handles: HandleTable,
    live: usize,
}

impl ObjectArray {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            handles: HandleTable::new(),
            live: 0,
        }
    }

    /// Number of slots, tombstones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    pub fn tombstone_count(&self) -> usize {
        self.slots.len() - self.live
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Append an object, assigning its slot, handle, class and name.
    pub(crate) fn push(
        &mut self,
        class: &'static ClassDescriptor,
        mut object: Box<dyn Object>,
        name: String,
    ) -> ObjectHandle {
        let index = self.slots.len();
        let handle = self.handles.allocate(index);
        object.base_mut().admit(index, handle, class, name);
        self.slots.push(Some(Slot {
            handle,
            object: Some(object),
        }));
        self.live += 1;
        handle
    }

    /// Slot currently holding `handle`.
    ///
    /// The handle table is only a hint: the slot must actually hold the
    /// handle. If the two disagree the array is scanned and the table
    /// repaired from what the array says.
    pub fn slot_of(&mut self, handle: ObjectHandle) -> Option<usize> {
        let hinted = self.handles.resolve(handle)?;
        if self.holds(hinted, handle) {
            return Some(hinted);
        }

        let found = self.scan_for(handle)?;
        warn!(%handle, hinted, found, "handle table disagreed with object array, repairing");
        self.handles.relocate(handle, found);
        Some(found)
    }

    /// Read-only variant of [`slot_of`](Self::slot_of) that never repairs.
    pub fn find(&self, handle: ObjectHandle) -> Option<usize> {
        let hinted = self.handles.resolve(handle)?;
        if self.holds(hinted, handle) {
            Some(hinted)
        } else {
            self.scan_for(handle)
        }
    }

    fn holds(&self, index: usize, handle: ObjectHandle) -> bool {
        matches!(self.slots.get(index), Some(Some(slot)) if slot.handle == handle)
    }

    fn scan_for(&self, handle: ObjectHandle) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(s) if s.handle == handle))
    }

    pub fn get_at(&self, index: usize) -> Option<&dyn Object> {
        self.slots.get(index)?.as_ref()?.object.as_deref()
    }

    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut dyn Object> {
        let object: &mut dyn Object = self.slots.get_mut(index)?.as_mut()?.object.as_deref_mut()?;
        Some(object)
    }

    /// Tombstone a slot and retire its handle. Returns what the slot held.
    pub(crate) fn vacate(&mut self, index: usize) -> Option<Slot> {
        let slot = self.slots.get_mut(index)?.take()?;
        self.handles.retire(slot.handle);
        self.live -= 1;
        Some(slot)
    }

    /// Borrow the object out of a live slot so a hook can run on it.
    pub(crate) fn check_out(&mut self, index: usize) -> Option<(ObjectHandle, Box<dyn Object>)> {
        let slot = self.slots.get_mut(index)?.as_mut()?;
        let object = slot.object.take()?;
        Some((slot.handle, object))
    }

    /// Return a checked-out object to its slot, wherever compaction moved it.
    ///
    /// Hands the object back if its slot was vacated in the meantime.
    pub(crate) fn check_in(
        &mut self,
        handle: ObjectHandle,
        mut object: Box<dyn Object>,
    ) -> Result<(), Box<dyn Object>> {
        let Some(index) = self.slot_of(handle) else {
            return Err(object);
        };
        match self.slots[index].as_mut() {
            Some(slot) if slot.object.is_none() => {
                object.base_mut().set_internal_index(index);
                slot.object = Some(object);
                Ok(())
            }
            _ => Err(object),
        }
    }

    /// Slide live slots down over tombstones, keeping their order.
    ///
    /// Returns the number of slots reclaimed.
    pub fn compact(&mut self) -> usize {
        let len = self.slots.len();
        let mut write = 0;

        for read in 0..len {
            if self.slots[read].is_none() {
                continue;
            }
            if read != write {
                self.slots.swap(read, write);
                if let Some(slot) = self.slots[write].as_mut() {
                    self.handles.relocate(slot.handle, write);
                    if let Some(object) = slot.object.as_mut() {
                        object.base_mut().set_internal_index(write);
                    }
                }
            }
            write += 1;
        }

        self.slots.truncate(write);
        len - write
    }

    /// Drop the (already empty) slot storage.
    pub(crate) fn release_storage(&mut self) {
        debug_assert_eq!(self.live, 0, "releasing storage with live objects");
        self.slots.clear();
        self.slots.shrink_to_fit();
    }

    /// Live, not checked-out objects in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Object> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref()?.object.as_deref())
    }

    /// Check every slot against the handle table and its object's cached state.
    pub fn verify(&self) -> Result<(), RegistryError> {
        let mut live = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            let Some(slot) = slot else { continue };
            live += 1;

            if self.handles.resolve(slot.handle) != Some(index) {
                return Err(RegistryError::IntegrityViolation {
                    index,
                    reason: format!("handle {} does not resolve to this slot", slot.handle),
                });
            }

            if let Some(object) = slot.object.as_deref() {
                if object.internal_index() != index {
                    return Err(RegistryError::IntegrityViolation {
                        index,
                        reason: format!(
                            "'{}' caches index {}",
                            object.name(),
                            object.internal_index()
                        ),
                    });
                }
                if object.handle() != slot.handle {
                    return Err(RegistryError::IntegrityViolation {
                        index,
                        reason: format!(
                            "'{}' caches handle {}, slot holds {}",
                            object.name(),
                            object.handle(),
                            slot.handle
                        ),
                    });
                }
            }
        }

        if live != self.live || live != self.handles.live_count() {
            return Err(RegistryError::IntegrityViolation {
                index: self.slots.len(),
                reason: format!(
                    "{} occupied slots, {} counted live, {} live handles",
                    live,
                    self.live,
                    self.handles.live_count()
                ),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for ObjectArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectArray")
            .field("slot_count", &self.slots.len())
            .field("live_count", &self.live)
            .finish()
    }
}
