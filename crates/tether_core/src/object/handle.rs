//! Object handle with generational index
//!
//! Handles are lightweight (8 bytes) and identify one object for its whole
//! life. They point into a handle table rather than the object array, so a
//! handle stays valid when compaction moves its object to another slot.
//! The generation counter makes every handle permanently stale once its
//! object is destroyed.

use std::fmt;

/// Object handle (generation-indexed for safety)
///
/// Format: [32-bit index | 32-bit generation]
/// - Index: Position in the handle table (NOT the object array slot)
/// - Generation: Incremented when the object is destroyed
///
/// Example:
/// ```ignore
/// let handle = registry.new_object(&FOO_CLASS)?;
/// registry.delete_object(handle);
/// assert!(!registry.is_valid_object(handle)); // generation mismatch
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle {
    index: u32,
    generation: u32,
}

impl ObjectHandle {
    /// Handle that never resolves; carried by objects not yet admitted.
    pub const INVALID: ObjectHandle = ObjectHandle {
        index: u32::MAX,
        generation: u32::MAX,
    };

    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Serialize to 64-bit integer (for tooling/script bridges)
    pub fn to_bits(&self) -> u64 {
        ((self.generation as u64) << 32) | (self.index as u64)
    }

    /// Deserialize from 64-bit integer
    pub fn from_bits(bits: u64) -> Self {
        Self {
            index: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug)]
struct HandleEntry {
    generation: u32,
    slot: Option<usize>,
}

/// Maps live handles to the array slot their object currently occupies.
#[derive(Debug, Default)]
pub(crate) struct HandleTable {
    entries: Vec<HandleEntry>,
    free: Vec<u32>,
}

impl HandleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, slot: usize) -> ObjectHandle {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index as usize];
            entry.slot = Some(slot);
            return ObjectHandle::new(index, entry.generation);
        }

        let index = self.entries.len() as u32;
        self.entries.push(HandleEntry {
            generation: 0,
            slot: Some(slot),
        });
        ObjectHandle::new(index, 0)
    }

    /// Slot recorded for a live handle.
    pub fn resolve(&self, handle: ObjectHandle) -> Option<usize> {
        let entry = self.entries.get(handle.index as usize)?;
        if entry.generation != handle.generation {
            return None;
        }
        entry.slot
    }

    /// Record a new slot for a live handle. Returns false if the handle is stale.
    pub fn relocate(&mut self, handle: ObjectHandle, slot: usize) -> bool {
        match self.entries.get_mut(handle.index as usize) {
            Some(entry) if entry.generation == handle.generation && entry.slot.is_some() => {
                entry.slot = Some(slot);
                true
            }
            _ => false,
        }
    }

    /// Invalidate a live handle. Returns false if it was already stale.
    ///
    /// An entry whose generation would wrap is never handed out again, so an
    /// ancient handle can not come back to life.
    pub fn retire(&mut self, handle: ObjectHandle) -> bool {
        let Some(entry) = self.entries.get_mut(handle.index as usize) else {
            return false;
        };
        if entry.generation != handle.generation || entry.slot.is_none() {
            return false;
        }

        entry.slot = None;
        if entry.generation == u32::MAX {
            return true;
        }
        entry.generation += 1;
        self.free.push(handle.index);
        true
    }

    pub fn live_count(&self) -> usize {
        self.entries.iter().filter(|e| e.slot.is_some()).count()
    }
}
