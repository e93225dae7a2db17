// class.rs - Runtime class identity
//
// Classes are identified by u32 IDs, not Rust TypeIds, so a descriptor can
// name a class hierarchy that has no Rust-side inheritance at all.

use std::fmt;
use std::hash::{Hash, Hasher};

pub type ClassId = u32;

/// Immutable identity token for a concrete object class.
///
/// Descriptors are declared as `static` items and linked to their parent,
/// forming the chain used for `is_a` checks and checked downcasts.
///
/// ```ignore
/// pub static ACTOR_CLASS: ClassDescriptor = ClassDescriptor::new(10, "Actor", Some(&OBJECT_CLASS));
/// pub static CAMERA_CLASS: ClassDescriptor = ClassDescriptor::new(11, "Camera", Some(&ACTOR_CLASS));
/// ```
#[derive(Debug)]
pub struct ClassDescriptor {
    id: ClassId,
    name: &'static str,
    parent: Option<&'static ClassDescriptor>,
}

/// Root of every class chain.
pub static OBJECT_CLASS: ClassDescriptor = ClassDescriptor::new(0, "Object", None);

impl ClassDescriptor {
    pub const fn new(
        id: ClassId,
        name: &'static str,
        parent: Option<&'static ClassDescriptor>,
    ) -> Self {
        Self { id, name, parent }
    }

    #[inline]
    pub fn id(&self) -> ClassId {
        self.id
    }

    /// Base display name, used as the prefix of minted object names.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn parent(&self) -> Option<&'static ClassDescriptor> {
        self.parent
    }

    /// This descriptor followed by each parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &ClassDescriptor> {
        std::iter::successors(Some(self), |class| class.parent())
    }

    /// True if `self` is `other` or derives from it.
    pub fn is_child_of(&self, other: &ClassDescriptor) -> bool {
        self.ancestors().any(|class| class.id == other.id)
    }
}

impl PartialEq for ClassDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClassDescriptor {}

impl Hash for ClassDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ClassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
