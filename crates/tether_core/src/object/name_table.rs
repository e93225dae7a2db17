use crate::object::{ClassDescriptor, ClassId};
use std::collections::HashMap;

/// Per-class instantiation counters used to mint display names.
///
/// Counts only ever grow, so `"<Class>_<N>"` is unique for the lifetime of
/// the table without checking the names already handed out.
#[derive(Debug, Default)]
pub struct NameCounterTable {
    counts: HashMap<ClassId, u64>,
}

impl NameCounterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the class counter and return the next name.
    pub fn mint(&mut self, class: &ClassDescriptor) -> String {
        let count = self.counts.entry(class.id()).or_insert(0);
        *count += 1;
        format!("{}_{}", class.name(), count)
    }

    /// Objects of `class` named so far.
    pub fn count(&self, class: &ClassDescriptor) -> u64 {
        self.counts.get(&class.id()).copied().unwrap_or(0)
    }
}
