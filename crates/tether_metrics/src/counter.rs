//! Named event counters
//!
//! Keys are static strings so hot paths (object admission, slot vacating)
//! never allocate a key. A `BTreeMap` keeps snapshots in a stable order for
//! log output.

use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Counter {
    counters: BTreeMap<&'static str, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            counters: BTreeMap::new(),
        }
    }

    pub fn increment(&mut self, name: &'static str, value: usize) {
        *self.counters.entry(name).or_insert(0) += value;
    }

    pub fn get(&self, name: &str) -> usize {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn reset_all(&mut self) {
        self.counters.clear();
    }

    /// Sorted `(name, value)` pairs, suitable for a shutdown report.
    pub fn snapshot(&self) -> Vec<(&'static str, usize)> {
        self.counters.iter().map(|(k, v)| (*k, *v)).collect()
    }
}
