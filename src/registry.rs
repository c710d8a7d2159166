//! The syscall registry: every schema the tracer knows, indexed by number
//! and by lowercase name.
//!
//! Built once per session from the static definition tables and immutable
//! afterwards. An unknown number is not an error anywhere in the tracer; it
//! degrades to raw rendering at the event layer.

use std::collections::HashMap;

use crate::syscalls::defs::all_tables;
use crate::syscalls::{Category, SyscallDef};

/// A schema plus the category tag its table carried.
#[derive(Clone, Copy)]
pub struct Entry {
    pub def: &'static SyscallDef,
    pub category: Category,
}

pub struct SyscallRegistry {
    by_number: HashMap<u64, Entry>,
    by_name: HashMap<&'static str, Entry>,
}

impl SyscallRegistry {
    pub fn new() -> Self {
        let mut by_number = HashMap::new();
        let mut by_name = HashMap::new();
        for (table, category) in all_tables() {
            for def in table {
                let entry = Entry { def, category };
                let prev = by_number.insert(def.number, entry);
                debug_assert!(
                    prev.is_none(),
                    "duplicate schema for syscall number {}",
                    def.number
                );
                by_name.insert(def.name, entry);
            }
        }
        Self { by_number, by_name }
    }

    pub fn lookup(&self, number: u64) -> Option<Entry> {
        self.by_number.get(&number).copied()
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<Entry> {
        self.by_name.get(name).copied()
    }

    /// Whether `name` is a syscall the registry knows (used by the filter
    /// parser to reject typos up front).
    pub fn knows_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

impl Default for SyscallRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_names_agree() {
        let reg = SyscallRegistry::new();
        let open = reg.lookup_by_name("open").expect("open registered");
        assert_eq!(open.def.number, 5);
        assert_eq!(open.category, Category::File);
        let by_num = reg.lookup(5).unwrap();
        assert_eq!(by_num.def.name, "open");
    }

    #[test]
    fn every_number_maps_to_exactly_one_schema() {
        let reg = SyscallRegistry::new();
        // Building asserts uniqueness in debug; spot-check the indexes line up.
        for (table, _) in all_tables() {
            for def in table {
                let entry = reg.lookup(def.number).expect("registered");
                assert_eq!(entry.def.number, def.number);
            }
        }
        assert!(reg.len() > 100);
    }

    #[test]
    fn unknown_number_is_a_clean_miss() {
        let reg = SyscallRegistry::new();
        assert!(reg.lookup(99_999).is_none());
        assert!(!reg.knows_name("not_a_syscall"));
    }

    #[test]
    fn categories_cover_the_closed_set() {
        let reg = SyscallRegistry::new();
        for category in Category::ALL {
            let covered = all_tables().iter().any(|(_, c)| c == category);
            assert!(covered, "no table for {category}");
        }
        assert_eq!(reg.lookup_by_name("socket").unwrap().category, Category::Network);
        assert_eq!(reg.lookup_by_name("kill").unwrap().category, Category::Signal);
    }
}
