//! Comdat group resolution.
//!
//! A comdat group is identified by a signature string; the file whose
//! priority is lowest among all registrants owns the group, and every
//! other file kills its copy of the group's member sections.

use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;

use crate::context::{File, FileId};

pub struct ComdatGroup {
    owner: AtomicU32,
}

impl ComdatGroup {
    fn new() -> Self {
        ComdatGroup {
            owner: AtomicU32::new(u32::MAX),
        }
    }

    /// Race to claim ownership; monotonically lowers `owner` to the
    /// smallest priority seen. Safe to call repeatedly/concurrently.
    pub fn claim(&self, priority: u32) {
        self.owner.fetch_min(priority, Ordering::AcqRel);
    }

    pub fn owner_priority(&self) -> u32 {
        self.owner.load(Ordering::Acquire)
    }
}

#[derive(Default)]
pub struct ComdatTable {
    groups: DashMap<String, ComdatGroup>,
}

impl ComdatTable {
    pub fn new() -> Self {
        ComdatTable { groups: DashMap::new() }
    }

    pub fn register(&self, signature: &str, priority: u32) {
        self.groups
            .entry(signature.to_string())
            .or_insert_with(ComdatGroup::new)
            .claim(priority);
    }

    pub fn owner_priority(&self, signature: &str) -> Option<u32> {
        self.groups.get(signature).map(|g| g.owner_priority())
    }
}

/// A single file's view of a comdat group: the signature and the
/// member section indices it would contribute if it wins ownership.
pub struct ComdatMembership {
    pub signature: String,
    pub member_shndx: Vec<u32>,
}

/// After every file has registered its comdat groups, kill the member
/// sections of every file that did not win ownership.
pub fn resolve(table: &ComdatTable, files: &mut [File], memberships: &[(FileId, Vec<ComdatMembership>)]) {
    for (file_id, groups) in memberships {
        let file = &mut files[*file_id as usize];
        for membership in groups {
            let winner = table.owner_priority(&membership.signature);
            let is_owner = winner == Some(file.priority);
            if !is_owner {
                for &shndx in &membership.member_shndx {
                    if let Some(section) = file.sections.iter().find(|s| s.shndx == shndx) {
                        section.kill();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_priority_wins() {
        let table = ComdatTable::new();
        table.register("_ZTV3Foo", 5);
        table.register("_ZTV3Foo", 2);
        table.register("_ZTV3Foo", 9);
        assert_eq!(table.owner_priority("_ZTV3Foo"), Some(2));
    }
}
