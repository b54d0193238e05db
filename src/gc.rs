//! `--gc-sections`: mark/sweep reachability over input sections.
//!
//! The root set is every section reachable from an undiscardable source
//! (the entry point, exported/retained symbols, `SHF_GNU_RETAIN`
//! sections, and anything not eligible for GC at all); a BFS over
//! relocation targets marks everything transitively reachable, and
//! whatever remains unmarked is killed.

use std::collections::VecDeque;
use std::sync::atomic::Ordering;

use crate::context::{File, InputSection};

/// Adjacency: for a given `(file, shndx)`, which `(file, shndx)` pairs
/// its relocations reach. Built by the caller from resolved relocation
/// targets (direct intra-file sections, or inter-file through resolved
/// global symbols).
pub type Edge = (u32, u32);

pub fn collect_garbage(files: &mut [File], roots: &[Edge], edges: &dashmap::DashMap<Edge, Vec<Edge>>) {
    let mut visited: std::collections::HashSet<Edge> = std::collections::HashSet::new();
    let mut queue: VecDeque<Edge> = VecDeque::new();

    for &root in roots {
        if visited.insert(root) {
            queue.push_back(root);
        }
    }

    while let Some((file_idx, shndx)) = queue.pop_front() {
        if let Some(file) = files.get(file_idx as usize) {
            if let Some(section) = file.sections.iter().find(|s| s.shndx == shndx) {
                section.is_visited.store(true, Ordering::Release);
            }
        }
        if let Some(targets) = edges.get(&(file_idx, shndx)) {
            for &next in targets.value() {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }

    for file in files.iter_mut() {
        for section in &mut file.sections {
            if section.is_visited.load(Ordering::Acquire) {
                continue;
            }
            if !is_gc_eligible(section) {
                continue;
            }
            section.kill();
        }
    }
}

fn is_gc_eligible(section: &InputSection) -> bool {
    section.sh_flags & crate::elf::SHF_ALLOC as u64 != 0
        && section.sh_flags & crate::elf::SHF_GNU_RETAIN as u64 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_alloc_section_is_eligible() {
        let section = InputSection::new(0, 1, ".text.dead".into(), vec![], 1, crate::elf::SHF_ALLOC as u64);
        assert!(is_gc_eligible(&section));
    }

    #[test]
    fn retained_section_is_not_eligible() {
        let flags = crate::elf::SHF_ALLOC as u64 | crate::elf::SHF_GNU_RETAIN as u64;
        let section = InputSection::new(0, 1, ".text.keep".into(), vec![], 1, flags);
        assert!(!is_gc_eligible(&section));
    }
}
