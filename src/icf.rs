//! `--icf`: identical code folding.
//!
//! Each eligible section is given a 256-bit fingerprint (content bytes
//! plus a normalized description of its relocation targets); sections
//! sharing a fingerprint are folded onto one leader. Because a section's
//! relocations can point at other not-yet-classified sections, the
//! fingerprint is recomputed iteratively (replacing "points at section
//! X" with "points at X's current equivalence class") until the
//! partition stops changing.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::context::InputSection;

pub type Fingerprint = [u8; 32];

/// A normalized relocation reference used as fingerprint input: either
/// a fixed addend into a fragment/absolute value, or a reference to
/// another section's current equivalence class.
pub enum RelocRef {
    Class(u32),
    Absolute(i64),
}

pub fn fingerprint(content: &[u8], relocs: &[(u64, RelocRef)]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(content);
    for (offset, reloc) in relocs {
        hasher.update(offset.to_le_bytes());
        match reloc {
            RelocRef::Class(c) => {
                hasher.update([0u8]);
                hasher.update(c.to_le_bytes());
            }
            RelocRef::Absolute(v) => {
                hasher.update([1u8]);
                hasher.update(v.to_le_bytes());
            }
        }
    }
    hasher.finalize().into()
}

/// Run ICF to fixpoint over a set of eligible `(file, shndx)` sections,
/// given a closure that computes each section's current fingerprint
/// from the current class assignment (`classify`). Returns a map from
/// `(file, shndx)` to leader `(file, shndx)`.
pub fn fold_to_fixpoint<F>(
    eligible: &[(u32, u32)],
    mut classify: F,
) -> HashMap<(u32, u32), (u32, u32)>
where
    F: FnMut((u32, u32), &HashMap<(u32, u32), u32>) -> Fingerprint,
{
    let mut class_of: HashMap<(u32, u32), u32> =
        eligible.iter().enumerate().map(|(i, &k)| (k, i as u32)).collect();

    loop {
        let mut by_fp: HashMap<Fingerprint, Vec<(u32, u32)>> = HashMap::new();
        for &key in eligible {
            let fp = classify(key, &class_of);
            by_fp.entry(fp).or_default().push(key);
        }

        let mut next_class: HashMap<(u32, u32), u32> = HashMap::new();
        let mut next_id = 0u32;
        let mut groups: Vec<&Vec<(u32, u32)>> = by_fp.values().collect();
        groups.sort_by_key(|g| g.iter().min().cloned());
        for group in groups {
            for &key in group {
                next_class.insert(key, next_id);
            }
            next_id += 1;
        }

        if next_class == class_of {
            break;
        }
        class_of = next_class;
    }

    let mut leader_of_class: HashMap<u32, (u32, u32)> = HashMap::new();
    for &key in eligible {
        let class = class_of[&key];
        leader_of_class
            .entry(class)
            .and_modify(|l| {
                if key < *l {
                    *l = key;
                }
            })
            .or_insert(key);
    }

    eligible
        .iter()
        .map(|&key| (key, leader_of_class[&class_of[&key]]))
        .collect()
}

/// A section qualifies for ICF consideration if it is `.text`-like,
/// allocated, not writable, and has no address taken by an
/// `SHT_LLVM_ADDRSIG` entry elsewhere (address-significant sections
/// must keep distinct identity).
pub fn is_icf_eligible(section: &InputSection) -> bool {
    section.icf_eligible
        && section.sh_flags & crate::elf::SHF_ALLOC as u64 != 0
        && section.sh_flags & crate::elf::SHF_WRITE as u64 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_content_folds_together() {
        let eligible = vec![(0, 1), (0, 2), (0, 3)];
        let content: HashMap<(u32, u32), Vec<u8>> = [
            ((0, 1), vec![1, 2, 3]),
            ((0, 2), vec![1, 2, 3]),
            ((0, 3), vec![9, 9, 9]),
        ]
        .into_iter()
        .collect();

        let result = fold_to_fixpoint(&eligible, |key, _classes| {
            fingerprint(&content[&key], &[])
        });

        assert_eq!(result[&(0, 1)], result[&(0, 2)]);
        assert_ne!(result[&(0, 1)], result[&(0, 3)]);
    }
}
