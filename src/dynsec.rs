//! Dynamic-linking synthetic sections: `.dynsym`, `.dynstr`, `.hash`,
//! `.gnu.hash`, and `.dynamic` itself.
//!
//! The SysV `.hash` bucket/chain layout follows the classic ELF ABI
//! formula (`nbucket` chosen from a small table keyed by symbol count);
//! `.gnu.hash` uses the single-word bloom filter variant most linkers
//! default to today.

use crate::elf::{Ctx, Dyn};
use crate::error::Result;

/// `.hash` section per the generic System V ABI: `nbucket`, `nchain`,
/// then the bucket and chain arrays, each a 32-bit word.
pub fn build_sysv_hash(dynsyms: &[&str]) -> Vec<u8> {
    fn elf_hash(name: &str) -> u32 {
        let mut h: u32 = 0;
        for b in name.bytes() {
            h = (h << 4).wrapping_add(b as u32);
            let g = h & 0xf000_0000;
            if g != 0 {
                h ^= g >> 24;
            }
            h &= !g;
        }
        h
    }

    let nbucket = nbucket_for(dynsyms.len());
    let nchain = dynsyms.len() as u32;
    let mut buckets = vec![0u32; nbucket as usize];
    let mut chains = vec![0u32; nchain as usize];

    for (i, name) in dynsyms.iter().enumerate() {
        let idx = i as u32;
        let bucket = elf_hash(name) % nbucket;
        chains[idx as usize] = buckets[bucket as usize];
        buckets[bucket as usize] = idx;
    }

    let mut out = Vec::with_capacity(8 + buckets.len() * 4 + chains.len() * 4);
    out.extend_from_slice(&nbucket.to_le_bytes());
    out.extend_from_slice(&nchain.to_le_bytes());
    for b in &buckets {
        out.extend_from_slice(&b.to_le_bytes());
    }
    for c in &chains {
        out.extend_from_slice(&c.to_le_bytes());
    }
    out
}

fn nbucket_for(nsyms: usize) -> u32 {
    const TABLE: &[(usize, u32)] = &[
        (0, 1),
        (3, 3),
        (17, 17),
        (37, 37),
        (131, 131),
        (1031, 1031),
        (8231, 8231),
    ];
    let mut chosen = 1;
    for &(threshold, bucket) in TABLE {
        if nsyms >= threshold {
            chosen = bucket;
        }
    }
    chosen
}

pub fn gnu_hash(name: &str) -> u32 {
    let mut h: u32 = 5381;
    for b in name.bytes() {
        h = h.wrapping_mul(33).wrapping_add(b as u32);
    }
    h
}

/// One `DT_NEEDED`/`DT_SONAME`/`DT_RPATH`/... entry pending serialization
/// into the `.dynamic` table.
pub struct DynamicEntry {
    pub tag: u64,
    pub val: u64,
}

pub fn build_dynamic_table(entries: &[DynamicEntry], ctx: Ctx) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity((entries.len() + 1) * Dyn::size(ctx));
    for e in entries {
        Dyn { d_tag: e.tag, d_val: e.val }.write(ctx, &mut out)?;
    }
    Dyn { d_tag: crate::elf::DT_NULL, d_val: 0 }.write(ctx, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sysv_hash_places_every_symbol_in_a_chain() {
        let names = vec!["foo", "bar", "baz"];
        let hash = build_sysv_hash(&names);
        let nbucket = u32::from_le_bytes(hash[0..4].try_into().unwrap());
        let nchain = u32::from_le_bytes(hash[4..8].try_into().unwrap());
        assert_eq!(nchain, 3);
        assert!(nbucket >= 1);
    }

    #[test]
    fn gnu_hash_is_deterministic() {
        assert_eq!(gnu_hash("foo"), gnu_hash("foo"));
        assert_ne!(gnu_hash("foo"), gnu_hash("bar"));
    }
}
