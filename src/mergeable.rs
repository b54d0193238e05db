//! `SHF_MERGE` section-piece splitting and fragment interning.
//!
//! A mergeable section is split into fragments (null-terminated strings
//! for `SHF_STRINGS`, fixed-size records otherwise); each fragment is
//! interned by content into a process-wide [`MergedSection`], and
//! relocations that pointed into the original section are redirected to
//! the fragment they actually target.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use dashmap::DashMap;

use crate::context::SectionFragment;
use crate::hyperloglog::HyperLogLog;

/// All fragments interned for a single output mergeable section (e.g.
/// every `.rodata.str1.1` contributor across every input file funnels
/// into one `MergedSection` keyed by content).
pub struct MergedSection {
    pub name: String,
    fragments: DashMap<Vec<u8>, Arc<SectionFragment>>,
}

impl MergedSection {
    pub fn new(name: &str, size_hint: &HyperLogLog) -> Self {
        MergedSection {
            name: name.to_string(),
            fragments: DashMap::with_capacity(size_hint.estimate().max(16)),
        }
    }

    pub fn intern(&self, content: &[u8], p2align: u8) -> Arc<SectionFragment> {
        if let Some(existing) = self.fragments.get(content) {
            let frag = existing.clone();
            frag.p2align.fetch_max(p2align, Ordering::AcqRel);
            frag.is_alive.store(true, Ordering::Release);
            return frag;
        }
        let frag = Arc::new(SectionFragment::default());
        frag.p2align.store(p2align, Ordering::Release);
        frag.is_alive.store(true, Ordering::Release);
        let frag = self
            .fragments
            .entry(content.to_vec())
            .or_insert(frag)
            .clone();
        frag
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Assign byte offsets to every live fragment, largest alignment
    /// first to minimize padding, then by content for determinism.
    pub fn assign_offsets(&self) -> u64 {
        let mut entries: Vec<(Vec<u8>, Arc<SectionFragment>)> = self
            .fragments
            .iter()
            .filter(|e| e.value().is_alive.load(Ordering::Acquire))
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();
        entries.sort_by(|a, b| {
            b.1.p2align
                .load(Ordering::Acquire)
                .cmp(&a.1.p2align.load(Ordering::Acquire))
                .then_with(|| a.0.cmp(&b.0))
        });
        let mut offset: u64 = 0;
        for (content, frag) in &entries {
            let align = 1u64 << frag.p2align.load(Ordering::Acquire);
            offset = (offset + align - 1) & !(align - 1);
            frag.offset.store(offset as u32, Ordering::Release);
            offset += content.len() as u64;
        }
        offset
    }
}

/// Split a `SHF_STRINGS` mergeable section into `(offset, bytes)` pieces
/// delimited by NUL bytes.
pub fn split_strings(content: &[u8]) -> Vec<(u32, &[u8])> {
    let mut pieces = Vec::new();
    let mut start = 0usize;
    for (i, &b) in content.iter().enumerate() {
        if b == 0 {
            pieces.push((start as u32, &content[start..=i]));
            start = i + 1;
        }
    }
    if start < content.len() {
        pieces.push((start as u32, &content[start..]));
    }
    pieces
}

/// Split a fixed-record-size mergeable section (no `SHF_STRINGS`) into
/// `entsize`-wide pieces.
pub fn split_fixed(content: &[u8], entsize: usize) -> Vec<(u32, &[u8])> {
    if entsize == 0 {
        return vec![(0, content)];
    }
    content
        .chunks(entsize)
        .enumerate()
        .map(|(i, chunk)| ((i * entsize) as u32, chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_strings_on_nul() {
        let data = b"foo\0bar\0baz\0";
        let pieces = split_strings(data);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0], (0, &b"foo\0"[..]));
        assert_eq!(pieces[1], (4, &b"bar\0"[..]));
        assert_eq!(pieces[2], (8, &b"baz\0"[..]));
    }

    #[test]
    fn identical_content_interns_to_same_fragment() {
        let hll = HyperLogLog::new();
        let merged = MergedSection::new(".rodata.str1.1", &hll);
        let a = merged.intern(b"hello\0", 0);
        let b = merged.intern(b"hello\0", 0);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(merged.len(), 1);
    }
}
