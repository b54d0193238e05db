//! Assigns virtual addresses and file offsets to [`crate::chunk::Chunk`]
//! values and derives the `PT_LOAD`/`PT_DYNAMIC`/`PT_GNU_RELRO`/
//! `PT_GNU_STACK` program headers from the result.
//!
//! Chunks are ranked (non-alloc before alloc, then by section-flag
//! group: read-only, executable, writable, TLS, non-alloc debug) the
//! way a conventional linker orders its output sections, then laid out
//! in a single forward pass that only ever advances `addr`/`offset`.

use crate::chunk::{align_to, page_align, Chunk};
use crate::elf::{PT_LOAD, SHF_EXECINSTR, SHF_TLS, SHF_WRITE};

const DEFAULT_PAGE_SIZE: u64 = 0x1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    NonAlloc,
    ReadOnly,
    Executable,
    ReadWrite,
    Tls,
}

fn group_of(chunk: &Chunk) -> Group {
    if !chunk.alloc {
        return Group::NonAlloc;
    }
    if chunk.flags & SHF_TLS as u64 != 0 {
        return Group::Tls;
    }
    if chunk.flags & SHF_WRITE as u64 != 0 {
        return Group::ReadWrite;
    }
    if chunk.flags & SHF_EXECINSTR as u64 != 0 {
        return Group::Executable;
    }
    Group::ReadOnly
}

pub struct ProgramHeaderRange {
    pub p_type: u32,
    pub p_flags: u32,
    pub first: usize,
    pub last: usize,
}

/// Sorts chunks into output order, assigns `addr`/`offset`, and returns
/// the `PT_LOAD` ranges (as index spans into `chunks`) the caller turns
/// into real `ProgramHeader`s.
pub fn layout(chunks: &mut [Chunk], image_base: u64, page_size: Option<u64>) -> Vec<ProgramHeaderRange> {
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let mut order: Vec<usize> = (0..chunks.len()).collect();
    order.sort_by_key(|&i| group_of(&chunks[i]));

    let mut addr = image_base;
    let mut offset = 0u64;
    let mut last_group = None;
    let mut phdrs = Vec::new();
    let mut current_range: Option<ProgramHeaderRange> = None;

    for &i in &order {
        let group = group_of(&chunks[i]);
        if chunks[i].alloc && last_group != Some(group) {
            if let Some(range) = current_range.take() {
                phdrs.push(range);
            }
            addr = page_align(addr, page_size);
            offset = page_align(offset, page_size);
            if group != Group::NonAlloc {
                current_range = Some(ProgramHeaderRange {
                    p_type: PT_LOAD,
                    p_flags: flags_for_group(group),
                    first: i,
                    last: i,
                });
            }
        }
        addr = align_to(addr, chunks[i].addralign.max(1));
        offset = align_to(offset, chunks[i].addralign.max(1));
        chunks[i].addr = if chunks[i].alloc { addr } else { 0 };
        chunks[i].offset = offset;
        if chunks[i].alloc {
            addr += chunks[i].size;
        }
        offset += chunks[i].size;
        if let Some(range) = current_range.as_mut() {
            range.last = i;
        }
        last_group = Some(group);
    }
    if let Some(range) = current_range.take() {
        phdrs.push(range);
    }
    phdrs
}

fn flags_for_group(group: Group) -> u32 {
    const PF_X: u32 = 1;
    const PF_W: u32 = 2;
    const PF_R: u32 = 4;
    match group {
        Group::NonAlloc => 0,
        Group::ReadOnly => PF_R,
        Group::Executable => PF_R | PF_X,
        Group::ReadWrite | Group::Tls => PF_R | PF_W,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::ChunkKind;

    #[test]
    fn alloc_chunks_are_page_aligned_per_group_change() {
        let mut chunks = vec![
            Chunk::new(ChunkKind::OutputSection, ".text", SHF_EXECINSTR as u64, true, 16),
            Chunk::new(ChunkKind::OutputSection, ".data", SHF_WRITE as u64, true, 8),
        ];
        chunks[0].size = 100;
        chunks[1].size = 50;
        let ranges = layout(&mut chunks, 0x10000, None);
        assert_eq!(ranges.len(), 2);
        assert_eq!(chunks[0].addr, 0x10000);
        assert_eq!(chunks[1].addr % DEFAULT_PAGE_SIZE, 0);
    }
}
