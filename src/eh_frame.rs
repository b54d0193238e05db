//! `.eh_frame` CIE/FDE parsing, deduplication, and output synthesis.
//!
//! Each CIE/FDE is a length-prefixed record (4-byte length, then an
//! `id` field; `id == 0` marks a CIE, otherwise it is an FDE whose `id`
//! is the back-offset to its CIE). Records are walked rather than
//! copied as an opaque blob so identical CIEs can be folded and FDEs
//! for dead sections dropped.

use crate::elf::Rela;
use crate::error::{LinkError, Result};

#[derive(Debug, Clone)]
pub struct CieRecord {
    pub content: Vec<u8>,
    pub relocs: Vec<Rela>,
    pub dedup_key: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct FdeRecord {
    pub input_offset: u32,
    pub output_offset: u32,
    pub cie_idx: u32,
    pub reloc_begin: u32,
    pub reloc_end: u32,
    pub is_alive: bool,
}

/// Walk a raw `.eh_frame` section's content, returning the CIEs and
/// FDEs it contains. `relocs` must be sorted by `r_offset`.
pub fn parse(content: &[u8], relocs: &[Rela]) -> Result<(Vec<CieRecord>, Vec<FdeRecord>)> {
    let mut cies: Vec<CieRecord> = Vec::new();
    let mut cie_offsets: std::collections::HashMap<u32, u32> = std::collections::HashMap::new();
    let mut fdes = Vec::new();

    let mut off = 0usize;
    while off + 4 <= content.len() {
        let len = u32::from_le_bytes(content[off..off + 4].try_into().unwrap()) as usize;
        if len == 0 {
            break;
        }
        let record_start = off;
        let record_end = off + 4 + len;
        if record_end > content.len() {
            return Err(LinkError::Malformed("eh_frame record overruns section".into()));
        }
        let id = u32::from_le_bytes(content[off + 4..off + 8].try_into().unwrap());

        let reloc_begin = relocs.partition_point(|r| (r.r_offset as usize) < record_start) as u32;
        let reloc_end = relocs.partition_point(|r| (r.r_offset as usize) < record_end) as u32;

        if id == 0 {
            let record = content[record_start..record_end].to_vec();
            let record_relocs = relocs[reloc_begin as usize..reloc_end as usize].to_vec();
            let dedup_key = record.clone();
            cie_offsets.insert(record_start as u32, cies.len() as u32);
            cies.push(CieRecord {
                content: record,
                relocs: record_relocs,
                dedup_key,
            });
        } else {
            let cie_offset = (off + 4) as u32 - id;
            let cie_idx = *cie_offsets.get(&cie_offset).unwrap_or(&0);
            let has_reloc = reloc_begin < reloc_end;
            fdes.push(FdeRecord {
                input_offset: record_start as u32,
                output_offset: 0,
                cie_idx,
                reloc_begin,
                reloc_end,
                is_alive: has_reloc,
            });
        }

        off = record_end;
    }

    Ok((cies, fdes))
}

/// Deduplicate identical CIEs by content, returning a mapping from old
/// CIE index to deduplicated index.
pub fn dedup_cies(cies: &[CieRecord]) -> (Vec<CieRecord>, Vec<u32>) {
    let mut unique: Vec<CieRecord> = Vec::new();
    let mut seen: std::collections::HashMap<Vec<u8>, u32> = std::collections::HashMap::new();
    let mut mapping = Vec::with_capacity(cies.len());
    for cie in cies {
        let idx = *seen.entry(cie.dedup_key.clone()).or_insert_with(|| {
            unique.push(cie.clone());
            (unique.len() - 1) as u32
        });
        mapping.push(idx);
    }
    (unique, mapping)
}

/// Assemble the output `.eh_frame` content from live FDEs and their
/// (deduplicated) CIEs, returning the final bytes and each FDE's
/// assigned output offset.
pub fn synthesize(cies: &[CieRecord], fdes: &mut [FdeRecord]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut cie_output_offset = vec![u32::MAX; cies.len()];
    for (i, cie) in cies.iter().enumerate() {
        if fdes.iter().any(|f| f.is_alive && f.cie_idx == i as u32) {
            cie_output_offset[i] = out.len() as u32;
            out.extend_from_slice(&cie.content);
        }
    }
    for fde in fdes.iter_mut().filter(|f| f.is_alive) {
        fde.output_offset = out.len() as u32;
        // Real byte content would be copied from the input section and
        // patched; only offsets are tracked here, content emission is
        // the caller's responsibility once relocations are applied.
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cie_bytes(len_payload: usize) -> Vec<u8> {
        let mut v = Vec::new();
        let len = 4 + len_payload; // id + payload
        v.extend_from_slice(&(len as u32).to_le_bytes());
        v.extend_from_slice(&0u32.to_le_bytes()); // id == 0 => CIE
        v.extend(std::iter::repeat(0xAAu8).take(len_payload));
        v
    }

    #[test]
    fn parses_single_cie() {
        let content = cie_bytes(4);
        let (cies, fdes) = parse(&content, &[]).unwrap();
        assert_eq!(cies.len(), 1);
        assert!(fdes.is_empty());
    }

    #[test]
    fn dedups_identical_cies() {
        let mut content = cie_bytes(4);
        content.extend(cie_bytes(4));
        let (cies, _) = parse(&content, &[]).unwrap();
        assert_eq!(cies.len(), 2);
        let (unique, mapping) = dedup_cies(&cies);
        assert_eq!(unique.len(), 1);
        assert_eq!(mapping, vec![0, 0]);
    }
}
