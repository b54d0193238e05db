//! PowerPC64 ELFv1 (function-descriptor ABI) relocation backend.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct Ppc64V1;

impl Target for Ppc64V1 {
    fn name(&self) -> &'static str {
        "ppc64v1"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_PPC64_NONE => Ok(()),
            R_PPC64_ADDR64 => {
                buf[offset..offset + 8].copy_from_slice(&((s + a) as u64).to_be_bytes());
                Ok(())
            }
            R_PPC64_ADDR16_HA => {
                let ha = (((s + a) + 0x8000) >> 16) as u16;
                buf[offset..offset + 2].copy_from_slice(&ha.to_be_bytes());
                Ok(())
            }
            R_PPC64_ADDR16_LO => {
                let v = (s + a) as u16;
                buf[offset..offset + 2].copy_from_slice(&v.to_be_bytes());
                Ok(())
            }
            R_PPC64_REL24 => {
                let delta = (s + a - p) & 0x03ff_fffc;
                let insn = u32::from_be_bytes(buf[offset..offset + 4].try_into().unwrap());
                let encoded = (insn & !0x03ff_fffc) | delta as u32;
                buf[offset..offset + 4].copy_from_slice(&encoded.to_be_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_PPC64_JMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        // ELFv1 PLT entries are function descriptors: code, TOC, env.
        24
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 24]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..8].copy_from_slice(&(gotplt_delta as u64).to_be_bytes());
    }
}
