//! SPARC64 relocation backend.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct Sparc64;

impl Target for Sparc64 {
    fn name(&self) -> &'static str {
        "sparc64"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_SPARC_NONE => Ok(()),
            R_SPARC_64 => {
                buf[offset..offset + 8].copy_from_slice(&((s + a) as u64).to_be_bytes());
                Ok(())
            }
            R_SPARC_WDISC30 => {
                let delta = (s + a - p) >> 2;
                let insn = u32::from_be_bytes(buf[offset..offset + 4].try_into().unwrap());
                let encoded = (insn & !0x3fff_ffff) | (delta as u32 & 0x3fff_ffff);
                buf[offset..offset + 4].copy_from_slice(&encoded.to_be_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_SPARC_JMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        32
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 32]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..4].copy_from_slice(&0x03000000u32.to_be_bytes()); // sethi
        out[4..8].copy_from_slice(&(gotplt_delta as u32).to_be_bytes());
    }
}
