//! SuperH (SH4) relocation backend.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct Sh4;

impl Target for Sh4 {
    fn name(&self) -> &'static str {
        "sh4"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_SH_NONE => Ok(()),
            R_SH_DIR32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_le_bytes());
                Ok(())
            }
            R_SH_REL32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a - p) as u32).to_le_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_SH_JMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        28
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 28]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..4].copy_from_slice(&(gotplt_delta as u32).to_le_bytes());
    }
}
