//! DEC Alpha relocation backend.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct Alpha;

impl Target for Alpha {
    fn name(&self) -> &'static str {
        "alpha"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        match r_type {
            R_ALPHA_NONE => Ok(()),
            R_ALPHA_REFQUAD => {
                buf[offset..offset + 8].copy_from_slice(&((s + a) as u64).to_le_bytes());
                Ok(())
            }
            R_ALPHA_REFLONG => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_le_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_ALPHA_JMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        12
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 24]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..8].copy_from_slice(&(gotplt_delta as u64).to_le_bytes());
    }
}
