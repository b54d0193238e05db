//! s390 (31-bit) relocation backend.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct S390;

impl Target for S390 {
    fn name(&self) -> &'static str {
        "s390"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_390_NONE => Ok(()),
            R_390_32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_be_bytes());
                Ok(())
            }
            R_390_PC32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a - p) as u32).to_be_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_390_JMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        32
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 32]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..4].copy_from_slice(&0x0d10_0d00u32.to_be_bytes());
        out[4..8].copy_from_slice(&(gotplt_delta as u32).to_be_bytes());
    }
}
