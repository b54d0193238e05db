//! MIPS64 relocation backend. MIPS's GOT-indexed addressing scheme and
//! composite (`HI16`/`LO16`-paired) relocations are out of scope here;
//! only the direct absolute/PC-relative forms are handled.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct Mips64;

impl Target for Mips64 {
    fn name(&self) -> &'static str {
        "mips64"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_MIPS_NONE => Ok(()),
            R_MIPS_64 => {
                buf[offset..offset + 8].copy_from_slice(&((s + a) as u64).to_le_bytes());
                Ok(())
            }
            R_MIPS_32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_le_bytes());
                Ok(())
            }
            R_MIPS_REL32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a - p) as u32).to_le_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_MIPS_JUMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        16
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 32]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..8].copy_from_slice(&(gotplt_delta as u64).to_le_bytes());
    }
}
