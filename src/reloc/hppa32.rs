//! PA-RISC 32-bit relocation backend. `R_PARISC_PLABEL32` is handled
//! like an absolute function-descriptor reference rather than a code
//! pointer; see the procedure-label discussion recorded in DESIGN.md.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct Hppa32;

impl Target for Hppa32 {
    fn name(&self) -> &'static str {
        "hppa32"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        match r_type {
            R_PARISC_NONE => Ok(()),
            R_PARISC_DIR32 | R_PARISC_PLABEL32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_be_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_PARISC_IPLT)
    }

    fn plt_entry_size(&self) -> usize {
        16
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 32]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..4].copy_from_slice(&(gotplt_delta as u32).to_be_bytes());
    }
}
