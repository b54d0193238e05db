//! Motorola 68000 relocation backend.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct M68k;

impl Target for M68k {
    fn name(&self) -> &'static str {
        "m68k"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_68K_NONE => Ok(()),
            R_68K_32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_be_bytes());
                Ok(())
            }
            R_68K_PC32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a - p) as u32).to_be_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_68K_JMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        12
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 20]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..2].copy_from_slice(&[0x2f, 0x39]); // move.l (GOTPLT),-(sp)
        out[2..6].copy_from_slice(&(gotplt_delta as u32).to_be_bytes());
    }
}
