//! i386 relocation backend. Narrower than [`super::x86_64`]: covers
//! the absolute/PC-relative/PLT/copy family without relaxation.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct I386;

impl Target for I386 {
    fn name(&self) -> &'static str {
        "i386"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_386_NONE => Ok(()),
            R_386_32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_le_bytes());
                Ok(())
            }
            R_386_PC32 | R_386_PLT32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a - p) as u32).to_le_bytes());
                Ok(())
            }
            R_386_TLS_TPOFF => {
                buf[offset..offset + 4].copy_from_slice(&((s - inputs.tp as i64) as u32).to_le_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_386_PLT32 | R_386_JMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        16
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0xff, 0x35, 0, 0, 0, 0, 0xff, 0x25, 0, 0, 0, 0, 0x00, 0x00, 0x00, 0x00]
    }

    fn encode_plt_entry(&self, index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..2].copy_from_slice(&[0xff, 0x25]);
        out[2..6].copy_from_slice(&(gotplt_delta as i32).to_le_bytes());
        out[6] = 0x68;
        out[7..11].copy_from_slice(&(index as u32).to_le_bytes());
    }
}
