//! PowerPC 32-bit relocation backend, covering the ADDR/REL family used
//! by big-endian PPC objects.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct Ppc32;

impl Target for Ppc32 {
    fn name(&self) -> &'static str {
        "ppc32"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_PPC_NONE => Ok(()),
            R_PPC_ADDR32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_be_bytes());
                Ok(())
            }
            R_PPC_ADDR16_HA => {
                let v = s + a;
                let ha = ((v + 0x8000) >> 16) as u16;
                buf[offset..offset + 2].copy_from_slice(&ha.to_be_bytes());
                Ok(())
            }
            R_PPC_ADDR16_LO => {
                let v = (s + a) as u16;
                buf[offset..offset + 2].copy_from_slice(&v.to_be_bytes());
                Ok(())
            }
            R_PPC_REL24 => {
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
        matches!(r_type, R_PPC_JMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        8
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 24]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..4].copy_from_slice(&0x3d60_0000u32.to_be_bytes()); // lis r11,ha(gotplt)
        out[4..8].copy_from_slice(&(gotplt_delta as u32).to_be_bytes());
    }
}
