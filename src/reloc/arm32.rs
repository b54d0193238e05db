//! ARM32 (AArch32) relocation backend. Covers the common data/branch
//! relocations; Thumb-mode encodings and BLX/BX range-extension thunks
//! are intentionally out of scope for this narrower backend.

use crate::elf::*;
use crate::error::{LinkError, Result};
use crate::reloc::{RelocInputs, Target};

pub struct Arm32;

impl Target for Arm32 {
    fn name(&self) -> &'static str {
        "arm32"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_ARM_NONE => Ok(()),
            R_ARM_ABS32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_le_bytes());
                Ok(())
            }
            R_ARM_REL32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a - p) as u32).to_le_bytes());
                Ok(())
            }
            R_ARM_CALL | R_ARM_JUMP24 => {
                let delta = s + a - p;
                if delta % 4 != 0 {
                    return Err(LinkError::RelocOverflow {
                        reloc: "R_ARM_CALL",
                        symbol: String::new(),
                        detail: "branch target not 4-byte aligned".into(),
                    });
                }
                let imm24 = (delta >> 2) & 0x00ff_ffff;
                let insn = u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap());
                let encoded = (insn & !0x00ff_ffff) | imm24 as u32;
                buf[offset..offset + 4].copy_from_slice(&encoded.to_le_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_ARM_JUMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        16
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 20]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        out[0..4].copy_from_slice(&0xe28f_c600u32.to_le_bytes()); // add ip, pc, #...
        out[4..8].copy_from_slice(&0xe28c_ca00u32.to_le_bytes()); // add ip, ip, #...
        out[8..12].copy_from_slice(&0xe5bc_f000u32.to_le_bytes()); // ldr pc, [ip, #...]!
        out[12..16].copy_from_slice(&(gotplt_delta as u32).to_le_bytes());
    }
}
