//! LoongArch relocation backend: the `PCALA` pc-relative-address pair
//! mirrors RISC-V's `PCREL_HI20`/`PCREL_LO12_I` split; see
//! [`super::riscv64`] for the analogous hi20/lo12 recombination.

use crate::elf::*;
use crate::error::Result;
use crate::reloc::{RelocInputs, Target};

pub struct LoongArch;

fn hi20(value: i64) -> i32 {
    (((value + 0x800) >> 12) & 0xfffff) as i32
}

fn lo12(value: i64) -> i32 {
    ((value << 52) >> 52) as i32
}

fn set_1rn_imm20(insn: u32, imm20: i32) -> u32 {
    (insn & !(0xfffff << 5)) | (((imm20 as u32) & 0xfffff) << 5)
}

fn set_1rn_imm12(insn: u32, imm12: i32) -> u32 {
    (insn & !(0xfff << 10)) | (((imm12 as u32) & 0xfff) << 10)
}

impl Target for LoongArch {
    fn name(&self) -> &'static str {
        "loongarch"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        let read_insn = |buf: &[u8]| u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap());
        match r_type {
            R_LARCH_NONE => Ok(()),
            R_LARCH_64 => {
                buf[offset..offset + 8].copy_from_slice(&((s + a) as u64).to_le_bytes());
                Ok(())
            }
            R_LARCH_32 => {
                buf[offset..offset + 4].copy_from_slice(&((s + a) as u32).to_le_bytes());
                Ok(())
            }
            R_LARCH_PCALA_HI20 => {
                let delta = s + a - p;
                let insn = read_insn(buf);
                let encoded = set_1rn_imm20(insn, hi20(delta));
                buf[offset..offset + 4].copy_from_slice(&encoded.to_le_bytes());
                Ok(())
            }
            R_LARCH_PCALA_LO12 => {
                let delta = s + a - p;
                let insn = read_insn(buf);
                let encoded = set_1rn_imm12(insn, lo12(delta));
                buf[offset..offset + 4].copy_from_slice(&encoded.to_le_bytes());
                Ok(())
            }
            R_LARCH_TLS_LE_HI20 => {
                let delta = s - inputs.tp as i64 + a;
                let insn = read_insn(buf);
                let encoded = set_1rn_imm20(insn, hi20(delta));
                buf[offset..offset + 4].copy_from_slice(&encoded.to_le_bytes());
                Ok(())
            }
            R_LARCH_TLS_LE_LO12 => {
                let delta = s - inputs.tp as i64 + a;
                let insn = read_insn(buf);
                let encoded = set_1rn_imm12(insn, lo12(delta));
                buf[offset..offset + 4].copy_from_slice(&encoded.to_le_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_LARCH_JUMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        16
    }

    fn plt_header_template(&self) -> &'static [u8] {
        &[0; 32]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        let pcaddu12i = set_1rn_imm20(0x1c00_000c, hi20(gotplt_delta));
        out[0..4].copy_from_slice(&pcaddu12i.to_le_bytes());
        let ld = set_1rn_imm12(0x28c0_018c, lo12(gotplt_delta));
        out[4..8].copy_from_slice(&ld.to_le_bytes());
        out[8..12].copy_from_slice(&0x4c00_0180u32.to_le_bytes()); // jirl
        out[12..16].copy_from_slice(&0x0340_0000u32.to_le_bytes()); // nop
    }
}
