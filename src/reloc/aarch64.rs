//! AArch64 relocation backend: a fully-worked `Target` implementation,
//! including the ADRP/ADD page-relative pair and branch-immediate
//! encodings thunks depend on.

use crate::elf::*;
use crate::error::{LinkError, Result};
use crate::reloc::{OutputKind, RelocInputs, SymbolClass, Target};

pub struct AArch64;

fn page(addr: i64) -> i64 {
    addr & !0xfff
}

fn encode_adr_imm(insn: u32, imm21: i32) -> u32 {
    let immlo = (imm21 as u32) & 0x3;
    let immhi = ((imm21 as u32) >> 2) & 0x7ffff;
    (insn & !(0x3 << 29) & !(0x7ffff << 5)) | (immlo << 29) | (immhi << 5)
}

fn check_range(value: i64, bits: u32, reloc: &'static str) -> Result<i64> {
    let half = 1i64 << (bits - 1);
    if value < -half || value >= half {
        return Err(LinkError::RelocOverflow {
            reloc,
            symbol: String::new(),
            detail: format!("value {value:#x} does not fit in {bits} bits"),
        });
    }
    Ok(value)
}

impl Target for AArch64 {
    fn name(&self) -> &'static str {
        "aarch64"
    }

    fn apply(&self, r_type: u32, inputs: RelocInputs, buf: &mut [u8], offset: usize) -> Result<()> {
        let s = inputs.s as i64;
        let a = inputs.a;
        let p = inputs.p as i64;
        match r_type {
            R_AARCH64_NONE => Ok(()),
            R_AARCH64_ABS64 => {
                buf[offset..offset + 8].copy_from_slice(&((s + a) as u64).to_le_bytes());
                Ok(())
            }
            R_AARCH64_ABS32 => {
                let v = check_range(s + a, 32, "R_AARCH64_ABS32")?;
                buf[offset..offset + 4].copy_from_slice(&(v as u32).to_le_bytes());
                Ok(())
            }
            R_AARCH64_PREL32 => {
                let v = check_range(s + a - p, 32, "R_AARCH64_PREL32")?;
                buf[offset..offset + 4].copy_from_slice(&(v as u32).to_le_bytes());
                Ok(())
            }
            R_AARCH64_ADR_PREL_PG_HI21 | R_AARCH64_ADR_PREL_PG_HI21_NC => {
                let imm = (page(s + a) - page(p)) >> 12;
                check_range(imm, 21, "R_AARCH64_ADR_PREL_PG_HI21")?;
                let insn = u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap());
                let encoded = encode_adr_imm(insn, imm as i32);
                buf[offset..offset + 4].copy_from_slice(&encoded.to_le_bytes());
                Ok(())
            }
            R_AARCH64_ADD_ABS_LO12_NC => {
                let imm = (s + a) & 0xfff;
                let insn = u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap());
                let encoded = (insn & !(0xfff << 10)) | ((imm as u32) << 10);
                buf[offset..offset + 4].copy_from_slice(&encoded.to_le_bytes());
                Ok(())
            }
            R_AARCH64_CALL26 | R_AARCH64_JUMP26 => {
                let target_addr = if self.is_plt_reloc(r_type) {
                    inputs.gotplt as i64
                } else {
                    s
                };
                let imm = (target_addr + a - p) >> 2;
                check_range(imm, 26, "R_AARCH64_CALL26")?;
                let insn = u32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap());
                let encoded = (insn & !0x03ff_ffff) | (imm as u32 & 0x03ff_ffff);
                buf[offset..offset + 4].copy_from_slice(&encoded.to_le_bytes());
                Ok(())
            }
            R_AARCH64_TLS_TPREL | R_AARCH64_TLS_DTPREL => {
                let v = (s - inputs.tp as i64) + a;
                buf[offset..offset + 8].copy_from_slice(&(v as u64).to_le_bytes());
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn is_plt_reloc(&self, r_type: u32) -> bool {
        matches!(r_type, R_AARCH64_JUMP_SLOT)
    }

    fn plt_entry_size(&self) -> usize {
        16
    }

    fn plt_header_template(&self) -> &'static [u8] {
        // stp x16,x30,[sp,#-16]!; adrp x16,GOTPLT[0]; ldr x17,[x16,...];
        // add x16,x16,...; br x17; nop.
        &[
            0xf0, 0x7b, 0xbf, 0xa9, // stp x16, x30, [sp, #-16]!
            0x10, 0x00, 0x00, 0x90, // adrp x16, page(GOTPLT)
            0x11, 0x02, 0x40, 0xf9, // ldr  x17, [x16, #off]
            0x10, 0x02, 0x00, 0x91, // add  x16, x16, #off
            0x20, 0x02, 0x1f, 0xd6, // br   x17
            0x1f, 0x20, 0x03, 0xd5, // nop
        ]
    }

    fn encode_plt_entry(&self, _index: usize, gotplt_delta: i64, out: &mut [u8]) {
        let page_delta = (page(gotplt_delta) >> 12) as i32;
        let adrp = encode_adr_imm(0x9000_0010, page_delta);
        out[0..4].copy_from_slice(&adrp.to_le_bytes());
        let lo12 = (gotplt_delta & 0xfff) as u32;
        let ldr = 0xf940_0211u32 | ((lo12 >> 3) << 10);
        out[4..8].copy_from_slice(&ldr.to_le_bytes());
        let add = 0x9100_0210u32 | (lo12 << 10);
        out[8..12].copy_from_slice(&add.to_le_bytes());
        out[12..16].copy_from_slice(&0xd61f_0220u32.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs64_adds_addend() {
        let target = AArch64;
        let mut buf = [0u8; 8];
        target
            .apply(R_AARCH64_ABS64, RelocInputs { s: 0x4000, a: 4, ..Default::default() }, &mut buf, 0)
            .unwrap();
        assert_eq!(u64::from_le_bytes(buf), 0x4004);
    }

    #[test]
    fn adrp_out_of_range_rejected() {
        let target = AArch64;
        let mut buf = [0x00, 0x00, 0x00, 0x90];
        let err = target.apply(
            R_AARCH64_ADR_PREL_PG_HI21,
            RelocInputs { s: i64::MAX as u64, a: 0, p: 0, ..Default::default() },
            &mut buf,
            0,
        );
        assert!(err.is_err());
    }
}
