//! Packs a sorted list of `R_*_RELATIVE` relocation addresses into the
//! compact `DT_RELR` bitmap encoding (a base address word followed by
//! bitmap words, each bit covering one pointer-sized slot relative to
//! the last base), used instead of `.rela.dyn` entries when
//! `--pack-dyn-relocs=relr` is requested.

pub fn pack_relr(mut addresses: Vec<u64>, word_size: u64) -> Vec<u64> {
    addresses.sort_unstable();
    addresses.dedup();

    let mut out = Vec::new();
    let mut i = 0;
    while i < addresses.len() {
        let base = addresses[i];
        out.push(base);
        let mut bitmap: u64 = 0;
        let mut j = i + 1;
        while j < addresses.len() {
            let delta = addresses[j] - base;
            let bit_capacity = (word_size * 8 - 1) as u64 * word_size;
            if delta == 0 || delta % word_size != 0 || delta >= bit_capacity {
                break;
            }
            let bit = delta / word_size - 1;
            bitmap |= 1u64 << bit;
            j += 1;
        }
        out.push(bitmap | 1);
        i = j;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_contiguous_relative_relocations() {
        let addrs = vec![0x1000, 0x1008, 0x1010, 0x1018];
        let packed = pack_relr(addrs, 8);
        assert_eq!(packed[0], 0x1000);
        assert_ne!(packed[1] & !1, 0);
    }

    #[test]
    fn starts_a_new_base_when_gap_too_large() {
        let addrs = vec![0x1000, 0x1000 + 63 * 8 * 8];
        let packed = pack_relr(addrs, 8);
        assert_eq!(packed.len(), 4);
    }
}
