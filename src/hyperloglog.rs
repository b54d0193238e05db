//! Fixed-register HyperLogLog cardinality sketch, used to pre-size the
//! concurrent fragment-interning map for each mergeable section before
//! the actual fragments are known.

const REGISTERS: usize = 1 << 10;
const ALPHA_M: f64 = 0.7213 / (1.0 + 1.079 / REGISTERS as f64);

pub struct HyperLogLog {
    registers: Vec<u8>,
}

impl HyperLogLog {
    pub fn new() -> Self {
        HyperLogLog { registers: vec![0; REGISTERS] }
    }

    pub fn insert(&mut self, hash: u64) {
        let idx = (hash & (REGISTERS as u64 - 1)) as usize;
        let rest = hash >> 10;
        let rank = (rest.trailing_zeros() + 1).min(64) as u8;
        if rank > self.registers[idx] {
            self.registers[idx] = rank;
        }
    }

    /// Estimated cardinality, used only to pre-size a `dashmap`
    /// fragment table's shard capacity — callers should still tolerate
    /// growth since the estimate is approximate.
    pub fn estimate(&self) -> usize {
        let m = REGISTERS as f64;
        let sum: f64 = self.registers.iter().map(|&r| 2f64.powi(-(r as i32))).sum();
        let raw = ALPHA_M * m * m / sum;
        if raw <= 2.5 * m {
            let zeros = self.registers.iter().filter(|&&r| r == 0).count();
            if zeros != 0 {
                return (m * (m / zeros as f64).ln()) as usize;
            }
        }
        raw as usize
    }
}

impl Default for HyperLogLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_roughly_tracks_distinct_count() {
        let mut hll = HyperLogLog::new();
        for i in 0..5000u64 {
            let hash = i.wrapping_mul(0x9E3779B97F4A7C15);
            hll.insert(hash);
        }
        let estimate = hll.estimate();
        assert!(estimate > 2000 && estimate < 12000, "estimate={estimate}");
    }
}
