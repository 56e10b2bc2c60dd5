use crate::core::base::*;

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

/// PCG32 generator producing the uniform variates fed to samplers.
#[derive(Debug, PartialEq, Clone)]
pub struct RNG {
    pub state: u64,
    pub inc: u64,
}

impl RNG {
    pub fn new() -> Self {
        RNG {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }

    pub fn new_sequence(initseq: u64) -> Self {
        let mut r = Self::new();
        r.set_sequence(initseq);
        return r;
    }

    pub fn set_sequence(&mut self, initseq: u64) {
        self.state = 0;
        self.inc = initseq.wrapping_shl(1) | 1;
        self.uniform_uint32();
        self.state = self.state.wrapping_add(PCG32_DEFAULT_STATE);
        self.uniform_uint32();
    }

    #[inline]
    pub fn uniform_uint32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);
        let xorshifted = ((oldstate.wrapping_shr(18) ^ oldstate).wrapping_shr(27)) as u32;
        let rot = oldstate.wrapping_shr(59) as u32;
        return xorshifted.rotate_right(rot);
    }

    /// Uniform integer in `[0, b)` without modulo bias.
    pub fn uniform_uint32_threshold(&mut self, b: u32) -> u32 {
        let threshold = b.wrapping_neg() % b;
        loop {
            let r = self.uniform_uint32();
            if r >= threshold {
                return r % b;
            }
        }
    }

    /// Uniform variate in `[0, 1)`.
    #[inline]
    pub fn uniform_float(&mut self) -> Float {
        let f = self.uniform_uint32() as Float * (1.0 / 4294967296.0);
        return Float::min(f, ONE_MINUS_EPSILON);
    }
}

impl Default for RNG {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_001() {
        let mut rng = RNG::new();
        let a = rng.uniform_float();
        let astate = rng.state;
        let b = rng.uniform_float();
        let bstate = rng.state;
        assert_ne!(a, b);
        assert_ne!(astate, bstate);
    }

    #[test]
    fn test_002() {
        let mut r1 = RNG::new_sequence(42);
        let mut r2 = RNG::new_sequence(42);
        let mut r3 = RNG::new_sequence(43);
        let a: Vec<u32> = (0..8).map(|_| r1.uniform_uint32()).collect();
        let b: Vec<u32> = (0..8).map(|_| r2.uniform_uint32()).collect();
        let c: Vec<u32> = (0..8).map(|_| r3.uniform_uint32()).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_003() {
        let mut rng = RNG::new_sequence(1);
        for _ in 0..1000 {
            assert!(rng.uniform_uint32_threshold(5) < 5);
            let f = rng.uniform_float();
            assert!(f >= 0.0 && f < 1.0);
        }
    }
}
