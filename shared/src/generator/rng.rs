//! Seeded pseudo-random stream for synthetic harvest noise
//!
//! Not cryptographically secure. The stream is a pure function of the seed
//! string so that demo charts render identically on every load.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 16_777_619;
const OUTPUT_RESOLUTION: u32 = 1_000_000;

/// Hash a seed string to 32 bits with FNV-1a over its UTF-16 code units
pub fn hash_seed(seed: &str) -> u32 {
    seed.encode_utf16().fold(FNV_OFFSET_BASIS, |acc, unit| {
        (acc ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// 32-bit xorshift generator producing values in `[0, 1)`
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    /// Create a generator from a seed string
    pub fn new(seed: &str) -> Self {
        Self::from_state(hash_seed(seed))
    }

    /// Create a generator from a raw 32-bit state
    pub fn from_state(state: u32) -> Self {
        // xorshift is stuck at zero forever
        let state = if state == 0 { 1 } else { state };
        Self { state }
    }

    /// Advance the state and return the next value in `[0, 1)`
    pub fn next_unit(&mut self) -> f64 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        f64::from(s % OUTPUT_RESOLUTION) / f64::from(OUTPUT_RESOLUTION)
    }

    /// Uniform value in `[-half_width, +half_width]`
    pub fn next_symmetric(&mut self, half_width: f64) -> f64 {
        (self.next_unit() * 2.0 - 1.0) * half_width
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_unit())
    }
}
