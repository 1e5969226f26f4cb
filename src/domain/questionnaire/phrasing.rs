//! Seedable choice among paraphrase variants.

use uuid::Uuid;

/// xorshift64 generator used to pick prompt wording.
///
/// Seeded builds always produce the same wording; `from_entropy` seeds from a
/// random UUID for production variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhrasingRng {
    state: u64,
}

impl PhrasingRng {
    pub fn seeded(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        let state = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state }
    }

    pub fn from_entropy() -> Self {
        let bits = Uuid::new_v4().as_u128();
        Self::seeded((bits >> 64) as u64 ^ bits as u64)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns an index in `0..bound`. `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Picks one variant uniformly. Returns an empty string for an empty slice.
    pub fn pick<'a>(&mut self, variants: &[&'a str]) -> &'a str {
        if variants.is_empty() {
            return "";
        }
        variants[self.next_index(variants.len())]
    }
}
