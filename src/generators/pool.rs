// src/generators/pool.rs
//
// Pool-based generation: draw every character independently and
// uniformly (with replacement) from a fixed alphabet. No structural
// guarantees; an all-digit result is possible and scored accordingly.

use rand::Rng;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";

/// A fixed character alphabet one of the pool-based strategies draws
/// from. Pools differ only in symbol richness.
pub struct CharacterPool {
    chars: Vec<u8>,
}

impl CharacterPool {
    /// Letters, digits and the symbols `!#$&`, each appearing once.
    pub fn balanced() -> Self {
        Self::build(b"!#$&")
    }

    /// Same as `balanced` but with the symbols duplicated, doubling
    /// the probability of drawing one.
    pub fn symbol_rich() -> Self {
        Self::build(b"!#$&!#$&")
    }

    /// Letters, digits and only `!#`: symbols reachable without
    /// shift-key gymnastics on most layouts.
    pub fn easy_to_type() -> Self {
        Self::build(b"!#")
    }

    fn build(symbols: &[u8]) -> Self {
        let mut chars = Vec::with_capacity(62 + symbols.len());
        chars.extend_from_slice(UPPERCASE);
        chars.extend_from_slice(LOWERCASE);
        chars.extend_from_slice(DIGITS);
        chars.extend_from_slice(symbols);
        CharacterPool { chars }
    }

    /// Draw `length` characters uniformly from the pool.
    pub fn sample<R: Rng>(&self, rng: &mut R, length: usize) -> String {
        (0..length)
            .map(|_| self.chars[rng.gen_range(0..self.chars.len())] as char)
            .collect()
    }
}
