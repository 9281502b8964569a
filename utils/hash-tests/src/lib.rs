//! Shared helpers for testing one-shot hash functions.
//!
//! A hash under test is any `Fn(&[u8]) -> [u8; N]`; the helpers here run
//! known-answer vectors against it and generate reproducible randomized
//! inputs for differential and regression checks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A named known-answer vector: raw input bytes and the expected digest as a
/// lowercase hex string.
pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static str,
}

/// Render a digest as lowercase hex for comparison against vectors.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push(char::from_digit((b >> 4) as u32, 16).unwrap());
        s.push(char::from_digit((b & 0xf) as u32, 16).unwrap());
    }
    s
}

/// Run a set of known-answer vectors against a one-shot hash function.
pub fn known_answer_test<const N: usize, F>(hash: F, tests: &[Test])
where
    F: Fn(&[u8]) -> [u8; N],
{
    for t in tests {
        let out = hash(t.input);
        assert_eq!(to_hex(&out), t.output, "vector {:?} failed", t.name);
    }
}

/// Flip every bit of `input` in turn and assert each flip changes the digest.
/// A sanity regression guard, not a cryptographic diffusion claim.
pub fn flip_each_bit_test<const N: usize, F>(hash: F, input: &[u8])
where
    F: Fn(&[u8]) -> [u8; N],
{
    let base = hash(input);
    let mut scratch = input.to_vec();
    for byte in 0..scratch.len() {
        for bit in 0..8 {
            scratch[byte] ^= 1 << bit;
            assert_ne!(
                hash(&scratch),
                base,
                "flipping bit {} of byte {} left the digest unchanged",
                bit,
                byte
            );
            scratch[byte] ^= 1 << bit;
        }
    }
}

/// Generate `count` random inputs with lengths in `0..=max_len`, from a fixed
/// seed so failures reproduce.
pub fn random_inputs(seed: u64, count: usize, max_len: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..=max_len);
            (0..len).map(|_| rng.gen()).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{random_inputs, to_hex};

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(to_hex(&[0x00, 0x0f, 0xa5, 0xff]), "000fa5ff");
    }

    #[test]
    fn random_inputs_reproduce_from_seed() {
        assert_eq!(random_inputs(7, 8, 100), random_inputs(7, 8, 100));
    }

    #[test]
    fn random_inputs_respect_bounds() {
        for input in random_inputs(1, 32, 10) {
            assert!(input.len() <= 10);
        }
    }
}
