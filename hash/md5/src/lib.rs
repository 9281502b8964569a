//! An implementation of the MD5 message digest (RFC 1321).
//!
//! The whole computation is a single call: pass any byte sequence to
//! [`digest`] for the raw 16-byte value, or to [`digest_hex`] for the
//! conventional 32-character lowercase hex rendering. Every call is
//! self-contained, so independent digests may run concurrently without
//! coordination.
//!
//! MD5 is not collision resistant; use it only where a legacy format or
//! protocol demands it, never for new security designs.

use hash_bytes::{read_u32v_le, write_u32_le};

mod consts;
mod padding;

use consts::{C1, C2, C3, C4};

/// Length of an MD5 digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// Length of a compression block in bytes.
pub const BLOCK_LEN: usize = 64;

/// An MD5 digest value (16 bytes / 128 bits).
pub type Digest = [u8; DIGEST_LEN];

/// The four-word running state of an MD5 computation.
#[derive(Clone, Copy)]
struct Md5State {
    s0: u32,
    s1: u32,
    s2: u32,
    s3: u32,
}

impl Md5State {
    fn new() -> Md5State {
        Md5State {
            s0: consts::S0,
            s1: consts::S1,
            s2: consts::S2,
            s3: consts::S3,
        }
    }

    /// Fold one 64-byte block into the state: 64 rounds in four groups of
    /// 16, then the feed-forward addition that carries the state across
    /// blocks. `input` must be exactly [`BLOCK_LEN`] bytes.
    fn process_block(&mut self, input: &[u8]) {
        fn f(u: u32, v: u32, w: u32) -> u32 { (u & v) | (!u & w) }

        fn g(u: u32, v: u32, w: u32) -> u32 { (u & w) | (v & !w) }

        fn h(u: u32, v: u32, w: u32) -> u32 { u ^ v ^ w }

        fn i(u: u32, v: u32, w: u32) -> u32 { v ^ (u | !w) }

        fn op_f(w: u32, x: u32, y: u32, z: u32, m: u32, c: u32, s: u32) -> u32 {
            w.wrapping_add(f(x, y, z))
                .wrapping_add(m)
                .wrapping_add(c)
                .rotate_left(s)
                .wrapping_add(x)
        }

        fn op_g(w: u32, x: u32, y: u32, z: u32, m: u32, c: u32, s: u32) -> u32 {
            w.wrapping_add(g(x, y, z))
                .wrapping_add(m)
                .wrapping_add(c)
                .rotate_left(s)
                .wrapping_add(x)
        }

        fn op_h(w: u32, x: u32, y: u32, z: u32, m: u32, c: u32, s: u32) -> u32 {
            w.wrapping_add(h(x, y, z))
                .wrapping_add(m)
                .wrapping_add(c)
                .rotate_left(s)
                .wrapping_add(x)
        }

        fn op_i(w: u32, x: u32, y: u32, z: u32, m: u32, c: u32, s: u32) -> u32 {
            w.wrapping_add(i(x, y, z))
                .wrapping_add(m)
                .wrapping_add(c)
                .rotate_left(s)
                .wrapping_add(x)
        }

        let mut a = self.s0;
        let mut b = self.s1;
        let mut c = self.s2;
        let mut d = self.s3;

        let mut data = [0u32; 16];

        read_u32v_le(&mut data, input);

        // rounds 0..16: message word for round i is M[i]
        for i in (0..16).step_by(4) {
            a = op_f(a, b, c, d, data[i], C1[i], 7);
            d = op_f(d, a, b, c, data[i + 1], C1[i + 1], 12);
            c = op_f(c, d, a, b, data[i + 2], C1[i + 2], 17);
            b = op_f(b, c, d, a, data[i + 3], C1[i + 3], 22);
        }

        // rounds 16..32: M[(5i + 1) mod 16]
        for i in (0..16).step_by(4) {
            a = op_g(a, b, c, d, data[(5 * i + 1) & 0xf], C2[i], 5);
            d = op_g(d, a, b, c, data[(5 * (i + 1) + 1) & 0xf], C2[i + 1], 9);
            c = op_g(c, d, a, b, data[(5 * (i + 2) + 1) & 0xf], C2[i + 2], 14);
            b = op_g(b, c, d, a, data[(5 * (i + 3) + 1) & 0xf], C2[i + 3], 20);
        }

        // rounds 32..48: M[(3i + 5) mod 16]
        for i in (0..16).step_by(4) {
            a = op_h(a, b, c, d, data[(3 * i + 5) & 0xf], C3[i], 4);
            d = op_h(d, a, b, c, data[(3 * (i + 1) + 5) & 0xf], C3[i + 1], 11);
            c = op_h(c, d, a, b, data[(3 * (i + 2) + 5) & 0xf], C3[i + 2], 16);
            b = op_h(b, c, d, a, data[(3 * (i + 3) + 5) & 0xf], C3[i + 3], 23);
        }

        // rounds 48..64: M[(7i) mod 16]
        for i in (0..16).step_by(4) {
            a = op_i(a, b, c, d, data[(7 * i) & 0xf], C4[i], 6);
            d = op_i(d, a, b, c, data[(7 * (i + 1)) & 0xf], C4[i + 1], 10);
            c = op_i(c, d, a, b, data[(7 * (i + 2)) & 0xf], C4[i + 2], 15);
            b = op_i(b, c, d, a, data[(7 * (i + 3)) & 0xf], C4[i + 3], 21);
        }

        self.s0 = self.s0.wrapping_add(a);
        self.s1 = self.s1.wrapping_add(b);
        self.s2 = self.s2.wrapping_add(c);
        self.s3 = self.s3.wrapping_add(d);
    }

    /// Serialize the state as the digest: words A,B,C,D, each little-endian.
    fn digest(&self) -> Digest {
        let mut out = [0u8; DIGEST_LEN];
        write_u32_le(&mut out[0..4], self.s0);
        write_u32_le(&mut out[4..8], self.s1);
        write_u32_le(&mut out[8..12], self.s2);
        write_u32_le(&mut out[12..16], self.s3);
        out
    }
}

/// Compute the MD5 digest of `input`.
///
/// Total for any finite input; the same bytes always produce the same
/// digest.
pub fn digest(input: &[u8]) -> Digest {
    let padded = padding::pad(input);
    let mut state = Md5State::new();
    for block in padded.chunks_exact(BLOCK_LEN) {
        state.process_block(block);
    }
    state.digest()
}

/// Compute the MD5 digest of `input`, rendered as 32 lowercase hex digits.
pub fn digest_hex(input: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(2 * DIGEST_LEN);
    for byte in digest(input) {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0xf) as usize] as char);
    }
    out
}
