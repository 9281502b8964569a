use hash_bytes::write_u64_le;

/// Extend `input` into an owned buffer whose length is a multiple of 64
/// bytes: the message, a single `0x80` marker byte, the minimum run of zero
/// bytes bringing the length to 56 (mod 64), then the original bit-length as
/// a little-endian `u64`.
///
/// MD5 defines the trailing length mod 2^64, so the bit-length multiply is
/// allowed to wrap for inputs of 2^61 bytes or more.
pub fn pad(input: &[u8]) -> Vec<u8> {
    let rem = input.len() % 64;
    let zeros = if rem <= 55 { 55 - rem } else { 119 - rem };

    let mut padded = Vec::with_capacity(input.len() + 1 + zeros + 8);
    padded.extend_from_slice(input);
    padded.push(0x80);
    padded.resize(padded.len() + zeros, 0);

    let len_at = padded.len();
    padded.resize(len_at + 8, 0);
    write_u64_le(
        &mut padded[len_at..],
        (input.len() as u64).wrapping_mul(8),
    );

    debug_assert_eq!(padded.len() % 64, 0);
    padded
}
