//! Byte/word conversion helpers shared by hash implementations.
//!
//! All conversions spell out their byte order; nothing here reinterprets a
//! byte buffer in place, so the helpers behave identically on little- and
//! big-endian targets and carry no alignment requirements.

/// Read a slice of bytes into a slice of little-endian `u32` words.
/// `src` must hold exactly `4 * dst.len()` bytes.
pub fn read_u32v_le(dst: &mut [u32], src: &[u8]) {
    assert_eq!(src.len(), 4 * dst.len());
    for (word, chunk) in dst.iter_mut().zip(src.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Write a `u32` into the destination in little-endian format.
/// `dst` must be exactly 4 bytes.
pub fn write_u32_le(dst: &mut [u8], val: u32) {
    assert_eq!(dst.len(), 4);
    dst.copy_from_slice(&val.to_le_bytes());
}

/// Write a `u64` into the destination in little-endian format.
/// `dst` must be exactly 8 bytes.
pub fn write_u64_le(dst: &mut [u8], val: u64) {
    assert_eq!(dst.len(), 8);
    dst.copy_from_slice(&val.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::{read_u32v_le, write_u32_le, write_u64_le};

    #[test]
    fn read_words_le() {
        let src = [0x01, 0x02, 0x03, 0x04, 0xff, 0x00, 0x00, 0x80];
        let mut dst = [0u32; 2];
        read_u32v_le(&mut dst, &src);
        assert_eq!(dst, [0x04030201, 0x800000ff]);
    }

    #[test]
    fn write_u32_round_trips() {
        let mut buf = [0u8; 4];
        write_u32_le(&mut buf, 0x67452301);
        assert_eq!(buf, [0x01, 0x23, 0x45, 0x67]);
        let mut word = [0u32; 1];
        read_u32v_le(&mut word, &buf);
        assert_eq!(word[0], 0x67452301);
    }

    #[test]
    fn write_u64_le_layout() {
        let mut buf = [0u8; 8];
        write_u64_le(&mut buf, 8);
        assert_eq!(buf, [8, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn read_rejects_short_src() {
        let src = [0u8; 7];
        let mut dst = [0u32; 2];
        read_u32v_le(&mut dst, &src);
    }
}
