//! Hexadecimal byte-range decoding and encoding.
//!
//! `try_hex_range` decodes a fixed run of hex digits directly from a byte
//! slice without materializing intermediate text; it backs identifier
//! parsing. `push_hex_lower` is the matching nibble-table encoder used for
//! identifier formatting.

/// Lookup table for converting nibbles to lowercase hex (0-9, a-f).
const HEX_CHARS_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Decode exactly `digits` hexadecimal bytes starting at `offset`.
///
/// Returns `None` if the slice is too short or any byte is not a hex digit.
/// At most eight digits fit the `u32` result.
///
/// # Examples
///
/// ```
/// use utf8span::hex::try_hex_range;
///
/// assert_eq!(try_hex_range(b"deadBEEF", 0, 8), Some(0xDEAD_BEEF));
/// assert_eq!(try_hex_range(b"xx12", 2, 2), Some(0x12));
/// assert_eq!(try_hex_range(b"12g4", 0, 4), None);
/// assert_eq!(try_hex_range(b"12", 0, 4), None);
/// ```
#[inline]
pub fn try_hex_range(data: &[u8], offset: usize, digits: usize) -> Option<u32> {
    let end = offset.checked_add(digits)?;
    if end > data.len() {
        return None;
    }
    let mut out: u32 = 0;
    for &b in &data[offset..end] {
        out = (out << 4) | u32::from(hex_digit(b)?);
    }
    Some(out)
}

/// Decode a single ASCII hex digit.
#[inline]
fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Append `bytes` to `out` as lowercase hexadecimal.
///
/// # Examples
///
/// ```
/// use utf8span::hex::push_hex_lower;
///
/// let mut out = String::new();
/// push_hex_lower(&mut out, &[0xDE, 0xAD]);
/// assert_eq!(out, "dead");
/// ```
#[inline]
pub fn push_hex_lower(out: &mut String, bytes: &[u8]) {
    out.reserve(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_CHARS_LOWER[(b >> 4) as usize] as char);
        out.push(HEX_CHARS_LOWER[(b & 0x0f) as usize] as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_mixed_case() {
        assert_eq!(try_hex_range(b"aBcD", 0, 4), Some(0xABCD));
    }

    #[test]
    fn rejects_non_hex_and_short_input() {
        assert_eq!(try_hex_range(b"12z4", 0, 4), None);
        assert_eq!(try_hex_range(b"1234", 2, 4), None);
        assert_eq!(try_hex_range(b"", 0, 1), None);
    }

    #[test]
    fn zero_digits_is_zero() {
        assert_eq!(try_hex_range(b"ff", 0, 0), Some(0));
    }

    #[test]
    fn encode_round_trip() {
        let mut out = String::new();
        push_hex_lower(&mut out, &[0x01, 0x23, 0x45, 0x67]);
        assert_eq!(out, "01234567");
        assert_eq!(try_hex_range(out.as_bytes(), 0, 8), Some(0x0123_4567));
    }
}
