//! Decimal integer and 128-bit identifier parsing directly from bytes.
//!
//! Both parsers work on a trimmed alias of the view, so the caller's window
//! is never mutated, and neither materializes intermediate text. Failure is
//! reported as `None`; there is no panic path.

use crate::hex::try_hex_range;
use crate::uuid::Uuid;
use crate::view::ByteView;

impl ByteView {
    /// Parse a decimal `i32` from the window.
    ///
    /// Surrounding spaces are ignored and an optional leading `+` or `-` is
    /// accepted. Digits accumulate until the first non-digit byte, which
    /// silently stops parsing rather than failing; overflow wraps. `None`
    /// only when the trimmed input is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// assert_eq!(ByteView::from("  -042x").parse_i32(), Some(-42));
    /// assert_eq!(ByteView::from("+7").parse_i32(), Some(7));
    /// assert_eq!(ByteView::from("px").parse_i32(), Some(0));
    /// assert_eq!(ByteView::from("").parse_i32(), None);
    /// ```
    pub fn parse_i32(&self) -> Option<i32> {
        let mut t = self.clone();
        t.trim_self();
        if t.is_empty() {
            return None;
        }
        let bytes = t.as_bytes();
        let mut at = 0;
        let negative = match bytes[0] {
            b'-' => {
                at = 1;
                true
            }
            b'+' => {
                at = 1;
                false
            }
            _ => false,
        };
        let mut result: i32 = 0;
        while at < bytes.len() {
            let digit = bytes[at].wrapping_sub(b'0');
            if digit > 9 {
                break;
            }
            result = result.wrapping_mul(10).wrapping_add(i32::from(digit));
            at += 1;
        }
        Some(if negative { result.wrapping_neg() } else { result })
    }

    /// Parse a 128-bit identifier from the window.
    ///
    /// With `dashes`, the input must hold at least 36 bytes of dashed
    /// 8-4-4-4-12 hex after space trimming, with each dash verified;
    /// without, at least 32 contiguous hex digits. The five groups are
    /// decoded straight from the bytes and assembled in RFC 4122 field
    /// order. Any bad digit, missing dash, or short input yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::{ByteView, Uuid};
    ///
    /// let text = "00112233-4455-6677-8899-aabbccddeeff";
    /// let id = ByteView::from(text).parse_uuid(true).unwrap();
    /// assert_eq!(id.to_string(), text);
    ///
    /// let undashed = ByteView::from(text.replace('-', ""));
    /// assert_eq!(undashed.parse_uuid(false), Some(id));
    /// assert_eq!(undashed.parse_uuid(true), None);
    /// ```
    pub fn parse_uuid(&self, dashes: bool) -> Option<Uuid> {
        let mut t = self.clone();
        t.trim_self();
        let min_len = if dashes { 36 } else { 32 };
        if t.len() < min_len {
            return None;
        }
        let bytes = t.as_bytes();
        let mut at = 0;

        let a = try_hex_range(bytes, at, 8)?;
        at += 8;
        at = skip_dash(bytes, at, dashes)?;

        let b = try_hex_range(bytes, at, 4)? as u16;
        at += 4;
        at = skip_dash(bytes, at, dashes)?;

        let c = try_hex_range(bytes, at, 4)? as u16;
        at += 4;
        at = skip_dash(bytes, at, dashes)?;

        let de = try_hex_range(bytes, at, 4)?;
        at += 4;
        at = skip_dash(bytes, at, dashes)?;

        let fghi = try_hex_range(bytes, at, 8)?;
        at += 8;
        let jk = try_hex_range(bytes, at, 4)?;

        let d = [
            (de >> 8) as u8,
            de as u8,
            (fghi >> 24) as u8,
            (fghi >> 16) as u8,
            (fghi >> 8) as u8,
            fghi as u8,
            (jk >> 8) as u8,
            jk as u8,
        ];
        Some(Uuid::from_fields(a, b, c, d))
    }
}

/// Verify and step over a group separator when `dashes` is set.
#[inline]
fn skip_dash(bytes: &[u8], at: usize, dashes: bool) -> Option<usize> {
    if !dashes {
        return Some(at);
    }
    if bytes.get(at) == Some(&b'-') {
        Some(at + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_trims_and_stops_at_non_digit() {
        assert_eq!(ByteView::from("  -042x").parse_i32(), Some(-42));
        assert_eq!(ByteView::from("123,456").parse_i32(), Some(123));
        assert_eq!(ByteView::from("   99   ").parse_i32(), Some(99));
    }

    #[test]
    fn int_sign_handling() {
        assert_eq!(ByteView::from("+17").parse_i32(), Some(17));
        assert_eq!(ByteView::from("-0").parse_i32(), Some(0));
        assert_eq!(ByteView::from("-").parse_i32(), Some(0));
    }

    #[test]
    fn int_failure_only_on_empty() {
        assert_eq!(ByteView::from("").parse_i32(), None);
        assert_eq!(ByteView::empty().parse_i32(), None);
        // Non-digit input parses as zero rather than failing.
        assert_eq!(ByteView::from("abc").parse_i32(), Some(0));
    }

    #[test]
    fn int_wraps_on_overflow() {
        assert_eq!(ByteView::from("2147483647").parse_i32(), Some(i32::MAX));
        assert_eq!(ByteView::from("2147483648").parse_i32(), Some(i32::MIN));
    }

    #[test]
    fn int_does_not_mutate_the_view() {
        let view = ByteView::from("  12  ");
        assert_eq!(view.parse_i32(), Some(12));
        assert_eq!(view, "  12  ");
    }

    #[test]
    fn uuid_round_trip_dashed() {
        let id = Uuid::from_fields(
            0xDEADBEEF,
            0x1234,
            0x5678,
            [0x9a, 0xbc, 0xde, 0xf0, 0x12, 0x34, 0x56, 0x78],
        );
        let text = id.to_string();
        assert_eq!(ByteView::from(text.as_str()).parse_uuid(true), Some(id));
    }

    #[test]
    fn uuid_round_trip_undashed() {
        let id = Uuid::from_bytes([0xA5; 16]);
        let simple = id.simple();
        assert_eq!(ByteView::from(simple.as_str()).parse_uuid(false), Some(id));
    }

    #[test]
    fn uuid_trims_whitespace() {
        let text = "  00112233-4455-6677-8899-aabbccddeeff  ";
        assert!(ByteView::from(text).parse_uuid(true).is_some());
    }

    #[test]
    fn uuid_truncation_fails() {
        let text = "00112233-4455-6677-8899-aabbccddeeff";
        let short = &text[..35];
        assert_eq!(ByteView::from(short).parse_uuid(true), None);
    }

    #[test]
    fn uuid_bad_input_fails() {
        // Wrong separator.
        assert_eq!(
            ByteView::from("00112233_4455_6677_8899_aabbccddeeff").parse_uuid(true),
            None
        );
        // Non-hex digit in the first group.
        assert_eq!(
            ByteView::from("0011223g-4455-6677-8899-aabbccddeeff").parse_uuid(true),
            None
        );
        // Too short entirely.
        assert_eq!(ByteView::from("1234").parse_uuid(false), None);
        assert_eq!(ByteView::empty().parse_uuid(true), None);
    }

    #[test]
    fn uuid_uppercase_hex_accepted() {
        let id = ByteView::from("DEADBEEF-0000-0000-0000-000000000000")
            .parse_uuid(true)
            .unwrap();
        assert_eq!(id.as_bytes()[0], 0xDE);
    }
}
