//! Byte-membership predicates for trim, search, and split.
//!
//! `ByteSet` unifies the matcher families accepted by the predicate-driven
//! operations: a single byte, a single char, a byte set, or a char set.
//! Matching is strictly byte-wise; a `char` member compares as its low eight
//! bits, so non-ASCII chars match the raw byte of the same value rather than
//! a UTF-8 sequence.

/// A set of bytes tested one byte at a time.
///
/// # Examples
///
/// ```
/// use utf8span::ByteSet;
///
/// assert!(b','.contains_byte(b','));
/// assert!([b',', b';'].contains_byte(b';'));
/// assert!([' ', '\t'].contains_byte(b'\t'));
/// assert!(!b",;".as_slice().contains_byte(b'.'));
/// ```
pub trait ByteSet {
    /// Whether `b` is a member of this set.
    fn contains_byte(&self, b: u8) -> bool;
}

impl ByteSet for u8 {
    #[inline]
    fn contains_byte(&self, b: u8) -> bool {
        b == *self
    }
}

impl ByteSet for char {
    #[inline]
    fn contains_byte(&self, b: u8) -> bool {
        b == *self as u8
    }
}

impl ByteSet for [u8] {
    #[inline]
    fn contains_byte(&self, b: u8) -> bool {
        self.contains(&b)
    }
}

impl ByteSet for [char] {
    #[inline]
    fn contains_byte(&self, b: u8) -> bool {
        self.iter().any(|&c| b == c as u8)
    }
}

impl<const N: usize> ByteSet for [u8; N] {
    #[inline]
    fn contains_byte(&self, b: u8) -> bool {
        self.as_slice().contains_byte(b)
    }
}

impl<const N: usize> ByteSet for [char; N] {
    #[inline]
    fn contains_byte(&self, b: u8) -> bool {
        self.as_slice().contains_byte(b)
    }
}

impl<S: ByteSet + ?Sized> ByteSet for &S {
    #[inline]
    fn contains_byte(&self, b: u8) -> bool {
        (**self).contains_byte(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_and_char() {
        assert!(b'x'.contains_byte(b'x'));
        assert!(!b'x'.contains_byte(b'y'));
        assert!('x'.contains_byte(b'x'));
    }

    #[test]
    fn char_members_compare_truncated() {
        // 'é' is U+00E9; as a set member it matches the raw byte 0xE9.
        assert!('é'.contains_byte(0xE9));
        assert!(['é'].contains_byte(0xE9));
    }

    #[test]
    fn slice_sets() {
        let bytes: &[u8] = b",;|";
        assert!(bytes.contains_byte(b'|'));
        assert!(!bytes.contains_byte(b' '));

        let chars: &[char] = &[',', ';'];
        assert!(chars.contains_byte(b','));
        assert!(!chars.contains_byte(b'.'));
    }
}
