//! Byte-level search over a view.
//!
//! Single-byte and substring searches go through `memchr`; byte-set and
//! char-set searches take any [`ByteSet`]. All positions are relative to the
//! view window.

use memchr::{memchr, memmem};

use crate::set::ByteSet;
use crate::view::ByteView;

impl ByteView {
    /// Position of the first occurrence of `b`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let view = ByteView::from("key=value");
    /// assert_eq!(view.find_byte(b'='), Some(3));
    /// assert_eq!(view.find_byte(b'!'), None);
    /// ```
    #[inline]
    pub fn find_byte(&self, b: u8) -> Option<usize> {
        memchr(b, self.as_bytes())
    }

    /// Position of the first occurrence of `c`. ASCII chars compare as a
    /// single byte; anything else is searched as its UTF-8 encoding.
    pub fn find_char(&self, c: char) -> Option<usize> {
        if c.is_ascii() {
            return self.find_byte(c as u8);
        }
        let mut buf = [0u8; 4];
        let needle = c.encode_utf8(&mut buf).as_bytes();
        if needle.len() > self.len {
            return None;
        }
        memmem::find(self.as_bytes(), needle)
    }

    /// Position of the first occurrence of `other`'s window, or `None`. An
    /// empty needle or a needle longer than this view yields `None`, never
    /// `Some(0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let hay = ByteView::from("abcabc");
    /// assert_eq!(hay.find(&ByteView::from("cab")), Some(2));
    /// assert_eq!(hay.find(&ByteView::from("abcabc")), Some(0));
    /// assert_eq!(hay.find(&ByteView::empty()), None);
    /// ```
    pub fn find(&self, other: &ByteView) -> Option<usize> {
        if other.len == 0 || other.len > self.len {
            return None;
        }
        memmem::find(self.as_bytes(), other.as_bytes())
    }

    /// [`find`](Self::find) with a text needle.
    pub fn find_str(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.len {
            return None;
        }
        memmem::find(self.as_bytes(), needle.as_bytes())
    }

    /// Position of the first byte matched by `set`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let view = ByteView::from("a;b,c");
    /// assert_eq!(view.find_any(&[b',', b';']), Some(1));
    /// assert_eq!(view.find_any(&['.', '!']), None);
    /// ```
    pub fn find_any<S: ByteSet + ?Sized>(&self, set: &S) -> Option<usize> {
        self.as_bytes().iter().position(|&b| set.contains_byte(b))
    }

    /// Whether the window begins with byte `b`. False on an empty view.
    #[inline]
    pub fn starts_with_byte(&self, b: u8) -> bool {
        self.len > 0 && self.buffer[self.offset] == b
    }

    /// Whether the window begins with `c`, compared as its low byte.
    #[inline]
    pub fn starts_with_char(&self, c: char) -> bool {
        self.starts_with_byte(c as u8)
    }

    /// Whether this view's window begins with `other`'s window. An empty
    /// needle matches.
    pub fn starts_with(&self, other: &ByteView) -> bool {
        other.len <= self.len && &self.as_bytes()[..other.len] == other.as_bytes()
    }

    /// [`starts_with`](Self::starts_with) with a text needle.
    pub fn starts_with_str(&self, needle: &str) -> bool {
        needle.len() <= self.len && &self.as_bytes()[..needle.len()] == needle.as_bytes()
    }

    /// Whether the window ends with byte `b`. False on an empty view.
    #[inline]
    pub fn ends_with_byte(&self, b: u8) -> bool {
        self.len > 0 && self.buffer[self.offset + self.len - 1] == b
    }

    /// Whether the window ends with `c`, compared as its low byte.
    #[inline]
    pub fn ends_with_char(&self, c: char) -> bool {
        self.ends_with_byte(c as u8)
    }

    /// Whether this view's window ends with `other`'s window. An empty
    /// needle matches.
    pub fn ends_with(&self, other: &ByteView) -> bool {
        other.len <= self.len && &self.as_bytes()[self.len - other.len..] == other.as_bytes()
    }

    /// [`ends_with`](Self::ends_with) with a text needle.
    pub fn ends_with_str(&self, needle: &str) -> bool {
        needle.len() <= self.len
            && &self.as_bytes()[self.len - needle.len()..] == needle.as_bytes()
    }

    /// Whether `other` occurs at a strictly positive position.
    ///
    /// Note the non-standard definition, kept for compatibility: a match at
    /// position 0 is reported as not contained. Use
    /// [`find`](Self::find)`.is_some()` for conventional containment.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let hay = ByteView::from("abcabc");
    /// assert!(hay.contains(&ByteView::from("bca")));
    /// assert!(!hay.contains(&ByteView::from("abcabc")));
    /// ```
    #[inline]
    pub fn contains(&self, other: &ByteView) -> bool {
        matches!(self.find(other), Some(i) if i > 0)
    }

    /// [`contains`](Self::contains) with a text needle; the same
    /// position-zero exclusion applies.
    #[inline]
    pub fn contains_str(&self, needle: &str) -> bool {
        matches!(self.find_str(needle), Some(i) if i > 0)
    }
}
