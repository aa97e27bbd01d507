//! Core windowed view over a shared byte buffer.
//!
//! `ByteView` aliases a reference-counted buffer through an offset + length
//! window, the same shared-arena slicing scheme used for zero-copy element
//! storage elsewhere in high-frequency parsers: cloning a view is O(1) and
//! never copies buffer data. `extract` and `deep_clone` are the copying
//! escape hatches that end aliasing.
//!
//! Window-mutating operations restore the view invariants by clamping rather
//! than failing, so the hot path carries no error branch. Callers that want
//! failure signaling use the `try_*` variants instead.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::Bytes;

use crate::error::{Error, Result};

/// Whether `b` is a UTF-8 continuation byte (`10xxxxxx`).
#[inline]
pub(crate) const fn is_continuation(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// A mutable offset + length window aliasing a shared UTF-8 byte buffer.
///
/// Many views may alias one buffer; the buffer lives as long as its
/// longest-lived holder and is never mutated through a view. Each view's
/// offset/length pair is private mutable state.
///
/// Invariants, restored by clamping after every mutating operation:
/// `offset <= buffer.len()` and `offset + len <= buffer.len()`. A zero
/// length is a valid, distinct empty state.
///
/// # Examples
///
/// ```
/// use utf8span::ByteView;
///
/// let mut view = ByteView::from("hello world");
/// view.sub_string_self(6, 5);
/// assert_eq!(view, "world");
///
/// view.reset_to_full();
/// assert_eq!(view, "hello world");
/// ```
#[derive(Debug, Clone)]
pub struct ByteView {
    pub(crate) buffer: Bytes,
    pub(crate) offset: usize,
    pub(crate) len: usize,
}

impl ByteView {
    /// View spanning a whole buffer.
    #[inline]
    pub fn new(buffer: Bytes) -> Self {
        let len = buffer.len();
        Self {
            buffer,
            offset: 0,
            len,
        }
    }

    /// View over a window of `buffer`; the window is clamped into bounds.
    #[inline]
    pub fn with_window(buffer: Bytes, offset: usize, len: usize) -> Self {
        let offset = offset.min(buffer.len());
        let len = len.min(buffer.len() - offset);
        Self {
            buffer,
            offset,
            len,
        }
    }

    /// View over a freshly allocated copy of `text`'s UTF-8 bytes, with no
    /// terminator appended.
    #[inline]
    pub fn from_text(text: &str) -> Self {
        Self::new(Bytes::copy_from_slice(text.as_bytes()))
    }

    /// A fresh empty view over the shared zero-length buffer.
    #[inline]
    pub fn empty() -> Self {
        Self {
            buffer: Bytes::new(),
            offset: 0,
            len: 0,
        }
    }

    /// Window length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the window is zero-length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the whole underlying buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Window start within the underlying buffer.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The windowed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[self.offset..self.offset + self.len]
    }

    /// Whether the window is empty or holds only space bytes.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.as_bytes().iter().all(|&b| b == b' ')
    }

    /// Byte at `index`, with saturating access: the index is clamped into
    /// the window and then into the buffer, so the call never fails. An
    /// empty buffer yields `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let view = ByteView::from("abc");
    /// assert_eq!(view.byte_at(1), b'b');
    /// assert_eq!(view.byte_at(99), b'c');
    /// ```
    #[inline]
    pub fn byte_at(&self, index: usize) -> u8 {
        if self.buffer.is_empty() {
            return 0;
        }
        let index = index.min(self.len.saturating_sub(1));
        let at = (self.offset + index).min(self.buffer.len() - 1);
        self.buffer[at]
    }

    /// Checked counterpart of [`byte_at`](Self::byte_at): fails instead of
    /// clamping when `index` is outside the window.
    #[inline]
    pub fn try_byte_at(&self, index: usize) -> Result<u8> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(self.buffer[self.offset + index])
    }

    /// Checked sub-window: fails instead of clamping when the range does not
    /// fit inside the current window. No code-point-boundary correction is
    /// applied.
    pub fn try_window(&self, start: usize, len: usize) -> Result<ByteView> {
        let end = start.checked_add(len).unwrap_or(usize::MAX);
        if end > self.len {
            return Err(Error::WindowOutOfBounds {
                start,
                end,
                len: self.len,
            });
        }
        Ok(Self {
            buffer: self.buffer.clone(),
            offset: self.offset + start,
            len,
        })
    }

    /// Shift the window start by `delta` bytes: positive shrinks from the
    /// front, negative grows backward. Offset and length are re-clamped into
    /// the buffer afterward; overshooting the buffer start folds the excess
    /// back into the length so the window end stays put.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let mut view = ByteView::from("abcdef");
    /// view.move_start(2);
    /// assert_eq!(view, "cdef");
    /// view.move_start(-1);
    /// assert_eq!(view, "bcdef");
    /// view.move_start(-100);
    /// assert_eq!(view, "abcdef");
    /// ```
    pub fn move_start(&mut self, delta: isize) {
        let buf_len = self.buffer.len();
        let mut offset = self.offset as isize + delta;
        let mut len = self.len as isize - delta;
        if offset < 0 {
            len += offset;
            offset = 0;
        } else if offset as usize >= buf_len {
            offset = buf_len.saturating_sub(1) as isize;
            len = 0;
        }
        let offset = offset as usize;
        self.offset = offset;
        self.len = if len <= 0 {
            0
        } else {
            (len as usize).min(buf_len - offset)
        };
    }

    /// Reset the window to span the entire buffer.
    #[inline]
    pub fn reset_to_full(&mut self) {
        self.offset = 0;
        self.len = self.buffer.len();
    }

    /// Content hash: a running accumulator seeded with the window length,
    /// folding each byte via shift-add in wrapping 32-bit arithmetic and
    /// masked non-negative. Views with equal content hash equally regardless
    /// of which buffer backs them.
    pub fn hash_code(&self) -> i32 {
        let mut hash = self.len as i32;
        for &b in self.as_bytes() {
            hash = hash.wrapping_add(i32::from(b));
            hash = hash.wrapping_shl(5);
            hash = hash.wrapping_add(hash >> 26);
        }
        hash & 0x7fff_ffff
    }

    /// Decode the window as UTF-8 text. Malformed bytes are substituted, not
    /// reported; the window is assumed well-formed by construction.
    #[inline]
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Copy the current window into a privately owned buffer, ending
    /// aliasing. The result's offset is reset to zero.
    pub fn extract(&self) -> ByteView {
        ByteView {
            buffer: Bytes::copy_from_slice(self.as_bytes()),
            offset: 0,
            len: self.len,
        }
    }

    /// Copy the whole underlying buffer, keeping the current window
    /// position. Unlike `Clone`, which aliases, the result owns its buffer.
    pub fn deep_clone(&self) -> ByteView {
        ByteView {
            buffer: Bytes::copy_from_slice(&self.buffer),
            offset: self.offset,
            len: self.len,
        }
    }

    /// Newly allocated view holding `self`'s window followed by `other`'s.
    pub fn concat(&self, other: &ByteView) -> ByteView {
        let mut out = Vec::with_capacity(self.len + other.len);
        out.extend_from_slice(self.as_bytes());
        out.extend_from_slice(other.as_bytes());
        ByteView::new(Bytes::from(out))
    }

    /// Sub-window `[start, start + len)` of the current window as a new view
    /// aliasing the same buffer. `start` and `len` are clamped into the
    /// window, then the end of the range is pulled back to the nearest
    /// preceding code-point boundary: while the byte at the candidate end is
    /// a UTF-8 continuation byte, the end walks backward until a
    /// non-continuation byte or the range start. The start is never
    /// relocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let view = ByteView::from("caf\u{e9} au lait");
    /// // Cutting through the two-byte 'é' drops its continuation byte.
    /// let cut = view.sub_string(0, 5);
    /// assert!(cut.len() < 5);
    /// assert_eq!(view.sub_string(6, 2), "au");
    /// ```
    pub fn sub_string(&self, start: usize, len: usize) -> ByteView {
        let start = start.min(self.len);
        let len = len.min(self.len - start);
        let abs = self.offset + start;
        if abs >= self.buffer.len() {
            return ByteView {
                buffer: self.buffer.clone(),
                offset: self.buffer.len().saturating_sub(1),
                len: 0,
            };
        }
        if len == 0 {
            return ByteView {
                buffer: self.buffer.clone(),
                offset: abs,
                len: 0,
            };
        }
        let last = self.clip_to_boundary(abs, len);
        ByteView {
            buffer: self.buffer.clone(),
            offset: abs,
            len: last - abs + 1,
        }
    }

    /// [`sub_string`](Self::sub_string) from `start` through the window end.
    #[inline]
    pub fn sub_string_from(&self, start: usize) -> ByteView {
        self.sub_string(start, self.len.saturating_sub(start))
    }

    /// In-place counterpart of [`sub_string`](Self::sub_string): overwrites
    /// this view's window with the boundary-adjusted range.
    ///
    /// Collapse rules: an empty view is left untouched; `start >= len`
    /// collapses to an empty window at the current window's last byte;
    /// `len == 0` collapses to empty without moving the offset.
    pub fn sub_string_self(&mut self, start: usize, len: usize) {
        if self.len == 0 {
            return;
        }
        if start >= self.len {
            self.offset += self.len - 1;
            self.len = 0;
            return;
        }
        if len == 0 {
            self.len = 0;
            return;
        }
        let len = len.min(self.len - start);
        let abs = self.offset + start;
        if abs >= self.buffer.len() {
            self.offset = self.buffer.len().saturating_sub(1);
            self.len = 0;
            return;
        }
        let last = self.clip_to_boundary(abs, len);
        self.offset = abs;
        self.len = last - abs + 1;
    }

    /// In-place counterpart of [`sub_string_from`](Self::sub_string_from).
    #[inline]
    pub fn sub_string_self_from(&mut self, start: usize) {
        self.sub_string_self(start, self.len.saturating_sub(start));
    }

    /// Windowed slice decoded to owned text.
    #[inline]
    pub fn sub_string_text(&self, start: usize, len: usize) -> String {
        self.sub_string(start, len).to_text().into_owned()
    }

    /// Last included index of `[abs, abs + len)` after pulling the end back
    /// over any trailing continuation bytes. `abs` is an absolute buffer
    /// index with `abs + len <= buffer.len()` and `len > 0`.
    #[inline]
    fn clip_to_boundary(&self, abs: usize, len: usize) -> usize {
        let mut last = abs + len - 1;
        while last > abs && is_continuation(self.buffer[last]) {
            last -= 1;
        }
        last
    }
}

impl PartialEq for ByteView {
    /// Byte-for-byte window comparison; buffer identity is irrelevant and
    /// unequal lengths short-circuit.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteView {}

impl PartialEq<str> for ByteView {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteView {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for ByteView {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl Hash for ByteView {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for ByteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for ByteView {
    #[inline]
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for ByteView {
    #[inline]
    fn from(text: String) -> Self {
        Self::new(Bytes::from(text.into_bytes()))
    }
}

impl From<Vec<u8>> for ByteView {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(Bytes::from(bytes))
    }
}

impl From<Bytes> for ByteView {
    #[inline]
    fn from(buffer: Bytes) -> Self {
        Self::new(buffer)
    }
}
