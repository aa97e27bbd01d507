//! Leading and trailing run removal.
//!
//! Trimming is strictly byte-wise and stops once a single byte remains in
//! the window, so a view is never emptied by a trim. Every predicate family
//! comes in an in-place (`*_self`) and a copying form; the copying form
//! clones the view header and trims the clone, still aliasing the buffer.

use crate::set::ByteSet;
use crate::view::ByteView;

impl ByteView {
    /// Remove leading bytes matched by `set`, in place, leaving at least one
    /// byte in a non-empty window.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let mut view = ByteView::from("--x--");
    /// view.trim_start_matches_self(&b'-');
    /// assert_eq!(view, "x--");
    /// ```
    pub fn trim_start_matches_self<S: ByteSet + ?Sized>(&mut self, set: &S) {
        while self.len > 1 && set.contains_byte(self.buffer[self.offset]) {
            self.offset += 1;
            self.len -= 1;
        }
    }

    /// Remove trailing bytes matched by `set`, in place, leaving at least
    /// one byte in a non-empty window.
    pub fn trim_end_matches_self<S: ByteSet + ?Sized>(&mut self, set: &S) {
        while self.len > 1 && set.contains_byte(self.buffer[self.offset + self.len - 1]) {
            self.len -= 1;
        }
    }

    /// Trim both ends in place: start first, then end.
    pub fn trim_matches_self<S: ByteSet + ?Sized>(&mut self, set: &S) {
        self.trim_start_matches_self(set);
        self.trim_end_matches_self(set);
    }

    /// Remove leading space bytes in place.
    #[inline]
    pub fn trim_start_self(&mut self) {
        self.trim_start_matches_self(&b' ');
    }

    /// Remove trailing space bytes in place.
    #[inline]
    pub fn trim_end_self(&mut self) {
        self.trim_end_matches_self(&b' ');
    }

    /// Remove leading and trailing space bytes in place.
    #[inline]
    pub fn trim_self(&mut self) {
        self.trim_start_self();
        self.trim_end_self();
    }

    /// Copying form of [`trim_start_matches_self`](Self::trim_start_matches_self).
    pub fn trim_start_matches<S: ByteSet + ?Sized>(&self, set: &S) -> ByteView {
        let mut out = self.clone();
        out.trim_start_matches_self(set);
        out
    }

    /// Copying form of [`trim_end_matches_self`](Self::trim_end_matches_self).
    pub fn trim_end_matches<S: ByteSet + ?Sized>(&self, set: &S) -> ByteView {
        let mut out = self.clone();
        out.trim_end_matches_self(set);
        out
    }

    /// Copying form of [`trim_matches_self`](Self::trim_matches_self).
    pub fn trim_matches<S: ByteSet + ?Sized>(&self, set: &S) -> ByteView {
        let mut out = self.clone();
        out.trim_matches_self(set);
        out
    }

    /// Copying space trim from the start.
    #[inline]
    pub fn trim_start(&self) -> ByteView {
        self.trim_start_matches(&b' ')
    }

    /// Copying space trim from the end.
    #[inline]
    pub fn trim_end(&self) -> ByteView {
        self.trim_end_matches(&b' ')
    }

    /// Copying space trim from both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let view = ByteView::from("  padded  ");
    /// assert_eq!(view.trim(), "padded");
    /// assert_eq!(view, "  padded  ");
    /// ```
    #[inline]
    pub fn trim(&self) -> ByteView {
        self.trim_matches(&b' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_trim_both_ends() {
        let mut view = ByteView::from("   text   ");
        view.trim_self();
        assert_eq!(view, "text");
    }

    #[test]
    fn trim_leaves_one_byte_floor() {
        let mut view = ByteView::from("    ");
        view.trim_self();
        assert_eq!(view.len(), 1);
        assert_eq!(view, " ");

        let mut view = ByteView::from("-");
        view.trim_matches_self(&b'-');
        assert_eq!(view, "-");
    }

    #[test]
    fn trim_empty_is_noop() {
        let mut view = ByteView::empty();
        view.trim_self();
        assert!(view.is_empty());
    }

    #[test]
    fn byte_set_and_char_set_trims() {
        let mut view = ByteView::from("\t\n value;; ");
        view.trim_start_matches_self(&[b'\t', b'\n', b' ']);
        assert_eq!(view, "value;; ");
        view.trim_end_matches_self(&[';', ' ']);
        assert_eq!(view, "value");
    }

    #[test]
    fn copying_trims_alias_the_buffer() {
        let view = ByteView::from("xxdataxx");
        let trimmed = view.trim_matches(&b'x');
        assert_eq!(trimmed, "data");
        assert_eq!(trimmed.capacity(), view.capacity());
        assert_eq!(trimmed.offset(), 2);
        assert_eq!(view, "xxdataxx");
    }

    #[test]
    fn directional_trims() {
        let view = ByteView::from("  mid  ");
        assert_eq!(view.trim_start(), "mid  ");
        assert_eq!(view.trim_end(), "  mid");
    }
}
