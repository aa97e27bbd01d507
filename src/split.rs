//! Tokenization into sequences of views and escape-aware line extraction.
//!
//! `split` walks the window delimiter by delimiter, yielding sub-windows
//! that alias the original buffer. `read_line` and `skip_line` consume one
//! record at a time, honoring `\`-escaped terminators, and always leave an
//! exhausted view as an empty zero-length window.

use memchr::memchr2;

use crate::set::ByteSet;
use crate::view::ByteView;

/// The escape byte that suppresses a following line terminator.
const LINE_ESCAPE: u8 = b'\\';

impl ByteView {
    /// Split on a delimiter byte.
    ///
    /// Each delimiter occurrence yields the preceding segment as a view
    /// aliasing this buffer. With `ignore_empty`, zero-length segments are
    /// dropped (including the trailing one); without it they are kept in
    /// order. An empty input yields a single-element sequence containing the
    /// view itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let view = ByteView::from("a,,b,");
    /// let kept: Vec<_> = view.split(b',', true);
    /// assert_eq!(kept, [ByteView::from("a"), ByteView::from("b")]);
    ///
    /// let all = view.split(b',', false);
    /// assert_eq!(all.len(), 4);
    /// assert!(all[1].is_empty());
    /// assert!(all[3].is_empty());
    /// ```
    pub fn split(&self, delimiter: u8, ignore_empty: bool) -> Vec<ByteView> {
        self.split_by(|rest| rest.find_byte(delimiter), ignore_empty)
    }

    /// Split on any byte of `set`; otherwise identical to
    /// [`split`](Self::split).
    pub fn split_any<S: ByteSet + ?Sized>(&self, set: &S, ignore_empty: bool) -> Vec<ByteView> {
        self.split_by(|rest| rest.find_any(set), ignore_empty)
    }

    /// Split on an ASCII delimiter char; a non-ASCII delimiter yields an
    /// empty sequence.
    pub fn split_char(&self, delimiter: char, ignore_empty: bool) -> Vec<ByteView> {
        if delimiter.is_ascii() {
            self.split(delimiter as u8, ignore_empty)
        } else {
            Vec::new()
        }
    }

    fn split_by<F>(&self, find: F, ignore_empty: bool) -> Vec<ByteView>
    where
        F: Fn(&ByteView) -> Option<usize>,
    {
        if self.len == 0 {
            return vec![self.clone()];
        }
        let mut rest = self.clone();
        let mut out = Vec::new();
        while let Some(at) = find(&rest) {
            let piece = rest.sub_string(0, at);
            if !ignore_empty || !piece.is_empty() {
                out.push(piece);
            }
            rest.move_start(at as isize + 1);
        }
        if !rest.is_empty() || !ignore_empty {
            out.push(rest);
        }
        out
    }

    /// Consume one line into `line` and report whether a terminator was
    /// found.
    ///
    /// A line ends at `\r`, `\n`, or `\r\n`; a `\` immediately before a
    /// terminator suppresses it and scanning continues. The stored content
    /// excludes the terminator; the view advances past both, absorbing the
    /// `\n` of a `\r\n` pair. The final unterminated remainder is still
    /// stored, with `false` returned; the view is left empty either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use utf8span::ByteView;
    ///
    /// let mut view = ByteView::from("line1\r\nline2");
    /// let mut line = ByteView::empty();
    /// assert!(view.read_line(&mut line));
    /// assert_eq!(line, "line1");
    /// assert!(!view.read_line(&mut line));
    /// assert_eq!(line, "line2");
    /// assert!(view.is_empty());
    /// ```
    pub fn read_line(&mut self, line: &mut ByteView) -> bool {
        if self.len == 0 {
            *line = ByteView::empty();
            return false;
        }
        match self.find_line_end() {
            None => {
                *line = self.clone();
                self.offset += self.len - 1;
                self.len = 0;
                false
            }
            Some((at, terminator)) => {
                *line = ByteView {
                    buffer: self.buffer.clone(),
                    offset: self.offset,
                    len: at,
                };
                self.consume_line(at, terminator);
                true
            }
        }
    }

    /// Advance past one line without producing content. Returns `false`
    /// only when the view was already empty.
    pub fn skip_line(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        match self.find_line_end() {
            None => {
                self.offset += self.len - 1;
                self.len = 0;
            }
            Some((at, terminator)) => self.consume_line(at, terminator),
        }
        true
    }

    /// Window-relative position and value of the first unescaped line
    /// terminator.
    fn find_line_end(&self) -> Option<(usize, u8)> {
        let bytes = self.as_bytes();
        let mut from = 0;
        while let Some(rel) = memchr2(b'\r', b'\n', &bytes[from..]) {
            let at = from + rel;
            if at > 0 && bytes[at - 1] == LINE_ESCAPE {
                from = at + 1;
                continue;
            }
            return Some((at, bytes[at]));
        }
        None
    }

    /// Advance past a line of `content_len` bytes plus its terminator,
    /// absorbing the `\n` of a `\r\n` pair.
    fn consume_line(&mut self, content_len: usize, terminator: u8) {
        let consumed = content_len + 1;
        if consumed >= self.len {
            self.offset += self.len - 1;
            self.len = 0;
            return;
        }
        self.offset += consumed;
        self.len -= consumed;
        if terminator == b'\r' && self.buffer[self.offset] == b'\n' {
            self.offset += 1;
            self.len -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(views: &[ByteView]) -> Vec<String> {
        views.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn split_drops_empties_by_default() {
        let view = ByteView::from("a,,b,");
        assert_eq!(texts(&view.split(b',', true)), ["a", "b"]);
        assert_eq!(texts(&view.split(b',', false)), ["a", "", "b", ""]);
    }

    #[test]
    fn split_segments_alias_the_buffer() {
        let view = ByteView::from("one two");
        let parts = view.split(b' ', true);
        assert_eq!(parts[0].capacity(), view.capacity());
        assert_eq!(parts[1].offset(), 4);
    }

    #[test]
    fn split_empty_input_yields_itself() {
        let view = ByteView::empty();
        let parts = view.split(b',', true);
        assert_eq!(parts.len(), 1);
        assert!(parts[0].is_empty());
    }

    #[test]
    fn split_all_delimiters() {
        let view = ByteView::from(",,");
        assert!(view.split(b',', true).is_empty());
        assert_eq!(view.split(b',', false).len(), 3);
    }

    #[test]
    fn split_any_and_char() {
        let view = ByteView::from("a b;c");
        assert_eq!(texts(&view.split_any(&[b' ', b';'], true)), ["a", "b", "c"]);
        assert_eq!(texts(&view.split_char(';', true)), ["a b", "c"]);
        assert!(view.split_char('\u{e9}', true).is_empty());
    }

    #[test]
    fn read_line_crlf_and_remainder() {
        let mut view = ByteView::from("line1\r\nline2");
        let mut line = ByteView::empty();

        assert!(view.read_line(&mut line));
        assert_eq!(line, "line1");

        assert!(!view.read_line(&mut line));
        assert_eq!(line, "line2");
        assert!(view.is_empty());

        assert!(!view.read_line(&mut line));
        assert!(line.is_empty());
    }

    #[test]
    fn read_line_each_terminator() {
        for text in ["a\nb", "a\rb", "a\r\nb"] {
            let mut view = ByteView::from(text);
            let mut line = ByteView::empty();
            assert!(view.read_line(&mut line), "{text:?}");
            assert_eq!(line, "a");
            assert_eq!(view, "b");
        }
    }

    #[test]
    fn read_line_escaped_terminator() {
        let mut view = ByteView::from("one\\\ntwo\nthree");
        let mut line = ByteView::empty();
        assert!(view.read_line(&mut line));
        assert_eq!(line, "one\\\ntwo");
        assert_eq!(view, "three");
    }

    #[test]
    fn read_line_terminator_at_end() {
        let mut view = ByteView::from("last\n");
        let mut line = ByteView::empty();
        assert!(view.read_line(&mut line));
        assert_eq!(line, "last");
        assert!(view.is_empty());
        assert!(!view.read_line(&mut line));
    }

    #[test]
    fn skip_line_advances_identically() {
        let mut view = ByteView::from("head\r\ntail");
        assert!(view.skip_line());
        assert_eq!(view, "tail");
        assert!(view.skip_line());
        assert!(view.is_empty());
        assert!(!view.skip_line());
    }

    #[test]
    fn blank_lines_round_trip() {
        let mut view = ByteView::from("a\n\nb");
        let mut line = ByteView::empty();
        assert!(view.read_line(&mut line));
        assert_eq!(line, "a");
        assert!(view.read_line(&mut line));
        assert!(line.is_empty());
        assert!(!view.read_line(&mut line));
        assert_eq!(line, "b");
    }
}
