//! Line maps
//!
//! Tokens and nodes only know byte offsets. People want lines and columns.
//! A [`LineMap`] records where each line starts so the two can be converted
//! without rescanning the whole input every time.

use crate::caret::Caret;

/// The byte offset of the start of every line in some text.
///
/// Lines end at `\n`, `\r\n`, `\r`, U+2028 or U+2029, the same set of line
/// terminators the scanner recognizes. The map doesn't keep the text, so
/// conversions that need to count characters take it as an argument and it
/// must be the same text the map was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMap {
    line_starts: Vec<usize>,
}

impl LineMap {
    /// Build the line map for `text`.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            match c {
                '\r' if matches!(chars.peek(), Some((_, '\n'))) => {
                    chars.next();
                    line_starts.push(i + 2);
                }
                '\r' | '\n' | '\u{2028}' | '\u{2029}' => {
                    line_starts.push(i + c.len_utf8())
                }
                _ => {}
            }
        }

        LineMap { line_starts }
    }

    /// The number of lines. Empty text has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// The offset at which `line` starts, if there is such a line.
    pub fn line_start(&self, line: u32) -> Option<usize> {
        self.line_starts.get(line as usize).copied()
    }

    /// The zero-indexed line containing `offset`.
    pub fn line_of(&self, offset: usize) -> u32 {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line as u32,
            Err(next) => (next - 1) as u32,
        }
    }

    /// The text of `line` without its line terminator.
    pub fn line_text<'t>(&self, text: &'t str, line: u32) -> &'t str {
        let Some(start) = self.line_start(line) else {
            return "";
        };
        let end = self
            .line_start(line + 1)
            .unwrap_or(text.len())
            .min(text.len());

        text[start..end].trim_end_matches(['\r', '\n', '\u{2028}', '\u{2029}'])
    }

    /// Convert a byte offset into a line and column. Offsets past the end of
    /// the text are clamped to the end, and offsets inside a multi-byte
    /// character count as being before it.
    pub fn position_at(&self, text: &str, offset: usize) -> Caret {
        let offset = offset.min(text.len());
        let line = self.line_of(offset);
        let start = self.line_starts[line as usize];
        let column = text[start..]
            .char_indices()
            .take_while(|(i, _)| start + i < offset)
            .count();

        Caret::new(line, column as u32)
    }

    /// Convert a line and column into a byte offset. A column past the end of
    /// its line is clamped to the end of that line, and a line past the end
    /// of the text gives the length of the text.
    pub fn offset_at(&self, text: &str, caret: impl Into<Caret>) -> usize {
        let caret = caret.into();
        let Some(start) = self.line_start(caret.line()) else {
            return text.len();
        };
        let line = self.line_text(text, caret.line());

        line.char_indices()
            .nth(caret.column() as usize)
            .map(|(i, _)| start + i)
            .unwrap_or(start + line.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "A :\n    `a`\r\n\nB : C";

    #[test]
    fn line_starts() {
        let map = LineMap::new(TEXT);
        assert_eq!(map.line_count(), 4);
        assert_eq!(map.line_start(0), Some(0));
        assert_eq!(map.line_start(1), Some(4));
        assert_eq!(map.line_start(2), Some(13));
        assert_eq!(map.line_start(3), Some(14));
        assert_eq!(map.line_start(4), None);
    }

    #[test]
    fn empty_text_has_one_line() {
        let map = LineMap::new("");
        assert_eq!(map.line_count(), 1);
        assert_eq!(map.position_at("", 0), Caret::new(0, 0));
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let map = LineMap::new("a\rb");
        assert_eq!(map.line_count(), 2);
        assert_eq!(map.position_at("a\rb", 2), Caret::new(1, 0));
    }

    #[test]
    fn position_and_offset_agree() {
        let map = LineMap::new(TEXT);
        for offset in [0, 2, 4, 8, 13, 14, 18] {
            let caret = map.position_at(TEXT, offset);
            assert_eq!(map.offset_at(TEXT, caret), offset, "{caret}");
        }
    }

    #[test]
    fn columns_count_characters() {
        let text = "≠≠ x";
        let map = LineMap::new(text);
        assert_eq!(map.position_at(text, 7), Caret::new(0, 3));
        assert_eq!(map.offset_at(text, Caret::new(0, 3)), 7);
    }

    #[test]
    fn offset_at_clamps() {
        let map = LineMap::new(TEXT);
        assert_eq!(map.offset_at(TEXT, Caret::new(0, 99)), 3);
        assert_eq!(map.offset_at(TEXT, Caret::new(99, 0)), TEXT.len());
    }

    #[test]
    fn line_text_drops_terminators() {
        let map = LineMap::new(TEXT);
        assert_eq!(map.line_text(TEXT, 1), "    `a`");
        assert_eq!(map.line_text(TEXT, 2), "");
        assert_eq!(map.line_text(TEXT, 3), "B : C");
    }
}
