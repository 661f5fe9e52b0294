//! The characters code windows are drawn with.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineArt {
    Unicode,
    Ascii,
}

impl LineArt {
    pub fn new(unicode: bool) -> LineArt {
        if unicode {
            LineArt::Unicode
        } else {
            LineArt::Ascii
        }
    }

    /// The gutter between line numbers and source.
    pub fn vertical(self) -> char {
        match self {
            LineArt::Unicode => '│',
            LineArt::Ascii => '|',
        }
    }

    pub fn horizontal(self) -> char {
        match self {
            LineArt::Unicode => '─',
            LineArt::Ascii => '-',
        }
    }

    /// Where the gutter meets the rule above a window.
    pub fn tee(self) -> char {
        match self {
            LineArt::Unicode => '┬',
            LineArt::Ascii => '+',
        }
    }

    /// Points up at a highlighted column.
    pub fn up(self) -> char {
        match self {
            LineArt::Unicode => '↑',
            LineArt::Ascii => '^',
        }
    }

    /// Marks elided lines or truncated text.
    pub fn more(self) -> &'static str {
        match self {
            LineArt::Unicode => "…",
            LineArt::Ascii => "...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_one_column_per_char() {
        let art = LineArt::new(false);
        assert_eq!(art, LineArt::Ascii);
        assert!(art.more().is_ascii());
        assert!([art.vertical(), art.horizontal(), art.tee(), art.up()]
            .iter()
            .all(char::is_ascii));
    }
}
