//! Where a [`Caret`] is a point in an input, a [`Span`] is a stretch of it.
//! Emitters underline spans.

use std::fmt;

use crate::caret::Caret;

/// The text between two carets, end exclusive. In `A : [foo]` the assertion
/// is the span from `0:4` to `0:9`.
#[derive(Clone, Debug, Default, Copy, Eq, Hash, PartialEq)]
pub struct Span {
    start: Caret,
    end: Caret,
}

impl Span {
    /// The carets can be given in either order.
    pub fn new(a: Caret, b: Caret) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Span { start, end }
    }

    pub fn start(&self) -> Caret {
        self.start
    }

    pub fn end(&self) -> Caret {
        self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line() == self.end.line()
    }

    /// The part of `self` also covered by `other`. Spans which only touch
    /// don't intersect.
    pub fn intersection(&self, other: Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if start < end {
            Some(Span { start, end })
        } else {
            None
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(from: (u32, u32), to: (u32, u32)) -> Span {
        Span::new(from.into(), to.into())
    }

    #[test]
    fn carets_are_sorted() {
        let assertion = span((0, 4), (0, 9));
        assert_eq!(assertion, span((0, 9), (0, 4)));
        assert_eq!(assertion.start(), Caret::new(0, 4));
        assert!(assertion.is_single_line());
        assert!(!span((0, 4), (2, 0)).is_single_line());
    }

    #[test]
    fn touching_spans_do_not_intersect() {
        let name = span((0, 0), (0, 1));
        let colon = span((0, 2), (0, 3));
        assert_eq!(name.intersection(colon), None);
        assert_eq!(span((0, 0), (0, 2)).intersection(colon), None);
    }

    #[test]
    fn intersection_is_the_overlap() {
        let line = span((1, 0), (1, 20));
        let rest = span((1, 4), (3, 0));
        assert_eq!(line.intersection(rest), Some(span((1, 4), (1, 20))));
        assert_eq!(rest.intersection(line), line.intersection(rest));
    }

    #[test]
    fn display_is_one_indexed() {
        assert_eq!(span((0, 4), (0, 9)).to_string(), "1:5-1:10");
    }
}
