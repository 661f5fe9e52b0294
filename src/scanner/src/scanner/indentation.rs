//! Line breaks and significant indentation.
//!
//! A line break can produce several tokens at once: the line terminator
//! itself, and then any indents or dedents caused by the next line. Those
//! are put in a [`TokenQueue`] and handed out one per scan.
//!
//! Both the queue and the [`IndentStack`] are shared with any snapshots taken
//! of the scanner, and only copied when they're changed afterwards.

use std::collections::VecDeque;
use std::rc::Rc;

use diagnostic::DiagnosticSink;

use super::combinator::is_line_terminator;
use super::Scanner;
use crate::token::SyntaxKind;

/// How many columns a tab advances to, at most.
pub const TAB_WIDTH: usize = 4;

/// The widths of the open indentation levels, innermost last. The outermost
/// level, column zero, is implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct IndentStack(Rc<Vec<usize>>);

/// What happened to the [`IndentStack`] on a new line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct IndentChange {
    pub dedents: usize,
    pub indent: bool,
}

impl IndentChange {
    pub fn is_empty(&self) -> bool {
        self.dedents == 0 && !self.indent
    }
}

impl IndentStack {
    /// The width of the innermost open level.
    pub fn current(&self) -> usize {
        self.0.last().copied().unwrap_or(0)
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Close the innermost level, if there is one.
    pub fn pop(&mut self) -> Option<usize> {
        if self.0.is_empty() {
            None
        } else {
            Rc::make_mut(&mut self.0).pop()
        }
    }

    /// Move to a line indented to `width`.
    ///
    /// Going back to a width that was never opened closes everything wider,
    /// and then opens `width` as a new level.
    pub fn adjust(&mut self, width: usize) -> IndentChange {
        let mut change = IndentChange::default();

        if width == self.current() {
            return change;
        }

        let stack = Rc::make_mut(&mut self.0);

        while matches!(stack.last(), Some(&top) if top > width) {
            stack.pop();
            change.dedents += 1;
        }

        if width > stack.last().copied().unwrap_or(0) {
            stack.push(width);
            change.indent = true;
        }

        change
    }
}

/// A token waiting to be handed out by [`Scanner::scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueuedToken {
    pub kind: SyntaxKind,
    pub start_pos: usize,
    pub token_pos: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TokenQueue(Rc<VecDeque<QueuedToken>>);

impl TokenQueue {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, token: QueuedToken) {
        Rc::make_mut(&mut self.0).push_back(token);
    }

    pub fn pop(&mut self) -> Option<QueuedToken> {
        if self.0.is_empty() {
            None
        } else {
            Rc::make_mut(&mut self.0).pop_front()
        }
    }
}

impl<D: DiagnosticSink> Scanner<'_, D> {
    /// Scan a line break, queueing it along with whatever the indentation of
    /// the next line calls for.
    pub(crate) fn line_terminator(&mut self) -> SyntaxKind {
        if self.str("\r\n").is_none() {
            self.advance();
        }

        self.queue.push(QueuedToken {
            kind: SyntaxKind::LineTerminatorToken,
            start_pos: self.start_pos,
            token_pos: self.token_pos,
            end: self.pos,
        });

        self.measure_indentation();
        SyntaxKind::LineTerminatorToken
    }

    /// Compare the indentation of the line starting at `pos` to the open
    /// levels, and queue indents and dedents to match.
    ///
    /// Lines with nothing but whitespace or a comment don't count.
    fn measure_indentation(&mut self) {
        let line_start = self.pos;
        let (width, len) = leading_indentation(self.remaining_input());
        let first = line_start + len;

        if is_blank_line(&self.text[first..]) {
            return;
        }

        let change = self.indents.adjust(width);
        if change.is_empty() {
            return;
        }

        self.pos = first;

        // Only the first of these owns the line's leading whitespace.
        let mut start_pos = line_start;
        let kinds = std::iter::repeat(SyntaxKind::DedentToken)
            .take(change.dedents)
            .chain(change.indent.then_some(SyntaxKind::IndentToken));

        for kind in kinds {
            self.queue.push(QueuedToken {
                kind,
                start_pos,
                token_pos: first,
                end: first,
            });
            start_pos = first;
        }
    }

    /// At the end of the input, close any open levels one at a time before
    /// reporting the end.
    pub(crate) fn end_of_file(&mut self) -> SyntaxKind {
        match self.indents.pop() {
            Some(_) => SyntaxKind::DedentToken,
            None => SyntaxKind::EndOfFileToken,
        }
    }
}

/// The width of the spaces and tabs starting `line`, and their length in
/// bytes.
pub(crate) fn leading_indentation(line: &str) -> (usize, usize) {
    let mut width = 0;
    let mut len = 0;

    for c in line.chars() {
        match c {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH - width % TAB_WIDTH,
            _ => break,
        }
        len += 1;
    }

    (width, len)
}

/// Is there nothing but comments on the rest of this line? A block comment
/// that runs onto another line leaves this one blank.
fn is_blank_line(mut rest: &str) -> bool {
    loop {
        rest = rest.trim_start_matches(|c: char| c == ' ' || c == '\t');

        let comment = match rest.strip_prefix("/*") {
            Some(comment) => comment,
            None => {
                return rest.starts_with("//")
                    || rest.chars().next().map_or(true, is_line_terminator)
            }
        };

        match comment.find("*/") {
            Some(end) if !comment[..end].contains(is_line_terminator) => {
                rest = &comment[end + 2..];
            }
            _ => return true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_opens_one_level() {
        let mut stack = IndentStack::default();
        let change = stack.adjust(4);
        assert_eq!(change, IndentChange { dedents: 0, indent: true });
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), 4);
    }

    #[test]
    fn narrower_closes_every_wider_level() {
        let mut stack = IndentStack::default();
        stack.adjust(2);
        stack.adjust(4);
        stack.adjust(8);

        let change = stack.adjust(2);
        assert_eq!(change, IndentChange { dedents: 2, indent: false });
        assert_eq!(stack.current(), 2);
    }

    #[test]
    fn inconsistent_dedent_reopens() {
        let mut stack = IndentStack::default();
        stack.adjust(4);
        stack.adjust(8);

        let change = stack.adjust(6);
        assert_eq!(change, IndentChange { dedents: 1, indent: true });
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.current(), 6);
    }

    #[test]
    fn same_width_is_no_change() {
        let mut stack = IndentStack::default();
        stack.adjust(4);
        assert!(stack.adjust(4).is_empty());
        assert!(IndentStack::default().adjust(0).is_empty());
    }

    #[test]
    fn snapshots_are_not_disturbed() {
        let mut stack = IndentStack::default();
        stack.adjust(4);
        let saved = stack.clone();

        stack.adjust(0);
        assert_eq!(saved.current(), 4);
        assert_eq!(stack.current(), 0);
    }

    #[test]
    fn leading_indentation_widths() {
        assert_eq!(leading_indentation("b"), (0, 0));
        assert_eq!(leading_indentation("  b"), (2, 2));
        assert_eq!(leading_indentation("\tb"), (4, 1));
        assert_eq!(leading_indentation("  \t b"), (5, 4));
    }

    #[test]
    fn comments_alone_make_a_line_blank() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("\n    b"));
        assert!(is_blank_line("// note\n"));
        assert!(is_blank_line("/* a */ /* b */\t// c\n"));
        assert!(is_blank_line("/* runs\nonto the next line */ b"));
        assert!(is_blank_line("/* never closed"));
    }

    #[test]
    fn content_after_a_comment_is_not_blank() {
        assert!(!is_blank_line("b"));
        assert!(!is_blank_line("/* c */ b\n"));
        assert!(!is_blank_line("/* a *//* b */`x`"));
    }

    #[test]
    fn queue_is_first_in_first_out() {
        let token = |kind| QueuedToken {
            kind,
            start_pos: 0,
            token_pos: 0,
            end: 0,
        };

        let mut queue = TokenQueue::default();
        queue.push(token(SyntaxKind::LineTerminatorToken));
        queue.push(token(SyntaxKind::IndentToken));
        assert_eq!(queue.len(), 2);

        let saved = queue.clone();
        let first = queue.pop().map(|t| t.kind);
        assert_eq!(first, Some(SyntaxKind::LineTerminatorToken));
        assert_eq!(queue.pop().map(|t| t.kind), Some(SyntaxKind::IndentToken));
        assert_eq!(queue.pop(), None);
        assert_eq!(saved.len(), 2);
    }
}
