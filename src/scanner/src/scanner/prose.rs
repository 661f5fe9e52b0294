//! Prose is free text standing in for symbols, like
//!
//! ```text
//! SourceCharacter ::
//!     > any Unicode code point
//! ```
//!
//! Prose can have terminals and nonterminals embedded in it. When it does,
//! it's split into fragments around them, and the embedded parts are
//! scanned as normal tokens.

use diagnostic::{messages, DiagnosticSink};

use super::combinator::{is_line_terminator, is_whitespace};
use super::indentation::leading_indentation;
use super::{Scanner, TokenFlags};
use crate::token::SyntaxKind;

/// Which kind of prose the scanner is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ProseMode {
    /// Started by `>`, running to the end of the line. Following lines which
    /// start with another `>` continue it.
    MultiLine,

    /// Started by `[>`, running up to a `]` on the same line.
    SingleLine,
}

impl<D: DiagnosticSink> Scanner<'_, D> {
    pub(crate) fn enter_prose(&mut self, mode: ProseMode) {
        self.prose = Some(mode);
    }

    /// Scan the next fragment of prose.
    pub(crate) fn scan_prose(&mut self, mode: ProseMode) -> SyntaxKind {
        let at_start = matches!(
            self.token,
            SyntaxKind::GreaterThanToken
                | SyntaxKind::OpenBracketGreaterThanToken
        );

        if at_start {
            self.consume_while(is_whitespace);
        }

        self.token_pos = self.pos;

        let complete = loop {
            match self.peek() {
                None if mode == ProseMode::SingleLine => {
                    break self.unterminated_prose()
                }
                None => break true,
                Some('`' | '|') => break false,
                Some(']') if mode == ProseMode::SingleLine => break true,
                Some(c) if is_line_terminator(c) => match mode {
                    ProseMode::SingleLine => break self.unterminated_prose(),
                    ProseMode::MultiLine if self.prose_continuation() => {
                        self.token_value.push('\n');
                    }
                    ProseMode::MultiLine => break true,
                },
                Some(c) => {
                    self.token_value.push(c);
                    self.advance();
                }
            }
        };

        tracing::trace!(value = %self.token_value, complete, "prose");
        self.finish_prose(at_start, complete)
    }

    /// If the line after the line break at `pos` carries on the prose with
    /// another `>`, skip over the break and the marker. The marker has to be
    /// indented at least as far as the open indentation level.
    fn prose_continuation(&mut self) -> bool {
        let rest = self.remaining_input();
        let after_break = match rest.strip_prefix("\r\n") {
            Some(after) => after,
            None => {
                let mut chars = rest.chars();
                chars.next();
                chars.as_str()
            }
        };

        let (width, len) = leading_indentation(after_break);
        if width < self.indents.current() {
            return false;
        }

        let Some(after_marker) = after_break[len..]
            .trim_start_matches(is_whitespace)
            .strip_prefix('>')
        else {
            return false;
        };

        self.pos = self.text.len() - after_marker.len();
        self.consume_while(is_whitespace);
        true
    }

    fn unterminated_prose(&mut self) -> bool {
        self.report(self.pos, &messages::EXPECTED, &[&"']'"]);
        self.token_flags.insert(TokenFlags::UNTERMINATED);
        true
    }

    fn finish_prose(&mut self, at_start: bool, complete: bool) -> SyntaxKind {
        if complete {
            self.prose = None;
        }

        match (at_start, complete) {
            (true, true) => SyntaxKind::ProseFull,
            (true, false) => SyntaxKind::ProseHead,
            (false, true) => SyntaxKind::ProseTail,
            (false, false) => SyntaxKind::ProseMiddle,
        }
    }
}
