//! Character-level tools used by the scanning rules.
//!
//! None of these report diagnostics. The rules that call them decide what a
//! missing character means.

use diagnostic::DiagnosticSink;

use super::Scanner;

impl<'t, D: DiagnosticSink> Scanner<'t, D> {
    /// The input that hasn't been scanned yet.
    pub(crate) fn remaining_input(&self) -> &'t str {
        &self.text[self.pos..]
    }

    /// Get the _n_th character of the remaining input, starting with zero.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining_input().chars().nth(n)
    }

    /// Get the next character in the input.
    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining_input().chars().next()
    }

    /// Advance the scanner by a single character.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume a specific expected character.
    pub(crate) fn char(&mut self, expected: char) -> Option<char> {
        match self.peek() {
            Some(found) if found == expected => self.advance(),
            _ => None,
        }
    }

    /// Consume a specific expected string.
    pub(crate) fn str(&mut self, expected: &str) -> Option<&'t str> {
        let found = self.remaining_input().get(..expected.len())?;
        if found == expected {
            self.pos += expected.len();
            Some(found)
        } else {
            None
        }
    }

    /// Consume characters while `predicate` holds, returning what was
    /// consumed.
    pub(crate) fn consume_while(
        &mut self,
        predicate: impl Fn(char) -> bool,
    ) -> &'t str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if predicate(c)) {
            self.advance();
        }
        &self.text[start..self.pos]
    }
}

/// Spaces and tabs and the other horizontal whitespace.
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{b}' | '\u{c}' | '\u{a0}' | '\u{feff}')
        || (c.is_whitespace() && !is_line_terminator(c))
}

pub(crate) fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use diagnostic::NullDiagnosticSink;

    use super::*;

    #[test]
    fn peeking_does_not_advance() {
        let scanner = Scanner::new("0123abc", NullDiagnosticSink);
        assert_eq!(scanner.peek(), Some('0'));
        assert_eq!(scanner.peek_nth(3), Some('3'));
        assert_eq!(scanner.remaining_input(), "0123abc");
    }

    #[test]
    fn advance_counts_bytes() {
        let mut scanner = Scanner::new("∈x", NullDiagnosticSink);
        assert_eq!(scanner.advance(), Some('∈'));
        assert_eq!(scanner.pos, 3);
        assert_eq!(scanner.remaining_input(), "x");
    }

    #[test]
    fn char_and_str() {
        let mut scanner = Scanner::new("```x", NullDiagnosticSink);
        assert_eq!(scanner.char('x'), None);
        assert_eq!(scanner.str("```"), Some("```"));
        assert_eq!(scanner.str("yy"), None);
        assert_eq!(scanner.char('x'), Some('x'));
        assert_eq!(scanner.advance(), None);
    }

    #[test]
    fn consume_while_returns_the_run() {
        let mut scanner = Scanner::new("  \tA", NullDiagnosticSink);
        assert_eq!(scanner.consume_while(is_whitespace), "  \t");
        assert_eq!(scanner.consume_while(is_whitespace), "");
        assert_eq!(scanner.peek(), Some('A'));
    }

    #[test]
    fn whitespace_excludes_line_terminators() {
        assert!(is_whitespace('\u{feff}'));
        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('\u{2028}'));
    }
}
