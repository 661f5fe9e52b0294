//! The rules of the lexical grammar

use diagnostic::{messages, DiagnosticSink, NullDiagnosticSink};
use unicode_xid::UnicodeXID;

use super::combinator::{is_line_terminator, is_whitespace};
use super::prose::ProseMode;
use super::{Scanner, TokenFlags};
use crate::token::SyntaxKind;

impl<D: DiagnosticSink> Scanner<'_, D> {
    /// This is the main entry point into the scanning rules. It skips trivia
    /// and then dispatches to smaller handlers for each kind of token.
    pub(crate) fn scan_token(&mut self) -> SyntaxKind {
        loop {
            self.token_pos = self.pos;

            let Some(next) = self.peek() else {
                return self.end_of_file();
            };

            match next {
                c if is_line_terminator(c) => return self.line_terminator(),
                c if is_whitespace(c) => {
                    self.consume_while(is_whitespace);
                }
                '/' if self.peek_nth(1) == Some('/') => {
                    self.single_line_comment()
                }
                '/' if self.peek_nth(1) == Some('*') => {
                    self.multi_line_comment()
                }
                c => return self.token_kind(c),
            }
        }
    }

    fn token_kind(&mut self, next: char) -> SyntaxKind {
        use SyntaxKind::*;

        match next {
            '@' => self.single(AtToken),
            ',' => self.single(CommaToken),
            '{' => self.single(OpenBraceToken),
            '}' => self.single(CloseBraceToken),
            ']' => self.single(CloseBracketToken),
            '(' => self.single(OpenParenToken),
            ')' => self.single(CloseParenToken),
            '≠' => self.single(NotEqualToToken),
            '∈' => self.single(ElementOfToken),
            '∉' => self.single(NotAnElementOfToken),
            '+' => self.single(PlusToken),
            '~' => self.single(TildeToken),
            '?' => self.single(QuestionToken),
            '#' => self.single(HashToken),
            ':' => self.colons(),
            '[' => {
                self.advance();
                if self.char('>').is_some() {
                    self.enter_prose(ProseMode::SingleLine);
                    OpenBracketGreaterThanToken
                } else {
                    OpenBracketToken
                }
            }
            '>' => {
                self.advance();
                self.enter_prose(ProseMode::MultiLine);
                GreaterThanToken
            }
            '=' => {
                self.advance();
                match self.char('=') {
                    Some(_) => EqualsEqualsToken,
                    None => EqualsToken,
                }
            }
            '!' if self.peek_nth(1) == Some('=') => {
                self.pos += 2;
                ExclamationEqualsToken
            }
            '<' => self.less_than(),
            '`' => self.terminal_literal(),
            '"' | '\'' => self.string_literal(next),
            '|' => self.delimited_identifier(),
            'U' if self.peek_nth(1) == Some('+') => self.code_point(),
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.word(),
            _ => {
                self.advance();
                self.report(self.token_pos, &messages::INVALID_CHARACTER, &[]);
                Unknown
            }
        }
    }

    /// A token which is exactly one character.
    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.advance();
        kind
    }

    /// `:`, `::` or `:::`. Any further colons start another token.
    fn colons(&mut self) -> SyntaxKind {
        if self.str(":::").is_some() {
            SyntaxKind::ColonColonColonToken
        } else if self.str("::").is_some() {
            SyntaxKind::ColonColonToken
        } else {
            self.single(SyntaxKind::ColonToken)
        }
    }

    /// `<!`, `<-`, or a unicode character literal like `<TAB>` or
    /// `<U+0041 LATIN CAPITAL LETTER A>`.
    ///
    /// ```text
    /// UnicodeCharacterLiteral := `<` (any char but `>` or a line break)* `>`
    /// ```
    fn less_than(&mut self) -> SyntaxKind {
        self.advance();

        if self.char('!').is_some() {
            return SyntaxKind::LessThanExclamationToken;
        }
        if self.char('-').is_some() {
            return SyntaxKind::LessThanMinusToken;
        }

        self.consume_while(|c| c != '>' && !is_line_terminator(c));
        if self.char('>').is_none() {
            self.report(self.pos, &messages::EXPECTED, &[&"'>'"]);
            self.token_flags.insert(TokenFlags::UNTERMINATED);
        }

        self.token_value.push_str(&self.text[self.token_pos..self.pos]);
        SyntaxKind::UnicodeCharacterLiteral
    }

    /// A bare code point, like `U+0041`.
    fn code_point(&mut self) -> SyntaxKind {
        self.pos += "U+".len();

        if self.consume_while(|c| c.is_ascii_hexdigit()).is_empty() {
            self.report(self.pos, &messages::HEXADECIMAL_DIGIT_EXPECTED, &[]);
        }

        self.token_value.push_str(&self.text[self.token_pos..self.pos]);
        SyntaxKind::UnicodeCharacterLiteral
    }

    /// Decimal digits, used by `@line`.
    fn number(&mut self) -> SyntaxKind {
        let digits = self.consume_while(|c| c.is_ascii_digit());
        self.token_value.push_str(digits);
        SyntaxKind::NumberLiteral
    }

    /// A word is any keyword or identifier.
    ///
    /// Right after a `#`, words are link names and may contain `-`, and are
    /// never keywords.
    fn word(&mut self) -> SyntaxKind {
        let is_link_name = self.token == SyntaxKind::HashToken
            && !self.has_preceding_trivia();

        let word = if is_link_name {
            self.consume_while(|c| is_identifier_continue(c) || c == '-')
        } else {
            self.consume_while(is_identifier_continue)
        };
        self.token_value.push_str(word);

        match SyntaxKind::from_text(word) {
            Some(keyword) if keyword.is_keyword() && !is_link_name => keyword,
            _ => SyntaxKind::Identifier,
        }
    }

    /// `//` up to the end of the line.
    fn single_line_comment(&mut self) {
        self.consume_while(|c| !is_line_terminator(c));
    }

    /// `/*` up to the next `*/`, across lines.
    fn multi_line_comment(&mut self) {
        self.pos += "/*".len();

        loop {
            if self.str("*/").is_some() {
                return;
            }
            if self.advance().is_none() {
                self.report(self.pos, &messages::UNTERMINATED_COMMENT, &[]);
                return;
            }
        }
    }
}

/// The offset of the first character at or after `pos` which isn't
/// whitespace, a line break, or part of a comment.
///
/// ```
/// # use scanner::skip_trivia;
/// assert_eq!(skip_trivia("  /* c */\n  A", 0), 12);
/// assert_eq!(skip_trivia("A", 1), 1);
/// ```
pub fn skip_trivia(text: &str, pos: usize) -> usize {
    let mut scanner = Scanner::new(text, NullDiagnosticSink);
    scanner.pos = pos.min(text.len());

    loop {
        match scanner.peek() {
            Some(c) if is_whitespace(c) || is_line_terminator(c) => {
                scanner.advance();
            }
            Some('/') if scanner.peek_nth(1) == Some('/') => {
                scanner.single_line_comment()
            }
            Some('/') if scanner.peek_nth(1) == Some('*') => {
                scanner.multi_line_comment()
            }
            _ => return scanner.pos,
        }
    }
}

/// Is a character a valid beginning to an identifier, i.e.
/// [`is_xid_start`][UnicodeXID::is_xid_start] or an underscore?
fn is_identifier_start(c: char) -> bool {
    c == '_' || UnicodeXID::is_xid_start(c)
}

/// Is a character valid inside an identifier, i.e.
/// [`is_xid_continue`][UnicodeXID::is_xid_continue]?
fn is_identifier_continue(c: char) -> bool {
    UnicodeXID::is_xid_continue(c)
}
