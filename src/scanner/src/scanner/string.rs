//! Quoted literals: strings, terminals, and `|…|` identifiers.

use diagnostic::{messages, DiagnosticMessage, DiagnosticSink};

use super::combinator::is_line_terminator;
use super::{Scanner, TokenFlags};
use crate::token::SyntaxKind;

impl<D: DiagnosticSink> Scanner<'_, D> {
    /// A string literal, in single or double quotes, with escapes.
    ///
    /// ```text
    /// StringLiteral := `"` (char | escape)* `"` | `'` (char | escape)* `'`
    /// ```
    pub(crate) fn string_literal(&mut self, quote: char) -> SyntaxKind {
        self.advance();

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => match self.escape_sequence() {
                    Some(c) => self.token_value.push(c),
                    None => {
                        let message = &messages::UNTERMINATED_STRING_LITERAL;
                        self.unterminated(message);
                        break;
                    }
                },
                Some(c) if !is_line_terminator(c) => {
                    self.token_value.push(c);
                    self.advance();
                }
                _ => {
                    self.unterminated(&messages::UNTERMINATED_STRING_LITERAL);
                    break;
                }
            }
        }

        SyntaxKind::StringLiteral
    }

    /// A terminal, in backticks. There are no escapes, but ```` ``` ```` is a
    /// terminal for a single backtick.
    pub(crate) fn terminal_literal(&mut self) -> SyntaxKind {
        if self.str("```").is_some() {
            self.token_value.push('`');
            return SyntaxKind::TerminalLiteral;
        }

        self.advance();
        let value = self.consume_while(|c| c != '`' && !is_line_terminator(c));
        self.token_value.push_str(value);

        if self.char('`').is_none() {
            self.unterminated(&messages::UNTERMINATED_TERMINAL_LITERAL);
        }

        SyntaxKind::TerminalLiteral
    }

    /// An identifier in bars, like `|Some Name|`. The value doesn't include
    /// the bars.
    pub(crate) fn delimited_identifier(&mut self) -> SyntaxKind {
        self.advance();
        let value = self.consume_while(|c| c != '|' && !is_line_terminator(c));
        self.token_value.push_str(value);

        if self.char('|').is_none() {
            self.unterminated(&messages::UNTERMINATED_IDENTIFIER_LITERAL);
        }

        SyntaxKind::Identifier
    }

    fn unterminated(&mut self, message: &DiagnosticMessage) {
        self.report(self.pos, message, &[]);
        self.token_flags.insert(TokenFlags::UNTERMINATED);
    }

    /// Decode the escape sequence at `pos`, which starts with a backslash.
    ///
    /// Returns `None` if there's nothing to escape on this line.
    fn escape_sequence(&mut self) -> Option<char> {
        let start = self.pos;
        self.advance();

        let c = match self.peek() {
            Some(c) if !is_line_terminator(c) => c,
            _ => return None,
        };
        self.advance();

        let decoded = match c {
            '0' => '\0',
            'b' => '\u{8}',
            't' => '\t',
            'n' => '\n',
            'v' => '\u{b}',
            'f' => '\u{c}',
            'r' => '\r',
            '"' | '\'' | '\\' => c,
            'x' => self.hex_digits(2),
            'u' if self.char('{').is_some() => self.extended_unicode_escape(),
            'u' => self.hex_digits(4),
            _ => {
                self.report(start, &messages::INVALID_ESCAPE_SEQUENCE, &[]);
                c
            }
        };

        Some(decoded)
    }

    /// Exactly `count` hex digits naming a character.
    fn hex_digits(&mut self, count: usize) -> char {
        let digits = self.remaining_input();
        let found = digits
            .char_indices()
            .take(count)
            .take_while(|(_, c)| c.is_ascii_hexdigit())
            .count();

        if found < count {
            self.pos += found;
            self.report(self.pos, &messages::HEXADECIMAL_DIGIT_EXPECTED, &[]);
            return char::REPLACEMENT_CHARACTER;
        }

        self.pos += count;
        u32::from_str_radix(&digits[..count], 16)
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// The rest of `\u{…}`, after the brace.
    fn extended_unicode_escape(&mut self) -> char {
        let digits_pos = self.pos;
        let digits = self.consume_while(|c| c.is_ascii_hexdigit());

        if digits.is_empty() {
            self.report(self.pos, &messages::HEXADECIMAL_DIGIT_EXPECTED, &[]);
            self.char('}');
            return char::REPLACEMENT_CHARACTER;
        }

        let value = u32::from_str_radix(digits, 16)
            .ok()
            .and_then(char::from_u32);

        if self.char('}').is_none() {
            self.report(self.pos, &messages::EXPECTED, &[&"'}'"]);
        }

        match value {
            Some(c) => c,
            None => {
                let message = &messages::UNICODE_ESCAPE_OUT_OF_RANGE;
                self.report(digits_pos, message, &[]);
                char::REPLACEMENT_CHARACTER
            }
        }
    }
}
