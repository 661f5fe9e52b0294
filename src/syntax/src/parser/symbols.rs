//! Symbols.
//!
//! A symbol span is either a single piece of prose, or a run of symbols.
//! Symbols bind like this, from tightest to loosest:
//!
//! 1. Primary symbols: terminals, nonterminals, unicode character literals
//!    and ranges, and `@` placeholders.
//! 2. `but not`, which takes a primary symbol on the left, and either a
//!    primary symbol or `one of` alternatives on the right.
//!
//! Assertions sit beside these, and start with a `[`.

use diagnostic::DiagnosticSink;
use scanner::SyntaxKind;

use super::context::{
    is_start_of_primary_symbol, is_start_of_symbol, ParsingContext,
};
use super::Parser;
use crate::ast::{
    ArgumentList, ButNotSymbol, InvalidSymbol, Node, Nonterminal, OneOfSymbol,
    PlaceholderSymbol, Prose, SymbolSet, SymbolSpan, Terminal,
    UnicodeCharacterRange,
};

impl<D: DiagnosticSink> Parser<'_, D> {
    /// Prose, or one or more symbols.
    ///
    /// If there's nothing here that could be a symbol, it's reported and
    /// there's no node.
    pub(super) fn parse_symbol_span(&mut self) -> Option<Node> {
        let pos = self.node_pos();

        let symbols = if self.token() == SyntaxKind::GreaterThanToken {
            vec![self.parse_prose()]
        } else {
            let mut symbols = Vec::new();
            while is_start_of_symbol(self.token())
                || self.token() == SyntaxKind::Unknown
            {
                symbols.push(self.parse_symbol());
            }
            symbols
        };

        if symbols.is_empty() {
            self.error_expected("«symbol»");
            return None;
        }

        Some(Node::syntax(pos, self.node_end(), SymbolSpan { symbols }))
    }

    pub(super) fn parse_symbol(&mut self) -> Node {
        if self.increase_depth() {
            self.error_unexpected_token();
            tracing::debug!(depth = self.depth, "symbols nested too deeply");
            return self.parse_invalid_symbol();
        }

        let symbol = match self.token() {
            SyntaxKind::OpenBracketToken
            | SyntaxKind::OpenBracketGreaterThanToken => self.parse_assertion(),
            // Already reported by the scanner.
            SyntaxKind::Unknown => self.parse_invalid_symbol(),
            _ => self.parse_but_not_symbol(),
        };

        self.decrease_depth();
        symbol
    }

    /// Skip the current token, leaving an [`InvalidSymbol`] in its place.
    fn parse_invalid_symbol(&mut self) -> Node {
        let pos = self.node_pos();
        self.next_token();
        Node::syntax(pos, self.node_end(), InvalidSymbol {})
    }

    fn parse_but_not_symbol(&mut self) -> Node {
        let pos = self.node_pos();
        let left = self.parse_primary_symbol();

        if self.token() != SyntaxKind::ButKeyword {
            return left;
        }

        let but_keyword = self.parse_token(SyntaxKind::ButKeyword);
        let not_keyword = self.parse_expected(SyntaxKind::NotKeyword);

        let right = match self.token() {
            SyntaxKind::OneKeyword => Some(self.parse_one_of_symbol()),
            token if is_start_of_primary_symbol(token) => {
                Some(self.parse_primary_symbol())
            }
            _ => {
                self.error_expected("«symbol»");
                None
            }
        };

        let but_not = ButNotSymbol {
            left: Some(Box::new(left)),
            but_keyword,
            not_keyword,
            right: right.map(Box::new),
        };

        Node::syntax(pos, self.node_end(), but_not)
    }

    pub(super) fn parse_primary_symbol(&mut self) -> Node {
        match self.token() {
            SyntaxKind::TerminalLiteral => self.parse_terminal(),
            SyntaxKind::Identifier => self.parse_nonterminal(),
            SyntaxKind::UnicodeCharacterLiteral => {
                self.parse_unicode_character()
            }
            SyntaxKind::AtToken => self.parse_placeholder(),
            _ => {
                self.error_expected("«symbol»");
                let pos = self.node_pos();
                Node::syntax(pos, pos, InvalidSymbol {})
            }
        }
    }

    pub(super) fn parse_terminal(&mut self) -> Node {
        let pos = self.node_pos();
        let literal = self.parse_expected_text(SyntaxKind::TerminalLiteral);
        let question_token = self.parse_token(SyntaxKind::QuestionToken);

        let terminal = Terminal {
            literal,
            question_token,
        };

        Node::syntax(pos, self.node_end(), terminal)
    }

    fn parse_nonterminal(&mut self) -> Node {
        let pos = self.node_pos();
        let name = self.parse_expected_text(SyntaxKind::Identifier);

        let argument_list = if self.is_start_of_argument_list() {
            Some(Box::new(self.parse_argument_list()))
        } else {
            None
        };

        let question_token = self.parse_token(SyntaxKind::QuestionToken);

        let nonterminal = Nonterminal {
            name,
            argument_list,
            question_token,
        };

        Node::syntax(pos, self.node_end(), nonterminal)
    }

    /// Arguments go right after the name with no space, and look like
    /// `[?A]`, `[+A]`, `[~A]`, `[A]` or `[A, …]`. Anything else in brackets
    /// is an assertion.
    fn is_start_of_argument_list(&mut self) -> bool {
        if self.token() != SyntaxKind::OpenBracketToken
            || self.scanner.has_preceding_trivia()
        {
            return false;
        }

        self.look_ahead(|parser| match parser.next_token() {
            SyntaxKind::QuestionToken
            | SyntaxKind::PlusToken
            | SyntaxKind::TildeToken => true,
            SyntaxKind::Identifier => matches!(
                parser.next_token(),
                SyntaxKind::CommaToken | SyntaxKind::CloseBracketToken
            ),
            _ => false,
        })
    }

    fn parse_argument_list(&mut self) -> Node {
        let pos = self.node_pos();
        let open_bracket_token = self.parse_token(SyntaxKind::OpenBracketToken);
        let elements = self.parse_list(ParsingContext::Arguments, |parser| {
            Some(parser.parse_argument())
        });
        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let list = ArgumentList {
            open_bracket_token,
            elements,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), list)
    }

    /// A unicode character literal on its own is just the literal. With
    /// `through` after it, it's a range.
    fn parse_unicode_character(&mut self) -> Node {
        let pos = self.node_pos();
        let left = self.take_text(SyntaxKind::UnicodeCharacterLiteral);

        if self.token() != SyntaxKind::ThroughKeyword {
            return left;
        }

        let through_keyword = self.parse_token(SyntaxKind::ThroughKeyword);
        let right =
            self.parse_expected_text(SyntaxKind::UnicodeCharacterLiteral);

        let range = UnicodeCharacterRange {
            left: Some(Box::new(left)),
            through_keyword,
            right,
        };

        Node::syntax(pos, self.node_end(), range)
    }

    fn parse_placeholder(&mut self) -> Node {
        let pos = self.node_pos();
        let at_token = self.parse_token(SyntaxKind::AtToken);
        Node::syntax(pos, self.node_end(), PlaceholderSymbol { at_token })
    }

    fn parse_one_of_symbol(&mut self) -> Node {
        let pos = self.node_pos();
        let one_keyword = self.parse_token(SyntaxKind::OneKeyword);
        let of_keyword = self.parse_expected(SyntaxKind::OfKeyword);
        let symbols =
            self.parse_list(ParsingContext::OneOfSymbolList, |parser| {
                Some(parser.parse_primary_symbol())
            });

        let one_of = OneOfSymbol {
            one_keyword,
            of_keyword,
            symbols,
        };

        Node::syntax(pos, self.node_end(), one_of)
    }

    pub(super) fn parse_symbol_set(&mut self) -> Node {
        let pos = self.node_pos();
        let open_brace_token = self.parse_token(SyntaxKind::OpenBraceToken);
        let elements =
            self.parse_list(ParsingContext::SymbolSet, Self::parse_symbol_span);
        let close_brace_token =
            self.parse_expected(SyntaxKind::CloseBraceToken);

        let set = SymbolSet {
            open_brace_token,
            elements,
            close_brace_token,
        };

        Node::syntax(pos, self.node_end(), set)
    }

    fn parse_prose(&mut self) -> Node {
        let pos = self.node_pos();
        let greater_than_token = self.parse_token(SyntaxKind::GreaterThanToken);
        let fragments = self.parse_prose_fragments();

        let prose = Prose {
            greater_than_token,
            fragments,
        };

        Node::syntax(pos, self.node_end(), prose)
    }

    /// The pieces of some prose, with any terminals and nonterminals
    /// embedded between them.
    pub(super) fn parse_prose_fragments(&mut self) -> Vec<Node> {
        let mut fragments = Vec::new();

        loop {
            let token = self.token();

            match token {
                SyntaxKind::ProseFull | SyntaxKind::ProseTail => {
                    fragments.push(self.take_text(token));
                    break;
                }
                SyntaxKind::ProseHead | SyntaxKind::ProseMiddle => {
                    fragments.push(self.take_text(token));
                }
                _ => break,
            }

            match self.token() {
                SyntaxKind::TerminalLiteral => {
                    fragments.push(self.parse_terminal());
                }
                SyntaxKind::Identifier => {
                    fragments.push(self.parse_embedded_nonterminal());
                }
                _ => break,
            }
        }

        fragments
    }

    /// A nonterminal in prose is only ever a name.
    fn parse_embedded_nonterminal(&mut self) -> Node {
        let pos = self.node_pos();
        let name = self.take_text(SyntaxKind::Identifier);

        let nonterminal = Nonterminal {
            name: Some(Box::new(name)),
            ..Nonterminal::default()
        };

        Node::syntax(pos, self.node_end(), nonterminal)
    }
}
