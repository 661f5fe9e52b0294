//! Assertions, which all start with a `[` in the middle of a right-hand
//! side. Which one it is depends on the token after the bracket.

use diagnostic::DiagnosticSink;
use scanner::SyntaxKind;

use super::context::ParsingContext;
use super::Parser;
use crate::ast::{
    EmptyAssertion, InvalidAssertion, LexicalGoalAssertion, LookaheadAssertion,
    NoSymbolHereAssertion, Node, ParameterValueAssertion, ProseAssertion,
};

/// The operators allowed after `lookahead`.
const LOOKAHEAD_OPERATORS: &[SyntaxKind] = &[
    SyntaxKind::EqualsEqualsToken,
    SyntaxKind::EqualsToken,
    SyntaxKind::ExclamationEqualsToken,
    SyntaxKind::NotEqualToToken,
    SyntaxKind::ElementOfToken,
    SyntaxKind::LessThanMinusToken,
    SyntaxKind::NotAnElementOfToken,
    SyntaxKind::LessThanExclamationToken,
];

const ASSERTION_STARTS: &str =
    "'empty', 'lookahead', 'lexical', 'no', '+' or '~'";

impl<D: DiagnosticSink> Parser<'_, D> {
    pub(super) fn parse_assertion(&mut self) -> Node {
        if self.token() == SyntaxKind::OpenBracketGreaterThanToken {
            return self.parse_prose_assertion();
        }

        let pos = self.node_pos();
        let open = self.parse_token(SyntaxKind::OpenBracketToken);

        match self.token() {
            SyntaxKind::EmptyKeyword => self.parse_empty_assertion(pos, open),
            SyntaxKind::LookaheadKeyword => {
                self.parse_lookahead_assertion(pos, open)
            }
            SyntaxKind::LexicalKeyword => {
                self.parse_lexical_goal_assertion(pos, open)
            }
            SyntaxKind::NoKeyword => {
                self.parse_no_symbol_here_assertion(pos, open)
            }
            SyntaxKind::PlusToken | SyntaxKind::TildeToken => {
                self.parse_parameter_value_assertion(pos, open)
            }
            _ => self.parse_invalid_assertion(pos, open),
        }
    }

    fn parse_empty_assertion(
        &mut self,
        pos: usize,
        open_bracket_token: Option<Box<Node>>,
    ) -> Node {
        let empty_keyword = self.parse_token(SyntaxKind::EmptyKeyword);
        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let assertion = EmptyAssertion {
            open_bracket_token,
            empty_keyword,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), assertion)
    }

    fn parse_lookahead_assertion(
        &mut self,
        pos: usize,
        open_bracket_token: Option<Box<Node>>,
    ) -> Node {
        let lookahead_keyword = self.parse_token(SyntaxKind::LookaheadKeyword);

        let operator_token = self.parse_any_token(LOOKAHEAD_OPERATORS);
        if operator_token.is_none() {
            self.error_expected("«lookahead operator»");
        }

        let lookahead = if self.token() == SyntaxKind::OpenBraceToken {
            Some(Box::new(self.parse_symbol_set()))
        } else {
            self.parse_symbol_span().map(Box::new)
        };

        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let assertion = LookaheadAssertion {
            open_bracket_token,
            lookahead_keyword,
            operator_token,
            lookahead,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), assertion)
    }

    fn parse_lexical_goal_assertion(
        &mut self,
        pos: usize,
        open_bracket_token: Option<Box<Node>>,
    ) -> Node {
        let lexical_keyword = self.parse_token(SyntaxKind::LexicalKeyword);
        let goal_keyword = self.parse_expected(SyntaxKind::GoalKeyword);
        let symbol = self.parse_identifier_or_keyword();
        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let assertion = LexicalGoalAssertion {
            open_bracket_token,
            lexical_keyword,
            goal_keyword,
            symbol,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), assertion)
    }

    fn parse_no_symbol_here_assertion(
        &mut self,
        pos: usize,
        open_bracket_token: Option<Box<Node>>,
    ) -> Node {
        let no_keyword = self.parse_token(SyntaxKind::NoKeyword);
        let symbols = self.parse_list(ParsingContext::NoSymbolHere, |parser| {
            Some(parser.parse_primary_symbol())
        });
        let here_keyword = self.parse_expected(SyntaxKind::HereKeyword);
        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let assertion = NoSymbolHereAssertion {
            open_bracket_token,
            no_keyword,
            symbols,
            here_keyword,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), assertion)
    }

    fn parse_parameter_value_assertion(
        &mut self,
        pos: usize,
        open_bracket_token: Option<Box<Node>>,
    ) -> Node {
        let operator_token = self
            .parse_any_token(&[SyntaxKind::PlusToken, SyntaxKind::TildeToken]);
        let name = self.parse_identifier_or_keyword();
        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let assertion = ParameterValueAssertion {
            open_bracket_token,
            operator_token,
            name,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), assertion)
    }

    fn parse_prose_assertion(&mut self) -> Node {
        let pos = self.node_pos();
        let open_bracket_token =
            self.parse_token(SyntaxKind::OpenBracketGreaterThanToken);
        let fragments = self.parse_prose_fragments();
        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let assertion = ProseAssertion {
            open_bracket_token,
            fragments,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), assertion)
    }

    /// Whatever's in the brackets is skipped, up to the `]` or the end of
    /// the line.
    fn parse_invalid_assertion(
        &mut self,
        pos: usize,
        open_bracket_token: Option<Box<Node>>,
    ) -> Node {
        self.error_expected(ASSERTION_STARTS);

        while !matches!(
            self.token(),
            SyntaxKind::CloseBracketToken
                | SyntaxKind::LineTerminatorToken
                | SyntaxKind::DedentToken
                | SyntaxKind::EndOfFileToken
        ) {
            self.next_token();
        }

        let close_bracket_token =
            self.parse_token(SyntaxKind::CloseBracketToken);

        let assertion = InvalidAssertion {
            open_bracket_token,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), assertion)
    }
}
