//! Source elements, and productions down to their right-hand sides.

use diagnostic::DiagnosticSink;
use scanner::SyntaxKind;

use super::context::ParsingContext;
use super::Parser;
use crate::ast::{
    Argument, Constraints, Define, Import, Line, LinkReference, Node,
    OneOfList, Parameter, ParameterList, Production, RightHandSide,
    RightHandSideList, Root,
};

impl<D: DiagnosticSink> Parser<'_, D> {
    /// The whole file. `check` is called before each source element, and
    /// stops parsing if it fails.
    pub(super) fn parse_root<E>(
        &mut self,
        mut check: impl FnMut() -> Result<(), E>,
    ) -> Result<Node, E> {
        let elements =
            self.parse_list_with(ParsingContext::SourceElements, |parser| {
                check()?;
                Ok(parser.parse_source_element())
            })?;

        let end = self.scanner.text().len();
        Ok(Node::syntax(0, end, Root { elements }))
    }

    fn parse_source_element(&mut self) -> Option<Node> {
        match self.token() {
            SyntaxKind::AtToken => self.parse_meta_element(),
            _ => Some(self.parse_production()),
        }
    }

    /// Anything starting with `@` at the top level.
    fn parse_meta_element(&mut self) -> Option<Node> {
        let pos = self.node_pos();
        let at_token = self.parse_token(SyntaxKind::AtToken);

        match self.token() {
            SyntaxKind::ImportKeyword => {
                Some(self.parse_import(pos, at_token))
            }
            SyntaxKind::DefineKeyword => {
                Some(self.parse_define(pos, at_token))
            }
            SyntaxKind::LineKeyword => Some(self.parse_line(pos, at_token)),
            token => {
                self.error_unexpected_token();
                tracing::debug!(?token, pos, "dropping source element");
                None
            }
        }
    }

    fn parse_import(
        &mut self,
        pos: usize,
        at_token: Option<Box<Node>>,
    ) -> Node {
        let import_keyword = self.parse_token(SyntaxKind::ImportKeyword);
        let path = self.parse_expected_text(SyntaxKind::StringLiteral);

        if let Some(value) = path.as_ref().and_then(|path| path.value()) {
            self.imports.push(value.to_string());
        }

        let import = Import {
            at_token,
            import_keyword,
            path,
        };

        Node::syntax(pos, self.node_end(), import)
    }

    fn parse_define(
        &mut self,
        pos: usize,
        at_token: Option<Box<Node>>,
    ) -> Node {
        let define_keyword = self.parse_token(SyntaxKind::DefineKeyword);
        let key = self.parse_identifier_or_keyword();

        let value = self.parse_any_token(&[
            SyntaxKind::TrueKeyword,
            SyntaxKind::FalseKeyword,
            SyntaxKind::DefaultKeyword,
        ]);

        if value.is_none() {
            self.error_expected("'true', 'false' or 'default'");
        }

        let define = Define {
            at_token,
            define_keyword,
            key,
            value,
        };

        Node::syntax(pos, self.node_end(), define)
    }

    fn parse_line(&mut self, pos: usize, at_token: Option<Box<Node>>) -> Node {
        let line_keyword = self.parse_token(SyntaxKind::LineKeyword);

        let default = self.parse_token(SyntaxKind::DefaultKeyword);
        let (number, path) = match default {
            Some(default) => (Some(default), None),
            None => {
                let number =
                    self.parse_expected_text(SyntaxKind::NumberLiteral);
                let path = self.parse_text(SyntaxKind::StringLiteral);
                (number, path)
            }
        };

        let line = Line {
            at_token,
            line_keyword,
            number,
            path,
        };

        Node::syntax(pos, self.node_end(), line)
    }

    fn parse_production(&mut self) -> Node {
        let pos = self.node_pos();
        let name = self.parse_expected_text(SyntaxKind::Identifier);

        let parameter_list = if self.token() == SyntaxKind::OpenBracketToken {
            Some(Box::new(self.parse_parameter_list()))
        } else {
            None
        };

        let colon_token = self.parse_any_token(&[
            SyntaxKind::ColonToken,
            SyntaxKind::ColonColonToken,
            SyntaxKind::ColonColonColonToken,
        ]);

        if colon_token.is_none() {
            self.error_expected("':'");
        }

        let body = Some(Box::new(self.parse_body()));

        let production = Production {
            name,
            parameter_list,
            colon_token,
            body,
        };

        Node::syntax(pos, self.node_end(), production)
    }

    fn parse_parameter_list(&mut self) -> Node {
        let pos = self.node_pos();
        let open_bracket_token = self.parse_token(SyntaxKind::OpenBracketToken);
        let elements = self.parse_list(ParsingContext::Parameters, |parser| {
            Some(parser.parse_parameter())
        });
        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let list = ParameterList {
            open_bracket_token,
            elements,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), list)
    }

    fn parse_parameter(&mut self) -> Node {
        let pos = self.node_pos();
        let name = self.parse_identifier_or_keyword();
        Node::syntax(pos, self.node_end(), Parameter { name })
    }

    /// Everything after the colon.
    fn parse_body(&mut self) -> Node {
        match self.token() {
            SyntaxKind::OneKeyword => self.parse_one_of_list(),
            SyntaxKind::LineTerminatorToken
                if self.is_start_of_indented_block() =>
            {
                self.parse_right_hand_side_list()
            }
            _ => self.parse_right_hand_side(),
        }
    }

    /// Are we at line breaks followed by more indentation?
    fn is_start_of_indented_block(&mut self) -> bool {
        self.look_ahead(|parser| {
            parser.skip_line_terminators();
            parser.token() == SyntaxKind::IndentToken
        })
    }

    fn skip_line_terminators(&mut self) {
        while self.token() == SyntaxKind::LineTerminatorToken {
            self.next_token();
        }
    }

    fn parse_one_of_list(&mut self) -> Node {
        let pos = self.node_pos();
        let one_keyword = self.parse_token(SyntaxKind::OneKeyword);
        let of_keyword = self.parse_expected(SyntaxKind::OfKeyword);

        let indented = self.token() == SyntaxKind::LineTerminatorToken
            && self.is_start_of_indented_block();

        let terminals = if indented {
            self.skip_line_terminators();
            self.expect_token(SyntaxKind::IndentToken);
            let terminals =
                self.parse_list(ParsingContext::OneOfListIndented, |parser| {
                    Some(parser.parse_terminal())
                });
            self.expect_token(SyntaxKind::DedentToken);
            terminals
        } else {
            self.parse_list(ParsingContext::OneOfList, |parser| {
                Some(parser.parse_terminal())
            })
        };

        let list = OneOfList {
            one_keyword,
            of_keyword,
            terminals,
        };

        Node::syntax(pos, self.node_end(), list)
    }

    fn parse_right_hand_side_list(&mut self) -> Node {
        let pos = self.node_pos();

        self.skip_line_terminators();
        self.expect_token(SyntaxKind::IndentToken);

        let context = ParsingContext::RightHandSideListIndented;
        let elements = self.parse_list(context, |parser| {
            Some(parser.parse_right_hand_side())
        });

        self.expect_token(SyntaxKind::DedentToken);

        Node::syntax(pos, self.node_end(), RightHandSideList { elements })
    }

    /// A right-hand side. If there aren't any symbols, that's reported and
    /// the node has no head.
    pub(super) fn parse_right_hand_side(&mut self) -> Node {
        let pos = self.node_pos();

        let constraints = if self.is_start_of_constraints() {
            self.try_parse_constraints()
        } else {
            None
        };

        let head = self.parse_symbol_span().map(Box::new);

        let reference = if self.token() == SyntaxKind::HashToken {
            Some(Box::new(self.parse_link_reference()))
        } else {
            None
        };

        let rhs = RightHandSide {
            constraints,
            head,
            reference,
        };

        Node::syntax(pos, self.node_end(), rhs)
    }

    fn is_start_of_constraints(&mut self) -> bool {
        self.token() == SyntaxKind::OpenBracketToken
            && self.look_ahead(|parser| {
                matches!(
                    parser.next_token(),
                    SyntaxKind::PlusToken | SyntaxKind::TildeToken
                )
            })
    }

    /// `[+A, ~B]` at the start of a right-hand side is a list of
    /// constraints, but only if it's a good one. Otherwise it's left to be
    /// parsed again as an assertion.
    fn try_parse_constraints(&mut self) -> Option<Box<Node>> {
        self.try_parse(|parser| {
            let reported = parser.scanner.reported_count();
            let constraints = parser.parse_constraints();

            let closed = constraints
                .as_constraints()
                .and_then(Constraints::close_bracket_token)
                .is_some();
            let clean = parser.scanner.reported_count() == reported && closed;

            clean.then(|| Box::new(constraints))
        })
    }

    fn parse_constraints(&mut self) -> Node {
        let pos = self.node_pos();
        let open_bracket_token = self.parse_token(SyntaxKind::OpenBracketToken);
        let elements = self.parse_list(ParsingContext::Constraints, |parser| {
            Some(parser.parse_argument())
        });
        let close_bracket_token =
            self.parse_expected(SyntaxKind::CloseBracketToken);

        let constraints = Constraints {
            open_bracket_token,
            elements,
            close_bracket_token,
        };

        Node::syntax(pos, self.node_end(), constraints)
    }

    /// An argument or a constraint.
    pub(super) fn parse_argument(&mut self) -> Node {
        let pos = self.node_pos();

        let operator_token = self.parse_any_token(&[
            SyntaxKind::QuestionToken,
            SyntaxKind::PlusToken,
            SyntaxKind::TildeToken,
        ]);

        let name = self.parse_identifier_or_keyword();

        let argument = Argument { operator_token, name };
        Node::syntax(pos, self.node_end(), argument)
    }

    fn parse_link_reference(&mut self) -> Node {
        let pos = self.node_pos();
        let hash_token = self.parse_token(SyntaxKind::HashToken);
        let name = self.parse_expected_text(SyntaxKind::Identifier);

        let reference = LinkReference { hash_token, name };
        Node::syntax(pos, self.node_end(), reference)
    }
}
