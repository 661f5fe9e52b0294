//! The list loop.
//!
//! Every repeated part of the grammar goes through [`Parser::parse_list`],
//! with a [`ParsingContext`] saying what the elements look like. Keeping the
//! recovery rules in one place means a bad token in an inner list can be
//! handed back to whichever outer list knows what to do with it.

use std::convert::Infallible;

use diagnostic::DiagnosticSink;
use scanner::{token_to_string, SyntaxKind};

use super::context::{ParsingContext, Whitespace};
use super::Parser;
use crate::ast::Node;

impl<D: DiagnosticSink> Parser<'_, D> {
    /// Parse a list of elements with `element`, stopping at the end of the
    /// list.
    ///
    /// `element` is only called when the current token can start an element,
    /// and must consume at least one token. It can return `None` to leave out
    /// what it parsed.
    pub(super) fn parse_list(
        &mut self,
        context: ParsingContext,
        mut element: impl FnMut(&mut Self) -> Option<Node>,
    ) -> Vec<Node> {
        self.parse_list_with(context, |parser| {
            Ok::<_, Infallible>(element(parser))
        })
        .unwrap_or_else(|never| match never {})
    }

    /// Like [`parse_list`][Parser::parse_list], but `element` can fail, which
    /// stops the whole list.
    pub(super) fn parse_list_with<E>(
        &mut self,
        context: ParsingContext,
        mut element: impl FnMut(&mut Self) -> Result<Option<Node>, E>,
    ) -> Result<Vec<Node>, E> {
        let saved = self.contexts;
        self.contexts.insert(context);

        let result = self.parse_list_elements(context, &mut element);

        self.contexts = saved;
        result
    }

    fn parse_list_elements<E>(
        &mut self,
        context: ParsingContext,
        element: &mut impl FnMut(&mut Self) -> Result<Option<Node>, E>,
    ) -> Result<Vec<Node>, E> {
        let mut elements = Vec::new();

        // Was the last thing in the list a separator?
        let mut after_separator = false;

        // Was the last thing in the list an element, which needs a
        // separator before the next one?
        let mut after_element = false;

        // Has anything at all been seen, including junk?
        let mut attempted = false;

        loop {
            self.skip_whitespace(context);

            if self.is_on_separator(context) {
                if !after_element {
                    self.error_expected(context.element_label());
                }

                self.consume_separator(context);
                after_separator = true;
                after_element = false;
                attempted = true;
                continue;
            }

            let token = self.token();

            if context.is_terminator(token) {
                let dangling = after_separator
                    && context.separator()
                        != Some(SyntaxKind::LineTerminatorToken);
                let empty =
                    !attempted && context != ParsingContext::SourceElements;

                if dangling || empty {
                    self.error_expected(context.element_label());
                }

                break;
            }

            if after_element {
                if let Some(separator) = context.separator() {
                    // The `or`s after `but not one of` end at the first
                    // symbol which isn't an alternative.
                    if context == ParsingContext::OneOfSymbolList {
                        break;
                    }

                    self.error_expected(&token_to_string(separator, true));
                }
            }

            attempted = true;

            if context.is_start_of_element(token) {
                if let Some(node) = element(self)? {
                    elements.push(node);
                }

                after_separator = false;
                after_element = context.separator().is_some();
                continue;
            }

            if context == ParsingContext::SourceElements {
                self.error_unexpected_token();
            } else {
                self.error_expected(context.element_label());
            }

            if self.abort_or_skip(context) {
                break;
            }
        }

        Ok(elements)
    }

    fn skip_whitespace(&mut self, context: ParsingContext) {
        let skippable = |token: SyntaxKind| match context.whitespace() {
            Whitespace::All => matches!(
                token,
                SyntaxKind::LineTerminatorToken
                    | SyntaxKind::IndentToken
                    | SyntaxKind::DedentToken
            ),
            Whitespace::BlankLines | Whitespace::Nothing => false,
        };

        while skippable(self.token()) && !context.is_terminator(self.token()) {
            self.next_token();
        }
    }

    fn is_on_separator(&self, context: ParsingContext) -> bool {
        context.separator() == Some(self.token())
    }

    fn consume_separator(&mut self, context: ParsingContext) {
        self.next_token();

        // Blank lines between lines of a block are fine.
        if context.whitespace() == Whitespace::BlankLines {
            while self.token() == SyntaxKind::LineTerminatorToken {
                self.next_token();
            }
        }
    }

    /// Deal with a token which doesn't belong in `context`.
    ///
    /// If some list further out knows what to do with it, return `true` so
    /// the current list ends. Otherwise skip ahead to somewhere the current
    /// list can carry on from and return `false`.
    fn abort_or_skip(&mut self, context: ParsingContext) -> bool {
        if self.is_in_some_parsing_context(context) {
            let token = self.token();
            tracing::debug!(?context, ?token, "ending list early");
            return true;
        }

        let from = self.scanner.token_pos();

        let abort = loop {
            let token = self.next_token();

            if token == SyntaxKind::EndOfFileToken
                || context.is_terminator(token)
                || context.is_start_of_element(token)
                || self.is_on_separator(context)
            {
                break false;
            }

            if self.is_in_some_parsing_context(context) {
                break true;
            }

            if context.is_recovery_token(token) {
                break false;
            }
        };

        let to = self.scanner.token_pos();
        tracing::debug!(?context, from, to, abort, "skipped tokens");
        abort
    }

    /// Does the current token mean something to a list other than `current`?
    fn is_in_some_parsing_context(&self, current: ParsingContext) -> bool {
        let token = self.token();

        self.contexts
            .iter()
            .filter(|&context| context != current)
            .any(|context| {
                context.is_start_of_element(token)
                    || context.is_terminator(token)
                    || context.separator() == Some(token)
            })
    }
}
