//! A parser.
//!
//! This is a recursive descent parser that pulls tokens from a [`Scanner`]
//! one at a time and builds [`Node`]s as it goes. It doesn't stop at the
//! first problem. Anything missing is reported and left out of the tree,
//! and anything unexpected is reported and skipped, so there's always a tree
//! at the end.
//!
//! The grammar is spread over a few files:
//!
//! - `elements.rs` has the top level: imports, defines, line directives and
//!   productions with their bodies.
//! - `symbols.rs` has the symbols on a right-hand side.
//! - `assertions.rs` has everything starting with a `[` inside a
//!   right-hand side.
//! - `list.rs` has the one loop used for every kind of list, with the rules
//!   for each kind in `context.rs`.

mod assertions;
mod context;
mod elements;
mod list;
mod symbols;

use std::convert::Infallible;

use diagnostic::{
    messages, DiagnosticMessage, DiagnosticMessages, DiagnosticSink,
};
use scanner::{token_to_string, Scanner, Speculation, SyntaxKind};

use crate::ast::{Node, SourceFile};
use crate::{CancellationToken, Error};

use self::context::ParsingContexts;

/// Parse a whole grammar file.
///
/// # Example
///
/// ```
/// # use syntax::{parse_source_file, SyntaxKind};
/// let file = parse_source_file("example.grammar", "A :\n    `a`\n    B\n");
/// assert_eq!(file.elements().len(), 1);
/// assert_eq!(file.root().kind(), SyntaxKind::SourceFile);
/// assert!(file.diagnostics().is_empty());
/// ```
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn parse_source_file(filename: &str, text: &str) -> SourceFile {
    let mut parser = Parser::new(text, DiagnosticMessages::new());
    let root = parser.parse_source_elements();
    parser.into_source_file(filename, root)
}

/// Like [`parse_source_file`], but stops early with [`Error::Cancelled`]
/// once `cancellation` is cancelled.
#[tracing::instrument(skip(text, cancellation), fields(len = text.len()))]
pub fn parse_source_file_with_cancellation(
    filename: &str,
    text: &str,
    cancellation: &CancellationToken,
) -> Result<SourceFile, Error> {
    let mut parser = Parser::new(text, DiagnosticMessages::new());
    let root = parser.parse_source_elements_with_cancellation(cancellation)?;
    Ok(parser.into_source_file(filename, root))
}

/// A parser.
pub struct Parser<'t, D = DiagnosticMessages> {
    scanner: Scanner<'t, D>,

    /// The lists currently being parsed.
    contexts: ParsingContexts,

    /// The grammar is recursive in a few places, and we track our 'depth'
    /// into these recursive forms to prevent stack overflows.
    depth: usize,

    imports: Vec<String>,
}

impl<'t, D: DiagnosticSink> Parser<'t, D> {
    /// Create a parser over `text`, reporting to `diagnostics`.
    pub fn new(text: &'t str, diagnostics: D) -> Self {
        let mut scanner = Scanner::new(text, diagnostics);
        scanner.scan();

        Parser {
            scanner,
            contexts: ParsingContexts::default(),
            depth: 0,
            imports: Vec::new(),
        }
    }

    /// Parse the whole input, returning the root node.
    pub fn parse_source_elements(&mut self) -> Node {
        self.parse_root(|| Ok::<(), Infallible>(()))
            .unwrap_or_else(|never| match never {})
    }

    /// Parse the whole input, returning the root node, unless
    /// `cancellation` is cancelled first. It's checked before each
    /// top-level element.
    pub fn parse_source_elements_with_cancellation(
        &mut self,
        cancellation: &CancellationToken,
    ) -> Result<Node, Error> {
        self.parse_root(|| {
            if cancellation.is_cancelled() {
                Err(Error::Cancelled)
            } else {
                Ok(())
            }
        })
    }

    /// The paths of every `@import` parsed so far.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn diagnostics(&self) -> &D {
        self.scanner.diagnostics()
    }

    pub fn into_diagnostics(self) -> D {
        self.scanner.into_diagnostics()
    }
}

impl<'t> Parser<'t, DiagnosticMessages> {
    fn into_source_file(self, filename: &str, root: Node) -> SourceFile {
        let text = self.scanner.text();
        let imports = self.imports;
        let diagnostics = self.scanner.into_diagnostics();
        SourceFile::new(filename, text, root, imports, diagnostics)
    }
}

// Depth tracking
impl<D: DiagnosticSink> Parser<'_, D> {
    /// Max nesting of symbols inside assertions inside symbols.
    const MAX_DEPTH: usize = 256;

    /// Increases the depth, returning true if the max depth is hit.
    ///
    /// Don't forget to call [`Parser::decrease_depth`] before all return
    /// paths in a rule that calls this to increase.
    fn increase_depth(&mut self) -> bool {
        if self.depth >= Self::MAX_DEPTH {
            true
        } else {
            self.depth += 1;
            false
        }
    }

    fn decrease_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

// Tokens
impl<D: DiagnosticSink> Parser<'_, D> {
    fn token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    fn next_token(&mut self) -> SyntaxKind {
        self.scanner.scan()
    }

    /// Where a node starting at the current token starts.
    fn node_pos(&self) -> usize {
        self.scanner.start_pos()
    }

    /// Where a node which ended with the previous token ends.
    fn node_end(&self) -> usize {
        self.scanner.start_pos()
    }

    fn is_at_end(&self) -> bool {
        self.token() == SyntaxKind::EndOfFileToken
    }

    /// Consume the current token, if it's `kind`.
    fn parse_token(&mut self, kind: SyntaxKind) -> Option<Box<Node>> {
        if self.token() != kind {
            return None;
        }

        let end = self.scanner.token_end();
        let node = Node::token(kind, self.node_pos(), end);
        self.next_token();
        Some(Box::new(node))
    }

    /// Consume the current token if it's any of `kinds`.
    fn parse_any_token(&mut self, kinds: &[SyntaxKind]) -> Option<Box<Node>> {
        let kind = self.token();
        if kinds.contains(&kind) {
            self.parse_token(kind)
        } else {
            None
        }
    }

    /// Consume the current token, reporting it missing if it isn't `kind`.
    fn parse_expected(&mut self, kind: SyntaxKind) -> Option<Box<Node>> {
        let node = self.parse_token(kind);
        if node.is_none() {
            self.error_expected(&token_to_string(kind, true));
        }
        node
    }

    /// Like [`parse_expected`][Parser::parse_expected], for tokens which
    /// aren't kept in the tree, like indentation.
    fn expect_token(&mut self, kind: SyntaxKind) -> bool {
        if self.token() == kind {
            self.next_token();
            true
        } else {
            self.error_expected(&token_to_string(kind, true));
            false
        }
    }

    /// Consume the current token as a node holding its value, if it's
    /// `kind`.
    fn parse_text(&mut self, kind: SyntaxKind) -> Option<Box<Node>> {
        if self.token() != kind {
            return None;
        }

        Some(Box::new(self.take_text(kind)))
    }

    /// Consume the current token as a node of `kind` holding its value,
    /// whatever it is.
    fn take_text(&mut self, kind: SyntaxKind) -> Node {
        let node = Node::text(
            kind,
            self.node_pos(),
            self.scanner.token_end(),
            self.scanner.token_value(),
        );
        self.next_token();
        node
    }

    /// Like [`parse_text`][Parser::parse_text], but reports the token
    /// missing.
    fn parse_expected_text(&mut self, kind: SyntaxKind) -> Option<Box<Node>> {
        let node = self.parse_text(kind);
        if node.is_none() {
            self.error_expected(&token_to_string(kind, true));
        }
        node
    }

    /// An identifier, where keywords are fine too since nothing else could
    /// be there.
    fn parse_identifier_or_keyword(&mut self) -> Option<Box<Node>> {
        if self.token().is_keyword() {
            Some(Box::new(self.take_text(SyntaxKind::Identifier)))
        } else {
            self.parse_expected_text(SyntaxKind::Identifier)
        }
    }
}

// Errors
impl<D: DiagnosticSink> Parser<'_, D> {
    /// Report a problem at the current token, unless something was already
    /// reported there by the scanner or the parser.
    fn error_at_current_token(
        &mut self,
        message: &DiagnosticMessage,
        args: &[&dyn std::fmt::Display],
    ) {
        let pos = self.scanner.token_pos();

        if self.scanner.last_report_pos() == Some(pos) {
            return;
        }

        self.scanner.report(pos, message, args);
    }

    /// Report that `what` should be at the current token.
    fn error_expected(&mut self, what: &str) {
        self.error_at_current_token(&messages::EXPECTED, &[&what]);
    }

    fn error_unexpected_token(&mut self) {
        let found = token_to_string(self.token(), true);
        self.error_at_current_token(&messages::UNEXPECTED_TOKEN, &[&found]);
    }
}

// Speculation
impl<D: DiagnosticSink> Parser<'_, D> {
    /// Run `callback`, keeping what it parsed only if it succeeded and this
    /// isn't a lookahead.
    fn speculate<T: Speculation>(
        &mut self,
        is_lookahead: bool,
        callback: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let contexts = self.contexts;
        let snapshot = self.scanner.begin_speculation();

        let result = callback(self);

        let commit = !is_lookahead && result.succeeded();
        self.scanner.end_speculation(snapshot, commit);

        if !commit {
            self.contexts = contexts;
        }

        result
    }

    /// Run `callback` to see what's coming, and then put everything back.
    fn look_ahead<T>(&mut self, callback: impl FnOnce(&mut Self) -> T) -> T {
        let contexts = self.contexts;
        let snapshot = self.scanner.begin_speculation();

        let result = callback(self);

        self.scanner.end_speculation(snapshot, false);
        self.contexts = contexts;
        result
    }

    /// Run `callback`, keeping what it parsed only if it succeeded.
    fn try_parse<T: Speculation>(
        &mut self,
        callback: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.speculate(false, callback)
    }
}
