//! Scanning - turning grammar source text into tokens.
//!
//! There are two parts to this crate:
//!
//! - [`SyntaxKind`], the catalogue of every kind of token and tree node, with
//!   the spellings of the ones that have fixed text.
//! - [`Scanner`], which walks over the text producing one token per call to
//!   [`Scanner::scan`].
//!
//! The scanner is more stateful than most. Indentation is significant, so
//! line breaks can produce extra `IndentToken`s and `DedentToken`s which are
//! queued up and handed out one at a time. Prose (`> some text`) is scanned
//! in its own mode. And the parser needs to be able to look ahead arbitrarily
//! far and then put everything back, which is what [`Scanner::speculate`] and
//! [`Snapshot`]s are for.
//!
//! # Example
//!
//! ```
//! # use scanner::{Scanner, SyntaxKind};
//! # use diagnostic::NullDiagnosticSink;
//! let mut scanner = Scanner::new("A : `a`", NullDiagnosticSink);
//! assert_eq!(scanner.scan(), SyntaxKind::Identifier);
//! assert_eq!(scanner.scan(), SyntaxKind::ColonToken);
//! assert_eq!(scanner.scan(), SyntaxKind::TerminalLiteral);
//! assert_eq!(scanner.token_value(), "a");
//! assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
//! ```

mod scanner;
mod token;

pub use crate::{
    scanner::{
        skip_trivia, Scanner, Snapshot, Speculation, TokenFlags, TAB_WIDTH,
    },
    token::{token_to_string, SyntaxKind},
};
