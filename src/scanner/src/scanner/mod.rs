//! The scanner proper.
//!
//! [`Scanner::scan`] is the only way forward. Everything else reads the
//! current token, or saves and restores the scanner's state.
//!
//! The rules for individual tokens are split over a few files:
//!
//! - `rules.rs` dispatches on the next character, and handles words,
//!   punctuation, numbers and comments.
//! - `string.rs` handles the quoted things: strings, terminals and `|…|`
//!   identifiers.
//! - `prose.rs` handles `>` prose.
//! - `indentation.rs` handles line breaks and the indentation stack.
//! - `speculation.rs` handles saving and restoring state.

mod combinator;
mod indentation;
mod prose;
mod rules;
mod speculation;
mod string;

use std::fmt;

use diagnostic::{
    DiagnosticMessage, DiagnosticMessages, DiagnosticSink, NullDiagnosticSink,
};

use crate::token::SyntaxKind;

use self::indentation::{IndentStack, TokenQueue};
use self::prose::ProseMode;

pub use self::indentation::TAB_WIDTH;
pub use self::rules::skip_trivia;
pub use self::speculation::{Snapshot, Speculation};

/// Extra facts about the current token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenFlags(u8);

impl TokenFlags {
    pub const NONE: TokenFlags = TokenFlags(0);

    /// The token ran into the end of its line (or the input) before it was
    /// closed. A diagnostic has already been reported for it.
    pub const UNTERMINATED: TokenFlags = TokenFlags(1);

    pub fn contains(self, other: TokenFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: TokenFlags) {
        self.0 |= other.0;
    }
}

/// Turns grammar source text into a stream of tokens, one per call to
/// [`scan`][Scanner::scan].
///
/// Problems in the text are reported to the [`DiagnosticSink`] `D` and the
/// scanner carries on with its best guess, so scanning never fails. Once the
/// end of the input is reached `scan` keeps returning
/// [`SyntaxKind::EndOfFileToken`].
///
/// # Example
///
/// ```
/// # use scanner::{Scanner, SyntaxKind};
/// # use diagnostic::DiagnosticMessages;
/// let mut scanner = Scanner::new("A :\n    B\n", DiagnosticMessages::new());
/// let mut kinds = Vec::new();
/// while scanner.scan() != SyntaxKind::EndOfFileToken {
///     kinds.push(scanner.token());
/// }
///
/// use SyntaxKind::*;
/// assert_eq!(kinds, [
///     Identifier, ColonToken, LineTerminatorToken, IndentToken,
///     Identifier, LineTerminatorToken, DedentToken,
/// ]);
/// assert!(scanner.diagnostics().is_empty());
/// ```
pub struct Scanner<'t, D = DiagnosticMessages> {
    text: &'t str,

    diagnostics: D,

    /// Discards diagnostics while speculating.
    null_sink: NullDiagnosticSink,

    /// How many speculations are in progress.
    speculation_depth: u32,

    /// Every diagnostic reported, even the ones discarded while speculating.
    reported: usize,

    /// Where the last diagnostic was reported.
    last_report_pos: Option<usize>,

    /// The byte offset of the next character to be scanned.
    pos: usize,

    /// Where the current token starts, including any leading trivia.
    start_pos: usize,

    /// Where the current token's own text starts.
    token_pos: usize,

    /// Where the current token's own text ends.
    token_end: usize,

    token: SyntaxKind,

    /// The decoded value of the current token.
    token_value: String,

    token_flags: TokenFlags,

    /// Set while scanning `>` or `[>` prose.
    prose: Option<ProseMode>,

    indents: IndentStack,

    /// Tokens produced by a line break which haven't been handed out yet.
    queue: TokenQueue,
}

impl<'t, D: DiagnosticSink> Scanner<'t, D> {
    /// Create a new scanner over `text`, reporting to `diagnostics`.
    pub fn new(text: &'t str, diagnostics: D) -> Self {
        Scanner {
            text,
            diagnostics,
            null_sink: NullDiagnosticSink,
            speculation_depth: 0,
            reported: 0,
            last_report_pos: None,
            pos: 0,
            start_pos: 0,
            token_pos: 0,
            token_end: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            token_flags: TokenFlags::NONE,
            prose: None,
            indents: IndentStack::default(),
            queue: TokenQueue::default(),
        }
    }

    /// Advance to the next token, and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.token_flags = TokenFlags::NONE;
        self.token_value.clear();

        if self.queue.is_empty() {
            self.start_pos = self.pos;

            let after_fragment = matches!(
                self.token,
                SyntaxKind::ProseHead | SyntaxKind::ProseMiddle
            );

            let kind = match self.prose {
                Some(mode) if !after_fragment => self.scan_prose(mode),
                _ => self.scan_token(),
            };

            // Line breaks queue themselves, along with any indentation changes.
            if self.queue.is_empty() {
                self.token_end = self.pos;
                self.token = kind;
                return kind;
            }
        }

        if let Some(queued) = self.queue.pop() {
            self.start_pos = queued.start_pos;
            self.token_pos = queued.token_pos;
            self.token_end = queued.end;
            self.token = queued.kind;
        }

        self.token
    }

    /// The whole text being scanned.
    pub fn text(&self) -> &'t str {
        self.text
    }

    /// The kind of the current token.
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// The current token's text, exactly as it appears in the input.
    pub fn token_text(&self) -> &'t str {
        &self.text[self.token_pos..self.token_end]
    }

    /// The current token's decoded value. For strings this has escapes
    /// processed, for terminals it's the text between the backticks, for
    /// prose it's the prose text, and for words it's the word.
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Where the current token's own text starts.
    pub fn token_pos(&self) -> usize {
        self.token_pos
    }

    /// Where the current token starts, including the trivia before it. This
    /// is also where the previous token ended.
    pub fn start_pos(&self) -> usize {
        self.start_pos
    }

    pub fn token_end(&self) -> usize {
        self.token_end
    }

    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    pub fn is_unterminated(&self) -> bool {
        self.token_flags.contains(TokenFlags::UNTERMINATED)
    }

    /// Was there whitespace or a comment between the previous token and this
    /// one?
    pub fn has_preceding_trivia(&self) -> bool {
        self.start_pos != self.token_pos
    }

    /// Is the scanner in the middle of some prose?
    pub fn is_in_prose(&self) -> bool {
        self.prose.is_some()
    }

    /// How many levels of indentation are open.
    pub fn indent_depth(&self) -> usize {
        self.indents.depth()
    }

    /// Report a diagnostic through the scanner's sink. Nothing is kept while
    /// speculating.
    pub fn report(
        &mut self,
        position: usize,
        message: &DiagnosticMessage,
        args: &[&dyn fmt::Display],
    ) {
        self.reported += 1;
        self.last_report_pos = Some(position);
        self.sink().report(position, message, args);
    }

    /// Where the last diagnostic was reported, so a parser can avoid
    /// reporting a second problem at the same place.
    pub fn last_report_pos(&self) -> Option<usize> {
        self.last_report_pos
    }

    /// How many diagnostics have been reported so far, including the ones
    /// discarded while speculating.
    pub fn reported_count(&self) -> usize {
        self.reported
    }

    fn sink(&mut self) -> &mut dyn DiagnosticSink {
        if self.speculation_depth > 0 {
            &mut self.null_sink
        } else {
            &mut self.diagnostics
        }
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }
}
