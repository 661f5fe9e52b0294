//! Scanning ahead and then going back.
//!
//! While any speculation is in progress, diagnostics are discarded, so
//! whatever the speculative scan runs into only gets reported once it's
//! scanned for real.

use diagnostic::DiagnosticSink;

use super::indentation::{IndentStack, TokenQueue};
use super::prose::ProseMode;
use super::{Scanner, TokenFlags};
use crate::token::SyntaxKind;

/// Whether the result of a speculative scan means it should be kept.
pub trait Speculation {
    fn succeeded(&self) -> bool;
}

impl Speculation for bool {
    fn succeeded(&self) -> bool {
        *self
    }
}

impl<T> Speculation for Option<T> {
    fn succeeded(&self) -> bool {
        self.is_some()
    }
}

impl<T, E> Speculation for Result<T, E> {
    fn succeeded(&self) -> bool {
        self.is_ok()
    }
}

/// Everything needed to put a [`Scanner`] back where it was.
///
/// The indentation stack and the token queue are shared with the scanner
/// until one of them changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pos: usize,
    start_pos: usize,
    token_pos: usize,
    token_end: usize,
    token: SyntaxKind,
    token_value: String,
    token_flags: TokenFlags,
    prose: Option<ProseMode>,
    indents: IndentStack,
    queue: TokenQueue,
    last_report_pos: Option<usize>,
}

impl<D: DiagnosticSink> Scanner<'_, D> {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pos: self.pos,
            start_pos: self.start_pos,
            token_pos: self.token_pos,
            token_end: self.token_end,
            token: self.token,
            token_value: self.token_value.clone(),
            token_flags: self.token_flags,
            prose: self.prose,
            indents: self.indents.clone(),
            queue: self.queue.clone(),
            last_report_pos: self.last_report_pos,
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.pos = snapshot.pos;
        self.start_pos = snapshot.start_pos;
        self.token_pos = snapshot.token_pos;
        self.token_end = snapshot.token_end;
        self.token = snapshot.token;
        self.token_value = snapshot.token_value;
        self.token_flags = snapshot.token_flags;
        self.prose = snapshot.prose;
        self.indents = snapshot.indents;
        self.queue = snapshot.queue;
        self.last_report_pos = snapshot.last_report_pos;
    }

    /// Start speculating. Diagnostics are discarded until the matching
    /// [`end_speculation`][Scanner::end_speculation].
    pub fn begin_speculation(&mut self) -> Snapshot {
        self.speculation_depth += 1;
        self.snapshot()
    }

    /// Stop speculating, going back to `snapshot` unless `commit` is set.
    pub fn end_speculation(&mut self, snapshot: Snapshot, commit: bool) {
        self.speculation_depth = self.speculation_depth.saturating_sub(1);

        if !commit {
            tracing::trace!(from = self.pos, to = snapshot.pos, "rolling back");
            self.restore(snapshot);
        }
    }

    /// Run `callback`, keeping what it scanned only if it succeeded and this
    /// isn't a lookahead.
    pub fn speculate<T: Speculation>(
        &mut self,
        is_lookahead: bool,
        callback: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let snapshot = self.begin_speculation();
        let result = callback(self);
        let commit = !is_lookahead && result.succeeded();
        self.end_speculation(snapshot, commit);
        result
    }

    /// Run `callback` and then go back to where the scanner was.
    pub fn look_ahead<T>(
        &mut self,
        callback: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let snapshot = self.begin_speculation();
        let result = callback(self);
        self.end_speculation(snapshot, false);
        result
    }

    /// Run `callback`, keeping what it scanned only if it succeeded.
    pub fn try_scan<T: Speculation>(
        &mut self,
        callback: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.speculate(false, callback)
    }
}

#[cfg(test)]
mod tests {
    use diagnostic::DiagnosticMessages;

    use crate::{Scanner, SyntaxKind};

    #[test]
    fn look_ahead_rolls_back() {
        let mut scanner = Scanner::new("A B C", DiagnosticMessages::new());
        scanner.scan();
        let before = scanner.snapshot();

        let next = scanner.look_ahead(|s| {
            s.scan();
            s.scan()
        });

        assert_eq!(next, SyntaxKind::Identifier);
        assert_eq!(scanner.snapshot(), before);
        assert_eq!(scanner.token_value(), "A");
    }

    #[test]
    fn try_scan_commits_on_success() {
        let mut scanner = Scanner::new("A : B", DiagnosticMessages::new());
        scanner.scan();

        let found = scanner.try_scan(|s| s.scan() == SyntaxKind::ColonToken);
        assert!(found);
        assert_eq!(scanner.token(), SyntaxKind::ColonToken);

        let found = scanner.try_scan(|s| s.scan() == SyntaxKind::ColonToken);
        assert!(!found);
        assert_eq!(scanner.token(), SyntaxKind::ColonToken);
    }

    #[test]
    fn lookahead_never_commits() {
        let mut scanner = Scanner::new("A B", DiagnosticMessages::new());
        scanner.scan();
        let kept = scanner.speculate(true, |s| Some(s.scan()));
        assert_eq!(kept, Some(SyntaxKind::Identifier));
        assert_eq!(scanner.token_value(), "A");
    }

    #[test]
    fn diagnostics_are_discarded_while_speculating() {
        let mut scanner = Scanner::new("A $", DiagnosticMessages::new());
        scanner.scan();

        scanner.look_ahead(|s| s.scan());
        assert!(scanner.diagnostics().is_empty());
        assert_eq!(scanner.reported_count(), 1);

        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
        assert_eq!(scanner.diagnostics().len(), 1);
    }

    #[test]
    fn prose_and_indentation_are_restored() {
        let text = "A ::\n    > some `x` text\n";
        let mut scanner = Scanner::new(text, DiagnosticMessages::new());
        while scanner.token() != SyntaxKind::ProseHead {
            scanner.scan();
        }
        let depth = scanner.indent_depth();
        let before = scanner.snapshot();

        scanner.look_ahead(|s| {
            while s.scan() != SyntaxKind::EndOfFileToken {}
        });

        assert_eq!(scanner.snapshot(), before);
        assert!(scanner.is_in_prose());
        assert_eq!(scanner.indent_depth(), depth);
        assert_eq!(scanner.scan(), SyntaxKind::TerminalLiteral);
        assert_eq!(scanner.scan(), SyntaxKind::ProseTail);
    }
}
