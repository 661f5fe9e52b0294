//! Where diagnostics go when they're reported.

use std::fmt;

use crate::diagnostic::Diagnostic;
use crate::level::Level;
use crate::message::DiagnosticMessage;

/// Something that accepts diagnostics as they're found.
///
/// The scanner and parser only ever report through this trait. They never
/// look at what was reported, so any implementation will do, including one
/// that throws everything away.
pub trait DiagnosticSink {
    /// Record `message`, filled in with `args`, at the byte offset `position`.
    fn report(
        &mut self,
        position: usize,
        message: &DiagnosticMessage,
        args: &[&dyn fmt::Display],
    );
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(
        &mut self,
        position: usize,
        message: &DiagnosticMessage,
        args: &[&dyn fmt::Display],
    ) {
        (**self).report(position, message, args)
    }
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullDiagnosticSink;

impl DiagnosticSink for NullDiagnosticSink {
    fn report(
        &mut self,
        _: usize,
        _: &DiagnosticMessage,
        _: &[&dyn fmt::Display],
    ) {
    }
}

/// An append-only collection of reported diagnostics, in the order they
/// were reported.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticMessages {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Diagnostic> {
        self.diagnostics.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// How many of the diagnostics are errors.
    pub fn error_count(&self) -> usize {
        self.iter().filter(|d| d.get_level() == Level::Error).count()
    }

    /// Add an already built diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticMessages {
    fn report(
        &mut self,
        position: usize,
        message: &DiagnosticMessage,
        args: &[&dyn fmt::Display],
    ) {
        self.push(Diagnostic::from_message(message, args).position(position));
    }
}

impl<'a> IntoIterator for &'a DiagnosticMessages {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
