//! A highlight is a span of source code with an optional note about it.
//!
//! Exactly how this is presented to the user depends on the emitter.

use crate::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    span: Span,
    note: Option<String>,
}

impl Highlight {
    /// A highlighted span with a note to show alongside it.
    pub fn new(span: Span, note: impl Into<String>) -> Highlight {
        Highlight {
            span,
            note: Some(note.into()),
        }
    }

    /// A highlighted span with nothing to say about it.
    pub fn bare(span: Span) -> Highlight {
        Highlight { span, note: None }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
