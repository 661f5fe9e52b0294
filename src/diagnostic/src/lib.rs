//! Diagnostics - user-readable messages about grammar source text.
//!
//! The front end never fails on bad input. Instead it reports what it found
//! through a [`DiagnosticSink`] and carries on. This crate holds the pieces
//! shared by everything that produces or presents those reports:
//!
//! - the message catalogue in [`messages`], each entry a [`DiagnosticMessage`]
//!   template with a stable code,
//! - the [`DiagnosticSink`] contract, with the [`DiagnosticMessages`]
//!   collector and the [`NullDiagnosticSink`],
//! - [`LineMap`] for turning byte offsets into [`Caret`]s and back,
//! - the coordinators and emitters used to show diagnostics to a person.

mod caret;
mod diagnostic;
mod diagnostic_coordinator;
mod emitter;
mod highlight;
mod input_coordinator;
mod level;
mod line_map;
mod message;
pub mod messages;
mod sink;
mod span;

pub use self::{
    caret::Caret,
    diagnostic::Diagnostic,
    diagnostic_coordinator::DiagnosticCoordinator,
    emitter::{Emitter, FancyEmitter, PlainEmitter},
    highlight::Highlight,
    input_coordinator::{InputCoordinator, InputId},
    level::Level,
    line_map::LineMap,
    message::DiagnosticMessage,
    sink::{DiagnosticMessages, DiagnosticSink, NullDiagnosticSink},
    span::Span,
};
