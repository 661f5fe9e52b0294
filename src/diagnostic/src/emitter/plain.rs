//! A simple, ascii-only plain-text emitter, one line per diagnostic.
//!
//! This is a safe fall-back when we don't know what the output device looks
//! like, and the format other tools are most likely to parse.

use std::io::{self, Stderr, Write};

use super::Emitter;
use crate::input_coordinator::InputCoordinator;
use crate::Diagnostic;

/// Writes `name:line:column - level GMcode: text` lines.
pub struct PlainEmitter<W = Stderr> {
    out: W,
}

impl PlainEmitter {
    /// An emitter writing to standard error.
    pub fn stderr() -> Self {
        PlainEmitter { out: io::stderr() }
    }
}

impl<W: Write> PlainEmitter<W> {
    pub fn new(out: W) -> Self {
        PlainEmitter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Emitter for PlainEmitter<W> {
    fn emit(
        &mut self,
        d: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> io::Result<()> {
        let name = d.get_input().map(|id| inputs.get_input_name(id));

        match (name, d.resolve_location(inputs)) {
            (None, None) => {}
            (None, Some(l)) => write!(self.out, "{l} - ")?,
            (Some(n), None) => write!(self.out, "{n} - ")?,
            (Some(n), Some(l)) => write!(self.out, "{n}:{l} - ")?,
        }

        writeln!(self.out, "{d}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    fn emit_all(
        diagnostics: &[Diagnostic],
        inputs: &InputCoordinator,
    ) -> String {
        let mut emitter = PlainEmitter::new(Vec::new());
        for d in diagnostics {
            emitter.emit(d, inputs).unwrap();
        }
        String::from_utf8(emitter.into_inner()).unwrap()
    }

    #[test]
    fn with_input_and_position() {
        let mut inputs = InputCoordinator::default();
        let id = inputs.named_input("A :\nB [".into(), "test.grammar");
        let d = Diagnostic::from_message(&messages::EXPECTED, &[&"']'"])
            .input(id)
            .position(7);

        assert_eq!(
            emit_all(&[d], &inputs),
            "test.grammar:2:4 - error GM1000: ']' expected\n"
        );
    }

    #[test]
    fn without_anything() {
        let inputs = InputCoordinator::default();
        let d = Diagnostic::new("no input files");
        assert_eq!(emit_all(&[d], &inputs), "error: no input files\n");
    }
}
