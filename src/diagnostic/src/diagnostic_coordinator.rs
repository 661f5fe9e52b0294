//! Diagnostic Coordinator handles collecting any diagnostics produced, and
//! emitting them at the right times, and in the right formats.

use crate::diagnostic::Diagnostic;
use crate::emitter::Emitter;
use crate::input_coordinator::{InputCoordinator, InputId};
use crate::level::Level;
use crate::sink::DiagnosticMessages;

#[derive(Debug, Default)]
pub struct DiagnosticCoordinator {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCoordinator {
    pub fn register(&mut self, issue: Diagnostic) {
        self.diagnostics.push(issue);
    }

    /// Register everything reported while processing one input.
    pub fn register_all(
        &mut self,
        input: InputId,
        messages: &DiagnosticMessages,
    ) {
        for message in messages {
            self.register(message.clone().input(input));
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.get_level() == Level::Error)
    }

    /// Emit everything registered, ordered by input and then by position.
    pub fn emit(
        mut self,
        emitter: &mut dyn Emitter,
        inputs: &InputCoordinator,
    ) -> std::io::Result<()> {
        for d in &mut self.diagnostics {
            let location = d.resolve_location(inputs);
            d.set_location(location);
        }

        self.diagnostics.sort_by_key(|d| {
            (d.get_input(), d.get_location(), d.get_position())
        });

        for d in &self.diagnostics {
            emitter.emit(d, inputs)?;
        }

        Ok(())
    }
}
