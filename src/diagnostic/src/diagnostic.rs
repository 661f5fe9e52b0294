use std::fmt;

use crate::caret::Caret;
use crate::highlight::Highlight;
use crate::input_coordinator::{InputCoordinator, InputId};
use crate::level::Level;
use crate::message::DiagnosticMessage;
use crate::Span;

/// A diagnostic message, with a lot of trimmings.
///
/// The front end only knows byte offsets, so a diagnostic starts out with a
/// [`position`][Diagnostic::position] and maybe an input. The line and column
/// are worked out later, when there's an [`InputCoordinator`] around to ask.
///
/// Accessors are `get_*`/`set_*`. The bare-named methods are builders that
/// consume `self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The input the source text came from.
    input_id: Option<InputId>,

    /// The byte offset in the input where the issue was found.
    position: Option<usize>,

    /// Where the issue begins, once it's known.
    location: Option<Caret>,

    /// The catalogue code, if the diagnostic came from the catalogue.
    code: Option<u32>,

    level: Level,

    text: String,

    /// The highlighted regions relevant to this diagnostic.
    highlights: Vec<Highlight>,
}

impl Diagnostic {
    /// Create a new diagnostic with only a description, at the default
    /// [`Level`].
    pub fn new(text: impl Into<String>) -> Self {
        Diagnostic {
            input_id: None,
            position: None,
            location: None,
            code: None,
            level: Level::default(),
            text: text.into(),
            highlights: Vec::new(),
        }
    }

    /// Create a diagnostic from a catalogue entry and its arguments.
    pub fn from_message(
        message: &DiagnosticMessage,
        args: &[&dyn fmt::Display],
    ) -> Self {
        let mut diagnostic = Diagnostic::new(message.format(args));
        diagnostic.code = Some(message.code());
        diagnostic.level = message.level();
        diagnostic
    }

    /// Add the id of the input that caused this issue.
    pub fn input(mut self, id: InputId) -> Self {
        self.input_id = Some(id);
        self
    }

    pub fn get_input(&self) -> Option<InputId> {
        self.input_id
    }

    pub fn set_input(&mut self, id: Option<InputId>) {
        self.input_id = id;
    }

    /// The byte offset where the issue was found.
    pub fn position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn get_position(&self) -> Option<usize> {
        self.position
    }

    /// The line and column where the issue started.
    pub fn location(mut self, location: Caret) -> Self {
        self.location = Some(location);
        self
    }

    /// Get the location where the issue arose. This may be `None` if it's not
    /// known, or wouldn't be meaningful, such as if a file cannot be read.
    pub fn get_location(&self) -> Option<Caret> {
        self.location
    }

    pub fn set_location(&mut self, location: Option<Caret>) {
        self.location = location;
    }

    /// The location, working it out from the position if it isn't set yet.
    pub fn resolve_location(&self, inputs: &InputCoordinator) -> Option<Caret> {
        self.location.or_else(|| {
            let id = self.input_id?;
            let position = self.position?;
            Some(inputs.caret_at(id, position))
        })
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn get_level(&self) -> Level {
        self.level
    }

    pub fn get_code(&self) -> Option<u32> {
        self.code
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// Add a highlight to this diagnostic message.
    pub fn highlight(mut self, span: Span, note: impl Into<String>) -> Self {
        self.highlights.push(Highlight::new(span, note));
        self
    }

    pub fn get_highlights(&self) -> &[Highlight] {
        &self.highlights
    }
}

impl fmt::Display for Diagnostic {
    /// The level, code and text, without any location.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} GM{}: {}", self.level, code, self.text),
            None => write!(f, "{}: {}", self.level, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    #[test]
    fn from_catalogue() {
        let d = Diagnostic::from_message(&messages::EXPECTED, &[&"']'"])
            .position(7);
        assert_eq!(d.get_code(), Some(1000));
        assert_eq!(d.get_position(), Some(7));
        assert_eq!(d.to_string(), "error GM1000: ']' expected");
    }

    #[test]
    fn free_text() {
        let d = Diagnostic::new("cannot read file").level(Level::Warning);
        assert_eq!(d.to_string(), "warning: cannot read file");
    }

    #[test]
    fn location_from_position() {
        let mut inputs = InputCoordinator::default();
        let id = inputs.named_input("A :\n  B".into(), "<test>");
        let d = Diagnostic::new("x").input(id).position(6);
        assert_eq!(d.resolve_location(&inputs), Some(Caret::new(1, 2)));
    }
}
