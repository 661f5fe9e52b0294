//! Input Manager

use std::path::PathBuf;

use crate::caret::Caret;
use crate::line_map::LineMap;

/// A unique ID that corresponds to a piece of input tracked by an
/// [`InputCoordinator`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct InputId(usize);

/// Keeps the text of every input around, so diagnostics can refer to inputs
/// by [`InputId`] and be given lines and columns when they're shown.
#[derive(Debug, Default)]
pub struct InputCoordinator {
    /// Inputs, where [`InputId`] are the corresponding indexes.
    inputs: Vec<Input>,
}

impl InputCoordinator {
    /// Track the contents of a file.
    pub fn file_input(&mut self, buffer: String, path: PathBuf) -> InputId {
        self.push(buffer, Name::File(path))
    }

    /// Track input that didn't come from a file, like standard input.
    pub fn named_input(
        &mut self,
        buffer: String,
        name: impl Into<String>,
    ) -> InputId {
        self.push(buffer, Name::Other(name.into()))
    }

    fn push(&mut self, buffer: String, name: Name) -> InputId {
        let id = InputId(self.inputs.len());
        let line_map = LineMap::new(&buffer);
        self.inputs.push(Input {
            name,
            buffer,
            line_map,
        });
        id
    }

    pub fn get_input_buffer(&self, id: InputId) -> &str {
        self.inputs[id.0].buffer.as_str()
    }

    pub fn get_input_name(&self, id: InputId) -> String {
        match &self.inputs[id.0].name {
            Name::File(path) => path.display().to_string(),
            Name::Other(name) => name.clone(),
        }
    }

    pub fn get_line_map(&self, id: InputId) -> &LineMap {
        &self.inputs[id.0].line_map
    }

    /// The line and column of a byte offset in an input.
    pub fn caret_at(&self, id: InputId, offset: usize) -> Caret {
        let input = &self.inputs[id.0];
        input.line_map.position_at(&input.buffer, offset)
    }

    /// The text of one line of an input, without its line terminator.
    pub fn line_text(&self, id: InputId, line: u32) -> &str {
        let input = &self.inputs[id.0];
        input.line_map.line_text(&input.buffer, line)
    }
}

/// A piece of input has a name, a buffer which contains its text, and the
/// line map for that text.
#[derive(Debug)]
struct Input {
    name: Name,
    buffer: String,
    line_map: LineMap,
}

/// Where a piece of input came from.
#[derive(Debug)]
enum Name {
    File(PathBuf),
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let mut inputs = InputCoordinator::default();
        let path = PathBuf::from("grammar.grammar");
        let file = inputs.file_input("A : B".into(), path);
        let stdin = inputs.named_input("C : D".into(), "<stdin>");

        assert_eq!(inputs.get_input_name(file), "grammar.grammar");
        assert_eq!(inputs.get_input_name(stdin), "<stdin>");
        assert_eq!(inputs.get_input_buffer(stdin), "C : D");
    }

    #[test]
    fn carets_and_lines() {
        let mut inputs = InputCoordinator::default();
        let id = inputs.named_input("A :\r\n  `x`".into(), "<test>");

        assert_eq!(inputs.caret_at(id, 7), Caret::new(1, 2));
        assert_eq!(inputs.line_text(id, 0), "A :");
        assert_eq!(inputs.line_text(id, 1), "  `x`");
    }
}
