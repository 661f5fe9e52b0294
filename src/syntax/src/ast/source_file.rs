use diagnostic::{Caret, Diagnostic, DiagnosticMessages, LineMap};
use once_cell::sync::OnceCell;

use super::Node;

/// A parsed grammar file.
///
/// This owns the text, the tree, and the diagnostics reported while parsing
/// it. Nothing about it changes after parsing, other than diagnostics being
/// added.
#[derive(Debug)]
pub struct SourceFile {
    filename: String,
    text: String,
    root: Node,
    imports: Vec<String>,
    diagnostics: DiagnosticMessages,

    /// Built the first time positions are converted.
    line_map: OnceCell<LineMap>,
}

impl SourceFile {
    pub(crate) fn new(
        filename: impl Into<String>,
        text: impl Into<String>,
        root: Node,
        imports: Vec<String>,
        diagnostics: DiagnosticMessages,
    ) -> Self {
        SourceFile {
            filename: filename.into(),
            text: text.into(),
            root,
            imports,
            diagnostics,
            line_map: OnceCell::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The root node, of kind [`SourceFile`][crate::SyntaxKind::SourceFile].
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The top-level elements, in source order.
    pub fn elements(&self) -> &[Node] {
        self.root.as_root().map(|root| root.elements()).unwrap_or_default()
    }

    /// The paths named by `@import`s, as written.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn diagnostics(&self) -> &DiagnosticMessages {
        &self.diagnostics
    }

    /// Add a diagnostic found after parsing.
    pub fn attach_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn line_map(&self) -> &LineMap {
        self.line_map.get_or_init(|| LineMap::new(&self.text))
    }

    /// The line and column of a byte offset.
    pub fn position_at(&self, offset: usize) -> Caret {
        self.line_map().position_at(&self.text, offset)
    }

    /// The byte offset of a line and column.
    pub fn offset_at(&self, position: impl Into<Caret>) -> usize {
        self.line_map().offset_at(&self.text, position)
    }

    /// The text of a node, without the trivia in front of it.
    pub fn node_text(&self, node: &Node) -> &str {
        let end = node.end().min(self.text.len());
        let start = scanner::skip_trivia(&self.text, node.pos()).min(end);
        &self.text[start..end]
    }
}
