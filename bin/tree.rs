//! Print a parsed file as an indented tree, one node per line.

use std::io::{self, Write};

use syntax::{Navigator, SourceFile};

pub(crate) fn print(out: &mut impl Write, file: &SourceFile) -> io::Result<()> {
    writeln!(out, "{}", file.filename())?;
    let mut navigator = Navigator::new(file);
    print_node(out, &mut navigator)
}

fn print_node(
    out: &mut impl Write,
    navigator: &mut Navigator,
) -> io::Result<()> {
    let node = navigator.node();

    // Positions are shown without the leading trivia.
    let start = node.end() - navigator.text().len();
    let caret = navigator.source_file().position_at(start);

    write!(out, "{:indent$}", "", indent = navigator.depth() * 2)?;
    if let Some(name) = navigator.name() {
        write!(out, "{name}: ")?;
    }
    write!(out, "{:?} @ {caret}", node.kind())?;
    if let Some(value) = node.value() {
        write!(out, " {value:?}")?;
    }
    writeln!(out)?;

    if navigator.move_to_first_child() {
        loop {
            print_node(out, navigator)?;
            if !navigator.move_to_next_sibling() {
                break;
            }
        }
        navigator.move_to_parent();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_every_node() {
        let file = syntax::parse_source_file("test.grammar", "A : `a`");
        let mut out = Vec::new();
        print(&mut out, &file).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "test.grammar",
                "SourceFile @ 1:1",
                "  elements: Production @ 1:1",
                "    name: Identifier @ 1:1 \"A\"",
                "    colon_token: ColonToken @ 1:3",
                "    body: RightHandSide @ 1:5",
                "      head: SymbolSpan @ 1:5",
                "        symbols: Terminal @ 1:5",
                "          literal: TerminalLiteral @ 1:5 \"a\"",
            ]
        );
    }
}
