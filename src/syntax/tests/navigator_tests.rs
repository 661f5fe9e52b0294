use diagnostic::Caret;
use syntax::{parse_source_file, Navigator, Node, SourceFile, SyntaxKind};

const TEXT: &str = "A : `a` B\n\nC :: one of `x` `y`\n";

fn file() -> SourceFile {
    parse_source_file("test.grammar", TEXT)
}

fn is(kind: SyntaxKind) -> impl Fn(&Node) -> bool {
    move |node: &Node| node.kind() == kind
}

#[test]
fn starts_at_the_root() {
    let file = file();
    let navigator = Navigator::new(&file);

    assert_eq!(navigator.kind(), SyntaxKind::SourceFile);
    assert_eq!(navigator.depth(), 0);
    assert_eq!(navigator.name(), None);
    assert!(navigator.parent().is_none());
    assert!(!navigator.is_array());
    assert!(navigator.has_children());
    assert!(std::ptr::eq(navigator.source_file(), &file));
}

#[test]
fn elements() {
    let file = file();
    let mut navigator = Navigator::new(&file);

    assert!(navigator.move_to_first_child());
    assert_eq!(navigator.kind(), SyntaxKind::Production);
    assert_eq!(navigator.name(), Some("elements"));
    assert!(navigator.is_array());
    assert_eq!(navigator.array().map(<[_]>::len), Some(2));
    assert_eq!(navigator.offset(), 0);
    assert_eq!(navigator.text(), "A : `a` B");

    assert!(navigator.move_to_next_element());
    assert_eq!(navigator.offset(), 1);
    assert_eq!(navigator.text(), "C :: one of `x` `y`");
    assert!(!navigator.move_to_next_element());
    assert_eq!(navigator.offset(), 1);

    assert!(navigator.move_to_previous_element());
    assert_eq!(navigator.offset(), 0);
    assert!(!navigator.move_to_previous_element());

    assert!(navigator.move_to_last_element());
    assert_eq!(navigator.offset(), 1);
    assert!(navigator.move_to_first_element());
    assert_eq!(navigator.offset(), 0);
}

#[test]
fn children_and_siblings() {
    let file = file();
    let mut navigator = Navigator::new(&file);

    assert!(navigator.move_to_last_child());
    assert!(navigator.move_to_first_child_named("body"));
    assert_eq!(navigator.kind(), SyntaxKind::OneOfList);
    assert!(!navigator.is_array());

    assert!(navigator.move_to_first_child_named("terminals"));
    assert_eq!(navigator.kind(), SyntaxKind::Terminal);
    assert_eq!(navigator.text(), "`x`");

    assert!(navigator.move_to_next_sibling());
    assert_eq!(navigator.text(), "`y`");
    assert!(!navigator.move_to_next_sibling());

    assert!(navigator.move_to_previous_sibling_named("of_keyword"));
    assert_eq!(navigator.kind(), SyntaxKind::OfKeyword);
    assert!(!navigator.has_children());

    assert!(navigator.move_to_next_sibling_where(is(SyntaxKind::Terminal)));
    assert_eq!(navigator.text(), "`x`");

    assert!(navigator.move_to_parent());
    assert!(navigator.move_to_last_child_named("terminals"));
    assert_eq!(navigator.text(), "`y`");
    let one_keyword = is(SyntaxKind::OneKeyword);
    assert!(navigator.move_to_previous_sibling_where(one_keyword));
    assert!(!navigator.move_to_previous_sibling());
}

#[test]
fn missing_children_are_not_found() {
    let file = file();
    let mut navigator = Navigator::new(&file);

    assert!(navigator.move_to_first_child());
    assert!(!navigator.move_to_first_child_named("parameter_list"));
    assert!(!navigator.move_to_first_child_named("no_such_edge"));
    assert_eq!(navigator.kind(), SyntaxKind::Production);

    assert!(navigator.move_to_last_child_where(is(SyntaxKind::Identifier)));
    assert_eq!(navigator.text(), "A");
    assert_eq!(navigator.name(), Some("name"));
}

#[test]
fn moving_up() {
    let file = file();
    let mut navigator = Navigator::new(&file);

    assert!(navigator.move_to_position(Caret::new(0, 5)));
    assert_eq!(navigator.kind(), SyntaxKind::TerminalLiteral);
    assert_eq!(navigator.depth(), 5);

    assert!(!navigator.move_to_parent_where(is(SyntaxKind::Production)));
    assert_eq!(navigator.kind(), SyntaxKind::TerminalLiteral);

    assert!(navigator.move_to_parent_where(is(SyntaxKind::Terminal)));
    assert!(navigator.move_to_ancestor(is(SyntaxKind::RightHandSide)));
    assert_eq!(navigator.depth(), 2);

    assert!(navigator.move_to_ancestor_or_self(is(SyntaxKind::RightHandSide)));
    assert_eq!(navigator.depth(), 2);
    assert!(!navigator.move_to_ancestor(is(SyntaxKind::Terminal)));

    assert!(navigator.move_to_source_element());
    assert_eq!(navigator.kind(), SyntaxKind::Production);

    assert!(navigator.move_to_root());
    assert_eq!(navigator.depth(), 0);
    assert!(!navigator.move_to_source_element());
    assert!(!navigator.move_to_parent());
}

#[test]
fn position() {
    let file = file();
    let mut navigator = Navigator::new(&file);

    assert!(navigator.move_to_position(Caret::new(2, 0)));
    assert_eq!(navigator.kind(), SyntaxKind::Identifier);
    assert_eq!(navigator.text(), "C");
    assert_eq!(navigator.name(), Some("name"));

    assert!(navigator.move_to_position(Caret::new(0, 5)));
    assert_eq!(navigator.text(), "`a`");
}

#[test]
fn position_past_the_end_is_the_root() {
    let file = file();
    let mut navigator = Navigator::new(&file);
    assert!(navigator.move_to_first_child());

    assert!(navigator.move_to_position(Caret::new(99, 0)));
    assert_eq!(navigator.kind(), SyntaxKind::SourceFile);
    assert_eq!(navigator.depth(), 0);
}

#[test]
fn clones_are_independent() {
    let file = file();
    let mut first = Navigator::new(&file);
    let second = first.clone();
    assert!(first.is_same_position(&second));

    assert!(first.move_to_first_child());
    assert!(!first.is_same_position(&second));
    assert_eq!(second.kind(), SyntaxKind::SourceFile);

    let mut third = second.clone();
    assert!(third.move_to_first_child());
    assert!(first.is_same_position(&third));
}
