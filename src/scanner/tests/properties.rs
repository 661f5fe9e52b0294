//! Property tests for the scanner.
//!
//! 1. Scanning any input finishes, and token spans stay inside the input in
//!    order.
//! 2. Every indent is matched by a dedent by the end of the input.
//! 3. Scanning the same input twice gives the same tokens.
//! 4. Looking ahead leaves the scanner exactly where it was.

use diagnostic::{DiagnosticMessages, NullDiagnosticSink};
use proptest::prelude::*;
use scanner::{Scanner, SyntaxKind};

/// Pieces of grammar source, so generated inputs look like the real thing
/// often enough to reach indentation and prose.
const FRAGMENTS: &[&str] = &[
    "A", "Name", " ", "    ", "\t", "\n", "\r\n", ":", "::", "`x`", "`", "|Id|",
    "\"s\\n\"", "'", "[", "]", "[>", ">", "<TAB>", "U+0041", "one", "of",
    "but", "not", "#", "-", "?", ",", "{", "}", "// c", "/*", "*/", "@", "12",
    "≠", "<!", "$",
];

fn grammar_like() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..40)
        .prop_map(|parts| parts.concat())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![grammar_like(), "\\PC{0,60}", "[ \t\n>`|a-z:]{0,60}"]
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: SyntaxKind,
    start_pos: usize,
    token_pos: usize,
    end: usize,
    value: String,
}

/// Scan everything, giving up if the scanner doesn't finish in a sensible
/// number of steps.
fn tokens(text: &str) -> Option<Vec<Token>> {
    let mut scanner = Scanner::new(text, NullDiagnosticSink);
    let mut tokens = Vec::new();

    for _ in 0..(text.len() * 4 + 16) {
        let kind = scanner.scan();
        tokens.push(Token {
            kind,
            start_pos: scanner.start_pos(),
            token_pos: scanner.token_pos(),
            end: scanner.token_end(),
            value: scanner.token_value().to_string(),
        });

        if kind == SyntaxKind::EndOfFileToken {
            return Some(tokens);
        }
    }

    None
}

proptest! {
    #[test]
    fn scanning_finishes_with_ordered_spans(text in any_text()) {
        let tokens = tokens(&text);
        prop_assert!(tokens.is_some(), "scanner did not finish");

        let mut previous_end = 0;
        for token in tokens.unwrap_or_default() {
            prop_assert!(token.start_pos <= token.token_pos);
            prop_assert!(token.token_pos <= token.end);
            prop_assert!(token.end <= text.len());
            prop_assert!(
                previous_end <= token.start_pos,
                "{:?} starts before {}",
                token,
                previous_end
            );
            previous_end = token.end;
        }
    }

    #[test]
    fn indentation_is_balanced(text in any_text()) {
        let tokens = tokens(&text).unwrap_or_default();
        let count = |kind| tokens.iter().filter(|t| t.kind == kind).count();
        let indents = count(SyntaxKind::IndentToken);
        let dedents = count(SyntaxKind::DedentToken);
        prop_assert_eq!(indents, dedents);
    }

    #[test]
    fn rescanning_is_deterministic(text in any_text()) {
        prop_assert_eq!(tokens(&text), tokens(&text));
    }

    #[test]
    fn look_ahead_round_trips(
        text in any_text(),
        skip in 0usize..20,
        ahead in 1usize..10,
    ) {
        let mut scanner = Scanner::new(&text, DiagnosticMessages::new());
        for _ in 0..skip {
            scanner.scan();
        }

        let before = scanner.snapshot();
        let diagnostics = scanner.diagnostics().len();

        scanner.look_ahead(|s| {
            for _ in 0..ahead {
                s.scan();
            }
        });

        prop_assert_eq!(scanner.snapshot(), before);
        prop_assert_eq!(scanner.diagnostics().len(), diagnostics);
    }
}
