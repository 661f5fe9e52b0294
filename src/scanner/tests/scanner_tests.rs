use diagnostic::DiagnosticMessages;
use scanner::*;

use SyntaxKind::*;

fn scanner_for(text: &str) -> Scanner<'_> {
    Scanner::new(text, DiagnosticMessages::new())
}

fn positions(scanner: &Scanner) -> (usize, usize, usize) {
    positions(&scanner)
}

fn kinds(text: &str) -> Vec<SyntaxKind> {
    let mut scanner = scanner_for(text);
    let mut kinds = Vec::new();
    while scanner.scan() != EndOfFileToken {
        kinds.push(scanner.token());
    }
    kinds
}

#[test]
fn scanner_empty() {
    let mut scanner = scanner_for("");
    assert_eq!(scanner.scan(), EndOfFileToken);
    assert_eq!(scanner.scan(), EndOfFileToken);
    assert!(scanner.diagnostics().is_empty());
}

#[test]
fn scanner_skips_trivia() {
    assert_eq!(kinds("  A // comment\t"), [Identifier]);
    assert_eq!(kinds("/* one\ntwo */ A"), [Identifier]);
}

#[test]
fn scanner_unterminated_comment() {
    let mut scanner = scanner_for("A /* never closed");
    scanner.scan();
    assert_eq!(scanner.scan(), EndOfFileToken);
    assert_eq!(scanner.diagnostics().len(), 1);
}

#[test]
fn scanner_production_head() {
    assert_eq!(
        kinds("Identifier[Yield, Await] :: `a`"),
        [
            Identifier,
            OpenBracketToken,
            Identifier,
            CommaToken,
            Identifier,
            CloseBracketToken,
            ColonColonToken,
            TerminalLiteral,
        ]
    );
}

#[test]
fn scanner_punctuation() {
    assert_eq!(
        kinds("@ : :: ::: , { } [ ] ( ) = == != ≠ ∈ ∉ <- <! + ~ ? #"),
        [
            AtToken,
            ColonToken,
            ColonColonToken,
            ColonColonColonToken,
            CommaToken,
            OpenBraceToken,
            CloseBraceToken,
            OpenBracketToken,
            CloseBracketToken,
            OpenParenToken,
            CloseParenToken,
            EqualsToken,
            EqualsEqualsToken,
            ExclamationEqualsToken,
            NotEqualToToken,
            ElementOfToken,
            NotAnElementOfToken,
            LessThanMinusToken,
            LessThanExclamationToken,
            PlusToken,
            TildeToken,
            QuestionToken,
            HashToken,
        ]
    );
}

#[test]
fn scanner_keywords() {
    assert_eq!(
        kinds("but not one of or through empty lookahead here"),
        [
            ButKeyword,
            NotKeyword,
            OneKeyword,
            OfKeyword,
            OrKeyword,
            ThroughKeyword,
            EmptyKeyword,
            LookaheadKeyword,
            HereKeyword,
        ]
    );
    assert_eq!(kinds("Empty butter"), [Identifier, Identifier]);
}

#[test]
fn scanner_link_names() {
    let mut scanner = scanner_for("#prod-a # b-c");
    assert_eq!(scanner.scan(), HashToken);
    assert_eq!(scanner.scan(), Identifier);
    assert_eq!(scanner.token_value(), "prod-a");
    assert_eq!(scanner.scan(), HashToken);
    assert_eq!(scanner.scan(), Identifier);
    assert_eq!(scanner.token_value(), "b");
}

#[test]
fn scanner_unicode_literals() {
    let mut scanner = scanner_for("<TAB> U+0041 <ZWNJ");

    assert_eq!(scanner.scan(), UnicodeCharacterLiteral);
    assert_eq!(scanner.token_value(), "<TAB>");
    assert_eq!(scanner.scan(), UnicodeCharacterLiteral);
    assert_eq!(scanner.token_value(), "U+0041");

    assert_eq!(scanner.scan(), UnicodeCharacterLiteral);
    assert!(scanner.is_unterminated());
    assert_eq!(scanner.diagnostics().len(), 1);
}

#[test]
fn scanner_numbers_and_strings() {
    let mut scanner = scanner_for(r#"@line 12 "file.grammar""#);
    assert_eq!(scanner.scan(), AtToken);
    assert_eq!(scanner.scan(), LineKeyword);
    assert_eq!(scanner.scan(), NumberLiteral);
    assert_eq!(scanner.token_value(), "12");
    assert_eq!(scanner.scan(), StringLiteral);
    assert_eq!(scanner.token_value(), "file.grammar");
    assert_eq!(scanner.token_text(), r#""file.grammar""#);
}

#[test]
fn scanner_invalid_character() {
    let mut scanner = scanner_for("A $ B");
    assert_eq!(scanner.scan(), Identifier);
    assert_eq!(scanner.scan(), Unknown);
    assert_eq!(scanner.token_pos(), 2);
    assert_eq!(scanner.scan(), Identifier);

    let diagnostics = scanner.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.get(0).and_then(|d| d.get_position()), Some(2));
}

#[test]
fn scanner_positions() {
    let mut scanner = scanner_for("A  /* c */ B");
    scanner.scan();
    assert_eq!(positions(&scanner), (0, 0, 1));
    assert!(!scanner.has_preceding_trivia());

    scanner.scan();
    assert_eq!(positions(&scanner), (1, 11, 12));
    assert!(scanner.has_preceding_trivia());
}

#[test]
fn indentation_simple_block() {
    assert_eq!(
        kinds("A :\n    b\n    c\nB : d"),
        [
            Identifier,
            ColonToken,
            LineTerminatorToken,
            IndentToken,
            Identifier,
            LineTerminatorToken,
            Identifier,
            LineTerminatorToken,
            DedentToken,
            Identifier,
            ColonToken,
            Identifier,
        ]
    );
}

#[test]
fn indentation_closed_at_end_of_file() {
    let mut scanner = scanner_for("A :\n  b\n    c");
    let mut kinds = Vec::new();
    while scanner.scan() != EndOfFileToken {
        kinds.push(scanner.token());
    }

    assert_eq!(kinds.iter().filter(|&&k| k == IndentToken).count(), 2);
    assert_eq!(&kinds[kinds.len() - 2..], [DedentToken, DedentToken]);
    assert_eq!(scanner.indent_depth(), 0);
    assert!(scanner.diagnostics().is_empty());
}

#[test]
fn indentation_ignores_blank_and_comment_lines() {
    assert_eq!(
        kinds("A :\n    b\n\n// note\n      \n    c"),
        [
            Identifier,
            ColonToken,
            LineTerminatorToken,
            IndentToken,
            Identifier,
            LineTerminatorToken,
            LineTerminatorToken,
            LineTerminatorToken,
            LineTerminatorToken,
            Identifier,
            DedentToken,
        ]
    );
}

#[test]
fn indentation_counts_lines_that_start_with_a_comment() {
    let text = "A :\n    /* c */ b\n    c\n/* d */\nB";
    assert_eq!(
        kinds(text),
        [
            Identifier,
            ColonToken,
            LineTerminatorToken,
            IndentToken,
            Identifier,
            LineTerminatorToken,
            Identifier,
            LineTerminatorToken,
            LineTerminatorToken,
            DedentToken,
            Identifier,
        ]
    );

    let mut scanner = scanner_for(text);
    while scanner.scan() != IndentToken {}
    assert_eq!(scanner.token_pos(), 8);
    assert_eq!(scanner.scan(), Identifier);
    assert_eq!(scanner.token_pos(), 16);
}

#[test]
fn indentation_tabs() {
    // A tab and four spaces are the same width.
    assert_eq!(
        kinds("A :\n\tb\n    c"),
        [
            Identifier,
            ColonToken,
            LineTerminatorToken,
            IndentToken,
            Identifier,
            LineTerminatorToken,
            Identifier,
            DedentToken,
        ]
    );
    assert_eq!(TAB_WIDTH, 4);
}

#[test]
fn indentation_tokens_are_zero_width() {
    let mut scanner = scanner_for("A :\r\n  b");
    scanner.scan();
    scanner.scan();

    assert_eq!(scanner.scan(), LineTerminatorToken);
    assert_eq!((scanner.token_pos(), scanner.token_end()), (3, 5));
    assert_eq!(scanner.token_text(), "\r\n");

    assert_eq!(scanner.scan(), IndentToken);
    assert_eq!(positions(&scanner), (5, 7, 7));

    assert_eq!(scanner.scan(), Identifier);
    assert_eq!(scanner.token_pos(), 7);
}

#[test]
fn last_report_position_follows_speculation() {
    let mut scanner = scanner_for("A $ B");
    scanner.scan();
    assert_eq!(scanner.last_report_pos(), None);

    assert_eq!(scanner.look_ahead(|s| s.scan()), Unknown);
    assert_eq!(scanner.last_report_pos(), None);
    assert!(scanner.diagnostics().is_empty());

    assert_eq!(scanner.scan(), Unknown);
    assert_eq!(scanner.last_report_pos(), Some(2));
    assert_eq!(scanner.diagnostics().len(), 1);
}

#[test]
fn rolled_back_lookahead_leaves_prose() {
    let mut scanner = scanner_for("A :: > words\nB");
    scanner.scan();
    scanner.scan();

    let entered = scanner.look_ahead(|s| {
        s.scan();
        s.is_in_prose()
    });

    assert!(entered);
    assert!(!scanner.is_in_prose());
    assert_eq!(scanner.token(), ColonColonToken);
    assert_eq!(scanner.scan(), GreaterThanToken);
    assert_eq!(scanner.scan(), ProseFull);
    assert_eq!(scanner.token_value(), "words");
    assert_eq!(scanner.scan(), LineTerminatorToken);
    assert_eq!(scanner.scan(), Identifier);
}

#[test]
fn failed_try_scan_restores_state() {
    let mut scanner = scanner_for("A :\n    B");
    scanner.scan();
    let before = scanner.snapshot();

    let result: Option<()> = scanner.try_scan(|s| {
        while s.scan() != EndOfFileToken {}
        None
    });

    assert!(result.is_none());
    assert_eq!(scanner.snapshot(), before);
    assert_eq!(scanner.scan(), ColonToken);
}
