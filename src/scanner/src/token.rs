//! The catalogue of token and node kinds.
//!
//! Every token the scanner produces and every node the parser builds has a
//! [`SyntaxKind`]. The kinds are laid out in contiguous groups so questions
//! like "is this a keyword?" are a range check on the discriminant. Keep new
//! kinds inside the right group, and move the `FIRST_*`/`LAST_*` markers if a
//! group's ends change.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown,

    // Trivia
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    WhitespaceTrivia,

    // Structure
    LineTerminatorToken,
    IndentToken,
    DedentToken,
    EndOfFileToken,

    // Literals
    StringLiteral,
    NumberLiteral,
    TerminalLiteral,
    UnicodeCharacterLiteral,

    // Prose fragments
    ProseFull,
    ProseHead,
    ProseMiddle,
    ProseTail,

    Identifier,

    // Keywords
    ButKeyword,
    DefaultKeyword,
    DefineKeyword,
    EmptyKeyword,
    FalseKeyword,
    GoalKeyword,
    HereKeyword,
    ImportKeyword,
    LexicalKeyword,
    LineKeyword,
    LookaheadKeyword,
    NoKeyword,
    NotKeyword,
    OfKeyword,
    OneKeyword,
    OrKeyword,
    ThroughKeyword,
    TrueKeyword,

    // Punctuation
    AtToken,                     // @
    ColonToken,                  // :
    ColonColonToken,             // ::
    ColonColonColonToken,        // :::
    CommaToken,                  // ,
    OpenBraceToken,              // {
    CloseBraceToken,             // }
    OpenBracketToken,            // [
    OpenBracketGreaterThanToken, // [>
    CloseBracketToken,           // ]
    OpenParenToken,              // (
    CloseParenToken,             // )
    GreaterThanToken,            // >
    EqualsToken,                 // =
    EqualsEqualsToken,           // ==
    ExclamationEqualsToken,      // !=
    NotEqualToToken,             // ≠
    ElementOfToken,              // ∈
    NotAnElementOfToken,         // ∉
    LessThanMinusToken,          // <-
    LessThanExclamationToken,    // <!
    PlusToken,                   // +
    TildeToken,                  // ~
    QuestionToken,               // ?
    HashToken,                   // #

    // Nodes
    SourceFile,
    Import,
    Define,
    Line,
    Production,
    ParameterList,
    Parameter,
    OneOfList,
    RightHandSideList,
    RightHandSide,
    Constraints,
    ArgumentList,
    Argument,
    SymbolSpan,
    LinkReference,

    // Assertions
    EmptyAssertion,
    LookaheadAssertion,
    LexicalGoalAssertion,
    NoSymbolHereAssertion,
    ParameterValueAssertion,
    ProseAssertion,
    InvalidAssertion,

    // Symbols, the ones which can be followed by `?` first
    Terminal,
    Nonterminal,
    UnicodeCharacterRange,
    ButNotSymbol,
    OneOfSymbol,
    PlaceholderSymbol,
    SymbolSet,
    Prose,
    InvalidSymbol,
}

use SyntaxKind::*;

impl SyntaxKind {
    pub const FIRST_TRIVIA: SyntaxKind = SingleLineCommentTrivia;
    pub const LAST_TRIVIA: SyntaxKind = WhitespaceTrivia;
    pub const FIRST_LITERAL: SyntaxKind = StringLiteral;
    pub const LAST_LITERAL: SyntaxKind = UnicodeCharacterLiteral;
    pub const FIRST_PROSE_FRAGMENT: SyntaxKind = ProseFull;
    pub const LAST_PROSE_FRAGMENT: SyntaxKind = ProseTail;
    pub const FIRST_KEYWORD: SyntaxKind = ButKeyword;
    pub const LAST_KEYWORD: SyntaxKind = TrueKeyword;
    pub const FIRST_PUNCTUATION: SyntaxKind = AtToken;
    pub const LAST_PUNCTUATION: SyntaxKind = HashToken;
    pub const FIRST_TOKEN: SyntaxKind = Unknown;
    pub const LAST_TOKEN: SyntaxKind = HashToken;
    pub const FIRST_NODE: SyntaxKind = SourceFile;
    pub const LAST_NODE: SyntaxKind = InvalidSymbol;
    pub const FIRST_ASSERTION: SyntaxKind = EmptyAssertion;
    pub const LAST_ASSERTION: SyntaxKind = InvalidAssertion;
    pub const FIRST_SYMBOL: SyntaxKind = Terminal;
    pub const LAST_SYMBOL: SyntaxKind = InvalidSymbol;
    pub const FIRST_OPTIONAL_SYMBOL: SyntaxKind = Terminal;
    pub const LAST_OPTIONAL_SYMBOL: SyntaxKind = Nonterminal;

    fn in_range(self, first: SyntaxKind, last: SyntaxKind) -> bool {
        (first as u16..=last as u16).contains(&(self as u16))
    }

    pub fn is_trivia(self) -> bool {
        self.in_range(Self::FIRST_TRIVIA, Self::LAST_TRIVIA)
    }

    pub fn is_literal(self) -> bool {
        self.in_range(Self::FIRST_LITERAL, Self::LAST_LITERAL)
    }

    pub fn is_prose_fragment(self) -> bool {
        self.in_range(Self::FIRST_PROSE_FRAGMENT, Self::LAST_PROSE_FRAGMENT)
    }

    pub fn is_keyword(self) -> bool {
        self.in_range(Self::FIRST_KEYWORD, Self::LAST_KEYWORD)
    }

    pub fn is_punctuation(self) -> bool {
        self.in_range(Self::FIRST_PUNCTUATION, Self::LAST_PUNCTUATION)
    }

    /// Anything the scanner can produce.
    pub fn is_token(self) -> bool {
        self.in_range(Self::FIRST_TOKEN, Self::LAST_TOKEN)
    }

    /// Anything only the parser builds.
    pub fn is_node(self) -> bool {
        self.in_range(Self::FIRST_NODE, Self::LAST_NODE)
    }

    pub fn is_assertion(self) -> bool {
        self.in_range(Self::FIRST_ASSERTION, Self::LAST_ASSERTION)
    }

    /// Symbol node kinds. A bare unicode character literal is also used as a
    /// symbol, but its kind is a literal kind so it isn't in this range.
    pub fn is_symbol(self) -> bool {
        self.in_range(Self::FIRST_SYMBOL, Self::LAST_SYMBOL)
    }

    /// Symbols which can be marked optional with a trailing `?`.
    pub fn is_optional_symbol(self) -> bool {
        self.in_range(Self::FIRST_OPTIONAL_SYMBOL, Self::LAST_OPTIONAL_SYMBOL)
    }

    /// The fixed spelling of this kind, if it has one.
    ///
    /// ```
    /// # use scanner::SyntaxKind;
    /// assert_eq!(SyntaxKind::ColonColonToken.text(), Some("::"));
    /// assert_eq!(SyntaxKind::Identifier.text(), None);
    /// ```
    pub fn text(self) -> Option<&'static str> {
        KIND_TO_TEXT.get(&self).copied()
    }

    /// The kind of a keyword or punctuator, from its spelling.
    ///
    /// ```
    /// # use scanner::SyntaxKind;
    /// # use scanner::SyntaxKind::*;
    /// assert_eq!(SyntaxKind::from_text("lookahead"), Some(LookaheadKeyword));
    /// assert_eq!(SyntaxKind::from_text("≠"), Some(NotEqualToToken));
    /// assert_eq!(SyntaxKind::from_text("Lookahead"), None);
    /// ```
    pub fn from_text(text: &str) -> Option<SyntaxKind> {
        TEXT_TO_KIND.get(text).copied()
    }

    /// Every kind with a fixed spelling, with that spelling.
    pub fn spellings() -> &'static [(&'static str, SyntaxKind)] {
        SPELLINGS
    }

    /// A short description of kinds without a fixed spelling, such as
    /// `identifier` or `right hand side`.
    fn label(self) -> String {
        match self {
            Unknown => "unknown".into(),
            SingleLineCommentTrivia | MultiLineCommentTrivia => {
                "comment".into()
            }
            WhitespaceTrivia => "whitespace".into(),
            LineTerminatorToken => "line terminator".into(),
            IndentToken => "indent".into(),
            DedentToken => "dedent".into(),
            EndOfFileToken => "end of file".into(),
            StringLiteral => "string".into(),
            NumberLiteral => "number".into(),
            TerminalLiteral => "terminal".into(),
            UnicodeCharacterLiteral => "unicode character literal".into(),
            ProseFull | ProseHead | ProseMiddle | ProseTail => "prose".into(),
            Identifier => "identifier".into(),
            _ => words(&format!("{self:?}")),
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&token_to_string(*self, false))
    }
}

/// How a kind is shown to people, mostly in diagnostics.
///
/// Kinds with a fixed spelling are shown as that spelling, in single quotes
/// if `quoted`. Everything else is a category in guillemets.
///
/// ```
/// # use scanner::{token_to_string, SyntaxKind};
/// assert_eq!(token_to_string(SyntaxKind::OpenBracketToken, true), "'['");
/// assert_eq!(token_to_string(SyntaxKind::OpenBracketToken, false), "[");
/// assert_eq!(token_to_string(SyntaxKind::Identifier, true), "«identifier»");
/// let label = token_to_string(SyntaxKind::RightHandSide, true);
/// assert_eq!(label, "«right hand side»");
/// ```
pub fn token_to_string(kind: SyntaxKind, quoted: bool) -> String {
    match kind.text() {
        Some(text) if quoted => format!("'{text}'"),
        Some(text) => text.to_string(),
        None => format!("«{}»", kind.label()),
    }
}

/// `RightHandSideList` to `right hand side list`.
fn words(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && i != 0 {
            out.push(' ');
        }
        out.extend(c.to_lowercase());
    }
    out
}

#[rustfmt::skip]
static SPELLINGS: &[(&str, SyntaxKind)] = &[
    ("but", ButKeyword),
    ("default", DefaultKeyword),
    ("define", DefineKeyword),
    ("empty", EmptyKeyword),
    ("false", FalseKeyword),
    ("goal", GoalKeyword),
    ("here", HereKeyword),
    ("import", ImportKeyword),
    ("lexical", LexicalKeyword),
    ("line", LineKeyword),
    ("lookahead", LookaheadKeyword),
    ("no", NoKeyword),
    ("not", NotKeyword),
    ("of", OfKeyword),
    ("one", OneKeyword),
    ("or", OrKeyword),
    ("through", ThroughKeyword),
    ("true", TrueKeyword),
    ("@", AtToken),
    (":", ColonToken),
    ("::", ColonColonToken),
    (":::", ColonColonColonToken),
    (",", CommaToken),
    ("{", OpenBraceToken),
    ("}", CloseBraceToken),
    ("[", OpenBracketToken),
    ("[>", OpenBracketGreaterThanToken),
    ("]", CloseBracketToken),
    ("(", OpenParenToken),
    (")", CloseParenToken),
    (">", GreaterThanToken),
    ("=", EqualsToken),
    ("==", EqualsEqualsToken),
    ("!=", ExclamationEqualsToken),
    ("≠", NotEqualToToken),
    ("∈", ElementOfToken),
    ("∉", NotAnElementOfToken),
    ("<-", LessThanMinusToken),
    ("<!", LessThanExclamationToken),
    ("+", PlusToken),
    ("~", TildeToken),
    ("?", QuestionToken),
    ("#", HashToken),
];

static TEXT_TO_KIND: Lazy<HashMap<&'static str, SyntaxKind>> =
    Lazy::new(|| SPELLINGS.iter().copied().collect());

static KIND_TO_TEXT: Lazy<HashMap<SyntaxKind, &'static str>> =
    Lazy::new(|| SPELLINGS.iter().map(|&(text, kind)| (kind, text)).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_do_not_overlap() {
        assert!(SyntaxKind::LAST_TRIVIA < SyntaxKind::FIRST_LITERAL);
        assert!(SyntaxKind::LAST_LITERAL < SyntaxKind::FIRST_PROSE_FRAGMENT);
        assert!(SyntaxKind::LAST_PROSE_FRAGMENT < SyntaxKind::FIRST_KEYWORD);
        assert!(SyntaxKind::LAST_KEYWORD < SyntaxKind::FIRST_PUNCTUATION);
        assert!(SyntaxKind::LAST_TOKEN < SyntaxKind::FIRST_NODE);
        assert!(SyntaxKind::LAST_ASSERTION < SyntaxKind::FIRST_SYMBOL);
    }

    #[test]
    fn every_spelling_is_a_keyword_or_punctuator() {
        for &(text, kind) in SPELLINGS {
            assert!(kind.is_keyword() || kind.is_punctuation(), "{text}");
            assert!(kind.is_token() && !kind.is_node());
        }
    }

    #[test]
    fn keywords_are_their_own_spelling() {
        for &(text, kind) in SPELLINGS.iter().filter(|(_, k)| k.is_keyword()) {
            assert!(text.chars().all(|c| c.is_ascii_lowercase()));
            let name = format!("{kind:?}").to_lowercase();
            assert_eq!(name, format!("{text}keyword"));
        }
    }

    #[test]
    fn categories() {
        assert!(ProseMiddle.is_prose_fragment());
        assert!(!Identifier.is_prose_fragment());
        assert!(InvalidAssertion.is_assertion());
        assert!(!InvalidAssertion.is_symbol());
        assert!(InvalidSymbol.is_symbol());
        assert!(Nonterminal.is_optional_symbol());
        assert!(!ButNotSymbol.is_optional_symbol());
        assert!(TerminalLiteral.is_literal());
        assert!(MultiLineCommentTrivia.is_trivia());
    }

    #[test]
    fn labels() {
        assert_eq!(token_to_string(DedentToken, true), "«dedent»");
        assert_eq!(token_to_string(ProseHead, false), "«prose»");
        assert_eq!(
            token_to_string(NoSymbolHereAssertion, true),
            "«no symbol here assertion»"
        );
        assert_eq!(CommaToken.to_string(), ",");
    }
}
