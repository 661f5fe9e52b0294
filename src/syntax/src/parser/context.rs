//! The kinds of lists the parser knows, and the rules for each.

use scanner::SyntaxKind::{self, *};

/// A kind of list being parsed.
///
/// Lists differ in what can start an element, what separates elements,
/// what ends the list, and which line breaks and indentation don't matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ParsingContext {
    SourceElements,
    Parameters,
    Arguments,
    Constraints,
    RightHandSideListIndented,
    SymbolSet,
    OneOfList,
    OneOfListIndented,
    OneOfSymbolList,
    NoSymbolHere,
}

/// How line breaks and indentation are treated inside a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Whitespace {
    /// Line breaks and indentation are both insignificant.
    All,

    /// Extra line breaks are insignificant, since line breaks separate
    /// elements.
    BlankLines,

    /// The whole list is on one line, so nothing is skipped.
    Nothing,
}

impl ParsingContext {
    pub const ALL: [ParsingContext; 10] = [
        ParsingContext::SourceElements,
        ParsingContext::Parameters,
        ParsingContext::Arguments,
        ParsingContext::Constraints,
        ParsingContext::RightHandSideListIndented,
        ParsingContext::SymbolSet,
        ParsingContext::OneOfList,
        ParsingContext::OneOfListIndented,
        ParsingContext::OneOfSymbolList,
        ParsingContext::NoSymbolHere,
    ];

    fn bit(self) -> u16 {
        1 << self as u16
    }

    /// Can `token` start an element of this list?
    pub fn is_start_of_element(self, token: SyntaxKind) -> bool {
        match self {
            Self::SourceElements => matches!(token, AtToken | Identifier),
            Self::Parameters => token == Identifier || token.is_keyword(),
            Self::Arguments => matches!(
                token,
                QuestionToken | PlusToken | TildeToken | Identifier
            ),
            Self::Constraints => matches!(token, PlusToken | TildeToken),
            Self::RightHandSideListIndented | Self::SymbolSet => {
                is_start_of_symbol_span(token)
            }
            Self::OneOfList | Self::OneOfListIndented => {
                token == TerminalLiteral
            }
            Self::OneOfSymbolList | Self::NoSymbolHere => {
                is_start_of_primary_symbol(token)
            }
        }
    }

    pub fn whitespace(self) -> Whitespace {
        match self {
            Self::SourceElements
            | Self::Parameters
            | Self::Arguments
            | Self::Constraints
            | Self::SymbolSet
            | Self::OneOfListIndented => Whitespace::All,
            Self::RightHandSideListIndented => Whitespace::BlankLines,
            Self::OneOfList | Self::OneOfSymbolList | Self::NoSymbolHere => {
                Whitespace::Nothing
            }
        }
    }

    /// The token between elements, if there is one.
    pub fn separator(self) -> Option<SyntaxKind> {
        match self {
            Self::Parameters
            | Self::Arguments
            | Self::Constraints
            | Self::SymbolSet => Some(CommaToken),
            Self::RightHandSideListIndented => Some(LineTerminatorToken),
            Self::OneOfSymbolList | Self::NoSymbolHere => Some(OrKeyword),
            Self::SourceElements
            | Self::OneOfList
            | Self::OneOfListIndented => None,
        }
    }

    /// Does `token` end this list?
    ///
    /// The end of the input ends every list.
    pub fn is_terminator(self, token: SyntaxKind) -> bool {
        token == EndOfFileToken
            || match self {
                Self::SourceElements => false,
                Self::Parameters | Self::Arguments | Self::Constraints => {
                    token == CloseBracketToken
                }
                Self::SymbolSet => token == CloseBraceToken,
                Self::RightHandSideListIndented | Self::OneOfListIndented => {
                    token == DedentToken
                }
                Self::OneOfList => token == LineTerminatorToken,
                Self::OneOfSymbolList => matches!(
                    token,
                    LineTerminatorToken
                        | DedentToken
                        | CloseBracketToken
                        | CloseBraceToken
                        | CommaToken
                        | HashToken
                ),
                Self::NoSymbolHere => matches!(
                    token,
                    HereKeyword | CloseBracketToken | LineTerminatorToken
                ),
            }
    }

    /// Tokens worth stopping at when skipping over junk in this list.
    pub fn is_recovery_token(self, token: SyntaxKind) -> bool {
        match self {
            Self::SourceElements => token == LineTerminatorToken,
            Self::Parameters
            | Self::Arguments
            | Self::Constraints
            | Self::NoSymbolHere => {
                matches!(token, CloseBracketToken | LineTerminatorToken)
            }
            Self::SymbolSet => {
                matches!(token, CloseBraceToken | LineTerminatorToken)
            }
            Self::RightHandSideListIndented | Self::OneOfListIndented => {
                matches!(token, LineTerminatorToken | DedentToken)
            }
            Self::OneOfList | Self::OneOfSymbolList => {
                token == LineTerminatorToken
            }
        }
    }

    /// What an element of this list is called in diagnostics.
    pub fn element_label(self) -> &'static str {
        match self {
            Self::SourceElements => "«production»",
            Self::Parameters => "«identifier»",
            Self::Arguments => "«argument»",
            Self::Constraints => "«constraint»",
            Self::RightHandSideListIndented => "«right-hand side»",
            Self::SymbolSet => "«symbol span»",
            Self::OneOfList | Self::OneOfListIndented => "«terminal»",
            Self::OneOfSymbolList | Self::NoSymbolHere => "«symbol»",
        }
    }
}

/// Can `token` start a terminal, nonterminal, unicode character literal or
/// placeholder?
pub(crate) fn is_start_of_primary_symbol(token: SyntaxKind) -> bool {
    matches!(
        token,
        TerminalLiteral | Identifier | UnicodeCharacterLiteral | AtToken
    )
}

/// Can `token` start a symbol, including assertions?
pub(crate) fn is_start_of_symbol(token: SyntaxKind) -> bool {
    is_start_of_primary_symbol(token)
        || matches!(token, OpenBracketToken | OpenBracketGreaterThanToken)
}

/// Can `token` start a span of symbols or prose?
pub(crate) fn is_start_of_symbol_span(token: SyntaxKind) -> bool {
    is_start_of_symbol(token) || token == GreaterThanToken
}

/// The set of lists being parsed, innermost or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ParsingContexts(u16);

impl ParsingContexts {
    pub fn contains(self, context: ParsingContext) -> bool {
        self.0 & context.bit() != 0
    }

    pub fn insert(&mut self, context: ParsingContext) {
        self.0 |= context.bit();
    }

    pub fn iter(self) -> impl Iterator<Item = ParsingContext> {
        ParsingContext::ALL
            .into_iter()
            .filter(move |&context| self.contains(context))
    }
}
