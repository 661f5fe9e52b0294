//! Symbols, the things a right-hand side is made of.

syntax_node! {
    /// A terminal like `` `a` ``, maybe optional.
    pub struct Terminal(as_terminal) {
        literal: one,
        question_token: one,
    }
}

syntax_node! {
    /// A reference to a production by name, with any arguments, maybe
    /// optional.
    pub struct Nonterminal(as_nonterminal) {
        name: one,
        argument_list: one,
        question_token: one,
    }
}

syntax_node! {
    /// `<U+0041> through <U+005A>`
    pub struct UnicodeCharacterRange(as_unicode_character_range) {
        left: one,
        through_keyword: one,
        right: one,
    }
}

syntax_node! {
    /// `A but not B`
    pub struct ButNotSymbol(as_but_not_symbol) {
        left: one,
        but_keyword: one,
        not_keyword: one,
        right: one,
    }
}

syntax_node! {
    /// `one of A or B`, which is only found after `but not`.
    pub struct OneOfSymbol(as_one_of_symbol) {
        one_keyword: one,
        of_keyword: one,
        symbols: many,
    }
}

syntax_node! {
    /// `@` standing in for a symbol.
    pub struct PlaceholderSymbol(as_placeholder_symbol) {
        at_token: one,
    }
}

syntax_node! {
    /// `{ A, B C }` in a lookahead assertion.
    pub struct SymbolSet(as_symbol_set) {
        open_brace_token: one,
        elements: many,
        close_brace_token: one,
    }
}

syntax_node! {
    /// `> some text`, with any embedded terminals and nonterminals between
    /// the prose fragments.
    pub struct Prose(as_prose) {
        greater_than_token: one,
        fragments: many,
    }
}

syntax_node! {
    /// Something which should have been a symbol, but wasn't.
    pub struct InvalidSymbol(as_invalid_symbol) {}
}
