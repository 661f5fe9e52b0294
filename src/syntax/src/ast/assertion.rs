syntax_node! {
    /// `[empty]`
    pub struct EmptyAssertion(as_empty_assertion) {
        open_bracket_token: one,
        empty_keyword: one,
        close_bracket_token: one,
    }
}

syntax_node! {
    /// `[lookahead ∉ { A, B }]` and friends.
    pub struct LookaheadAssertion(as_lookahead_assertion) {
        open_bracket_token: one,
        lookahead_keyword: one,
        operator_token: one,
        /// A [`SymbolSet`][super::SymbolSet] or a
        /// [`SymbolSpan`][super::SymbolSpan].
        lookahead: one,
        close_bracket_token: one,
    }
}

syntax_node! {
    /// `[lexical goal Name]`
    pub struct LexicalGoalAssertion(as_lexical_goal_assertion) {
        open_bracket_token: one,
        lexical_keyword: one,
        goal_keyword: one,
        symbol: one,
        close_bracket_token: one,
    }
}

syntax_node! {
    /// `[no A or B here]`
    pub struct NoSymbolHereAssertion(as_no_symbol_here_assertion) {
        open_bracket_token: one,
        no_keyword: one,
        symbols: many,
        here_keyword: one,
        close_bracket_token: one,
    }
}

syntax_node! {
    /// `[+Name]` or `[~Name]` in the middle of a right-hand side.
    pub struct ParameterValueAssertion(as_parameter_value_assertion) {
        open_bracket_token: one,
        operator_token: one,
        name: one,
        close_bracket_token: one,
    }
}

syntax_node! {
    /// `[> some text]`
    pub struct ProseAssertion(as_prose_assertion) {
        open_bracket_token: one,
        fragments: many,
        close_bracket_token: one,
    }
}

syntax_node! {
    /// A bracket which didn't start any known assertion. The brackets are
    /// kept and everything between them is skipped.
    pub struct InvalidAssertion(as_invalid_assertion) {
        open_bracket_token: one,
        close_bracket_token: one,
    }
}
