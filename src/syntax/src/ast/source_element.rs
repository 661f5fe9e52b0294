//! Source elements, and the parts of productions other than symbols.

syntax_node! {
    /// The root of every tree.
    pub struct Root(as_root): SourceFile {
        /// The top-level imports, defines, line directives and productions.
        elements: many,
    }
}

syntax_node! {
    /// `@import "path"`
    pub struct Import(as_import) {
        at_token: one,
        import_keyword: one,
        path: one,
    }
}

syntax_node! {
    /// `@define key value`, where the value is `true`, `false` or `default`.
    pub struct Define(as_define) {
        at_token: one,
        define_keyword: one,
        key: one,
        value: one,
    }
}

syntax_node! {
    /// `@line 12 "path"`, or `@line default`.
    pub struct Line(as_line) {
        at_token: one,
        line_keyword: one,
        /// The line number, or the `default` keyword.
        number: one,
        path: one,
    }
}

syntax_node! {
    pub struct Production(as_production) {
        name: one,
        parameter_list: one,
        /// One of `:`, `::` or `:::`.
        colon_token: one,
        /// A [`OneOfList`], a [`RightHandSideList`] or a single
        /// [`RightHandSide`].
        body: one,
    }
}

syntax_node! {
    /// `[Yield, Await]` after a production's name.
    pub struct ParameterList(as_parameter_list) {
        open_bracket_token: one,
        elements: many,
        close_bracket_token: one,
    }
}

syntax_node! {
    pub struct Parameter(as_parameter) {
        name: one,
    }
}

syntax_node! {
    /// `one of` followed by terminals, either on the same line or indented
    /// on the lines below.
    pub struct OneOfList(as_one_of_list) {
        one_keyword: one,
        of_keyword: one,
        terminals: many,
    }
}

syntax_node! {
    /// An indented block of right-hand sides, one per line.
    pub struct RightHandSideList(as_right_hand_side_list) {
        elements: many,
    }
}

syntax_node! {
    pub struct RightHandSide(as_right_hand_side) {
        constraints: one,
        head: one,
        reference: one,
    }
}

syntax_node! {
    /// `[+Yield, ~Await]` at the start of a right-hand side.
    pub struct Constraints(as_constraints) {
        open_bracket_token: one,
        elements: many,
        close_bracket_token: one,
    }
}

syntax_node! {
    /// `[+In, ?Yield]` right after a nonterminal's name.
    pub struct ArgumentList(as_argument_list) {
        open_bracket_token: one,
        elements: many,
        close_bracket_token: one,
    }
}

syntax_node! {
    /// An argument, or a constraint, with its `?`, `+` or `~`.
    pub struct Argument(as_argument) {
        operator_token: one,
        name: one,
    }
}

syntax_node! {
    /// A run of symbols, or a single piece of prose.
    pub struct SymbolSpan(as_symbol_span) {
        symbols: many,
    }
}

syntax_node! {
    /// `#name` at the end of a right-hand side.
    pub struct LinkReference(as_link_reference) {
        hash_token: one,
        name: one,
    }
}
