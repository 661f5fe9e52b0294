//! Abstract syntax tree
//!
//! Every part of the tree is a [`Node`]. What a node holds depends on its
//! kind: keywords and punctuation hold nothing, identifiers, literals and
//! prose hold their text, and everything else holds one of the structs in
//! this module.
//!
//! Each of those structs declares its children as a table of [`Edge`]s, in
//! source order, so code which doesn't care what kind of node it's looking
//! at can still walk the whole tree.

/// Declare a node struct, along with its edge table, its accessors, and the
/// typed view on [`Node`] used to get at it.
///
/// Each field is either `one`, an optional single child, or `many`, a list
/// of children. The node's kind is the struct's name unless another is
/// given after a colon.
macro_rules! syntax_node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident ($view:ident) $(: $kind:ident)? {
            $($(#[$field_meta:meta])* $field:ident : $shape:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub(crate) $field: syntax_node!(@type $shape),)*
        }

        impl $name {
            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> syntax_node!(@view $shape) {
                    syntax_node!(@get self.$field, $shape)
                }
            )*
        }

        impl $crate::ast::SyntaxNode for $name {
            const KIND: $crate::SyntaxKind =
                syntax_node!(@kind $name $($kind)?);

            const EDGES: &'static [$crate::ast::Edge] = &[
                $(
                    $crate::ast::Edge {
                        name: stringify!($field),
                        is_array: syntax_node!(@is_array $shape),
                        read: |node| match node.data() {
                            $crate::ast::NodeData::$name(it) => {
                                $crate::ast::EdgeValue::from(&it.$field)
                            }
                            _ => $crate::ast::EdgeValue::Single(None),
                        },
                    },
                )*
            ];
        }

        impl From<$name> for $crate::ast::NodeData {
            fn from(it: $name) -> Self {
                $crate::ast::NodeData::$name(it)
            }
        }

        impl $crate::ast::Node {
            pub fn $view(&self) -> Option<&$name> {
                match self.data() {
                    $crate::ast::NodeData::$name(it) => Some(it),
                    _ => None,
                }
            }
        }
    };

    (@type one) => { Option<Box<$crate::ast::Node>> };
    (@type many) => { Vec<$crate::ast::Node> };

    (@view one) => { Option<&$crate::ast::Node> };
    (@view many) => { &[$crate::ast::Node] };

    (@get $value:expr, one) => { $value.as_deref() };
    (@get $value:expr, many) => { &$value[..] };

    (@is_array one) => { false };
    (@is_array many) => { true };

    (@kind $name:ident) => { $crate::SyntaxKind::$name };
    (@kind $name:ident $kind:ident) => { $crate::SyntaxKind::$kind };
}

mod assertion;
mod node;
mod source_element;
mod source_file;
mod symbol;

pub use self::{
    assertion::{
        EmptyAssertion, InvalidAssertion, LexicalGoalAssertion,
        LookaheadAssertion, NoSymbolHereAssertion, ParameterValueAssertion,
        ProseAssertion,
    },
    node::{edges_of, Edge, EdgeValue, Node, NodeData, SyntaxNode},
    source_element::{
        Argument, ArgumentList, Constraints, Define, Import, Line,
        LinkReference, OneOfList, Parameter, ParameterList, Production,
        RightHandSide, RightHandSideList, Root, SymbolSpan,
    },
    source_file::SourceFile,
    symbol::{
        ButNotSymbol, InvalidSymbol, Nonterminal, OneOfSymbol,
        PlaceholderSymbol, Prose, SymbolSet, Terminal, UnicodeCharacterRange,
    },
};
