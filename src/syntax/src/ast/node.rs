use std::slice;

use crate::SyntaxKind;

use super::*;

/// Implemented by every struct a [`Node`] can hold.
pub trait SyntaxNode: Into<NodeData> {
    /// The kind of node holding this.
    const KIND: SyntaxKind;

    /// The node's children, in source order.
    const EDGES: &'static [Edge];
}

/// One slot for children on a kind of node.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub(crate) name: &'static str,
    pub(crate) is_array: bool,
    pub(crate) read: for<'n> fn(&'n Node) -> EdgeValue<'n>,
}

impl Edge {
    /// The name of the slot, which is also the name of the accessor for it.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Does this slot hold a list of nodes, rather than at most one?
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// Read what's in this slot on `node`.
    ///
    /// Reading an edge from a node of a different kind finds nothing.
    pub fn read<'n>(&self, node: &'n Node) -> EdgeValue<'n> {
        (self.read)(node)
    }
}

/// What an [`Edge`] holds on some node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeValue<'n> {
    Single(Option<&'n Node>),
    Array(&'n [Node]),
}

impl<'n> EdgeValue<'n> {
    /// The nodes in the slot, as a slice either way.
    pub fn nodes(self) -> &'n [Node] {
        match self {
            EdgeValue::Single(Some(node)) => slice::from_ref(node),
            EdgeValue::Single(None) => &[],
            EdgeValue::Array(nodes) => nodes,
        }
    }

    pub fn is_empty(self) -> bool {
        self.nodes().is_empty()
    }
}

impl<'n> From<&'n Option<Box<Node>>> for EdgeValue<'n> {
    fn from(child: &'n Option<Box<Node>>) -> Self {
        EdgeValue::Single(child.as_deref())
    }
}

impl<'n> From<&'n Vec<Node>> for EdgeValue<'n> {
    fn from(children: &'n Vec<Node>) -> Self {
        EdgeValue::Array(children)
    }
}

/// What a node holds, which depends on its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// Keywords and punctuation, which are just their kind.
    Token,

    /// Identifiers, literals and prose fragments, which hold their decoded
    /// value.
    Text(String),

    Root(Root),
    Import(Import),
    Define(Define),
    Line(Line),
    Production(Production),
    ParameterList(ParameterList),
    Parameter(Parameter),
    OneOfList(OneOfList),
    RightHandSideList(RightHandSideList),
    RightHandSide(RightHandSide),
    Constraints(Constraints),
    ArgumentList(ArgumentList),
    Argument(Argument),
    SymbolSpan(SymbolSpan),
    LinkReference(LinkReference),

    Terminal(Terminal),
    Nonterminal(Nonterminal),
    UnicodeCharacterRange(UnicodeCharacterRange),
    ButNotSymbol(ButNotSymbol),
    OneOfSymbol(OneOfSymbol),
    PlaceholderSymbol(PlaceholderSymbol),
    SymbolSet(SymbolSet),
    Prose(Prose),
    InvalidSymbol(InvalidSymbol),

    EmptyAssertion(EmptyAssertion),
    LookaheadAssertion(LookaheadAssertion),
    LexicalGoalAssertion(LexicalGoalAssertion),
    NoSymbolHereAssertion(NoSymbolHereAssertion),
    ParameterValueAssertion(ParameterValueAssertion),
    ProseAssertion(ProseAssertion),
    InvalidAssertion(InvalidAssertion),
}

/// The edge table for a kind of node. Kinds without children, including
/// every token kind, have none.
pub fn edges_of(kind: SyntaxKind) -> &'static [Edge] {
    use SyntaxKind as K;

    match kind {
        K::SourceFile => Root::EDGES,
        K::Import => Import::EDGES,
        K::Define => Define::EDGES,
        K::Line => Line::EDGES,
        K::Production => Production::EDGES,
        K::ParameterList => ParameterList::EDGES,
        K::Parameter => Parameter::EDGES,
        K::OneOfList => OneOfList::EDGES,
        K::RightHandSideList => RightHandSideList::EDGES,
        K::RightHandSide => RightHandSide::EDGES,
        K::Constraints => Constraints::EDGES,
        K::ArgumentList => ArgumentList::EDGES,
        K::Argument => Argument::EDGES,
        K::SymbolSpan => SymbolSpan::EDGES,
        K::LinkReference => LinkReference::EDGES,
        K::Terminal => Terminal::EDGES,
        K::Nonterminal => Nonterminal::EDGES,
        K::UnicodeCharacterRange => UnicodeCharacterRange::EDGES,
        K::ButNotSymbol => ButNotSymbol::EDGES,
        K::OneOfSymbol => OneOfSymbol::EDGES,
        K::PlaceholderSymbol => PlaceholderSymbol::EDGES,
        K::SymbolSet => SymbolSet::EDGES,
        K::Prose => Prose::EDGES,
        K::InvalidSymbol => InvalidSymbol::EDGES,
        K::EmptyAssertion => EmptyAssertion::EDGES,
        K::LookaheadAssertion => LookaheadAssertion::EDGES,
        K::LexicalGoalAssertion => LexicalGoalAssertion::EDGES,
        K::NoSymbolHereAssertion => NoSymbolHereAssertion::EDGES,
        K::ParameterValueAssertion => ParameterValueAssertion::EDGES,
        K::ProseAssertion => ProseAssertion::EDGES,
        K::InvalidAssertion => InvalidAssertion::EDGES,
        _ => &[],
    }
}

/// A node in the tree.
///
/// `pos` and `end` are byte offsets into the source text. `pos` is where
/// the trivia before the node's first token starts, so it's where the
/// previous node ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: SyntaxKind,
    pos: usize,
    end: usize,
    data: NodeData,
}

impl Node {
    /// A keyword or punctuation node.
    pub(crate) fn token(kind: SyntaxKind, pos: usize, end: usize) -> Node {
        Node {
            kind,
            pos,
            end,
            data: NodeData::Token,
        }
    }

    /// An identifier, literal or prose node.
    pub(crate) fn text(
        kind: SyntaxKind,
        pos: usize,
        end: usize,
        value: impl Into<String>,
    ) -> Node {
        Node {
            kind,
            pos,
            end,
            data: NodeData::Text(value.into()),
        }
    }

    /// Any other kind of node, holding `data`.
    pub(crate) fn syntax<T: SyntaxNode>(
        pos: usize,
        end: usize,
        data: T,
    ) -> Node {
        Node {
            kind: T::KIND,
            pos,
            end,
            data: data.into(),
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes, including leading trivia.
    pub fn len(&self) -> usize {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Does `offset` fall inside this node?
    pub fn contains(&self, offset: usize) -> bool {
        self.pos <= offset && offset < self.end
    }

    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// The decoded value of an identifier, literal or prose node.
    pub fn value(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(value) => Some(value),
            _ => None,
        }
    }

    /// The edge table for this node's kind.
    pub fn edges(&self) -> &'static [Edge] {
        edges_of(self.kind)
    }

    /// Every child, in source order.
    pub fn children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.edges()
            .iter()
            .flat_map(move |edge| edge.read(self).nodes())
    }

    pub fn has_children(&self) -> bool {
        self.children().next().is_some()
    }
}
