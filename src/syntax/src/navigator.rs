//! A cursor for walking around a tree.
//!
//! A [`Navigator`] always sits on some node, and remembers the whole path
//! down to it from the root: which edge of each parent it went through, and
//! where in that edge's list if it's a list. That's what lets it move to
//! parents and siblings, which nodes themselves don't know about.
//!
//! Every `move_to_*` method returns whether it moved. When one returns
//! `false`, the navigator is right where it was.
//!
//! ```
//! # use syntax::{parse_source_file, Navigator, SyntaxKind};
//! let file = parse_source_file("example.grammar", "A : `a` B");
//! let mut navigator = Navigator::new(&file);
//!
//! assert!(navigator.move_to_first_child());
//! assert_eq!(navigator.kind(), SyntaxKind::Production);
//! assert!(navigator.move_to_first_child_named("body"));
//! assert_eq!(navigator.kind(), SyntaxKind::RightHandSide);
//! assert!(navigator.move_to_parent());
//! assert_eq!(navigator.name(), Some("elements"));
//! ```

use std::rc::Rc;

use diagnostic::Caret;

use crate::ast::{Edge, EdgeValue, Node, SourceFile};
use crate::SyntaxKind;

/// A cursor over the tree of a [`SourceFile`].
///
/// Cloning is cheap. The path is shared between clones until one of them
/// moves.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    source_file: &'a SourceFile,
    state: Rc<State<'a>>,
}

/// The path from the root to the current node, one entry per level in each
/// stack. The entries for the root are never looked at except `nodes` and
/// `edges`.
#[derive(Debug, Clone)]
struct State<'a> {
    nodes: Vec<&'a Node>,

    /// The edge table of the node at each level.
    edges: Vec<&'static [Edge]>,

    /// Which edge of the parent each node hangs from.
    edge_indices: Vec<usize>,

    /// The parent's list holding each node, if that edge is a list.
    arrays: Vec<Option<&'a [Node]>>,

    /// Where each node is in that list.
    offsets: Vec<usize>,
}

/// Where a child sits under its parent.
#[derive(Debug, Clone, Copy)]
struct Slot<'a> {
    edge_index: usize,
    array: Option<&'a [Node]>,
    offset: usize,
    node: &'a Node,
}

impl Slot<'_> {
    fn is_at(&self, other: &Slot) -> bool {
        self.edge_index == other.edge_index && self.offset == other.offset
    }
}

/// Every child of `node` in source order, with where it is.
fn slots<'a>(node: &'a Node) -> impl DoubleEndedIterator<Item = Slot<'a>> + 'a {
    node.edges()
        .iter()
        .enumerate()
        .flat_map(move |(edge_index, edge)| {
            let value = edge.read(node);
            let array = match value {
                EdgeValue::Array(nodes) => Some(nodes),
                EdgeValue::Single(_) => None,
            };

            value
                .nodes()
                .iter()
                .enumerate()
                .map(move |(offset, node)| Slot {
                    edge_index,
                    array,
                    offset,
                    node,
                })
        })
}

impl<'a> Navigator<'a> {
    /// A navigator at the root of `source_file`.
    pub fn new(source_file: &'a SourceFile) -> Self {
        let root = source_file.root();

        let state = State {
            nodes: vec![root],
            edges: vec![root.edges()],
            edge_indices: vec![0],
            arrays: vec![None],
            offsets: vec![0],
        };

        Navigator {
            source_file,
            state: Rc::new(state),
        }
    }

    pub fn source_file(&self) -> &'a SourceFile {
        self.source_file
    }

    /// The node the navigator is on.
    pub fn node(&self) -> &'a Node {
        self.state.nodes[self.depth()]
    }

    pub fn kind(&self) -> SyntaxKind {
        self.node().kind()
    }

    /// How many levels below the root the navigator is.
    pub fn depth(&self) -> usize {
        self.state.nodes.len() - 1
    }

    /// The name of the parent's edge holding the current node, or `None` at
    /// the root.
    pub fn name(&self) -> Option<&'static str> {
        let depth = self.depth();
        if depth == 0 {
            return None;
        }

        let edges = self.state.edges[depth - 1];
        edges.get(self.state.edge_indices[depth]).map(Edge::name)
    }

    /// Is the current node one of a list of nodes under its parent?
    pub fn is_array(&self) -> bool {
        self.array().is_some()
    }

    /// The list holding the current node, if there is one.
    pub fn array(&self) -> Option<&'a [Node]> {
        self.state.arrays[self.depth()]
    }

    /// Where the current node is in its list, or `0` if it's not in one.
    pub fn offset(&self) -> usize {
        self.state.offsets[self.depth()]
    }

    pub fn parent(&self) -> Option<&'a Node> {
        let depth = self.depth();
        depth.checked_sub(1).map(|parent| self.state.nodes[parent])
    }

    pub fn has_children(&self) -> bool {
        self.node().has_children()
    }

    /// The source text of the current node, without leading trivia.
    pub fn text(&self) -> &'a str {
        self.source_file.node_text(self.node())
    }

    /// Are both navigators on the same node of the same file, reached the
    /// same way?
    pub fn is_same_position(&self, other: &Navigator) -> bool {
        if Rc::ptr_eq(&self.state, &other.state) {
            return true;
        }

        std::ptr::eq(self.source_file, other.source_file)
            && self.state.nodes.len() == other.state.nodes.len()
            && self
                .state
                .nodes
                .iter()
                .zip(&other.state.nodes)
                .all(|(a, b)| std::ptr::eq(*a, *b))
    }

    fn current_slot(&self) -> Option<Slot<'a>> {
        let depth = self.depth();
        if depth == 0 {
            return None;
        }

        Some(Slot {
            edge_index: self.state.edge_indices[depth],
            array: self.state.arrays[depth],
            offset: self.state.offsets[depth],
            node: self.state.nodes[depth],
        })
    }

    fn push(&mut self, slot: Slot<'a>) {
        let state = Rc::make_mut(&mut self.state);
        state.nodes.push(slot.node);
        state.edges.push(slot.node.edges());
        state.edge_indices.push(slot.edge_index);
        state.arrays.push(slot.array);
        state.offsets.push(slot.offset);
    }

    /// Cut the path back so the node at `depth` is the current one.
    fn truncate(&mut self, depth: usize) {
        let state = Rc::make_mut(&mut self.state);
        let len = depth + 1;
        state.nodes.truncate(len);
        state.edges.truncate(len);
        state.edge_indices.truncate(len);
        state.arrays.truncate(len);
        state.offsets.truncate(len);
    }

    /// Move sideways to `slot`, which must be under the same parent.
    fn replace(&mut self, slot: Slot<'a>) {
        self.truncate(self.depth() - 1);
        self.push(slot);
    }

    /// Push `slot` if there is one.
    fn enter(&mut self, slot: Option<Slot<'a>>) -> bool {
        match slot {
            Some(slot) => {
                self.push(slot);
                true
            }
            None => false,
        }
    }

    /// Replace the current node with `slot` if there is one.
    fn shift(&mut self, slot: Option<Slot<'a>>) -> bool {
        match slot {
            Some(slot) => {
                self.replace(slot);
                true
            }
            None => false,
        }
    }

    /// The index of the edge called `name` on the current node.
    fn edge_named(&self, name: &str) -> Option<usize> {
        self.state.edges[self.depth()]
            .iter()
            .position(|edge| edge.name() == name)
    }

    /// The index of the parent's edge called `name`.
    fn parent_edge_named(&self, name: &str) -> Option<usize> {
        let parent = self.depth().checked_sub(1)?;
        self.state.edges[parent]
            .iter()
            .position(|edge| edge.name() == name)
    }
}

// Moving down
impl<'a> Navigator<'a> {
    pub fn move_to_root(&mut self) -> bool {
        if self.depth() != 0 {
            self.truncate(0);
        }
        true
    }

    pub fn move_to_first_child(&mut self) -> bool {
        self.move_to_first_child_where(|_| true)
    }

    /// Move to the first child in the edge called `name`.
    pub fn move_to_first_child_named(&mut self, name: &str) -> bool {
        let Some(edge_index) = self.edge_named(name) else {
            return false;
        };

        let slot =
            slots(self.node()).find(|slot| slot.edge_index == edge_index);
        self.enter(slot)
    }

    pub fn move_to_first_child_where(
        &mut self,
        predicate: impl Fn(&Node) -> bool,
    ) -> bool {
        let slot = slots(self.node()).find(|slot| predicate(slot.node));
        self.enter(slot)
    }

    pub fn move_to_last_child(&mut self) -> bool {
        self.move_to_last_child_where(|_| true)
    }

    /// Move to the last child in the edge called `name`.
    pub fn move_to_last_child_named(&mut self, name: &str) -> bool {
        let Some(edge_index) = self.edge_named(name) else {
            return false;
        };

        let slot = slots(self.node())
            .rev()
            .find(|slot| slot.edge_index == edge_index);
        self.enter(slot)
    }

    pub fn move_to_last_child_where(
        &mut self,
        predicate: impl Fn(&Node) -> bool,
    ) -> bool {
        let slot = slots(self.node()).rev().find(|slot| predicate(slot.node));
        self.enter(slot)
    }

    /// Move to the deepest node containing the caret. Carets past the end of
    /// a line or of the text are clamped, so this always succeeds and a caret
    /// outside every element leaves the navigator at the root.
    pub fn move_to_position(&mut self, position: impl Into<Caret>) -> bool {
        let offset = self.source_file.offset_at(position);
        self.truncate(0);

        while let Some(slot) =
            slots(self.node()).find(|slot| slot.node.contains(offset))
        {
            self.push(slot);
        }

        true
    }
}

// Moving sideways
impl<'a> Navigator<'a> {
    pub fn move_to_next_sibling(&mut self) -> bool {
        self.move_to_next_sibling_where(|_| true)
    }

    /// Move to the next sibling in the edge called `name`.
    pub fn move_to_next_sibling_named(&mut self, name: &str) -> bool {
        let Some(edge_index) = self.parent_edge_named(name) else {
            return false;
        };

        self.move_to_next_slot(|slot| slot.edge_index == edge_index)
    }

    pub fn move_to_next_sibling_where(
        &mut self,
        predicate: impl Fn(&Node) -> bool,
    ) -> bool {
        self.move_to_next_slot(|slot| predicate(slot.node))
    }

    pub fn move_to_previous_sibling(&mut self) -> bool {
        self.move_to_previous_sibling_where(|_| true)
    }

    /// Move to the previous sibling in the edge called `name`.
    pub fn move_to_previous_sibling_named(&mut self, name: &str) -> bool {
        let Some(edge_index) = self.parent_edge_named(name) else {
            return false;
        };

        self.move_to_previous_slot(|slot| slot.edge_index == edge_index)
    }

    pub fn move_to_previous_sibling_where(
        &mut self,
        predicate: impl Fn(&Node) -> bool,
    ) -> bool {
        self.move_to_previous_slot(|slot| predicate(slot.node))
    }

    fn move_to_next_slot(
        &mut self,
        predicate: impl Fn(&Slot<'a>) -> bool,
    ) -> bool {
        let (Some(current), Some(parent)) =
            (self.current_slot(), self.parent())
        else {
            return false;
        };

        let slot = slots(parent)
            .skip_while(|slot| !slot.is_at(&current))
            .skip(1)
            .find(|slot| predicate(slot));

        self.shift(slot)
    }

    fn move_to_previous_slot(
        &mut self,
        predicate: impl Fn(&Slot<'a>) -> bool,
    ) -> bool {
        let (Some(current), Some(parent)) =
            (self.current_slot(), self.parent())
        else {
            return false;
        };

        let slot = slots(parent)
            .rev()
            .skip_while(|slot| !slot.is_at(&current))
            .skip(1)
            .find(|slot| predicate(slot));

        self.shift(slot)
    }

    /// Move to the first node in the current node's list.
    pub fn move_to_first_element(&mut self) -> bool {
        self.move_to_element(|_, _| Some(0))
    }

    /// Move to the last node in the current node's list.
    pub fn move_to_last_element(&mut self) -> bool {
        self.move_to_element(|_, len| len.checked_sub(1))
    }

    /// Move to the next node in the current node's list.
    pub fn move_to_next_element(&mut self) -> bool {
        self.move_to_element(|offset, _| offset.checked_add(1))
    }

    /// Move to the previous node in the current node's list.
    pub fn move_to_previous_element(&mut self) -> bool {
        self.move_to_element(|offset, _| offset.checked_sub(1))
    }

    /// Move within the current list to the offset `target` picks, given the
    /// current offset and the list's length.
    fn move_to_element(
        &mut self,
        target: impl FnOnce(usize, usize) -> Option<usize>,
    ) -> bool {
        let Some(current) = self.current_slot() else {
            return false;
        };

        let Some(array) = current.array else {
            return false;
        };

        let Some(offset) = target(current.offset, array.len()) else {
            return false;
        };

        if offset == current.offset {
            return true;
        }

        let slot = array.get(offset).map(|node| Slot {
            offset,
            node,
            ..current
        });

        self.shift(slot)
    }
}

// Moving up
impl<'a> Navigator<'a> {
    pub fn move_to_parent(&mut self) -> bool {
        self.move_to_parent_where(|_| true)
    }

    /// Move to the parent, but only if it matches `predicate`.
    pub fn move_to_parent_where(
        &mut self,
        predicate: impl Fn(&Node) -> bool,
    ) -> bool {
        match self.parent() {
            Some(parent) if predicate(parent) => {
                self.truncate(self.depth() - 1);
                true
            }
            _ => false,
        }
    }

    /// Move to the nearest node above this one matching `predicate`.
    pub fn move_to_ancestor(
        &mut self,
        predicate: impl Fn(&Node) -> bool,
    ) -> bool {
        let depth = self.depth();
        let found = self.state.nodes[..depth]
            .iter()
            .rposition(|node| predicate(*node));

        match found {
            Some(depth) => {
                self.truncate(depth);
                true
            }
            None => false,
        }
    }

    /// Like [`move_to_ancestor`][Navigator::move_to_ancestor], but the
    /// current node counts too.
    pub fn move_to_ancestor_or_self(
        &mut self,
        predicate: impl Fn(&Node) -> bool,
    ) -> bool {
        if predicate(self.node()) {
            return true;
        }

        self.move_to_ancestor(predicate)
    }

    /// Move to the top-level element holding the current node.
    pub fn move_to_source_element(&mut self) -> bool {
        match self.depth() {
            0 => false,
            1 => true,
            _ => {
                self.truncate(1);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_source_file;

    #[test]
    fn clones_share_until_moved() {
        let file = parse_source_file("test", "A : B");
        let mut first = Navigator::new(&file);
        let second = first.clone();

        assert!(Rc::ptr_eq(&first.state, &second.state));
        assert!(first.move_to_first_child());
        assert!(!Rc::ptr_eq(&first.state, &second.state));
        assert_eq!(second.depth(), 0);
        assert_eq!(first.depth(), 1);
    }

    #[test]
    fn failed_moves_do_not_copy() {
        let file = parse_source_file("test", "");
        let mut navigator = Navigator::new(&file);
        let other = navigator.clone();

        assert!(!navigator.move_to_first_child());
        assert!(!navigator.move_to_parent());
        assert!(Rc::ptr_eq(&navigator.state, &other.state));
    }

    #[test]
    fn slots_are_in_source_order() {
        let file = parse_source_file("test", "A : `a` B");
        let production = &file.elements()[0];
        let names: Vec<_> = slots(production)
            .map(|slot| production.edges()[slot.edge_index].name())
            .collect();
        assert_eq!(names, ["name", "colon_token", "body"]);
    }
}
