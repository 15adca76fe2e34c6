// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, ordering, focus links, cascades.

use alloc::string::String;
use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::types::{WidgetId, WidgetState};

/// Retained widget tree.
///
/// The tree owns every widget: a node is created by [`Tree::insert`] and
/// destroyed only by [`Tree::remove`] (or by removing an ancestor). Parent
/// links are plain back-references; ownership always flows downward through
/// `children`, so there are no reference cycles to manage.
///
/// Sibling order is the single source of truth for both drawing and
/// hit-test priority: later children are drawn on top and win overlapping
/// hit tests. [`Tree::move_to_front`] and [`Tree::move_to_back`] reorder
/// without touching focus or interaction state.
///
/// The payload type `W` is chosen by the embedder (a widget-kind enum in the
/// full toolkit, any placeholder in tests).
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use trellis_tree::{Tree, WidgetState};
///
/// let mut tree: Tree<&str> = Tree::new();
/// let root = tree.insert(None, WidgetState::default(), "panel");
/// let a = tree.insert(Some(root), WidgetState::placed(Point::ZERO, Size::new(10.0, 10.0)), "a");
/// let b = tree.insert(Some(root), WidgetState::placed(Point::ZERO, Size::new(10.0, 10.0)), "b");
///
/// // Later children sit on top; reordering changes that.
/// assert_eq!(tree.children_of(root), &[a, b]);
/// tree.move_to_front(a);
/// assert_eq!(tree.children_of(root), &[b, a]);
/// ```
pub struct Tree<W> {
    /// slots
    nodes: Vec<Option<Node<W>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<W> core::fmt::Debug for Tree<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<W> Default for Tree<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Node<W> {
    generation: u32,
    parent: Option<WidgetId>,
    children: SmallVec<[WidgetId; 8]>,
    name: Option<String>,
    focused_child: Option<WidgetId>,
    state: WidgetState,
    widget: W,
}

impl<W> Node<W> {
    fn new(generation: u32, state: WidgetState, widget: W) -> Self {
        Self {
            generation,
            parent: None,
            children: SmallVec::new(),
            name: None,
            focused_child: None,
            state,
            widget,
        }
    }
}

impl<W> Tree<W> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a widget as the topmost child of `parent` (or as a root when
    /// `parent` is `None`).
    ///
    /// This is the single attach point in a widget's life; inherited
    /// defaults are propagated here by higher layers.
    ///
    /// # Panics
    ///
    /// Panics if `parent` refers to a removed widget.
    pub fn insert(&mut self, parent: Option<WidgetId>, state: WidgetState, widget: W) -> WidgetId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, state, widget));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "WidgetId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, state, widget)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "WidgetId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = WidgetId::new(idx, generation);
        if let Some(p) = parent {
            self.node_mut(p).children.push(id);
            self.node_mut(id).parent = Some(p);
        }
        id
    }

    /// Insert a widget with a name it can later be retrieved by.
    ///
    /// Names need not be unique; [`Tree::find`] returns the first match in
    /// sibling order.
    ///
    /// # Panics
    ///
    /// Panics if `parent` refers to a removed widget.
    pub fn insert_named(
        &mut self,
        parent: Option<WidgetId>,
        name: &str,
        state: WidgetState,
        widget: W,
    ) -> WidgetId {
        let id = self.insert(parent, state, widget);
        self.node_mut(id).name = Some(String::from(name));
        id
    }

    /// Remove a widget and its whole subtree.
    ///
    /// The widget is unfocused first: if it was its parent's focused child,
    /// that link is cleared. Returns `false` for stale ids (a routine
    /// outcome when the host kept an id past removal).
    pub fn remove(&mut self, id: WidgetId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        if let Some(parent) = self.node(id).parent {
            if self.node(parent).focused_child == Some(id) {
                self.node_mut(parent).focused_child = None;
            }
            let p = self.node_mut(parent);
            p.children.retain(|c| *c != id);
            self.node_mut(id).parent = None;
        }
        self.remove_subtree(id);
        true
    }

    fn remove_subtree(&mut self, id: WidgetId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Remove every child of `container`, leaving the container itself.
    pub fn clear_children(&mut self, container: WidgetId) {
        if !self.is_alive(container) {
            return;
        }
        let children: Vec<WidgetId> = self.node(container).children.to_vec();
        for child in children {
            self.remove(child);
        }
    }

    /// Returns true if `id` refers to a live widget.
    ///
    /// An id is live while its slot exists and its generation matches the
    /// slot's current generation; see [`WidgetId`] for the semantics.
    pub fn is_alive(&self, id: WidgetId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Shared access to a widget's common state, or `None` when stale.
    pub fn state(&self, id: WidgetId) -> Option<&WidgetState> {
        self.node_opt(id).map(|n| &n.state)
    }

    /// Mutable access to a widget's common state, or `None` when stale.
    pub fn state_mut(&mut self, id: WidgetId) -> Option<&mut WidgetState> {
        self.node_opt_mut(id).map(|n| &mut n.state)
    }

    /// Shared access to a widget's payload, or `None` when stale.
    pub fn widget(&self, id: WidgetId) -> Option<&W> {
        self.node_opt(id).map(|n| &n.widget)
    }

    /// Mutable access to a widget's payload, or `None` when stale.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        self.node_opt_mut(id).map(|n| &mut n.widget)
    }

    /// Mutable access to a widget's common state and payload together, for
    /// handlers that react to routed events.
    pub fn parts_mut(&mut self, id: WidgetId) -> Option<(&mut WidgetState, &mut W)> {
        self.node_opt_mut(id).map(|n| (&mut n.state, &mut n.widget))
    }

    /// The parent of a live widget, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// The children of a widget in z-order (back to front), empty when stale.
    pub fn children_of(&self, id: WidgetId) -> &[WidgetId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// The name given at insertion, if any.
    pub fn name_of(&self, id: WidgetId) -> Option<&str> {
        self.node_opt(id).and_then(|n| n.name.as_deref())
    }

    /// Find a widget by name below `container`.
    ///
    /// Direct children are searched first, in sibling order; only then does
    /// the search recurse into child containers. Returns `None` for unknown
    /// names, a routine outcome rather than an error.
    pub fn find(&self, container: WidgetId, name: &str) -> Option<WidgetId> {
        if !self.is_alive(container) {
            return None;
        }
        let children = &self.node(container).children;
        for &child in children {
            if self.node(child).name.as_deref() == Some(name) {
                return Some(child);
            }
        }
        for &child in children {
            if self.node(child).state.is_container()
                && let Some(found) = self.find(child, name)
            {
                return Some(found);
            }
        }
        None
    }

    /// Move a widget to the front of its siblings (drawn on top, first pick
    /// on overlapping hit tests). Focus and interaction state are untouched.
    ///
    /// Returns `false` for roots and stale ids.
    pub fn move_to_front(&mut self, id: WidgetId) -> bool {
        let Some(parent) = self.node_opt(id).and_then(|n| n.parent) else {
            return false;
        };
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        p.children.push(id);
        true
    }

    /// Move a widget to the back of its siblings (drawn first, last pick on
    /// overlapping hit tests). Focus and interaction state are untouched.
    ///
    /// Returns `false` for roots and stale ids.
    pub fn move_to_back(&mut self, id: WidgetId) -> bool {
        let Some(parent) = self.node_opt(id).and_then(|n| n.parent) else {
            return false;
        };
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        p.children.insert(0, id);
        true
    }

    /// Set a widget's opacity and cascade the value to every descendant.
    pub fn set_opacity(&mut self, id: WidgetId, opacity: u8) {
        if !self.is_alive(id) {
            return;
        }
        self.node_mut(id).state.opacity = opacity;
        let children: SmallVec<[WidgetId; 8]> = self.node(id).children.clone();
        for child in children {
            self.set_opacity(child, opacity);
        }
    }

    /// The focused child of `container`, if any.
    pub fn focused_child(&self, container: WidgetId) -> Option<WidgetId> {
        self.node_opt(container).and_then(|n| n.focused_child)
    }

    /// Point `container`'s focus link at `child` (or clear it with `None`),
    /// keeping the child `focused` flags in agreement.
    ///
    /// This is the mechanical half of the single-focus invariant: the old
    /// focused child's flag is cleared and the new one's set in the same
    /// step. Policy (eligibility, notices, traversal) lives in the focus
    /// engine. Returns `false` (and changes nothing) when `child` is not a
    /// direct child of `container`.
    pub fn set_focused_child(&mut self, container: WidgetId, child: Option<WidgetId>) -> bool {
        if !self.is_alive(container) {
            return false;
        }
        if let Some(c) = child
            && !self.node(container).children.contains(&c)
        {
            return false;
        }
        if let Some(old) = self.node(container).focused_child
            && self.is_alive(old)
        {
            self.node_mut(old).state.focused = false;
        }
        self.node_mut(container).focused_child = child;
        if let Some(c) = child {
            self.node_mut(c).state.focused = true;
        }
        true
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: WidgetId) -> &Node<W> {
        self.nodes[id.idx()].as_ref().expect("dangling WidgetId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: WidgetId) -> &mut Node<W> {
        self.nodes[id.idx()].as_mut().expect("dangling WidgetId")
    }

    fn node_opt(&self, id: WidgetId) -> Option<&Node<W>> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: WidgetId) -> Option<&mut Node<W>> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }
}
