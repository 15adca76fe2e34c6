// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Focus: focus navigation over the Trellis widget tree.
//!
//! Each container has at most one focused child at any time; nested
//! containers form a focus chain from the root down to the innermost
//! focused widget. This crate supplies the policy layer on top of the
//! mechanical focus link kept by `trellis_tree`:
//!
//! - [`focus_widget`] / [`unfocus_widgets`] — direct focus transfer with
//!   unfocus-then-focus notice ordering.
//! - [`focus_next_widget`] / [`focus_previous_widget`] — wrapping sibling
//!   scans that skip widgets that are not focusable, visible, and enabled.
//! - [`focus_next_widget_in_container`] — the forward-only traversal used
//!   by tab: descends into container candidates and unfocuses the whole
//!   level when it runs off the end.
//! - [`tab_key_pressed`] — tab traversal proper: exhaust the focused
//!   subtree first, then continue past it; a full cycle passes through
//!   "nothing focused" exactly once.
//!
//! Focus transitions are reported as [`FocusChange`] values pushed in the
//! order they happen, so the widget layer can fire its focused/unfocused
//! hooks exactly once per transition. Whether the tab key is honored at all
//! is the root dispatcher's decision (an explicit toggle there), not
//! global state here.
//!
//! ## Example
//!
//! ```rust
//! use trellis_focus::{FocusChange, focus_next_widget};
//! use trellis_tree::{Tree, WidgetFlags, WidgetState};
//!
//! let mut focusable = WidgetState::default();
//! focusable.flags |= WidgetFlags::FOCUSABLE;
//! let mut container = WidgetState::default();
//! container.flags |= WidgetFlags::CONTAINER;
//!
//! let mut tree: Tree<()> = Tree::new();
//! let root = tree.insert(None, container, ());
//! let a = tree.insert(Some(root), focusable.clone(), ());
//! let b = tree.insert(Some(root), focusable, ());
//!
//! let mut changes = Vec::new();
//! assert!(focus_next_widget(&mut tree, root, &mut changes));
//! assert_eq!(changes, [FocusChange::Focused(a)]);
//!
//! changes.clear();
//! assert!(focus_next_widget(&mut tree, root, &mut changes));
//! assert_eq!(changes, [FocusChange::Unfocused(a), FocusChange::Focused(b)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use trellis_tree::{Tree, WidgetId};

/// A single focus transition, in the order it happened.
///
/// The unfocus of the previous widget always precedes the focus of the next
/// one, and deliberately refires when focus wraps back onto the same widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FocusChange {
    /// The widget became its container's focused child.
    Focused(WidgetId),
    /// The widget stopped being its container's focused child.
    Unfocused(WidgetId),
}

/// Focus a specific child of `container`, unfocusing the current one first.
///
/// The transition notices refire even when `child` is already focused. This
/// is the click-to-focus and programmatic entry point; eligibility checks
/// belong to the caller (the router only calls this for focusable hits).
///
/// # Panics
///
/// Panics if `child` is not a direct child of `container`: focusing across
/// containers is caller misuse outside the event model and fails loudly
/// rather than corrupting the invariant.
pub fn focus_widget<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    child: WidgetId,
    out: &mut Vec<FocusChange>,
) {
    if let Some(old) = tree.focused_child(container) {
        out.push(FocusChange::Unfocused(old));
    }
    if !tree.set_focused_child(container, Some(child)) {
        panic!("focus_widget: widget is not a child of the given container");
    }
    out.push(FocusChange::Focused(child));
}

/// Clear `container`'s focus, if any.
pub fn unfocus_widgets<W>(tree: &mut Tree<W>, container: WidgetId, out: &mut Vec<FocusChange>) {
    if let Some(old) = tree.focused_child(container) {
        tree.set_focused_child(container, None);
        out.push(FocusChange::Unfocused(old));
    }
}

fn eligible<W>(tree: &Tree<W>, id: WidgetId) -> bool {
    tree.state(id).map(|s| s.focus_eligible()).unwrap_or(false)
}

fn is_container<W>(tree: &Tree<W>, id: WidgetId) -> bool {
    tree.state(id).map(|s| s.is_container()).unwrap_or(false)
}

fn select<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    child: WidgetId,
    out: &mut Vec<FocusChange>,
) {
    if let Some(old) = tree.focused_child(container) {
        out.push(FocusChange::Unfocused(old));
    }
    tree.set_focused_child(container, Some(child));
    out.push(FocusChange::Focused(child));
}

/// Focus the next focusable, visible, enabled child of `container`.
///
/// The scan starts after the focused child and wraps around, ending on the
/// focused child itself so that a lone eligible widget is unfocused and
/// refocused (the focus notice is guaranteed to refire). From "nothing
/// focused" the scan starts at the first child. Containers are ordinary
/// candidates here; only tab traversal descends into them.
///
/// Returns whether a child of `container` is focused afterwards.
pub fn focus_next_widget<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    out: &mut Vec<FocusChange>,
) -> bool {
    let children: Vec<WidgetId> = tree.children_of(container).to_vec();
    let focused = tree.focused_child(container);
    let order: Vec<WidgetId> = match focused.and_then(|f| children.iter().position(|&c| c == f)) {
        Some(idx) => children[idx + 1..]
            .iter()
            .chain(children[..=idx].iter())
            .copied()
            .collect(),
        None => children,
    };
    for candidate in order {
        if eligible(tree, candidate) {
            select(tree, container, candidate, out);
            return true;
        }
    }
    tree.focused_child(container).is_some()
}

/// Focus the previous focusable, visible, enabled child of `container`.
///
/// The mirror of [`focus_next_widget`]: scans backwards from before the
/// focused child, wraps from the end, and ends on the focused child itself
/// so the focus notice refires. From "nothing focused" the last eligible
/// child is focused.
///
/// Returns whether a child of `container` is focused afterwards.
pub fn focus_previous_widget<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    out: &mut Vec<FocusChange>,
) -> bool {
    let children: Vec<WidgetId> = tree.children_of(container).to_vec();
    let focused = tree.focused_child(container);
    let order: Vec<WidgetId> = match focused.and_then(|f| children.iter().position(|&c| c == f)) {
        Some(idx) => children[..idx]
            .iter()
            .rev()
            .chain(children[idx..].iter().rev())
            .copied()
            .collect(),
        None => children.iter().rev().copied().collect(),
    };
    for candidate in order {
        if eligible(tree, candidate) {
            select(tree, container, candidate, out);
            return true;
        }
    }
    tree.focused_child(container).is_some()
}

/// Advance focus forward within `container`, descending into containers.
///
/// This is the traversal tab is built from. The scan runs strictly forward
/// from after the focused child (from the start when nothing is focused).
/// A container candidate is selected only when it transitively contains a
/// next focusable descendant; the recursion focuses that descendant and
/// then the candidate itself at this level. When the scan runs off the end,
/// the whole level is unfocused and `false` is returned so the parent level
/// can continue past this container.
pub fn focus_next_widget_in_container<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    out: &mut Vec<FocusChange>,
) -> bool {
    let children: Vec<WidgetId> = tree.children_of(container).to_vec();
    let focused = tree.focused_child(container);
    let start = focused
        .and_then(|f| children.iter().position(|&c| c == f))
        .map(|idx| idx + 1)
        .unwrap_or(0);
    for &candidate in &children[start..] {
        if !eligible(tree, candidate) {
            continue;
        }
        // A container can only take focus when it has something focusable
        // inside; the recursion focuses that descendant first.
        if is_container(tree, candidate) && !focus_next_widget_in_container(tree, candidate, out) {
            continue;
        }
        select(tree, container, candidate, out);
        return true;
    }
    unfocus_widgets(tree, container, out);
    false
}

/// Handle a tab key press at `root`.
///
/// When the focused child is itself a container, its subtree is exhausted
/// first; only then does traversal continue past it to later siblings. When
/// every candidate fails, focus clears entirely: one full tab cycle visits
/// "nothing focused" exactly once, and the next press restarts from the
/// first eligible widget.
pub fn tab_key_pressed<W>(tree: &mut Tree<W>, root: WidgetId, out: &mut Vec<FocusChange>) {
    if let Some(focused) = tree.focused_child(root)
        && is_container(tree, focused)
        && focus_next_widget_in_container(tree, focused, out)
    {
        return;
    }
    let _ = focus_next_widget_in_container(tree, root, out);
}
