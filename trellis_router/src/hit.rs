// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing with z-order tie-breaking and forced state resets.

use alloc::vec::Vec;

use kurbo::Point;
use trellis_tree::{Tree, WidgetId};

use crate::types::{Dispatch, DispatchKind};

/// Geometric containment test in the owning container's coordinate space.
///
/// Pure: no hover side effect. The stateful negative side effect belongs to
/// the scan in [`widget_under_point`], which is what routing goes through.
pub fn hit_test<W>(tree: &Tree<W>, id: WidgetId, point: Point) -> bool {
    tree.state(id)
        .map(|s| s.bounds().contains(point))
        .unwrap_or(false)
}

/// Force hover off on a widget and, for containers, its whole subtree.
///
/// Emits a `MouseLeft` notice for every widget that was actually hovered;
/// repeated calls are no-ops. Used when an ancestor determines the pointer
/// has left the subtree, and by the hit scan when a topmost match
/// supersedes a lower one.
pub fn mouse_not_on_widget<W>(tree: &mut Tree<W>, id: WidgetId, out: &mut Vec<Dispatch>) {
    let Some(state) = tree.state_mut(id) else {
        return;
    };
    if state.mouse_hover {
        state.mouse_hover = false;
        out.push(Dispatch::notice(id, DispatchKind::MouseLeft));
    }
    if state.is_container() {
        let children: Vec<WidgetId> = tree.children_of(id).to_vec();
        for child in children {
            mouse_not_on_widget(tree, child, out);
        }
    }
}

/// Force pressed state off on a widget and, for containers, its whole
/// subtree, without a matching release event.
///
/// Emits a `PressReset` notice on each transition. Used by the release
/// broadcast and when input is lost mid-gesture.
pub fn mouse_no_longer_down<W>(tree: &mut Tree<W>, id: WidgetId, out: &mut Vec<Dispatch>) {
    let Some(state) = tree.state_mut(id) else {
        return;
    };
    if state.mouse_down {
        state.mouse_down = false;
        out.push(Dispatch::notice(id, DispatchKind::PressReset));
    }
    if state.is_container() {
        let children: Vec<WidgetId> = tree.children_of(id).to_vec();
        for child in children {
            mouse_no_longer_down(tree, child, out);
        }
    }
}

/// Which child of `container` is under `point` (container-local)?
///
/// Every visible, enabled child is tested in z-order, back to front, and
/// the last match (the topmost) wins. The scan carries the toolkit's
/// deliberate side effects:
///
/// - a child that tests negative while hovered is forced to leave
///   (`MouseLeft`, cascading through container subtrees);
/// - an earlier match superseded by a higher one is forced to leave the
///   same way, so a widget underneath a sibling sees enter/leave pairs
///   even though the pointer never left its bounds.
///
/// Idempotent for a given pointer position: replaying the same scan emits
/// no further notices.
pub fn widget_under_point<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    point: Point,
    out: &mut Vec<Dispatch>,
) -> Option<WidgetId> {
    let children: Vec<WidgetId> = tree.children_of(container).to_vec();
    let mut found: Option<WidgetId> = None;
    for child in children {
        let eligible = tree.state(child).map(|s| s.hit_eligible()).unwrap_or(false);
        if !eligible {
            continue;
        }
        if hit_test(tree, child, point) {
            // Overlap: the earlier match is superseded and told so.
            if let Some(prev) = found {
                mouse_not_on_widget(tree, prev, out);
            }
            found = Some(child);
        } else {
            mouse_not_on_widget(tree, child, out);
        }
    }
    found
}
