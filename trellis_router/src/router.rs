// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing implementation.
//!
//! ## Overview
//!
//! Each routing function receives coordinates already translated into the
//! container's local space and descends one path through the tree,
//! rewriting coordinates for every child it enters. The result is a
//! dispatch sequence: capture steps for the containers along the path, one
//! target step for the resolved recipient, and notices for every transient
//! state transition (hover, press, focus) in the order it happened.
//!
//! ## Capture
//!
//! A pressed child that is draggable or a container overrides hit testing
//! for mouse moves until its press is matched by a release (or forcibly
//! reset): drags keep feeding the same widget after the pointer leaves its
//! bounds.
//!
//! ## Sequencing
//!
//! Routing applies all transient-state changes and computes the complete
//! sequence against snapshots of each child list before any reaction runs.
//! Handlers that add, remove, or reorder widgets therefore cannot
//! invalidate the traversal that produced the sequence they are reacting
//! to; their structural changes take effect from the next event on.

use alloc::vec::Vec;

use kurbo::Point;
use trellis_focus::FocusChange;
use trellis_tree::{Tree, WidgetFlags, WidgetId};

use crate::hit::{mouse_no_longer_down, mouse_not_on_widget, widget_under_point};
use crate::types::{Dispatch, DispatchKind, Event, Key, MouseButton};

/// Route one host event through the tree rooted at `root`.
///
/// `root` is the root dispatcher's container: its own position is
/// subtracted from pointer coordinates, it is never a hit target itself,
/// and key events travel down its focus chain. `tab_enabled` is the root
/// dispatcher's tab-traversal toggle.
///
/// Returns the dispatch sequence; feed it to
/// [`crate::dispatcher::run`] to execute reactions.
pub fn handle_event<W>(
    tree: &mut Tree<W>,
    root: WidgetId,
    event: &Event,
    tab_enabled: bool,
) -> Vec<Dispatch> {
    let mut out = Vec::new();
    let Some(root_pos) = tree.state(root).map(|s| s.position) else {
        return out;
    };
    match *event {
        Event::MouseMoved { position } => {
            route_mouse_move(tree, root, position - root_pos.to_vec2(), &mut out);
        }
        Event::MousePressed {
            button: MouseButton::Left,
            position,
        } => route_mouse_press(tree, root, position - root_pos.to_vec2(), &mut out),
        Event::MouseReleased {
            button: MouseButton::Left,
            position,
        } => route_mouse_release(tree, root, position - root_pos.to_vec2(), &mut out),
        // Only the left button drives press/release routing.
        Event::MousePressed { .. } | Event::MouseReleased { .. } => {}
        Event::MouseWheelMoved { delta, position } => {
            route_mouse_wheel(tree, root, delta, position - root_pos.to_vec2(), &mut out);
        }
        Event::KeyPressed { key: Key::Tab } => route_tab(tree, root, tab_enabled, &mut out),
        Event::KeyPressed { key: Key::Unknown } => {}
        Event::KeyPressed { key } => route_key(tree, root, key, &mut out),
        Event::TextEntered { ch } => {
            if !ch.is_control() {
                route_text(tree, root, ch, &mut out);
            }
        }
        Event::WindowFocusLost => route_window_focus_lost(tree, root, &mut out),
    }
    out
}

/// Route a mouse move within `container` (`point` is container-local).
pub fn route_mouse_move<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    point: Point,
    out: &mut Vec<Dispatch>,
) {
    let children: Vec<WidgetId> = tree.children_of(container).to_vec();
    // A pressed draggable or container child keeps receiving moves even
    // once the pointer leaves its bounds; hit testing is skipped entirely.
    for &child in &children {
        let Some(state) = tree.state(child) else {
            continue;
        };
        if state.mouse_down
            && state
                .flags
                .intersects(WidgetFlags::DRAGGABLE | WidgetFlags::CONTAINER)
        {
            deliver_move(tree, child, point, out);
            return;
        }
    }
    if let Some(hit) = widget_under_point(tree, container, point, out) {
        deliver_move(tree, hit, point, out);
    }
}

fn deliver_move<W>(tree: &mut Tree<W>, recipient: WidgetId, point: Point, out: &mut Vec<Dispatch>) {
    let Some(state) = tree.state_mut(recipient) else {
        return;
    };
    let local = point - state.position.to_vec2();
    let entered = !state.mouse_hover;
    state.mouse_hover = true;
    let is_container = state.is_container();
    if entered {
        out.push(Dispatch::notice(recipient, DispatchKind::MouseEntered));
    }
    if is_container {
        out.push(Dispatch::capture(recipient, DispatchKind::MouseMove { local }));
        route_mouse_move(tree, recipient, local, out);
    } else {
        out.push(Dispatch::target(recipient, DispatchKind::MouseMove { local }));
    }
}

/// Route a left press within `container` (`point` is container-local).
pub fn route_mouse_press<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    point: Point,
    out: &mut Vec<Dispatch>,
) {
    let Some(hit) = widget_under_point(tree, container, point, out) else {
        // Clicking empty space defocuses this level.
        let mut changes = Vec::new();
        trellis_focus::unfocus_widgets(tree, container, &mut changes);
        push_focus_notices(&changes, out);
        return;
    };

    // Click-to-focus, gated on the widget's own focusability. The hit
    // already guarantees visible and enabled. A press on the widget that
    // is already focused is not a transition and fires nothing.
    if tree.focused_child(container) != Some(hit)
        && tree.state(hit).map(|s| s.focus_eligible()).unwrap_or(false)
    {
        let mut changes = Vec::new();
        trellis_focus::focus_widget(tree, container, hit, &mut changes);
        push_focus_notices(&changes, out);
    }

    let Some(state) = tree.state_mut(hit) else {
        return;
    };
    state.mouse_down = true;
    let local = point - state.position.to_vec2();
    if state.is_container() {
        out.push(Dispatch::capture(hit, DispatchKind::MousePress { local }));
        route_mouse_press(tree, hit, local, out);
    } else {
        out.push(Dispatch::target(hit, DispatchKind::MousePress { local }));
    }
}

/// Route a left release within `container` (`point` is container-local).
pub fn route_mouse_release<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    point: Point,
    out: &mut Vec<Dispatch>,
) {
    let hit = widget_under_point(tree, container, point, out);
    if let Some(hit) = hit
        && let Some(state) = tree.state_mut(hit)
    {
        let was_pressed = state.mouse_down;
        state.mouse_down = false;
        let local = point - state.position.to_vec2();
        if state.is_container() {
            out.push(Dispatch::capture(
                hit,
                DispatchKind::MouseRelease { local, was_pressed },
            ));
            route_mouse_release(tree, hit, local, out);
        } else {
            out.push(Dispatch::target(
                hit,
                DispatchKind::MouseRelease { local, was_pressed },
            ));
        }
    }
    // No sibling may stay stuck pressed after a release lands elsewhere.
    let children: Vec<WidgetId> = tree.children_of(container).to_vec();
    for child in children {
        if Some(child) != hit {
            mouse_no_longer_down(tree, child, out);
        }
    }
}

/// Route a wheel move within `container` (`point` is container-local).
///
/// Wheel events go to the hit child only; there is no capture fallback.
pub fn route_mouse_wheel<W>(
    tree: &mut Tree<W>,
    container: WidgetId,
    delta: i32,
    point: Point,
    out: &mut Vec<Dispatch>,
) {
    let Some(hit) = widget_under_point(tree, container, point, out) else {
        return;
    };
    let Some(state) = tree.state(hit) else {
        return;
    };
    let local = point - state.position.to_vec2();
    if state.is_container() {
        out.push(Dispatch::capture(hit, DispatchKind::Wheel { delta, local }));
        route_mouse_wheel(tree, hit, delta, local, out);
    } else {
        out.push(Dispatch::target(hit, DispatchKind::Wheel { delta, local }));
    }
}

/// Route a recognized key down the focus chain from `root`.
pub fn route_key<W>(tree: &Tree<W>, root: WidgetId, key: Key, out: &mut Vec<Dispatch>) {
    route_to_focused(tree, root, DispatchKind::Key { key }, out);
}

/// Route entered text down the focus chain from `root`.
pub fn route_text<W>(tree: &Tree<W>, root: WidgetId, ch: char, out: &mut Vec<Dispatch>) {
    route_to_focused(tree, root, DispatchKind::Text { ch }, out);
}

fn route_to_focused<W>(tree: &Tree<W>, root: WidgetId, kind: DispatchKind, out: &mut Vec<Dispatch>) {
    let Some(mut node) = tree.focused_child(root) else {
        return;
    };
    loop {
        let is_container = tree.state(node).map(|s| s.is_container()).unwrap_or(false);
        match (is_container, tree.focused_child(node)) {
            (true, Some(next)) => {
                out.push(Dispatch::capture(node, kind));
                node = next;
            }
            _ => {
                out.push(Dispatch::target(node, kind));
                return;
            }
        }
    }
}

/// Handle the tab key at `root`, honoring the root dispatcher's toggle.
pub fn route_tab<W>(tree: &mut Tree<W>, root: WidgetId, tab_enabled: bool, out: &mut Vec<Dispatch>) {
    if !tab_enabled {
        return;
    }
    let mut changes = Vec::new();
    trellis_focus::tab_key_pressed(tree, root, &mut changes);
    push_focus_notices(&changes, out);
}

/// Advance the animation clock by `elapsed_ms` and drain it down the tree.
///
/// Every animated child of a container receives the container's accumulated
/// time and an `Update` step; the container's own accumulator is then
/// zeroed. Time is drained downward, never shared sideways.
pub fn route_update<W>(
    tree: &mut Tree<W>,
    root: WidgetId,
    elapsed_ms: u64,
    out: &mut Vec<Dispatch>,
) {
    let Some(state) = tree.state_mut(root) else {
        return;
    };
    state.elapsed_ms += elapsed_ms;
    drain_clock(tree, root, out);
}

fn drain_clock<W>(tree: &mut Tree<W>, container: WidgetId, out: &mut Vec<Dispatch>) {
    let Some(state) = tree.state_mut(container) else {
        return;
    };
    let drained = core::mem::take(&mut state.elapsed_ms);
    let children: Vec<WidgetId> = tree.children_of(container).to_vec();
    for child in children {
        let Some(state) = tree.state_mut(child) else {
            continue;
        };
        let is_container = state.is_container();
        if state.flags.contains(WidgetFlags::ANIMATED) {
            state.elapsed_ms += drained;
            let elapsed_ms = state.elapsed_ms;
            out.push(Dispatch::target(child, DispatchKind::Update { elapsed_ms }));
        }
        if is_container {
            drain_clock(tree, child, out);
        }
    }
}

/// The host window lost input focus: reset hover and pressed state
/// everywhere, with the usual notices.
pub fn route_window_focus_lost<W>(tree: &mut Tree<W>, root: WidgetId, out: &mut Vec<Dispatch>) {
    let children: Vec<WidgetId> = tree.children_of(root).to_vec();
    for &child in &children {
        mouse_not_on_widget(tree, child, out);
    }
    for &child in &children {
        mouse_no_longer_down(tree, child, out);
    }
}

fn push_focus_notices(changes: &[FocusChange], out: &mut Vec<Dispatch>) {
    for change in changes {
        out.push(match *change {
            FocusChange::Focused(id) => Dispatch::notice(id, DispatchKind::Focused),
            FocusChange::Unfocused(id) => Dispatch::notice(id, DispatchKind::Unfocused),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Size;
    use trellis_tree::WidgetState;

    fn leaf(x: f64, y: f64, w: f64, h: f64) -> WidgetState {
        WidgetState::placed(Point::new(x, y), Size::new(w, h))
    }

    fn with_flags(mut state: WidgetState, flags: WidgetFlags) -> WidgetState {
        state.flags |= flags;
        state
    }

    fn root_state() -> WidgetState {
        with_flags(leaf(0.0, 0.0, 800.0, 600.0), WidgetFlags::CONTAINER)
    }

    fn targets(seq: &[Dispatch]) -> Vec<(WidgetId, DispatchKind)> {
        seq.iter()
            .filter(|d| d.phase == crate::types::Phase::Target)
            .map(|d| (d.node, d.kind))
            .collect()
    }

    #[test]
    fn move_goes_to_topmost_hit_and_sets_hover() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let _a = tree.insert(Some(root), leaf(10.0, 10.0, 50.0, 50.0), ());
        let b = tree.insert(Some(root), leaf(30.0, 30.0, 50.0, 50.0), ());

        let mut out = Vec::new();
        route_mouse_move(&mut tree, root, Point::new(40.0, 40.0), &mut out);

        assert_eq!(
            targets(&out),
            vec![(
                b,
                DispatchKind::MouseMove {
                    local: Point::new(10.0, 10.0)
                }
            )]
        );
        assert!(tree.state(b).unwrap().mouse_hover);
        assert!(out.contains(&Dispatch::notice(b, DispatchKind::MouseEntered)));
    }

    #[test]
    fn overlap_produces_enter_then_leave_on_lower_widget() {
        // A alone first, then the overlap: A sees enter followed by leave
        // even though the pointer never left its bounds.
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(Some(root), leaf(10.0, 10.0, 50.0, 50.0), ());
        let b = tree.insert(Some(root), leaf(30.0, 30.0, 50.0, 50.0), ());

        let mut first = Vec::new();
        route_mouse_move(&mut tree, root, Point::new(20.0, 20.0), &mut first);
        assert!(first.contains(&Dispatch::notice(a, DispatchKind::MouseEntered)));

        let mut second = Vec::new();
        route_mouse_move(&mut tree, root, Point::new(40.0, 40.0), &mut second);
        let a_left = second
            .iter()
            .position(|d| *d == Dispatch::notice(a, DispatchKind::MouseLeft))
            .expect("A must be told the mouse left it");
        let b_entered = second
            .iter()
            .position(|d| *d == Dispatch::notice(b, DispatchKind::MouseEntered))
            .expect("B must be entered");
        assert!(a_left < b_entered, "leave fires during the scan, before delivery");
        assert!(!tree.state(a).unwrap().mouse_hover);
        assert!(tree.state(b).unwrap().mouse_hover);
    }

    #[test]
    fn pressed_draggable_captures_moves_outside_its_bounds() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let thumb = tree.insert(
            Some(root),
            with_flags(leaf(10.0, 10.0, 20.0, 20.0), WidgetFlags::DRAGGABLE),
            (),
        );
        tree.state_mut(thumb).unwrap().mouse_down = true;

        let mut out = Vec::new();
        // (500, 500) is nowhere near the thumb.
        route_mouse_move(&mut tree, root, Point::new(500.0, 500.0), &mut out);
        assert_eq!(
            targets(&out),
            vec![(
                thumb,
                DispatchKind::MouseMove {
                    local: Point::new(490.0, 490.0)
                }
            )]
        );
    }

    #[test]
    fn pressed_non_draggable_does_not_capture() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let button = tree.insert(Some(root), leaf(10.0, 10.0, 20.0, 20.0), ());
        tree.state_mut(button).unwrap().mouse_down = true;

        let mut out = Vec::new();
        route_mouse_move(&mut tree, root, Point::new(500.0, 500.0), &mut out);
        assert!(targets(&out).is_empty(), "no capture, nothing hit");
    }

    #[test]
    fn capture_chains_through_nested_containers() {
        // Press state on panel + thumb (as press routing leaves it), then a
        // move far outside both still reaches the thumb.
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let panel = tree.insert(
            Some(root),
            with_flags(leaf(100.0, 100.0, 200.0, 200.0), WidgetFlags::CONTAINER),
            (),
        );
        let thumb = tree.insert(
            Some(panel),
            with_flags(leaf(10.0, 10.0, 20.0, 20.0), WidgetFlags::DRAGGABLE),
            (),
        );
        tree.state_mut(panel).unwrap().mouse_down = true;
        tree.state_mut(thumb).unwrap().mouse_down = true;

        let mut out = Vec::new();
        route_mouse_move(&mut tree, root, Point::new(700.0, 50.0), &mut out);
        assert_eq!(
            targets(&out),
            vec![(
                thumb,
                DispatchKind::MouseMove {
                    local: Point::new(590.0, -60.0)
                }
            )]
        );
    }

    #[test]
    fn press_focuses_then_presses_and_empty_space_defocuses() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(
            Some(root),
            with_flags(leaf(10.0, 10.0, 50.0, 50.0), WidgetFlags::FOCUSABLE),
            (),
        );

        let mut out = Vec::new();
        route_mouse_press(&mut tree, root, Point::new(20.0, 20.0), &mut out);
        assert_eq!(
            out,
            vec![
                Dispatch::notice(a, DispatchKind::Focused),
                Dispatch::target(
                    a,
                    DispatchKind::MousePress {
                        local: Point::new(10.0, 10.0)
                    }
                ),
            ]
        );
        assert!(tree.state(a).unwrap().mouse_down);
        assert_eq!(tree.focused_child(root), Some(a));

        // Click empty space: focus clears.
        let mut out = Vec::new();
        route_mouse_press(&mut tree, root, Point::new(700.0, 500.0), &mut out);
        assert!(out.contains(&Dispatch::notice(a, DispatchKind::Unfocused)));
        assert_eq!(tree.focused_child(root), None);
    }

    #[test]
    fn second_press_on_the_focused_widget_does_not_refire_focus() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(
            Some(root),
            with_flags(leaf(10.0, 10.0, 50.0, 50.0), WidgetFlags::FOCUSABLE),
            (),
        );

        let mut out = Vec::new();
        route_mouse_press(&mut tree, root, Point::new(20.0, 20.0), &mut out);
        out.clear();
        route_mouse_press(&mut tree, root, Point::new(25.0, 25.0), &mut out);

        assert!(
            !out.iter()
                .any(|d| matches!(d.kind, DispatchKind::Focused | DispatchKind::Unfocused)),
            "no focus transition on a press on the already-focused widget"
        );
        assert_eq!(tree.focused_child(root), Some(a));
    }

    #[test]
    fn press_on_non_focusable_leaves_focus_alone() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(
            Some(root),
            with_flags(leaf(10.0, 10.0, 50.0, 50.0), WidgetFlags::FOCUSABLE),
            (),
        );
        let plain = tree.insert(Some(root), leaf(100.0, 10.0, 50.0, 50.0), ());

        let mut out = Vec::new();
        route_mouse_press(&mut tree, root, Point::new(20.0, 20.0), &mut out);
        out.clear();
        route_mouse_press(&mut tree, root, Point::new(120.0, 20.0), &mut out);

        assert_eq!(tree.focused_child(root), Some(a), "focus unchanged");
        assert!(tree.state(plain).unwrap().mouse_down, "but the press lands");
    }

    #[test]
    fn press_into_nested_container_builds_the_focus_chain() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let panel = tree.insert(
            Some(root),
            with_flags(
                leaf(100.0, 100.0, 200.0, 200.0),
                WidgetFlags::CONTAINER | WidgetFlags::FOCUSABLE,
            ),
            (),
        );
        let field = tree.insert(
            Some(panel),
            with_flags(leaf(10.0, 10.0, 80.0, 20.0), WidgetFlags::FOCUSABLE),
            (),
        );

        let mut out = Vec::new();
        route_mouse_press(&mut tree, root, Point::new(120.0, 120.0), &mut out);

        assert_eq!(tree.focused_child(root), Some(panel));
        assert_eq!(tree.focused_child(panel), Some(field));
        assert!(tree.state(panel).unwrap().mouse_down);
        assert!(tree.state(field).unwrap().mouse_down);
        // Capture step for the panel precedes the field's target step.
        let panel_step = out
            .iter()
            .position(|d| {
                d.phase == crate::types::Phase::Capture
                    && d.node == panel
                    && matches!(d.kind, DispatchKind::MousePress { .. })
            })
            .expect("panel capture step");
        let field_step = out
            .iter()
            .position(|d| {
                d.phase == crate::types::Phase::Target
                    && d.node == field
                    && matches!(d.kind, DispatchKind::MousePress { .. })
            })
            .expect("field target step");
        assert!(panel_step < field_step);
    }

    #[test]
    fn release_broadcast_unsticks_every_sibling() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(Some(root), leaf(10.0, 10.0, 50.0, 50.0), ());
        let b = tree.insert(Some(root), leaf(100.0, 10.0, 50.0, 50.0), ());
        let panel = tree.insert(
            Some(root),
            with_flags(leaf(200.0, 10.0, 100.0, 100.0), WidgetFlags::CONTAINER),
            (),
        );
        let inner = tree.insert(Some(panel), leaf(5.0, 5.0, 20.0, 20.0), ());
        for id in [a, b, panel, inner] {
            tree.state_mut(id).unwrap().mouse_down = true;
        }

        let mut out = Vec::new();
        // Release over A.
        route_mouse_release(&mut tree, root, Point::new(20.0, 20.0), &mut out);

        let release = targets(&out);
        assert_eq!(
            release,
            vec![(
                a,
                DispatchKind::MouseRelease {
                    local: Point::new(10.0, 10.0),
                    was_pressed: true
                }
            )]
        );
        for id in [a, b, panel, inner] {
            assert!(!tree.state(id).unwrap().mouse_down, "no stuck press");
        }
        assert!(out.contains(&Dispatch::notice(b, DispatchKind::PressReset)));
        assert!(out.contains(&Dispatch::notice(inner, DispatchKind::PressReset)));
    }

    #[test]
    fn release_without_prior_press_reports_was_pressed_false() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(Some(root), leaf(10.0, 10.0, 50.0, 50.0), ());

        let mut out = Vec::new();
        route_mouse_release(&mut tree, root, Point::new(20.0, 20.0), &mut out);
        assert_eq!(
            targets(&out),
            vec![(
                a,
                DispatchKind::MouseRelease {
                    local: Point::new(10.0, 10.0),
                    was_pressed: false
                }
            )]
        );
    }

    #[test]
    fn wheel_goes_to_hit_child_only() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let chat = tree.insert(Some(root), leaf(10.0, 10.0, 100.0, 100.0), ());
        let pressed = tree.insert(
            Some(root),
            with_flags(leaf(300.0, 10.0, 20.0, 20.0), WidgetFlags::DRAGGABLE),
            (),
        );
        tree.state_mut(pressed).unwrap().mouse_down = true;

        let mut out = Vec::new();
        route_mouse_wheel(&mut tree, root, -3, Point::new(50.0, 50.0), &mut out);
        assert_eq!(
            targets(&out),
            vec![(
                chat,
                DispatchKind::Wheel {
                    delta: -3,
                    local: Point::new(40.0, 40.0)
                }
            )]
        );

        // No capture fallback for the wheel.
        let mut out = Vec::new();
        route_mouse_wheel(&mut tree, root, -3, Point::new(700.0, 500.0), &mut out);
        assert!(targets(&out).is_empty());
    }

    #[test]
    fn keys_walk_the_focus_chain() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let panel = tree.insert(
            Some(root),
            with_flags(
                leaf(0.0, 0.0, 100.0, 100.0),
                WidgetFlags::CONTAINER | WidgetFlags::FOCUSABLE,
            ),
            (),
        );
        let field = tree.insert(
            Some(panel),
            with_flags(leaf(0.0, 0.0, 80.0, 20.0), WidgetFlags::FOCUSABLE),
            (),
        );
        tree.set_focused_child(root, Some(panel));
        tree.set_focused_child(panel, Some(field));

        let mut out = Vec::new();
        route_key(&tree, root, Key::Enter, &mut out);
        assert_eq!(
            out,
            vec![
                Dispatch::capture(panel, DispatchKind::Key { key: Key::Enter }),
                Dispatch::target(field, DispatchKind::Key { key: Key::Enter }),
            ]
        );

        // Without focus, keys go nowhere.
        tree.set_focused_child(panel, None);
        tree.set_focused_child(root, None);
        let mut out = Vec::new();
        route_key(&tree, root, Key::Enter, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn tab_respects_the_toggle() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(
            Some(root),
            with_flags(leaf(0.0, 0.0, 10.0, 10.0), WidgetFlags::FOCUSABLE),
            (),
        );

        let mut out = Vec::new();
        route_tab(&mut tree, root, false, &mut out);
        assert!(out.is_empty());
        assert_eq!(tree.focused_child(root), None);

        route_tab(&mut tree, root, true, &mut out);
        assert_eq!(tree.focused_child(root), Some(a));
        assert_eq!(out, vec![Dispatch::notice(a, DispatchKind::Focused)]);
    }

    #[test]
    fn update_drains_time_into_animated_descendants_only() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let panel = tree.insert(
            Some(root),
            with_flags(
                leaf(0.0, 0.0, 100.0, 100.0),
                WidgetFlags::CONTAINER | WidgetFlags::ANIMATED,
            ),
            (),
        );
        let caret = tree.insert(
            Some(panel),
            with_flags(leaf(0.0, 0.0, 10.0, 10.0), WidgetFlags::ANIMATED),
            (),
        );
        let plain = tree.insert(Some(panel), leaf(20.0, 0.0, 10.0, 10.0), ());

        let mut out = Vec::new();
        route_update(&mut tree, root, 16, &mut out);

        assert_eq!(tree.state(caret).unwrap().elapsed_ms, 16);
        assert_eq!(tree.state(plain).unwrap().elapsed_ms, 0);
        assert_eq!(tree.state(root).unwrap().elapsed_ms, 0, "root drained");
        assert_eq!(tree.state(panel).unwrap().elapsed_ms, 0, "panel drained");
        assert!(out.contains(&Dispatch::target(caret, DispatchKind::Update { elapsed_ms: 16 })));
        assert!(!out.iter().any(|d| d.node == plain));

        // A second frame accumulates on the animated leaf.
        let mut out = Vec::new();
        route_update(&mut tree, root, 16, &mut out);
        assert_eq!(tree.state(caret).unwrap().elapsed_ms, 32);
    }

    #[test]
    fn window_focus_lost_resets_pointer_state() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(Some(root), leaf(10.0, 10.0, 50.0, 50.0), ());
        tree.state_mut(a).unwrap().mouse_hover = true;
        tree.state_mut(a).unwrap().mouse_down = true;

        let out = handle_event(&mut tree, root, &Event::WindowFocusLost, true);
        assert!(out.contains(&Dispatch::notice(a, DispatchKind::MouseLeft)));
        assert!(out.contains(&Dispatch::notice(a, DispatchKind::PressReset)));
        assert!(!tree.state(a).unwrap().mouse_hover);
        assert!(!tree.state(a).unwrap().mouse_down);
    }

    #[test]
    fn handle_event_filters_foreign_input() {
        let mut tree: Tree<()> = Tree::new();
        let root = tree.insert(None, root_state(), ());
        let a = tree.insert(
            Some(root),
            with_flags(leaf(10.0, 10.0, 50.0, 50.0), WidgetFlags::FOCUSABLE),
            (),
        );
        tree.set_focused_child(root, Some(a));

        // Right presses do not route.
        let out = handle_event(
            &mut tree,
            root,
            &Event::MousePressed {
                button: MouseButton::Right,
                position: Point::new(20.0, 20.0),
            },
            true,
        );
        assert!(out.is_empty());
        assert!(!tree.state(a).unwrap().mouse_down);

        // Unknown keys and control characters are dropped at the root.
        let out = handle_event(&mut tree, root, &Event::KeyPressed { key: Key::Unknown }, true);
        assert!(out.is_empty());
        let out = handle_event(&mut tree, root, &Event::TextEntered { ch: '\u{8}' }, true);
        assert!(out.is_empty());
        let out = handle_event(&mut tree, root, &Event::TextEntered { ch: 'x' }, true);
        assert_eq!(out, vec![Dispatch::target(a, DispatchKind::Text { ch: 'x' })]);
    }

    #[test]
    fn root_position_offsets_incoming_coordinates() {
        let mut tree: Tree<()> = Tree::new();
        let mut state = root_state();
        state.position = Point::new(100.0, 50.0);
        let root = tree.insert(None, state, ());
        let a = tree.insert(Some(root), leaf(10.0, 10.0, 50.0, 50.0), ());

        let out = handle_event(
            &mut tree,
            root,
            &Event::MouseMoved {
                position: Point::new(120.0, 70.0),
            },
            true,
        );
        assert_eq!(
            targets(&out),
            vec![(
                a,
                DispatchKind::MouseMove {
                    local: Point::new(10.0, 10.0)
                }
            )]
        );
    }
}
