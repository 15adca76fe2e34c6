// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The root dispatcher: host events in, signals out, draw calls down.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};
use trellis_router::{dispatcher, Dispatch, DispatchKind, Event, Outcome};
use trellis_tree::{Tree, WidgetFlags, WidgetId, WidgetState};

use crate::canvas::{Canvas, FontId};
use crate::kind::WidgetKind;
use crate::signal::{Signal, SignalKind};
use crate::widgets::Panel;

/// The toolkit's entry point, bound to one host window.
///
/// `Gui` owns the widget tree and a window-sized root container that is
/// never a hit target itself. Host events go in through
/// [`Gui::handle_event`], typed [`Signal`]s come back out; per-frame time
/// goes in through [`Gui::update`]; [`Gui::draw`] walks visible widgets in
/// z-order, composing translations and clipping container interiors.
///
/// Whether the tab key traverses focus is an explicit property of this
/// dispatcher ([`Gui::set_tab_key_enabled`]), not global state.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use trellis_router::{Event, MouseButton};
/// use trellis_widgets::{Button, Gui, SignalKind};
///
/// let mut gui = Gui::new(Size::new(800.0, 600.0));
/// let button = gui.add(gui.root(), Button::new("OK"));
/// gui.set_position(button, Point::new(10.0, 10.0));
///
/// gui.handle_event(Event::MousePressed {
///     button: MouseButton::Left,
///     position: Point::new(20.0, 20.0),
/// });
/// let signals = gui.handle_event(Event::MouseReleased {
///     button: MouseButton::Left,
///     position: Point::new(20.0, 20.0),
/// });
/// assert!(signals.iter().any(|s| s.widget == button && s.kind == SignalKind::Clicked));
/// ```
#[derive(Debug)]
pub struct Gui {
    tree: Tree<WidgetKind>,
    root: WidgetId,
    tab_key_enabled: bool,
    default_font: Option<FontId>,
}

impl Gui {
    /// A dispatcher for a host window of the given size.
    pub fn new(size: Size) -> Self {
        let mut tree = Tree::new();
        let mut state = WidgetState::placed(Point::ZERO, size);
        // The root is a container and nothing more: never focusable, never
        // a hit target of its own.
        state.flags = WidgetFlags::VISIBLE | WidgetFlags::ENABLED | WidgetFlags::CONTAINER;
        let root = tree.insert(None, state, WidgetKind::Panel(Panel::default()));
        Self {
            tree,
            root,
            tab_key_enabled: true,
            default_font: None,
        }
    }

    /// The root container id.
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// The widget tree.
    pub fn tree(&self) -> &Tree<WidgetKind> {
        &self.tree
    }

    /// The widget tree, mutably. Structural edits made here follow the
    /// same rules as the convenience wrappers on `Gui`.
    pub fn tree_mut(&mut self) -> &mut Tree<WidgetKind> {
        &mut self.tree
    }

    /// Whether tab traverses focus.
    pub fn tab_key_enabled(&self) -> bool {
        self.tab_key_enabled
    }

    /// Enable or disable tab focus traversal.
    pub fn set_tab_key_enabled(&mut self, enabled: bool) {
        self.tab_key_enabled = enabled;
    }

    /// Track a host window resize.
    pub fn set_size(&mut self, size: Size) {
        if let Some(state) = self.tree.state_mut(self.root) {
            state.size = size;
        }
    }

    /// The font newly added widgets inherit when neither they nor their
    /// container carry one.
    pub fn set_default_font(&mut self, font: Option<FontId>) {
        self.default_font = font;
    }

    /// Add a widget under `parent`, giving it the kind's default flags and
    /// size and the inherited font. Position it with [`Gui::set_position`].
    pub fn add(&mut self, parent: WidgetId, widget: impl Into<WidgetKind>) -> WidgetId {
        self.insert(parent, None, widget.into())
    }

    /// Like [`Gui::add`], with a name for [`Gui::find`].
    pub fn add_named(
        &mut self,
        parent: WidgetId,
        name: &str,
        widget: impl Into<WidgetKind>,
    ) -> WidgetId {
        self.insert(parent, Some(name), widget.into())
    }

    fn insert(&mut self, parent: WidgetId, name: Option<&str>, mut kind: WidgetKind) -> WidgetId {
        let mut state = WidgetState::default();
        state.flags = kind.flags();
        state.size = kind.default_size();
        // The one-time initialization hook: inherit the font default from
        // the container (or the gui) when the widget has none of its own.
        if kind.font().is_none() {
            let inherited = self
                .tree
                .widget(parent)
                .and_then(WidgetKind::font)
                .or(self.default_font);
            kind.set_font(inherited);
        }
        match name {
            Some(name) => self.tree.insert_named(Some(parent), name, state, kind),
            None => self.tree.insert(Some(parent), state, kind),
        }
    }

    /// Move a widget within its container.
    pub fn set_position(&mut self, id: WidgetId, position: Point) -> bool {
        match self.tree.state_mut(id) {
            Some(state) => {
                state.position = position;
                true
            }
            None => false,
        }
    }

    /// Remove a widget and its subtree. Stale ids report `false`.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        self.tree.remove(id)
    }

    /// Find a widget by the name it was added under, searching direct
    /// children of the root before recursing.
    pub fn find(&self, name: &str) -> Option<WidgetId> {
        self.tree.find(self.root, name)
    }

    /// The innermost focused widget, following the focus chain down
    /// through nested containers.
    pub fn focused_widget(&self) -> Option<WidgetId> {
        let mut node = self.tree.focused_child(self.root)?;
        while let Some(next) = self.tree.focused_child(node) {
            node = next;
        }
        Some(node)
    }

    /// Focus the next focusable child of the root programmatically.
    pub fn focus_next_widget(&mut self) -> Vec<Signal> {
        let mut changes = Vec::new();
        trellis_focus::focus_next_widget(&mut self.tree, self.root, &mut changes);
        let seq = focus_notices(&changes);
        self.apply(&seq)
    }

    /// Focus the previous focusable child of the root programmatically.
    pub fn focus_previous_widget(&mut self) -> Vec<Signal> {
        let mut changes = Vec::new();
        trellis_focus::focus_previous_widget(&mut self.tree, self.root, &mut changes);
        let seq = focus_notices(&changes);
        self.apply(&seq)
    }

    /// Clear focus at the root level.
    pub fn unfocus_widgets(&mut self) -> Vec<Signal> {
        let mut changes = Vec::new();
        trellis_focus::unfocus_widgets(&mut self.tree, self.root, &mut changes);
        let seq = focus_notices(&changes);
        self.apply(&seq)
    }

    /// Route one host event and run the widget reactions.
    ///
    /// Returns the signals the widgets raised, in order.
    pub fn handle_event(&mut self, event: Event) -> Vec<Signal> {
        let seq =
            trellis_router::handle_event(&mut self.tree, self.root, &event, self.tab_key_enabled);
        self.apply(&seq)
    }

    /// Advance animation by `elapsed_ms` milliseconds.
    pub fn update(&mut self, elapsed_ms: u64) -> Vec<Signal> {
        let mut seq = Vec::new();
        trellis_router::route_update(&mut self.tree, self.root, elapsed_ms, &mut seq);
        self.apply(&seq)
    }

    fn apply(&mut self, seq: &[Dispatch]) -> Vec<Signal> {
        let tree = &mut self.tree;
        let mut signals = Vec::new();
        dispatcher::run(seq, &mut signals, |d, signals| {
            if let Some(kind) = notice_signal(&d.kind) {
                signals.push(Signal {
                    widget: d.node,
                    kind,
                });
            }
            if let Some((state, kind)) = tree.parts_mut(d.node) {
                let mut raised = Vec::new();
                kind.react(&d.kind, state, &mut raised);
                signals.extend(raised.into_iter().map(|kind| Signal {
                    widget: d.node,
                    kind,
                }));
            }
            Outcome::Continue
        });
        signals
    }

    /// Draw every visible widget, back to front, clipping container
    /// interiors to their bounds.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        self.draw_subtree(self.root, Point::ZERO, canvas);
    }

    fn draw_subtree(&self, id: WidgetId, parent_origin: Point, canvas: &mut dyn Canvas) {
        let Some(state) = self.tree.state(id) else {
            return;
        };
        if !state.flags.contains(WidgetFlags::VISIBLE) {
            return;
        }
        let origin = parent_origin + state.position.to_vec2();
        if let Some(kind) = self.tree.widget(id) {
            kind.draw(state, origin, canvas);
        }
        if state.is_container() {
            canvas.push_clip(Rect::from_origin_size(origin, state.size));
            for &child in self.tree.children_of(id) {
                self.draw_subtree(child, origin, canvas);
            }
            canvas.pop_clip();
        }
    }
}

fn focus_notices(changes: &[trellis_focus::FocusChange]) -> Vec<Dispatch> {
    changes
        .iter()
        .map(|change| match *change {
            trellis_focus::FocusChange::Focused(id) => Dispatch::notice(id, DispatchKind::Focused),
            trellis_focus::FocusChange::Unfocused(id) => {
                Dispatch::notice(id, DispatchKind::Unfocused)
            }
        })
        .collect()
}

fn notice_signal(kind: &DispatchKind) -> Option<SignalKind> {
    match kind {
        DispatchKind::MouseEntered => Some(SignalKind::MouseEntered),
        DispatchKind::MouseLeft => Some(SignalKind::MouseLeft),
        DispatchKind::Focused => Some(SignalKind::Focused),
        DispatchKind::Unfocused => Some(SignalKind::Unfocused),
        _ => None,
    }
}
