// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the widget tree: identifiers, flags, and common widget state.

use kurbo::{Point, Rect, Size};

/// Identifier for a widget in the tree (generational).
///
/// A `WidgetId` pairs a slot index with the generation that was current when
/// the slot was allocated. Removing a widget bumps the slot's generation, so
/// ids held past removal become stale and every tree accessor treats them as
/// absent rather than resolving to an unrelated widget.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WidgetId(pub(crate) u32, pub(crate) u32);

impl WidgetId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Capability flags controlling how a widget participates in routing and focus.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// Widget is visible (participates in drawing and hit testing).
        const VISIBLE   = 0b0000_0001;
        /// Widget is enabled (participates in hit testing and may be focused).
        const ENABLED   = 0b0000_0010;
        /// Tab traversal and click-to-focus may select this widget.
        const FOCUSABLE = 0b0000_0100;
        /// Widget owns children; routing recurses into it and focus descends.
        const CONTAINER = 0b0000_1000;
        /// A drag started on this widget keeps receiving mouse moves after the
        /// pointer leaves its bounds (scrollbar thumbs, title bars, sliders).
        const DRAGGABLE = 0b0001_0000;
        /// Widget accumulates elapsed time for per-frame animation.
        const ANIMATED  = 0b0010_0000;
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::ENABLED
    }
}

/// Common state every widget in the tree carries.
///
/// `position` and `size` are local: relative to the owning container's
/// origin. The transient fields (`mouse_down`, `mouse_hover`, `focused`) are
/// mutated only by the routing and focus engines while handling one event.
#[derive(Clone, Debug)]
pub struct WidgetState {
    /// Top-left corner, in the owning container's coordinate space.
    pub position: Point,
    /// Widget extent.
    pub size: Size,
    /// Capability flags.
    pub flags: WidgetFlags,
    /// Opacity, `0` fully transparent to `255` fully opaque.
    pub opacity: u8,
    /// The most recent press on this widget has not yet been matched by a
    /// release reaching it.
    pub mouse_down: bool,
    /// The pointer is currently over this widget.
    pub mouse_hover: bool,
    /// This widget is its container's focused child.
    pub focused: bool,
    /// Accumulated animation time in milliseconds. Only meaningful for
    /// [`WidgetFlags::ANIMATED`] widgets; containers drain their clock into
    /// animated children each frame.
    pub elapsed_ms: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::ZERO,
            flags: WidgetFlags::default(),
            opacity: 255,
            mouse_down: false,
            mouse_hover: false,
            focused: false,
            elapsed_ms: 0,
        }
    }
}

impl WidgetState {
    /// Create state with the given placement, keeping the default flags.
    pub fn placed(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            ..Self::default()
        }
    }

    /// Bounds in the owning container's coordinate space.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Whether hit tests may reach this widget (visible and enabled).
    pub fn hit_eligible(&self) -> bool {
        self.flags.contains(WidgetFlags::VISIBLE | WidgetFlags::ENABLED)
    }

    /// Whether focus traversal may select this widget.
    pub fn focus_eligible(&self) -> bool {
        self.flags
            .contains(WidgetFlags::VISIBLE | WidgetFlags::ENABLED | WidgetFlags::FOCUSABLE)
    }

    /// Whether the container flag is set.
    pub fn is_container(&self) -> bool {
        self.flags.contains(WidgetFlags::CONTAINER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_visible_and_enabled() {
        let state = WidgetState::default();
        assert!(state.hit_eligible());
        assert!(!state.focus_eligible(), "FOCUSABLE is opt-in");
        assert_eq!(state.opacity, 255);
    }

    #[test]
    fn eligibility_requires_all_flags() {
        let mut state = WidgetState::default();
        state.flags |= WidgetFlags::FOCUSABLE;
        assert!(state.focus_eligible());

        state.flags.remove(WidgetFlags::ENABLED);
        assert!(!state.focus_eligible());
        assert!(!state.hit_eligible());

        state.flags |= WidgetFlags::ENABLED;
        state.flags.remove(WidgetFlags::VISIBLE);
        assert!(!state.focus_eligible());
    }

    #[test]
    fn bounds_are_local() {
        let state = WidgetState::placed(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_eq!(state.bounds(), Rect::new(10.0, 20.0, 40.0, 60.0));
    }
}
