// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A two-arrow spin button.

use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color};
use crate::signal::SignalKind;
use trellis_router::DispatchKind;

/// Increments or decrements a value, one click at a time.
///
/// The upper half of the widget is the increment arrow, the lower half the
/// decrement arrow.
#[derive(Clone, Debug)]
pub struct SpinButton {
    /// Lower bound.
    pub minimum: i32,
    /// Upper bound.
    pub maximum: i32,
    value: i32,
}

impl SpinButton {
    /// A spin button over `minimum..=maximum`, starting at the minimum.
    pub fn new(minimum: i32, maximum: i32) -> Self {
        Self {
            minimum,
            maximum,
            value: minimum,
        }
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the value, clamped into range. Returns whether it changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(self.minimum, self.maximum.max(self.minimum));
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    pub(crate) fn react(
        &mut self,
        kind: &DispatchKind,
        state: &mut WidgetState,
        out: &mut Vec<SignalKind>,
    ) {
        if let DispatchKind::MouseRelease {
            local,
            was_pressed: true,
        } = *kind
        {
            let step = if local.y < state.size.height / 2.0 {
                1
            } else {
                -1
            };
            if self.set_value(self.value + step) {
                out.push(SignalKind::ValueChanged(self.value));
            }
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let bounds = Rect::from_origin_size(origin, state.size);
        let middle = bounds.y0 + state.size.height / 2.0;
        let upper = Rect::new(bounds.x0, bounds.y0, bounds.x1, middle);
        let lower = Rect::new(bounds.x0, middle, bounds.x1, bounds.y1);
        canvas.fill_rect(upper, Color::rgb(190, 190, 200).with_opacity(opacity));
        canvas.fill_rect(lower, Color::rgb(170, 170, 180).with_opacity(opacity));
        canvas.stroke_rect(bounds, Color::rgb(90, 90, 100).with_opacity(opacity), 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn halves_increment_and_decrement_with_clamping() {
        let mut spin = SpinButton::new(0, 2);
        let mut state = WidgetState::placed(Point::ZERO, Size::new(16.0, 32.0));
        let mut out = Vec::new();

        let up = DispatchKind::MouseRelease {
            local: Point::new(8.0, 5.0),
            was_pressed: true,
        };
        let down = DispatchKind::MouseRelease {
            local: Point::new(8.0, 28.0),
            was_pressed: true,
        };

        spin.react(&up, &mut state, &mut out);
        spin.react(&up, &mut state, &mut out);
        spin.react(&up, &mut state, &mut out);
        assert_eq!(spin.value(), 2, "clamped at the maximum");
        assert_eq!(out.len(), 2, "the clamped step raises nothing");

        spin.react(&down, &mut state, &mut out);
        assert_eq!(spin.value(), 1);
    }
}
