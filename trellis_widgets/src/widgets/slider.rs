// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A value slider.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color};
use crate::signal::SignalKind;
use trellis_router::DispatchKind;

/// A draggable slider selecting a value in `minimum..=maximum`.
///
/// Like the scrollbar it relies on mouse capture: a drag that leaves the
/// groove keeps adjusting the value until release.
#[derive(Clone, Debug)]
pub struct Slider {
    /// Lower bound.
    pub minimum: i32,
    /// Upper bound.
    pub maximum: i32,
    /// Vertical or horizontal (the default) orientation.
    pub vertical: bool,
    value: i32,
}

impl Slider {
    /// A horizontal slider over `minimum..=maximum`, starting at the
    /// minimum.
    pub fn new(minimum: i32, maximum: i32) -> Self {
        Self {
            minimum,
            maximum,
            vertical: false,
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

    fn groove_to_value(&self, local: Point, size: Size) -> i32 {
        let (position, span) = if self.vertical {
            (local.y, size.height)
        } else {
            (local.x, size.width)
        };
        if span <= 0.0 {
            return self.minimum;
        }
        let ratio = (position / span).clamp(0.0, 1.0);
        let range = f64::from(self.maximum - self.minimum);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ratio is clamped to [0, 1] and the range fits in i32"
        )]
        let offset = (ratio * range) as i32;
        self.minimum + offset
    }

    pub(crate) fn react(
        &mut self,
        kind: &DispatchKind,
        state: &mut WidgetState,
        out: &mut Vec<SignalKind>,
    ) {
        let changed = match *kind {
            DispatchKind::MousePress { local } => {
                self.set_value(self.groove_to_value(local, state.size))
            }
            DispatchKind::MouseMove { local } if state.mouse_down => {
                self.set_value(self.groove_to_value(local, state.size))
            }
            _ => false,
        };
        if changed {
            out.push(SignalKind::ValueChanged(self.value));
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let bounds = Rect::from_origin_size(origin, state.size);
        canvas.fill_rect(bounds, Color::rgb(220, 220, 225).with_opacity(opacity));
        let range = f64::from((self.maximum - self.minimum).max(1));
        let ratio = f64::from(self.value - self.minimum) / range;
        let knob = if self.vertical {
            let y = bounds.y0 + ratio * state.size.height;
            Rect::new(bounds.x0, y - 4.0, bounds.x1, y + 4.0)
        } else {
            let x = bounds.x0 + ratio * state.size.width;
            Rect::new(x - 4.0, bounds.y0, x + 4.0, bounds.y1)
        };
        canvas.fill_rect(knob, Color::rgb(110, 110, 120).with_opacity(opacity));
    }
}
