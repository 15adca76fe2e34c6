// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scrollbar driven by track clicks, thumb drags, and the wheel.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color};
use crate::signal::SignalKind;
use trellis_router::DispatchKind;

/// A draggable scrollbar.
///
/// The widget is draggable, so once pressed it keeps receiving mouse moves
/// wherever the pointer goes, so the drag keeps scrolling after leaving the
/// track. The value maps the pointer position proportionally onto
/// `0..=maximum - viewport`; exact thumb geometry is presentation, not
/// contract.
#[derive(Clone, Debug)]
pub struct Scrollbar {
    /// Total content span.
    pub maximum: i32,
    /// Visible span; the value cannot exceed `maximum - viewport`.
    pub viewport: i32,
    /// Vertical (the default) or horizontal orientation.
    pub vertical: bool,
    value: i32,
}

impl Scrollbar {
    /// A vertical scrollbar over `maximum` units of which `viewport` are
    /// visible at a time.
    pub fn new(maximum: i32, viewport: i32) -> Self {
        Self {
            maximum,
            viewport,
            vertical: true,
            value: 0,
        }
    }

    /// Current value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Largest reachable value.
    pub fn max_value(&self) -> i32 {
        (self.maximum - self.viewport).max(0)
    }

    /// Set the value, clamped into range. Returns whether it changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(0, self.max_value());
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    fn track_to_value(&self, local: Point, size: Size) -> i32 {
        let (position, span) = if self.vertical {
            (local.y, size.height)
        } else {
            (local.x, size.width)
        };
        if span <= 0.0 {
            return 0;
        }
        let ratio = (position / span).clamp(0.0, 1.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ratio is clamped to [0, 1] and max_value fits in i32"
        )]
        let value = (ratio * f64::from(self.max_value())) as i32;
        value
    }

    pub(crate) fn react(
        &mut self,
        kind: &DispatchKind,
        state: &mut WidgetState,
        out: &mut Vec<SignalKind>,
    ) {
        let changed = match *kind {
            DispatchKind::MousePress { local } => {
                self.set_value(self.track_to_value(local, state.size))
            }
            DispatchKind::MouseMove { local } if state.mouse_down => {
                self.set_value(self.track_to_value(local, state.size))
            }
            DispatchKind::Wheel { delta, .. } => {
                let step = (self.viewport / 10).max(1);
                self.set_value(self.value - delta * step)
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
        if self.max_value() == 0 {
            return;
        }
        // Proportional thumb: position tracks value, length tracks the
        // visible fraction.
        let fraction = f64::from(self.viewport) / f64::from(self.maximum.max(1));
        let offset = f64::from(self.value) / f64::from(self.max_value());
        let thumb = if self.vertical {
            let len = state.size.height * fraction;
            let top = bounds.y0 + offset * (state.size.height - len);
            Rect::new(bounds.x0 + 2.0, top, bounds.x1 - 2.0, top + len)
        } else {
            let len = state.size.width * fraction;
            let left = bounds.x0 + offset * (state.size.width - len);
            Rect::new(left, bounds.y0 + 2.0, left + len, bounds.y1 - 2.0)
        };
        let face = if state.mouse_down {
            Color::rgb(110, 110, 120)
        } else {
            Color::rgb(150, 150, 160)
        };
        canvas.fill_rect(thumb, face.with_opacity(opacity));
    }
}
