// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A progress bar.

use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color};

/// Host-driven progress display.
///
/// The bar never reacts to input; the host pushes values in. Setters
/// report whether the bar just reached the maximum so the host can act on
/// completion.
#[derive(Clone, Debug)]
pub struct LoadingBar {
    /// Lower bound.
    pub minimum: i32,
    /// Upper bound.
    pub maximum: i32,
    value: i32,
}

impl LoadingBar {
    /// An empty bar over `minimum..=maximum`.
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

    /// Set the value, clamped into range. Returns whether this call made
    /// the bar full.
    pub fn set_value(&mut self, value: i32) -> bool {
        let was_full = self.value >= self.maximum;
        self.value = value.clamp(self.minimum, self.maximum.max(self.minimum));
        !was_full && self.value >= self.maximum
    }

    /// Advance the value. Returns whether this call made the bar full.
    pub fn add_value(&mut self, delta: i32) -> bool {
        self.set_value(self.value.saturating_add(delta))
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let bounds = Rect::from_origin_size(origin, state.size);
        canvas.fill_rect(bounds, Color::rgb(220, 220, 225).with_opacity(opacity));
        let range = f64::from((self.maximum - self.minimum).max(1));
        let ratio = f64::from(self.value - self.minimum) / range;
        let filled = Rect::new(
            bounds.x0,
            bounds.y0,
            bounds.x0 + state.size.width * ratio,
            bounds.y1,
        );
        canvas.fill_rect(filled, Color::rgb(80, 140, 80).with_opacity(opacity));
        canvas.stroke_rect(bounds, Color::rgb(90, 90, 100).with_opacity(opacity), 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_transition_to_full_once() {
        let mut bar = LoadingBar::new(0, 3);
        assert!(!bar.add_value(1));
        assert!(!bar.add_value(1));
        assert!(bar.add_value(5), "clamped, but the bar became full");
        assert!(!bar.add_value(1), "already full");
        assert_eq!(bar.value(), 3);
    }
}
