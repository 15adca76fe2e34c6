// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An append-only message log with wheel scrolling.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};
use trellis_router::DispatchKind;

/// A read-only line log.
///
/// Lines are appended by the host; the wheel scrolls through history. The
/// box takes no focus and raises no signals.
#[derive(Clone, Debug)]
pub struct ChatBox {
    lines: Vec<String>,
    /// First visible line; kept pinned to the newest line until the user
    /// scrolls away from the bottom.
    top_line: usize,
    stick_to_bottom: bool,
    /// Line height in pixels.
    pub line_height: f64,
    /// Text font; inherited from the container when `None`.
    pub font: Option<FontId>,
}

impl Default for ChatBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatBox {
    /// An empty chat box.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            top_line: 0,
            stick_to_bottom: true,
            line_height: 18.0,
            font: None,
        }
    }

    /// Append a line.
    pub fn add_line(&mut self, text: &str) {
        self.lines.push(String::from(text));
    }

    /// The logged lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn visible_rows(&self, state: &WidgetState) -> usize {
        if self.line_height <= 0.0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "row counts are small and non-negative"
        )]
        let rows = (state.size.height / self.line_height) as usize;
        rows
    }

    fn max_top(&self, state: &WidgetState) -> usize {
        self.lines.len().saturating_sub(self.visible_rows(state))
    }

    pub(crate) fn react(&mut self, kind: &DispatchKind, state: &mut WidgetState) {
        if let DispatchKind::Wheel { delta, .. } = *kind {
            let current = if self.stick_to_bottom {
                self.max_top(state)
            } else {
                self.top_line.min(self.max_top(state))
            };
            let step = delta.unsigned_abs() as usize;
            let top = if delta > 0 {
                current.saturating_sub(step)
            } else {
                current + step
            };
            self.top_line = top.min(self.max_top(state));
            self.stick_to_bottom = self.top_line == self.max_top(state);
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let bounds = Rect::from_origin_size(origin, state.size);
        canvas.fill_rect(bounds, Color::rgb(250, 250, 250).with_opacity(opacity));
        canvas.stroke_rect(bounds, Color::rgb(120, 120, 130).with_opacity(opacity), 1.0);
        let top = if self.stick_to_bottom {
            self.max_top(state)
        } else {
            self.top_line.min(self.max_top(state))
        };
        let rows = self.visible_rows(state);
        for (row, line) in self.lines.iter().skip(top).take(rows).enumerate() {
            #[allow(
                clippy::cast_precision_loss,
                reason = "visible row counts are tiny"
            )]
            let baseline = bounds.y0 + (row + 1) as f64 * self.line_height - 4.0;
            canvas.draw_text(
                self.font,
                line,
                Point::new(bounds.x0 + 4.0, baseline),
                Color::BLACK.with_opacity(opacity),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    #[test]
    fn wheel_scrolls_history_and_sticks_back_to_the_bottom() {
        let mut chat = ChatBox::new();
        for i in 0..10_u8 {
            let mut line = String::from("line ");
            line.push(char::from(b'0' + i));
            chat.add_line(&line);
        }
        // Four visible rows.
        let mut state = WidgetState::placed(Point::ZERO, Size::new(200.0, 72.0));

        // Scroll up into history.
        chat.react(
            &DispatchKind::Wheel {
                delta: 2,
                local: Point::ZERO,
            },
            &mut state,
        );
        assert_eq!(chat.top_line, 4);
        assert!(!chat.stick_to_bottom);

        // Scroll back down past the end: pinned to the newest line again.
        chat.react(
            &DispatchKind::Wheel {
                delta: -20,
                local: Point::ZERO,
            },
            &mut state,
        );
        assert_eq!(chat.top_line, 6);
        assert!(chat.stick_to_bottom);
    }
}
