// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-line text input with a blinking caret.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};
use crate::signal::SignalKind;
use trellis_router::{DispatchKind, Key};

/// Caret blink period in milliseconds.
const BLINK_MS: u64 = 500;

/// Nominal glyph advance used to place the caret from a click. Text shaping
/// is a host concern; the toolkit only needs a stable, monotonic mapping.
const CHAR_WIDTH: f64 = 8.0;

const PADDING: f64 = 4.0;

/// A focusable, animated text field.
///
/// Text edits raise [`SignalKind::TextChanged`]; return raises
/// [`SignalKind::ReturnPressed`]. The caret blinks on the animation clock
/// drained into the widget each frame and is forced visible whenever the
/// field gains focus or is edited.
#[derive(Clone, Debug)]
pub struct EditBox {
    text: String,
    caret: usize,
    caret_visible: bool,
    /// Refuse input beyond this many characters when set.
    pub max_length: Option<usize>,
    /// Text font; inherited from the container when `None`.
    pub font: Option<FontId>,
}

impl Default for EditBox {
    fn default() -> Self {
        Self::new()
    }
}

impl EditBox {
    /// An empty edit box.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            caret: 0,
            caret_visible: false,
            max_length: None,
            font: None,
        }
    }

    /// Current contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the contents, clamping the caret. Raises no signal.
    pub fn set_text(&mut self, text: &str) {
        self.text = String::from(text);
        self.caret = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, caret: usize) -> usize {
        self.text
            .char_indices()
            .nth(caret)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn show_caret(&mut self, state: &mut WidgetState) {
        self.caret_visible = true;
        state.elapsed_ms = 0;
    }

    pub(crate) fn react(
        &mut self,
        kind: &DispatchKind,
        state: &mut WidgetState,
        out: &mut Vec<SignalKind>,
    ) {
        match *kind {
            DispatchKind::Text { ch } => {
                if self
                    .max_length
                    .is_none_or(|limit| self.char_count() < limit)
                {
                    let byte = self.byte_at(self.caret);
                    self.text.insert(byte, ch);
                    self.caret += 1;
                    self.show_caret(state);
                    out.push(SignalKind::TextChanged);
                }
            }
            DispatchKind::Key { key } => match key {
                Key::Left => {
                    self.caret = self.caret.saturating_sub(1);
                    self.show_caret(state);
                }
                Key::Right => {
                    self.caret = (self.caret + 1).min(self.char_count());
                    self.show_caret(state);
                }
                Key::Backspace => {
                    if self.caret > 0 {
                        self.caret -= 1;
                        let byte = self.byte_at(self.caret);
                        self.text.remove(byte);
                        self.show_caret(state);
                        out.push(SignalKind::TextChanged);
                    }
                }
                Key::Delete => {
                    if self.caret < self.char_count() {
                        let byte = self.byte_at(self.caret);
                        self.text.remove(byte);
                        self.show_caret(state);
                        out.push(SignalKind::TextChanged);
                    }
                }
                Key::Enter => out.push(SignalKind::ReturnPressed),
                _ => {}
            },
            DispatchKind::MousePress { local } => {
                // Proportional caret placement; precise glyph metrics are
                // out of scope.
                let slot = (local.x - PADDING).max(0.0) / CHAR_WIDTH;
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "clamped to a small non-negative range first"
                )]
                let slot = slot as usize;
                self.caret = slot.min(self.char_count());
                self.show_caret(state);
            }
            DispatchKind::Update { elapsed_ms } => {
                if state.focused && elapsed_ms >= BLINK_MS {
                    self.caret_visible = !self.caret_visible;
                    state.elapsed_ms = 0;
                }
            }
            DispatchKind::Focused => self.show_caret(state),
            DispatchKind::Unfocused => self.caret_visible = false,
            _ => {}
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let bounds = Rect::from_origin_size(origin, state.size);
        canvas.fill_rect(bounds, Color::WHITE.with_opacity(opacity));
        let border = if state.focused {
            Color::rgb(40, 80, 160)
        } else {
            Color::rgb(120, 120, 130)
        };
        canvas.stroke_rect(bounds, border.with_opacity(opacity), 1.0);
        canvas.draw_text(
            self.font,
            &self.text,
            Point::new(bounds.x0 + PADDING, bounds.y1 - 6.0),
            Color::BLACK.with_opacity(opacity),
        );
        if state.focused && self.caret_visible {
            #[allow(
                clippy::cast_precision_loss,
                reason = "caret index is small in any realistic edit box"
            )]
            let x = bounds.x0 + PADDING + self.caret as f64 * CHAR_WIDTH;
            canvas.fill_rect(
                Rect::new(x, bounds.y0 + 3.0, x + 1.0, bounds.y1 - 3.0),
                Color::BLACK.with_opacity(opacity),
            );
        }
    }
}
