// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A push button.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};
use crate::signal::SignalKind;
use trellis_router::{DispatchKind, Key};

/// A click target with a text caption.
///
/// A click is a press and release that pair up on the button: the router
/// carries that pairing in the release step's `was_pressed`, so a drag that
/// wanders off and back, or a release over a button that was never
/// pressed, produces nothing. Space and return click a focused button.
#[derive(Clone, Debug)]
pub struct Button {
    /// Caption text.
    pub text: String,
    /// Caption font; inherited from the container when `None`.
    pub font: Option<FontId>,
}

impl Button {
    /// A button with the given caption.
    pub fn new(text: &str) -> Self {
        Self {
            text: String::from(text),
            font: None,
        }
    }

    pub(crate) fn react(
        &mut self,
        kind: &DispatchKind,
        _state: &mut WidgetState,
        out: &mut Vec<SignalKind>,
    ) {
        match *kind {
            DispatchKind::MouseRelease {
                was_pressed: true, ..
            } => out.push(SignalKind::Clicked),
            DispatchKind::Key {
                key: Key::Space | Key::Enter,
            } => out.push(SignalKind::Clicked),
            _ => {}
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let face = if state.mouse_down {
            Color::rgb(150, 150, 160)
        } else if state.mouse_hover {
            Color::rgb(210, 210, 220)
        } else {
            Color::rgb(190, 190, 200)
        };
        let bounds = Rect::from_origin_size(origin, state.size);
        canvas.fill_rect(bounds, face.with_opacity(opacity));
        let border = if state.focused {
            Color::rgb(40, 80, 160)
        } else {
            Color::rgb(90, 90, 100)
        };
        canvas.stroke_rect(bounds, border.with_opacity(opacity), 1.0);
        canvas.draw_text(
            self.font,
            &self.text,
            Point::new(bounds.x0 + 8.0, bounds.y1 - 8.0),
            Color::BLACK.with_opacity(opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn click_requires_the_pairing() {
        let mut button = Button::new("ok");
        let mut state = WidgetState::default();
        let mut out = Vec::new();

        button.react(
            &DispatchKind::MouseRelease {
                local: Point::new(5.0, 5.0),
                was_pressed: false,
            },
            &mut state,
            &mut out,
        );
        assert!(out.is_empty(), "release without press is not a click");

        button.react(
            &DispatchKind::MouseRelease {
                local: Point::new(5.0, 5.0),
                was_pressed: true,
            },
            &mut state,
            &mut out,
        );
        assert_eq!(out, vec![SignalKind::Clicked]);
    }

    #[test]
    fn space_and_return_click_the_focused_button() {
        let mut button = Button::new("ok");
        let mut state = WidgetState::default();
        let mut out = Vec::new();

        button.react(&DispatchKind::Key { key: Key::Space }, &mut state, &mut out);
        button.react(&DispatchKind::Key { key: Key::Enter }, &mut state, &mut out);
        button.react(&DispatchKind::Key { key: Key::Left }, &mut state, &mut out);
        assert_eq!(out, vec![SignalKind::Clicked, SignalKind::Clicked]);
    }
}
