// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A two-state checkbox.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};
use crate::signal::SignalKind;
use trellis_router::{DispatchKind, Key};

/// A toggle with a caption next to the box.
#[derive(Clone, Debug)]
pub struct Checkbox {
    /// Caption drawn beside the box.
    pub text: String,
    /// Caption font; inherited from the container when `None`.
    pub font: Option<FontId>,
    checked: bool,
}

impl Checkbox {
    /// An unchecked checkbox with the given caption.
    pub fn new(text: &str) -> Self {
        Self {
            text: String::from(text),
            font: None,
            checked: false,
        }
    }

    /// Current state.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the state directly, without raising a signal.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    fn toggle(&mut self, out: &mut Vec<SignalKind>) {
        self.checked = !self.checked;
        out.push(SignalKind::Checked(self.checked));
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
            } => self.toggle(out),
            DispatchKind::Key {
                key: Key::Space | Key::Enter,
            } => self.toggle(out),
            _ => {}
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let side = state.size.height;
        let box_rect = Rect::from_origin_size(origin, kurbo::Size::new(side, side));
        canvas.fill_rect(box_rect, Color::WHITE.with_opacity(opacity));
        canvas.stroke_rect(box_rect, Color::rgb(90, 90, 100).with_opacity(opacity), 1.0);
        if self.checked {
            canvas.fill_rect(
                box_rect.inset(-3.0),
                Color::rgb(40, 80, 160).with_opacity(opacity),
            );
        }
        canvas.draw_text(
            self.font,
            &self.text,
            Point::new(origin.x + side + 6.0, origin.y + side - 4.0),
            Color::BLACK.with_opacity(opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn toggles_on_paired_release_and_reports_the_new_state() {
        let mut checkbox = Checkbox::new("remember me");
        let mut state = WidgetState::default();
        let mut out = Vec::new();

        let release = DispatchKind::MouseRelease {
            local: Point::new(5.0, 5.0),
            was_pressed: true,
        };
        checkbox.react(&release, &mut state, &mut out);
        checkbox.react(&release, &mut state, &mut out);
        assert_eq!(
            out,
            vec![SignalKind::Checked(true), SignalKind::Checked(false)]
        );
        assert!(!checkbox.is_checked());
    }
}
