// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A static text line.

use alloc::string::String;
use kurbo::Point;
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};

/// Non-interactive text. Labels take no focus and raise no signals.
#[derive(Clone, Debug)]
pub struct Label {
    /// The text to show.
    pub text: String,
    /// Text color.
    pub color: Color,
    /// Font; inherited from the container when `None`.
    pub font: Option<FontId>,
}

impl Label {
    /// A label with the given text.
    pub fn new(text: &str) -> Self {
        Self {
            text: String::from(text),
            color: Color::BLACK,
            font: None,
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        canvas.draw_text(
            self.font,
            &self.text,
            Point::new(origin.x, origin.y + state.size.height - 4.0),
            self.color.with_opacity(state.opacity),
        );
    }
}
