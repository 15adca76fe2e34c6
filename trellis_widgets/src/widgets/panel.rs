// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A plain container with an optional background.

use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};

/// Groups child widgets behind a shared origin and clip rectangle.
///
/// The routing and focus behavior of a panel is entirely the container
/// contract; the panel itself only contributes a background fill and the
/// font default its children inherit.
#[derive(Clone, Debug, Default)]
pub struct Panel {
    /// Background fill; `None` draws nothing (the root dispatcher's panel).
    pub background: Option<Color>,
    /// Font default handed to children added under this panel.
    pub font: Option<FontId>,
}

impl Panel {
    /// A panel with the given background.
    pub fn new(background: Color) -> Self {
        Self {
            background: Some(background),
            font: None,
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        if let Some(background) = self.background {
            let rect = Rect::from_origin_size(origin, state.size);
            canvas.fill_rect(rect, background.with_opacity(state.opacity));
        }
    }
}
