// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A textured rectangle.

use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, TextureId};

/// Shows a host-loaded texture stretched over the widget bounds.
#[derive(Copy, Clone, Debug, Default)]
pub struct Picture {
    /// The texture to draw; nothing is drawn while unset.
    pub texture: Option<TextureId>,
}

impl Picture {
    /// A picture showing `texture`.
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture: Some(texture),
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        if let Some(texture) = self.texture {
            let rect = Rect::from_origin_size(origin, state.size);
            canvas.draw_texture(texture, rect, state.opacity);
        }
    }
}
