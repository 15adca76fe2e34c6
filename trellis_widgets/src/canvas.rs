// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! External collaborator interfaces: drawing surface and resource handles.
//!
//! Trellis composes transforms, orders draw calls, and maintains the clip
//! stack; everything that touches pixels, textures, or glyphs lives behind
//! [`Canvas`] on the host side. Resource loading likewise stays external:
//! the toolkit only stores the opaque [`TextureId`] / [`FontId`] handles a
//! host-side loader hands out. Styling is plain setters and public fields
//! on the widget types; a config file parser (external too) applies them
//! after construction.

use kurbo::{Point, Rect};

/// Handle to a host-loaded texture. Reference counting and lifetime belong
/// to the loader that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Handle to a host-loaded font.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontId(pub u64);

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the alpha channel by a widget opacity (0..=255).
    pub fn with_opacity(self, opacity: u8) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "product of two u8 values divided by 255 fits in u8"
        )]
        let a = ((u16::from(self.a) * u16::from(opacity)) / 255) as u8;
        Self { a, ..self }
    }
}

/// Host drawing surface.
///
/// All geometry is in window coordinates; the widget layer has already
/// composed the container translations. Implementations must honor the
/// clip stack for everything drawn between `push_clip` and `pop_clip`.
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
    /// Draw a host-loaded texture into a rectangle.
    fn draw_texture(&mut self, texture: TextureId, rect: Rect, opacity: u8);
    /// Draw a line of text at a baseline origin.
    fn draw_text(&mut self, font: Option<FontId>, text: &str, origin: Point, color: Color);
    /// Push a clip rectangle; subsequent drawing is restricted to it.
    fn push_clip(&mut self, rect: Rect);
    /// Pop the most recent clip rectangle.
    fn pop_clip(&mut self);
}
