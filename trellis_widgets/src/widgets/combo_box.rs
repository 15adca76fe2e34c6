// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A drop-down selection box.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};
use crate::signal::SignalKind;
use trellis_router::DispatchKind;

/// A closed selection field that unfolds a list on click.
///
/// Opening grows the widget's height so the unfolded rows are part of its
/// hit area; losing focus (clicking anywhere else) folds it back. Picking
/// a row raises [`SignalKind::ItemSelected`].
#[derive(Clone, Debug)]
pub struct ComboBox {
    items: Vec<String>,
    selected: Option<usize>,
    open: bool,
    closed_height: f64,
    /// Row height of the unfolded list.
    pub item_height: f64,
    /// Text font; inherited from the container when `None`.
    pub font: Option<FontId>,
}

impl Default for ComboBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ComboBox {
    /// An empty combo box.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            open: false,
            closed_height: 0.0,
            item_height: 20.0,
            font: None,
        }
    }

    /// Append an item; returns its index.
    pub fn add_item(&mut self, text: &str) -> usize {
        self.items.push(String::from(text));
        self.items.len() - 1
    }

    /// The items, in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Index of the selected item, if any.
    pub fn selected_item(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the list is currently unfolded.
    pub fn is_open(&self) -> bool {
        self.open
    }

    fn unfold(&mut self, state: &mut WidgetState) {
        self.open = true;
        self.closed_height = state.size.height;
        #[allow(
            clippy::cast_precision_loss,
            reason = "item counts are tiny"
        )]
        let rows = self.items.len() as f64;
        state.size.height += rows * self.item_height;
    }

    fn fold(&mut self, state: &mut WidgetState) {
        if self.open {
            self.open = false;
            state.size.height = self.closed_height;
        }
    }

    pub(crate) fn react(
        &mut self,
        kind: &DispatchKind,
        state: &mut WidgetState,
        out: &mut Vec<SignalKind>,
    ) {
        match *kind {
            DispatchKind::MousePress { local } => {
                if !self.open {
                    self.unfold(state);
                } else {
                    if local.y > self.closed_height && self.item_height > 0.0 {
                        #[allow(
                            clippy::cast_possible_truncation,
                            clippy::cast_sign_loss,
                            reason = "row index is checked against the item count"
                        )]
                        let row = ((local.y - self.closed_height) / self.item_height) as usize;
                        if row < self.items.len() && self.selected != Some(row) {
                            self.selected = Some(row);
                            out.push(SignalKind::ItemSelected(row));
                        }
                    }
                    self.fold(state);
                }
            }
            DispatchKind::Unfocused => self.fold(state),
            _ => {}
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let field = Rect::new(
            origin.x,
            origin.y,
            origin.x + state.size.width,
            origin.y + if self.open { self.closed_height } else { state.size.height },
        );
        canvas.fill_rect(field, Color::WHITE.with_opacity(opacity));
        canvas.stroke_rect(field, Color::rgb(120, 120, 130).with_opacity(opacity), 1.0);
        let caption = self
            .selected
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
            .unwrap_or("");
        canvas.draw_text(
            self.font,
            caption,
            Point::new(field.x0 + 4.0, field.y1 - 6.0),
            Color::BLACK.with_opacity(opacity),
        );
        if self.open {
            for (row, item) in self.items.iter().enumerate() {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "item counts are tiny"
                )]
                let top = field.y1 + row as f64 * self.item_height;
                let row_rect =
                    Rect::new(field.x0, top, field.x1, top + self.item_height);
                canvas.fill_rect(row_rect, Color::WHITE.with_opacity(opacity));
                canvas.draw_text(
                    self.font,
                    item,
                    Point::new(field.x0 + 4.0, top + self.item_height - 5.0),
                    Color::BLACK.with_opacity(opacity),
                );
            }
        }
    }
}
