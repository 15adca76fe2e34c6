// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scrollable list of selectable text items.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};
use crate::signal::SignalKind;
use trellis_router::{DispatchKind, Key};

/// Fixed-height rows, one selection.
///
/// Clicking a row or moving the selection with the arrow keys raises
/// [`SignalKind::ItemSelected`] when the selection actually changes. The
/// wheel scrolls the visible window without touching the selection.
#[derive(Clone, Debug)]
pub struct ListBox {
    items: Vec<String>,
    selected: Option<usize>,
    top_item: usize,
    /// Row height in pixels.
    pub item_height: f64,
    /// Item font; inherited from the container when `None`.
    pub font: Option<FontId>,
}

impl Default for ListBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ListBox {
    /// An empty list.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            top_item: 0,
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

    /// Select an item (or clear with `None`) without raising a signal.
    /// Out-of-range indices clear the selection.
    pub fn set_selected_item(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    fn visible_rows(&self, state: &WidgetState) -> usize {
        if self.item_height <= 0.0 {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "row counts are small and non-negative"
        )]
        let rows = (state.size.height / self.item_height) as usize;
        rows
    }

    fn select(&mut self, index: usize, out: &mut Vec<SignalKind>) {
        if index < self.items.len() && self.selected != Some(index) {
            self.selected = Some(index);
            out.push(SignalKind::ItemSelected(index));
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
                if local.y >= 0.0 && self.item_height > 0.0 {
                    #[allow(
                        clippy::cast_possible_truncation,
                        clippy::cast_sign_loss,
                        reason = "row index is checked against the item count"
                    )]
                    let row = (local.y / self.item_height) as usize;
                    self.select(self.top_item + row, out);
                }
            }
            DispatchKind::Wheel { delta, .. } => {
                let max_top = self.items.len().saturating_sub(self.visible_rows(state));
                let step = delta.unsigned_abs() as usize;
                let top = if delta > 0 {
                    self.top_item.saturating_sub(step)
                } else {
                    self.top_item + step
                };
                self.top_item = top.min(max_top);
            }
            DispatchKind::Key { key } => {
                let next = match (key, self.selected) {
                    (Key::Up, Some(i)) => Some(i.saturating_sub(1)),
                    (Key::Down, Some(i)) => Some(i + 1),
                    (Key::Up | Key::Down, None) => Some(0),
                    _ => None,
                };
                if let Some(next) = next {
                    self.select(next.min(self.items.len().saturating_sub(1)), out);
                    // Keep the selection in the visible window.
                    if let Some(sel) = self.selected {
                        let rows = self.visible_rows(state).max(1);
                        if sel < self.top_item {
                            self.top_item = sel;
                        } else if sel >= self.top_item + rows {
                            self.top_item = sel + 1 - rows;
                        }
                    }
                }
            }
            _ => {}
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let bounds = Rect::from_origin_size(origin, state.size);
        canvas.fill_rect(bounds, Color::WHITE.with_opacity(opacity));
        canvas.stroke_rect(bounds, Color::rgb(120, 120, 130).with_opacity(opacity), 1.0);
        let rows = self.visible_rows(state);
        for (row, item) in self.items.iter().skip(self.top_item).take(rows).enumerate() {
            let index = self.top_item + row;
            #[allow(
                clippy::cast_precision_loss,
                reason = "visible row counts are tiny"
            )]
            let top = bounds.y0 + row as f64 * self.item_height;
            if self.selected == Some(index) {
                canvas.fill_rect(
                    Rect::new(bounds.x0, top, bounds.x1, top + self.item_height),
                    Color::rgb(170, 195, 230).with_opacity(opacity),
                );
            }
            canvas.draw_text(
                self.font,
                item,
                Point::new(bounds.x0 + 4.0, top + self.item_height - 5.0),
                Color::BLACK.with_opacity(opacity),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Size;

    fn filled() -> (ListBox, WidgetState) {
        let mut list = ListBox::new();
        for name in ["alpha", "beta", "gamma", "delta", "epsilon"] {
            list.add_item(name);
        }
        // Three visible rows.
        let state = WidgetState::placed(Point::ZERO, Size::new(120.0, 60.0));
        (list, state)
    }

    #[test]
    fn click_selects_the_row_under_the_pointer() {
        let (mut list, mut state) = filled();
        let mut out = Vec::new();
        list.react(
            &DispatchKind::MousePress {
                local: Point::new(10.0, 30.0),
            },
            &mut state,
            &mut out,
        );
        assert_eq!(list.selected_item(), Some(1));
        assert_eq!(out, vec![SignalKind::ItemSelected(1)]);

        // Clicking the same row again is not a change.
        out.clear();
        list.react(
            &DispatchKind::MousePress {
                local: Point::new(10.0, 30.0),
            },
            &mut state,
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn click_below_the_last_item_does_nothing() {
        let (mut list, mut state) = filled();
        state.size = Size::new(120.0, 200.0);
        let mut out = Vec::new();
        list.react(
            &DispatchKind::MousePress {
                local: Point::new(10.0, 150.0),
            },
            &mut state,
            &mut out,
        );
        assert_eq!(list.selected_item(), None);
        assert!(out.is_empty());
    }

    #[test]
    fn wheel_scrolls_the_window_not_the_selection() {
        let (mut list, mut state) = filled();
        let mut out = Vec::new();
        list.set_selected_item(Some(0));

        list.react(
            &DispatchKind::Wheel {
                delta: -1,
                local: Point::ZERO,
            },
            &mut state,
            &mut out,
        );
        assert_eq!(list.top_item, 1);
        assert_eq!(list.selected_item(), Some(0));

        // Clamp at the bottom: 5 items, 3 visible.
        for _ in 0..10 {
            list.react(
                &DispatchKind::Wheel {
                    delta: -1,
                    local: Point::ZERO,
                },
                &mut state,
                &mut out,
            );
        }
        assert_eq!(list.top_item, 2);
        assert!(out.is_empty(), "scrolling raises no signals");
    }

    #[test]
    fn arrow_keys_move_the_selection_and_keep_it_visible() {
        let (mut list, mut state) = filled();
        let mut out = Vec::new();

        list.react(&DispatchKind::Key { key: Key::Down }, &mut state, &mut out);
        assert_eq!(list.selected_item(), Some(0), "first press selects the top");
        for _ in 0..4 {
            list.react(&DispatchKind::Key { key: Key::Down }, &mut state, &mut out);
        }
        assert_eq!(list.selected_item(), Some(4), "clamped at the last item");
        assert_eq!(list.top_item, 2, "window follows the selection");
        assert_eq!(out.len(), 5);
    }
}
