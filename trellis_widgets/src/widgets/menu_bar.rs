// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A horizontal menu bar with drop-down menus.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};
use crate::signal::SignalKind;
use trellis_router::DispatchKind;

/// One menu in the bar.
#[derive(Clone, Debug)]
pub struct Menu {
    /// Title shown in the bar.
    pub title: String,
    /// The menu's entries, top to bottom.
    pub items: Vec<String>,
}

/// The bar itself.
///
/// Menu titles occupy fixed-width slots. Clicking a title unfolds its menu
/// (growing the widget's hit area downwards, like the combo box); clicking
/// an entry raises [`SignalKind::MenuItemClicked`] and folds the menu, and
/// losing focus folds it too.
#[derive(Clone, Debug)]
pub struct MenuBar {
    menus: Vec<Menu>,
    open_menu: Option<usize>,
    closed_height: f64,
    /// Width of one title slot in the bar.
    pub menu_width: f64,
    /// Row height of an unfolded menu.
    pub item_height: f64,
    /// Text font; inherited from the container when `None`.
    pub font: Option<FontId>,
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuBar {
    /// An empty bar.
    pub fn new() -> Self {
        Self {
            menus: Vec::new(),
            open_menu: None,
            closed_height: 0.0,
            menu_width: 100.0,
            item_height: 20.0,
            font: None,
        }
    }

    /// Append a menu; returns its index.
    pub fn add_menu(&mut self, title: &str) -> usize {
        self.menus.push(Menu {
            title: String::from(title),
            items: Vec::new(),
        });
        self.menus.len() - 1
    }

    /// Append an entry to a menu. Unknown menu indices are ignored.
    pub fn add_menu_item(&mut self, menu: usize, text: &str) {
        if let Some(m) = self.menus.get_mut(menu) {
            m.items.push(String::from(text));
        }
    }

    /// The menus, in bar order.
    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    /// Index of the unfolded menu, if any.
    pub fn open_menu(&self) -> Option<usize> {
        self.open_menu
    }

    fn unfold(&mut self, menu: usize, state: &mut WidgetState) {
        self.fold(state);
        let rows = self.menus.get(menu).map(|m| m.items.len()).unwrap_or(0);
        if rows == 0 {
            return;
        }
        self.open_menu = Some(menu);
        self.closed_height = state.size.height;
        #[allow(
            clippy::cast_precision_loss,
            reason = "menu entry counts are tiny"
        )]
        let rows = rows as f64;
        state.size.height += rows * self.item_height;
    }

    fn fold(&mut self, state: &mut WidgetState) {
        if self.open_menu.take().is_some() {
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
                let bar_height = if self.open_menu.is_some() {
                    self.closed_height
                } else {
                    state.size.height
                };
                if local.y < bar_height {
                    // A title slot: toggle the menu under the pointer.
                    if local.x >= 0.0 && self.menu_width > 0.0 {
                        #[allow(
                            clippy::cast_possible_truncation,
                            clippy::cast_sign_loss,
                            reason = "slot index is checked against the menu count"
                        )]
                        let slot = (local.x / self.menu_width) as usize;
                        if self.open_menu == Some(slot) {
                            self.fold(state);
                        } else if slot < self.menus.len() {
                            self.unfold(slot, state);
                        } else {
                            self.fold(state);
                        }
                    }
                } else if let Some(menu) = self.open_menu {
                    #[allow(
                        clippy::cast_possible_truncation,
                        clippy::cast_sign_loss,
                        reason = "row index is checked against the entry count"
                    )]
                    let item = ((local.y - bar_height) / self.item_height) as usize;
                    if self
                        .menus
                        .get(menu)
                        .is_some_and(|m| item < m.items.len())
                    {
                        out.push(SignalKind::MenuItemClicked { menu, item });
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
        let bar_height = if self.open_menu.is_some() {
            self.closed_height
        } else {
            state.size.height
        };
        let bar = Rect::new(
            origin.x,
            origin.y,
            origin.x + state.size.width,
            origin.y + bar_height,
        );
        canvas.fill_rect(bar, Color::rgb(235, 235, 240).with_opacity(opacity));
        for (slot, menu) in self.menus.iter().enumerate() {
            #[allow(
                clippy::cast_precision_loss,
                reason = "menu counts are tiny"
            )]
            let x = bar.x0 + slot as f64 * self.menu_width;
            if self.open_menu == Some(slot) {
                canvas.fill_rect(
                    Rect::new(x, bar.y0, x + self.menu_width, bar.y1),
                    Color::rgb(170, 195, 230).with_opacity(opacity),
                );
            }
            canvas.draw_text(
                self.font,
                &menu.title,
                Point::new(x + 8.0, bar.y1 - 6.0),
                Color::BLACK.with_opacity(opacity),
            );
        }
        if let Some(open) = self.open_menu
            && let Some(menu) = self.menus.get(open)
        {
            #[allow(
                clippy::cast_precision_loss,
                reason = "menu counts are tiny"
            )]
            let x = bar.x0 + open as f64 * self.menu_width;
            for (row, item) in menu.items.iter().enumerate() {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "menu entry counts are tiny"
                )]
                let top = bar.y1 + row as f64 * self.item_height;
                let row_rect = Rect::new(x, top, x + self.menu_width, top + self.item_height);
                canvas.fill_rect(row_rect, Color::WHITE.with_opacity(opacity));
                canvas.draw_text(
                    self.font,
                    item,
                    Point::new(x + 8.0, top + self.item_height - 5.0),
                    Color::BLACK.with_opacity(opacity),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Size;

    fn bar() -> (MenuBar, WidgetState) {
        let mut menu_bar = MenuBar::new();
        let file = menu_bar.add_menu("File");
        menu_bar.add_menu_item(file, "Open");
        menu_bar.add_menu_item(file, "Quit");
        let edit = menu_bar.add_menu("Edit");
        menu_bar.add_menu_item(edit, "Copy");
        let state = WidgetState::placed(Point::ZERO, Size::new(400.0, 24.0));
        (menu_bar, state)
    }

    fn press(x: f64, y: f64) -> DispatchKind {
        DispatchKind::MousePress {
            local: Point::new(x, y),
        }
    }

    #[test]
    fn title_click_unfolds_and_entry_click_activates() {
        let (mut menu_bar, mut state) = bar();
        let mut out = Vec::new();

        menu_bar.react(&press(10.0, 10.0), &mut state, &mut out);
        assert_eq!(menu_bar.open_menu(), Some(0));
        assert_eq!(state.size.height, 24.0 + 2.0 * 20.0);

        // Second entry ("Quit").
        menu_bar.react(&press(10.0, 24.0 + 25.0), &mut state, &mut out);
        assert_eq!(out, vec![SignalKind::MenuItemClicked { menu: 0, item: 1 }]);
        assert_eq!(menu_bar.open_menu(), None);
        assert_eq!(state.size.height, 24.0);
    }

    #[test]
    fn clicking_another_title_switches_menus() {
        let (mut menu_bar, mut state) = bar();
        let mut out = Vec::new();

        menu_bar.react(&press(10.0, 10.0), &mut state, &mut out);
        menu_bar.react(&press(110.0, 10.0), &mut state, &mut out);
        assert_eq!(menu_bar.open_menu(), Some(1));
        assert_eq!(state.size.height, 24.0 + 20.0, "one entry in Edit");

        // Clicking the open title again folds it.
        menu_bar.react(&press(110.0, 10.0), &mut state, &mut out);
        assert_eq!(menu_bar.open_menu(), None);
        assert!(out.is_empty());
    }

    #[test]
    fn losing_focus_folds_the_open_menu() {
        let (mut menu_bar, mut state) = bar();
        let mut out = Vec::new();

        menu_bar.react(&press(10.0, 10.0), &mut state, &mut out);
        menu_bar.react(&DispatchKind::Unfocused, &mut state, &mut out);
        assert_eq!(menu_bar.open_menu(), None);
        assert_eq!(state.size.height, 24.0);
    }
}
