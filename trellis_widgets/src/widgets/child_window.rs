// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A movable container with a title bar and close button.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use trellis_tree::WidgetState;

use crate::canvas::{Canvas, Color, FontId};
use crate::signal::SignalKind;
use trellis_router::DispatchKind;

/// Height of the title bar, which doubles as the drag handle.
pub const TITLE_BAR_HEIGHT: f64 = 22.0;

/// A draggable sub-window.
///
/// The window is a container and draggable, so a press anywhere on it keeps
/// mouse moves flowing here while the button is down; the reaction only
/// turns those moves into motion when the gesture started on the title bar.
/// Releasing on the title bar's close box raises [`SignalKind::Closed`];
/// the host decides whether to actually remove the window.
#[derive(Clone, Debug)]
pub struct ChildWindow {
    /// Title text.
    pub title: String,
    /// Title bar fill.
    pub title_color: Color,
    /// Body fill.
    pub background: Color,
    /// Font default handed to children (and used for the title).
    pub font: Option<FontId>,
    dragging: bool,
    drag_offset: Vec2,
}

impl ChildWindow {
    /// A window with the given title.
    pub fn new(title: &str) -> Self {
        Self {
            title: String::from(title),
            title_color: Color::rgb(60, 90, 140),
            background: Color::rgb(230, 230, 230),
            font: None,
            dragging: false,
            drag_offset: Vec2::ZERO,
        }
    }

    fn close_box(&self, state: &WidgetState) -> Rect {
        Rect::new(
            state.size.width - TITLE_BAR_HEIGHT,
            0.0,
            state.size.width,
            TITLE_BAR_HEIGHT,
        )
    }

    pub(crate) fn react(
        &mut self,
        kind: &DispatchKind,
        state: &mut WidgetState,
        out: &mut Vec<SignalKind>,
    ) {
        match *kind {
            DispatchKind::MousePress { local } => {
                self.dragging = local.y < TITLE_BAR_HEIGHT && !self.close_box(state).contains(local);
                self.drag_offset = local.to_vec2();
            }
            DispatchKind::MouseMove { local } => {
                if state.mouse_down && self.dragging {
                    state.position += local.to_vec2() - self.drag_offset;
                }
            }
            DispatchKind::MouseRelease { local, was_pressed } => {
                self.dragging = false;
                if was_pressed && self.close_box(state).contains(local) {
                    out.push(SignalKind::Closed);
                }
            }
            DispatchKind::PressReset => self.dragging = false,
            _ => {}
        }
    }

    pub(crate) fn draw(&self, state: &WidgetState, origin: Point, canvas: &mut dyn Canvas) {
        let opacity = state.opacity;
        let bounds = Rect::from_origin_size(origin, state.size);
        canvas.fill_rect(bounds, self.background.with_opacity(opacity));
        let title = Rect::new(
            bounds.x0,
            bounds.y0,
            bounds.x1,
            bounds.y0 + TITLE_BAR_HEIGHT,
        );
        canvas.fill_rect(title, self.title_color.with_opacity(opacity));
        canvas.draw_text(
            self.font,
            &self.title,
            Point::new(bounds.x0 + 6.0, bounds.y0 + TITLE_BAR_HEIGHT - 6.0),
            Color::WHITE.with_opacity(opacity),
        );
        let close = self.close_box(state) + origin.to_vec2();
        canvas.fill_rect(close, Color::rgb(170, 60, 60).with_opacity(opacity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Size;

    fn window_state() -> WidgetState {
        WidgetState::placed(Point::new(100.0, 100.0), Size::new(200.0, 150.0))
    }

    #[test]
    fn title_bar_drag_moves_the_window() {
        let mut window = ChildWindow::new("w");
        let mut state = window_state();
        let mut out = Vec::new();

        // Press on the title bar, then a captured move.
        window.react(
            &DispatchKind::MousePress {
                local: Point::new(50.0, 10.0),
            },
            &mut state,
            &mut out,
        );
        state.mouse_down = true;
        window.react(
            &DispatchKind::MouseMove {
                local: Point::new(70.0, 15.0),
            },
            &mut state,
            &mut out,
        );
        assert_eq!(state.position, Point::new(120.0, 105.0));
        assert!(out.is_empty());
    }

    #[test]
    fn body_press_does_not_drag() {
        let mut window = ChildWindow::new("w");
        let mut state = window_state();
        let mut out = Vec::new();

        window.react(
            &DispatchKind::MousePress {
                local: Point::new(50.0, 80.0),
            },
            &mut state,
            &mut out,
        );
        state.mouse_down = true;
        window.react(
            &DispatchKind::MouseMove {
                local: Point::new(90.0, 120.0),
            },
            &mut state,
            &mut out,
        );
        assert_eq!(state.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn close_box_release_raises_closed() {
        let mut window = ChildWindow::new("w");
        let mut state = window_state();
        let mut out = Vec::new();

        window.react(
            &DispatchKind::MouseRelease {
                local: Point::new(190.0, 10.0),
                was_pressed: true,
            },
            &mut state,
            &mut out,
        );
        assert_eq!(out, vec![SignalKind::Closed]);

        // Without a paired press, the release does nothing.
        out.clear();
        window.react(
            &DispatchKind::MouseRelease {
                local: Point::new(190.0, 10.0),
                was_pressed: false,
            },
            &mut state,
            &mut out,
        );
        assert!(out.is_empty());
    }
}
